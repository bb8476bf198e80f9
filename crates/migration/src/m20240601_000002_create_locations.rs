//! Create `locations` table with FK to `users`.
//!
//! Deleting a user removes the locations it owns.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::UserId).big_integer().not_null())
                    .col(string_len(Locations::Name, 255).not_null())
                    .col(ColumnDef::new(Locations::Latitude).double().not_null())
                    .col(ColumnDef::new(Locations::Longitude).double().not_null())
                    .col(timestamp_with_time_zone(Locations::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locations_user")
                            .from(Locations::Table, Locations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Locations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Locations { Table, Id, UserId, Name, Latitude, Longitude, CreatedAt }

#[derive(DeriveIden)]
enum Users { Table, Id }
