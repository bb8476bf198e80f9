//! Lookup index for listing a user's saved locations.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_locations_user_id")
                    .table(Locations::Table)
                    .col(Locations::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_locations_user_id").table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Locations { Table, UserId }
