use std::net::SocketAddr;
use std::time::Duration;

use configs::CorsConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::password::AuthConfig;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::{routes, startup::build_cors, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = AppState::in_memory(AuthConfig::fast());
    let app = routes::build_router(state, build_cors(&CorsConfig::default())?, Duration::from_secs(5));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_register_login_and_save_location() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();
    let username = format!("user_{}", Uuid::new_v4().simple());

    let user: Value = client
        .post(format!("{}/api/register", app.base_url))
        .json(&json!({"username": username, "password": "pw"}))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let user_id = user["id"].as_i64().expect("generated id");

    let res = client
        .post(format!("{}/api/login", app.base_url))
        .json(&json!({"username": username, "password": "pw"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client
        .post(format!("{}/api/login", app.base_url))
        .json(&json!({"username": username, "password": "nope"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let saved: Value = client
        .post(format!("{}/api/locations", app.base_url))
        .json(&json!({"name": "Reykjavik", "lat": 64.1466, "lon": -21.9426, "user": {"id": user_id}}))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(saved["user"]["id"], user_id);

    let listed: Vec<Value> = client
        .get(format!("{}/api/locations/user/{}", app.base_url, user_id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Reykjavik");
    Ok(())
}
