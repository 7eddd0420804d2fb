#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use configs::{AppConfig, DatabaseConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory database with migrations applied.
pub async fn build_app() -> anyhow::Result<Router> {
    let db = server::startup::prepare_database(&DatabaseConfig::in_memory()).await?;
    Ok(server::startup::build_app(db, &AppConfig::default()))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json)?)
        }
        None => Body::empty(),
    };
    raw(app, req.body(body)?).await
}

pub async fn raw(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

pub async fn create_cliente(app: &Router, nome: &str) -> anyhow::Result<i64> {
    let (status, body) = send(app, Method::POST, "/clientes", Some(serde_json::json!({"nome": nome}))).await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_i64().ok_or_else(|| anyhow::anyhow!("no id in {body}"))
}
