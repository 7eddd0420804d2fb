pub mod clientes;
pub mod servicos;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::{OpenApi, ToSchema};

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

/// `{"mensagem": ...}` acknowledgement body.
#[derive(Debug, Serialize, ToSchema)]
pub struct Mensagem {
    pub mensagem: String,
}

impl Mensagem {
    pub fn new(msg: &str) -> Json<Self> {
        Json(Self { mensagem: msg.to_string() })
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = crate::openapi::HealthResponse), (status = 503, description = "Database unreachable")))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            warn!(error = %e, "database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: client and service resources plus health and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let clientes = Router::new()
        .route("/clientes", get(clientes::list).post(clientes::create))
        .route(
            "/clientes/:id",
            get(clientes::get).put(clientes::update).delete(clientes::delete),
        )
        .route("/clientes/:id/servicos", get(clientes::list_servicos));

    let servicos = Router::new()
        .route("/servicos", get(servicos::list).post(servicos::create))
        .route(
            "/servicos/:id",
            get(servicos::get).put(servicos::update).delete(servicos::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(clientes)
        .merge(servicos)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
