use axum::{extract::State, Json};
use models::{cliente, servico};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};
use crate::routes::{servicos::ServicoResumo, Mensagem};
use crate::state::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClienteInput {
    pub nome: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ClienteOut {
    pub id: i32,
    pub nome: String,
}

impl From<cliente::Model> for ClienteOut {
    fn from(m: cliente::Model) -> Self {
        Self { id: m.id, nome: m.nome }
    }
}

#[utoipa::path(post, path = "/clientes", tag = "clientes", request_body = ClienteInput, responses((status = 200, body = ClienteOut), (status = 400, body = crate::openapi::ErroResponse), (status = 422, body = crate::openapi::ErroResponse)))]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<ClienteInput>,
) -> Result<Json<ClienteOut>, ApiError> {
    let created = state.clientes.create(&input.nome).await?;
    Ok(Json(created.into()))
}

#[utoipa::path(get, path = "/clientes", tag = "clientes", responses((status = 200, body = [ClienteOut])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ClienteOut>>, ApiError> {
    let items = state.clientes.list().await?;
    Ok(Json(items.into_iter().map(ClienteOut::from).collect()))
}

#[utoipa::path(get, path = "/clientes/{id}", tag = "clientes", params(("id" = i32, Path, description = "Client id")), responses((status = 200, body = ClienteOut), (status = 404, body = crate::openapi::ErroResponse)))]
pub async fn get(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<ClienteOut>, ApiError> {
    Ok(Json(state.clientes.get(id).await?.into()))
}

#[utoipa::path(put, path = "/clientes/{id}", tag = "clientes", params(("id" = i32, Path, description = "Client id")), request_body = ClienteInput, responses((status = 200, body = ClienteOut), (status = 404, body = crate::openapi::ErroResponse)))]
pub async fn update(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(input): ValidJson<ClienteInput>,
) -> Result<Json<ClienteOut>, ApiError> {
    Ok(Json(state.clientes.update(id, &input.nome).await?.into()))
}

/// Services owned by the client are left in place.
#[utoipa::path(delete, path = "/clientes/{id}", tag = "clientes", params(("id" = i32, Path, description = "Client id")), responses((status = 200, body = Mensagem), (status = 404, body = crate::openapi::ErroResponse)))]
pub async fn delete(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Mensagem>, ApiError> {
    state.clientes.delete(id).await?;
    Ok(Mensagem::new("cliente deletado com sucesso!"))
}

#[utoipa::path(get, path = "/clientes/{id}/servicos", tag = "clientes", params(("id" = i32, Path, description = "Client id")), responses((status = 200, body = [ServicoResumo]), (status = 404, body = crate::openapi::ErroResponse)))]
pub async fn list_servicos(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Vec<ServicoResumo>>, ApiError> {
    let items: Vec<servico::Model> = state.clientes.list_servicos(id).await?;
    Ok(Json(items.into_iter().map(ServicoResumo::from).collect()))
}
