use axum::{extract::State, Json};
use models::servico;
use serde::{Deserialize, Deserializer, Serialize};
use service::servicos::domain::{AtualizaServico, NovoServico, ServicoComCliente};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};
use crate::routes::Mensagem;
use crate::state::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NovoServicoInput {
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub cliente_id: i32,
}

/// Both keys are required; `descricao` may be `null`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AtualizaServicoInput {
    pub titulo: String,
    #[serde(deserialize_with = "nullable")]
    pub descricao: Option<String>,
}

// present-but-null, unlike plain Option which also accepts a missing key
fn nullable<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d)
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ServicoOut {
    pub id: i32,
    pub titulo: String,
    pub descricao: Option<String>,
    pub cliente_id: i32,
}

impl From<servico::Model> for ServicoOut {
    fn from(m: servico::Model) -> Self {
        Self { id: m.id, titulo: m.titulo, descricao: m.descricao, cliente_id: m.cliente_id }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ServicoResumo {
    pub id: i32,
    pub titulo: String,
    pub descricao: Option<String>,
}

impl From<servico::Model> for ServicoResumo {
    fn from(m: servico::Model) -> Self {
        Self { id: m.id, titulo: m.titulo, descricao: m.descricao }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ServicoListado {
    pub id: i32,
    pub titulo: String,
    pub descricao: Option<String>,
    pub cliente_id: i32,
    /// `null` when the owning client was deleted.
    pub cliente_nome: Option<String>,
}

impl From<ServicoComCliente> for ServicoListado {
    fn from(row: ServicoComCliente) -> Self {
        let s = row.servico;
        Self { id: s.id, titulo: s.titulo, descricao: s.descricao, cliente_id: s.cliente_id, cliente_nome: row.cliente_nome }
    }
}

#[utoipa::path(post, path = "/servicos", tag = "servicos", request_body = NovoServicoInput, responses((status = 200, body = ServicoOut), (status = 404, description = "Client not found", body = crate::openapi::ErroResponse), (status = 422, body = crate::openapi::ErroResponse)))]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NovoServicoInput>,
) -> Result<Json<ServicoOut>, ApiError> {
    let created = state
        .servicos
        .create(NovoServico { titulo: input.titulo, descricao: input.descricao, cliente_id: input.cliente_id })
        .await?;
    Ok(Json(created.into()))
}

#[utoipa::path(get, path = "/servicos", tag = "servicos", responses((status = 200, body = [ServicoListado])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ServicoListado>>, ApiError> {
    let rows = state.servicos.list().await?;
    Ok(Json(rows.into_iter().map(ServicoListado::from).collect()))
}

#[utoipa::path(get, path = "/servicos/{id}", tag = "servicos", params(("id" = i32, Path, description = "Service id")), responses((status = 200, body = ServicoResumo), (status = 404, body = crate::openapi::ErroResponse)))]
pub async fn get(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<ServicoResumo>, ApiError> {
    Ok(Json(state.servicos.get(id).await?.into()))
}

#[utoipa::path(put, path = "/servicos/{id}", tag = "servicos", params(("id" = i32, Path, description = "Service id")), request_body = AtualizaServicoInput, responses((status = 200, body = Mensagem), (status = 404, body = crate::openapi::ErroResponse), (status = 422, body = crate::openapi::ErroResponse)))]
pub async fn update(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(input): ValidJson<AtualizaServicoInput>,
) -> Result<Json<Mensagem>, ApiError> {
    state
        .servicos
        .update(id, AtualizaServico { titulo: input.titulo, descricao: input.descricao })
        .await?;
    Ok(Mensagem::new("serviço atualizado com sucesso"))
}

#[utoipa::path(delete, path = "/servicos/{id}", tag = "servicos", params(("id" = i32, Path, description = "Service id")), responses((status = 200, body = Mensagem), (status = 404, body = crate::openapi::ErroResponse)))]
pub async fn delete(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<Mensagem>, ApiError> {
    state.servicos.delete(id).await?;
    Ok(Mensagem::new("serviço removido com sucesso"))
}
