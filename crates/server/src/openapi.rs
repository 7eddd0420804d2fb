use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{
    clientes::{ClienteInput, ClienteOut},
    servicos::{AtualizaServicoInput, NovoServicoInput, ServicoListado, ServicoOut, ServicoResumo},
    Mensagem,
};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErroResponse { pub erro: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clientes::create,
        crate::routes::clientes::list,
        crate::routes::clientes::get,
        crate::routes::clientes::update,
        crate::routes::clientes::delete,
        crate::routes::clientes::list_servicos,
        crate::routes::servicos::create,
        crate::routes::servicos::list,
        crate::routes::servicos::get,
        crate::routes::servicos::update,
        crate::routes::servicos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErroResponse,
            Mensagem,
            ClienteInput,
            ClienteOut,
            NovoServicoInput,
            AtualizaServicoInput,
            ServicoOut,
            ServicoResumo,
            ServicoListado,
        )
    ),
    tags(
        (name = "health"),
        (name = "clientes"),
        (name = "servicos")
    )
)]
pub struct ApiDoc;
