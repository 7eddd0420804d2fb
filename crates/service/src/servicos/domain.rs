use models::servico;

/// Input for creating a service.
#[derive(Debug, Clone)]
pub struct NovoServico {
    pub titulo: String,
    pub descricao: Option<String>,
    pub cliente_id: i32,
}

/// Full replacement of the mutable fields.
#[derive(Debug, Clone)]
pub struct AtualizaServico {
    pub titulo: String,
    pub descricao: Option<String>,
}

/// A service with the name of its client, resolved by an explicit join.
/// `cliente_nome` is `None` once the client has been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicoComCliente {
    pub servico: servico::Model,
    pub cliente_nome: Option<String>,
}
