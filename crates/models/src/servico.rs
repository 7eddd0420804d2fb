use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{cliente, tecnico, tecnico_servico};

pub const TITULO_MAX_LEN: usize = 100;
pub const DESCRICAO_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "servico")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub titulo: String,
    pub descricao: Option<String>,
    pub cliente_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Cliente,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cliente => Entity::belongs_to(cliente::Entity)
                .from(Column::ClienteId)
                .to(cliente::Column::Id)
                .into(),
        }
    }
}

impl Related<cliente::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cliente.def() }
}

impl Related<tecnico::Entity> for Entity {
    fn to() -> RelationDef { tecnico_servico::Relation::Tecnico.def() }

    fn via() -> Option<RelationDef> { Some(tecnico_servico::Relation::Servico.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_titulo(titulo: &str) -> Result<(), ModelError> {
    if titulo.trim().is_empty() {
        return Err(ModelError::Validation("titulo é obrigatório".into()));
    }
    if titulo.chars().count() > TITULO_MAX_LEN {
        return Err(ModelError::Validation(format!("titulo excede {TITULO_MAX_LEN} caracteres")));
    }
    Ok(())
}

pub fn validate_descricao(descricao: Option<&str>) -> Result<(), ModelError> {
    match descricao {
        Some(d) if d.chars().count() > DESCRICAO_MAX_LEN => Err(ModelError::Validation(format!(
            "descricao excede {DESCRICAO_MAX_LEN} caracteres"
        ))),
        _ => Ok(()),
    }
}

/// Insert a service. The caller is responsible for checking that the client exists.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    titulo: &str,
    descricao: Option<&str>,
    cliente_id: i32,
) -> Result<Model, ModelError> {
    validate_titulo(titulo)?;
    validate_descricao(descricao)?;
    let am = ActiveModel {
        titulo: Set(titulo.to_string()),
        descricao: Set(descricao.map(str::to_string)),
        cliente_id: Set(cliente_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Every service with its owning client, if that client still exists.
pub async fn list_with_cliente<C: ConnectionTrait>(db: &C) -> Result<Vec<(Model, Option<cliente::Model>)>, ModelError> {
    let rows = Entity::find()
        .find_also_related(cliente::Entity)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Replace both title and description. `None` when no service has this id.
pub async fn overwrite<C: ConnectionTrait>(
    db: &C,
    id: i32,
    titulo: &str,
    descricao: Option<&str>,
) -> Result<Option<Model>, ModelError> {
    validate_titulo(titulo)?;
    validate_descricao(descricao)?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.titulo = Set(titulo.to_string());
    am.descricao = Set(descricao.map(str::to_string));
    Ok(Some(am.update(db).await?))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn tecnicos<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Vec<tecnico::Model>>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let list = found
        .find_related(tecnico::Entity)
        .order_by_asc(tecnico::Column::Id)
        .all(db)
        .await?;
    Ok(Some(list))
}
