use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{endereco, servico};

pub const NOME_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Servico,
    Endereco,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Servico => Entity::has_many(servico::Entity).into(),
            Relation::Endereco => Entity::has_one(endereco::Entity).into(),
        }
    }
}

impl Related<servico::Entity> for Entity {
    fn to() -> RelationDef { Relation::Servico.def() }
}

impl Related<endereco::Entity> for Entity {
    fn to() -> RelationDef { Relation::Endereco.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_nome(nome: &str) -> Result<(), ModelError> {
    if nome.trim().is_empty() {
        return Err(ModelError::Validation("nome é obrigatório".into()));
    }
    if nome.chars().count() > NOME_MAX_LEN {
        return Err(ModelError::Validation(format!("nome excede {NOME_MAX_LEN} caracteres")));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, nome: &str) -> Result<Model, ModelError> {
    validate_nome(nome)?;
    let am = ActiveModel { nome: Set(nome.to_string()), ..Default::default() };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Overwrite the name. `None` when no client has this id.
pub async fn rename<C: ConnectionTrait>(db: &C, id: i32, nome: &str) -> Result<Option<Model>, ModelError> {
    validate_nome(nome)?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.nome = Set(nome.to_string());
    Ok(Some(am.update(db).await?))
}

/// Remove the row only; owned services are left untouched.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Services owned by the client, oldest first. `None` when the client is absent.
pub async fn servicos<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Vec<servico::Model>>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let list = found
        .find_related(servico::Entity)
        .order_by_asc(servico::Column::Id)
        .all(db)
        .await?;
    Ok(Some(list))
}
