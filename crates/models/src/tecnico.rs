use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{servico, tecnico_servico};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tecnico")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl Related<servico::Entity> for Entity {
    fn to() -> RelationDef { tecnico_servico::Relation::Servico.def() }

    fn via() -> Option<RelationDef> { Some(tecnico_servico::Relation::Tecnico.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, nome: Option<&str>) -> Result<Model, ModelError> {
    if let Some(n) = nome {
        crate::cliente::validate_nome(n)?;
    }
    let am = ActiveModel { nome: Set(nome.map(str::to_string)), ..Default::default() };
    Ok(am.insert(db).await?)
}

/// Link a technician to a service. Returns `false` when the link already existed.
pub async fn assign_servico<C: ConnectionTrait>(db: &C, tecnico_id: i32, servico_id: i32) -> Result<bool, ModelError> {
    if Entity::find_by_id(tecnico_id).one(db).await?.is_none() {
        return Err(ModelError::Validation("técnico não encontrado".into()));
    }
    if servico::Entity::find_by_id(servico_id).one(db).await?.is_none() {
        return Err(ModelError::Validation("serviço não encontrado".into()));
    }
    if tecnico_servico::Entity::find_by_id((tecnico_id, servico_id)).one(db).await?.is_some() {
        return Ok(false);
    }
    let link = tecnico_servico::ActiveModel { tecnico_id: Set(tecnico_id), servico_id: Set(servico_id) };
    tecnico_servico::Entity::insert(link).exec_without_returning(db).await?;
    Ok(true)
}

pub async fn servicos<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Vec<servico::Model>>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let list = found
        .find_related(servico::Entity)
        .order_by_asc(servico::Column::Id)
        .all(db)
        .await?;
    Ok(Some(list))
}
