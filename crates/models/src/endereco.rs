use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::cliente;
use crate::errors::ModelError;

pub const RUA_MAX_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "endereco")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rua: Option<String>,
    pub cliente_id: Option<i32>,
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
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
        }
    }
}

impl Related<cliente::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cliente.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// A client has at most one address: replace the street if one exists, insert otherwise.
pub async fn set_for_cliente<C: ConnectionTrait>(db: &C, cliente_id: i32, rua: &str) -> Result<Model, ModelError> {
    if rua.chars().count() > RUA_MAX_LEN {
        return Err(ModelError::Validation(format!("rua excede {RUA_MAX_LEN} caracteres")));
    }
    if cliente::Entity::find_by_id(cliente_id).one(db).await?.is_none() {
        return Err(ModelError::Validation("cliente não encontrado".into()));
    }
    match of_cliente(db, cliente_id).await? {
        Some(existing) => {
            let mut am: ActiveModel = existing.into();
            am.rua = Set(Some(rua.to_string()));
            Ok(am.update(db).await?)
        }
        None => {
            let am = ActiveModel {
                rua: Set(Some(rua.to_string())),
                cliente_id: Set(Some(cliente_id)),
                ..Default::default()
            };
            Ok(am.insert(db).await?)
        }
    }
}

pub async fn of_cliente<C: ConnectionTrait>(db: &C, cliente_id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::ClienteId.eq(cliente_id))
        .one(db)
        .await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}
