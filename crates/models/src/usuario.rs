use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const EMAIL_MAX_LEN: usize = 120;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub senha_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    if email.len() > EMAIL_MAX_LEN {
        return Err(ModelError::Validation(format!("email longer than {EMAIL_MAX_LEN} characters")));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, email: &str, senha_hash: &str) -> Result<Model, ModelError> {
    validate_email(email)?;
    if senha_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        email: Set(email.trim().to_string()),
        senha_hash: Set(senha_hash.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email.trim())).one(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Replace the stored hash. `None` when the user is absent.
pub async fn set_senha_hash<C: ConnectionTrait>(db: &C, id: i32, senha_hash: String) -> Result<Option<Model>, ModelError> {
    if senha_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.senha_hash = Set(senha_hash);
    Ok(Some(am.update(db).await?))
}
