use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{servico, tecnico};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tecnico_servico")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tecnico_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub servico_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Tecnico,
    Servico,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Tecnico => Entity::belongs_to(tecnico::Entity)
                .from(Column::TecnicoId)
                .to(tecnico::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Servico => Entity::belongs_to(servico::Entity)
                .from(Column::ServicoId)
                .to(servico::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
