//! Sale debt entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::DebtStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DebtStatusDb {
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "Closed")]
    Closed,
}

impl From<DebtStatusDb> for DebtStatus {
    fn from(s: DebtStatusDb) -> Self {
        match s {
            DebtStatusDb::Open => DebtStatus::Open,
            DebtStatusDb::Closed => DebtStatus::Closed,
        }
    }
}

impl From<DebtStatus> for DebtStatusDb {
    fn from(s: DebtStatus) -> Self {
        match s {
            DebtStatus::Open => DebtStatusDb::Open,
            DebtStatus::Closed => DebtStatusDb::Closed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sale_debts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sale_id: i32,
    pub total_due: i64,
    pub total_paid: i64,
    pub debt_date: DateTime<Utc>,
    pub closed_date: Option<DateTime<Utc>>,
    pub status: DebtStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sale::Entity",
        from = "Column::SaleId",
        to = "super::sale::Column::Id",
        on_delete = "Cascade"
    )]
    Sale,
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
