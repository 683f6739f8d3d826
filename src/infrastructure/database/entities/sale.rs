//! Sale entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{SaleStatus, SaleType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum SaleStatusDb {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

impl From<SaleStatusDb> for SaleStatus {
    fn from(s: SaleStatusDb) -> Self {
        match s {
            SaleStatusDb::Pending => SaleStatus::Pending,
            SaleStatusDb::Completed => SaleStatus::Completed,
            SaleStatusDb::Cancelled => SaleStatus::Cancelled,
        }
    }
}

impl From<SaleStatus> for SaleStatusDb {
    fn from(s: SaleStatus) -> Self {
        match s {
            SaleStatus::Pending => SaleStatusDb::Pending,
            SaleStatus::Completed => SaleStatusDb::Completed,
            SaleStatus::Cancelled => SaleStatusDb::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum SaleTypeDb {
    #[sea_orm(string_value = "Retail")]
    Retail,
    #[sea_orm(string_value = "Wholesale")]
    Wholesale,
}

impl From<SaleTypeDb> for SaleType {
    fn from(t: SaleTypeDb) -> Self {
        match t {
            SaleTypeDb::Retail => SaleType::Retail,
            SaleTypeDb::Wholesale => SaleType::Wholesale,
        }
    }
}

impl From<SaleType> for SaleTypeDb {
    fn from(t: SaleType) -> Self {
        match t {
            SaleType::Retail => SaleTypeDb::Retail,
            SaleType::Wholesale => SaleTypeDb::Wholesale,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Receipt number printed for the customer
    pub receipt: String,
    pub comment: Option<String>,
    pub sale_date: DateTime<Utc>,
    pub total_due: i64,
    pub total_paid: i64,
    pub discount_percentage: f64,
    /// Flat discount (in smallest currency unit)
    pub discount: i64,
    pub sale_type: SaleTypeDb,
    pub status: SaleStatusDb,
    pub customer_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::sale_debt::Entity")]
    Debts,
    #[sea_orm(has_many = "super::sale_detail::Entity")]
    Details,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::sale_debt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debts.def()
    }
}

impl Related<super::sale_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Details.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
