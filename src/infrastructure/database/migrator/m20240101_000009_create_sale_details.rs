//! Create sale_details table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_products::Products;
use super::m20240101_000004_create_sales::Sales;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SaleDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SaleDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SaleDetails::SaleId).integer().not_null())
                    .col(ColumnDef::new(SaleDetails::ProductId).integer().not_null())
                    .col(ColumnDef::new(SaleDetails::Quantity).integer().not_null())
                    .col(ColumnDef::new(SaleDetails::UnitPrice).big_integer().not_null())
                    .col(
                        ColumnDef::new(SaleDetails::Discount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SaleDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SaleDetails::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_details_sale")
                            .from(SaleDetails::Table, SaleDetails::SaleId)
                            .to(Sales::Table, Sales::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_details_product")
                            .from(SaleDetails::Table, SaleDetails::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sale_details_sale")
                    .table(SaleDetails::Table)
                    .col(SaleDetails::SaleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SaleDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SaleDetails {
    Table,
    Id,
    SaleId,
    ProductId,
    Quantity,
    UnitPrice,
    Discount,
    CreatedAt,
    UpdatedAt,
}
