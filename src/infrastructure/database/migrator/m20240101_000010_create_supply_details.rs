//! Create supply_details table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_products::Products;
use super::m20240101_000007_create_supplies::Supplies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupplyDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupplyDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SupplyDetails::SupplyId).integer().not_null())
                    .col(ColumnDef::new(SupplyDetails::ProductId).integer().not_null())
                    .col(ColumnDef::new(SupplyDetails::Quantity).integer().not_null())
                    .col(ColumnDef::new(SupplyDetails::UnitPrice).big_integer().not_null())
                    .col(ColumnDef::new(SupplyDetails::UnitPriceDiscount).big_integer())
                    .col(
                        ColumnDef::new(SupplyDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupplyDetails::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supply_details_supply")
                            .from(SupplyDetails::Table, SupplyDetails::SupplyId)
                            .to(Supplies::Table, Supplies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supply_details_product")
                            .from(SupplyDetails::Table, SupplyDetails::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_supply_details_supply")
                    .table(SupplyDetails::Table)
                    .col(SupplyDetails::SupplyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupplyDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SupplyDetails {
    Table,
    Id,
    SupplyId,
    ProductId,
    Quantity,
    UnitPrice,
    UnitPriceDiscount,
    CreatedAt,
    UpdatedAt,
}
