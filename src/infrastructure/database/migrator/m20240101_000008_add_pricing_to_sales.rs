//! Add sale type and discount columns to sales table

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_sales::Sales;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite accepts one column per ALTER TABLE
        manager
            .alter_table(
                Table::alter()
                    .table(Sales::Table)
                    .add_column(
                        ColumnDef::new(SalesPricing::DiscountPercentage)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Sales::Table)
                    .add_column(
                        ColumnDef::new(SalesPricing::Discount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Sales::Table)
                    .add_column(
                        ColumnDef::new(SalesPricing::SaleType)
                            .string_len(20)
                            .not_null()
                            .default("Retail"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot drop columns in place; the columns are left behind.
        Ok(())
    }
}

#[derive(Iden)]
enum SalesPricing {
    DiscountPercentage,
    Discount,
    SaleType,
}
