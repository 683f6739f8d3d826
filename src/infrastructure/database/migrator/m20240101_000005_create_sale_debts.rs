//! Create sale_debts table

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_sales::Sales;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SaleDebts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SaleDebts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SaleDebts::SaleId).integer().not_null())
                    .col(
                        ColumnDef::new(SaleDebts::TotalDue)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SaleDebts::TotalPaid)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SaleDebts::DebtDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SaleDebts::ClosedDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(SaleDebts::Status)
                            .string_len(20)
                            .not_null()
                            .default("Open"),
                    )
                    .col(
                        ColumnDef::new(SaleDebts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SaleDebts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_debts_sale")
                            .from(SaleDebts::Table, SaleDebts::SaleId)
                            .to(Sales::Table, Sales::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sale_debts_sale")
                    .table(SaleDebts::Table)
                    .col(SaleDebts::SaleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SaleDebts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SaleDebts {
    Table,
    Id,
    SaleId,
    TotalDue,
    TotalPaid,
    DebtDate,
    ClosedDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
