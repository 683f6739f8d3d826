//! Create supplies table

use sea_orm_migration::prelude::*;

use super::m20240101_000006_create_suppliers::Suppliers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Supplies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Supplies::SupplierId).integer().not_null())
                    .col(
                        ColumnDef::new(Supplies::SupplyDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Supplies::TotalDue)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Supplies::TotalPaid)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Supplies::ReceivedBy).string_len(150))
                    .col(ColumnDef::new(Supplies::Comment).string_len(500))
                    .col(
                        ColumnDef::new(Supplies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Supplies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supplies_supplier")
                            .from(Supplies::Table, Supplies::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_supplies_supplier_date")
                    .table(Supplies::Table)
                    .col(Supplies::SupplierId)
                    .col(Supplies::SupplyDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Supplies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Supplies {
    Table,
    Id,
    SupplierId,
    SupplyDate,
    TotalDue,
    TotalPaid,
    ReceivedBy,
    Comment,
    CreatedAt,
    UpdatedAt,
}
