//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_categories;
mod m20240101_000002_create_products;
mod m20240101_000003_create_customers;
mod m20240101_000004_create_sales;
mod m20240101_000005_create_sale_debts;
mod m20240101_000006_create_suppliers;
mod m20240101_000007_create_supplies;
mod m20240101_000008_add_pricing_to_sales;
mod m20240101_000009_create_sale_details;
mod m20240101_000010_create_supply_details;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories::Migration),
            Box::new(m20240101_000002_create_products::Migration),
            Box::new(m20240101_000003_create_customers::Migration),
            Box::new(m20240101_000004_create_sales::Migration),
            Box::new(m20240101_000005_create_sale_debts::Migration),
            Box::new(m20240101_000006_create_suppliers::Migration),
            Box::new(m20240101_000007_create_supplies::Migration),
            Box::new(m20240101_000008_add_pricing_to_sales::Migration),
            Box::new(m20240101_000009_create_sale_details::Migration),
            Box::new(m20240101_000010_create_supply_details::Migration),
        ]
    }
}
