//! SeaORM entities for the inventory and sales schema

pub mod category;
pub mod customer;
pub mod product;
pub mod sale;
pub mod sale_debt;
pub mod sale_detail;
pub mod supplier;
pub mod supply;
pub mod supply_detail;

pub mod prelude {
    pub use super::category::Entity as Category;
    pub use super::customer::Entity as Customer;
    pub use super::product::Entity as Product;
    pub use super::sale::Entity as Sale;
    pub use super::sale_debt::Entity as SaleDebt;
    pub use super::sale_detail::Entity as SaleDetail;
    pub use super::supplier::Entity as Supplier;
    pub use super::supply::Entity as Supply;
    pub use super::supply_detail::Entity as SupplyDetail;
}
