pub mod categories;
pub mod customers;
pub mod debts;
pub mod health;
pub mod metrics;
pub mod products;
pub mod request_id;
pub mod sale_details;
pub mod sales;
pub mod suppliers;
pub mod supplies;
pub mod supply_details;
