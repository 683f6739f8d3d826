//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use super::generic::SeaOrmRepository;
use crate::domain::{
    Category, Customer, Product, Repository, RepositoryProvider, Sale, SaleDebt, SaleDetail,
    Supplier, Supply, SupplyDetail,
};
use crate::infrastructure::database::entities::{
    category, customer, product, sale, sale_debt, sale_detail, supplier, supply, supply_detail,
};

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let page = repos.products().find_page(&ProductQuery::in_category(3), page).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    categories: SeaOrmRepository<category::Entity>,
    products: SeaOrmRepository<product::Entity>,
    customers: SeaOrmRepository<customer::Entity>,
    suppliers: SeaOrmRepository<supplier::Entity>,
    supplies: SeaOrmRepository<supply::Entity>,
    sales: SeaOrmRepository<sale::Entity>,
    debts: SeaOrmRepository<sale_debt::Entity>,
    sale_details: SeaOrmRepository<sale_detail::Entity>,
    supply_details: SeaOrmRepository<supply_detail::Entity>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            categories: SeaOrmRepository::new(db.clone()),
            products: SeaOrmRepository::new(db.clone()),
            customers: SeaOrmRepository::new(db.clone()),
            suppliers: SeaOrmRepository::new(db.clone()),
            supplies: SeaOrmRepository::new(db.clone()),
            sales: SeaOrmRepository::new(db.clone()),
            debts: SeaOrmRepository::new(db.clone()),
            sale_details: SeaOrmRepository::new(db.clone()),
            supply_details: SeaOrmRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn categories(&self) -> &dyn Repository<Category> {
        &self.categories
    }

    fn products(&self) -> &dyn Repository<Product> {
        &self.products
    }

    fn customers(&self) -> &dyn Repository<Customer> {
        &self.customers
    }

    fn suppliers(&self) -> &dyn Repository<Supplier> {
        &self.suppliers
    }

    fn supplies(&self) -> &dyn Repository<Supply> {
        &self.supplies
    }

    fn sales(&self) -> &dyn Repository<Sale> {
        &self.sales
    }

    fn debts(&self) -> &dyn Repository<SaleDebt> {
        &self.debts
    }

    fn sale_details(&self) -> &dyn Repository<SaleDetail> {
        &self.sale_details
    }

    fn supply_details(&self) -> &dyn Repository<SupplyDetail> {
        &self.supply_details
    }
}
