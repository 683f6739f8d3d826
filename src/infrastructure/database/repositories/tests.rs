use chrono::{Duration, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use super::SeaOrmRepositoryProvider;
use crate::domain::*;
use crate::infrastructure::database::test_support::memory_db;
use crate::shared::{DomainError, PageRequest};

async fn provider() -> (SeaOrmRepositoryProvider, DatabaseConnection) {
    let db = memory_db().await;
    (SeaOrmRepositoryProvider::new(db.clone()), db)
}

fn category(name: &str) -> CategoryDraft {
    CategoryDraft {
        category_name: name.to_string(),
        description: None,
        parent_id: None,
    }
}

fn product(name: &str, code: &str, category_id: i32, price: i64) -> ProductDraft {
    ProductDraft {
        product_name: name.to_string(),
        product_code: code.to_string(),
        description: None,
        sale_price: price,
        supply_price: price / 2,
        category_id,
    }
}

fn customer(name: &str) -> CustomerDraft {
    CustomerDraft {
        full_name: name.to_string(),
        company: None,
        phone_number: None,
        address: None,
        balance: 0,
        discount: 0.0,
        is_active: true,
    }
}

fn page(number: i64, size: i64) -> PageRequest {
    PageRequest::new(number, size).unwrap()
}

#[tokio::test]
async fn twelve_products_page_through_in_name_order() {
    let (repos, _db) = provider().await;
    let cat = repos.categories().create(category("Hardware")).await.unwrap();
    for i in (1..=12).rev() {
        repos
            .products()
            .create(product(&format!("Item {:02}", i), &format!("C{:02}", i), cat.id, 100))
            .await
            .unwrap();
    }

    let query = ProductQuery::default();
    let first = repos.products().find_page(&query, page(1, 5)).await.unwrap();
    let names: Vec<_> = first.items().iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, ["Item 01", "Item 02", "Item 03", "Item 04", "Item 05"]);
    assert_eq!(first.total_pages(), 3);
    assert!(first.has_next());

    let third = repos.products().find_page(&query, page(3, 5)).await.unwrap();
    assert_eq!(third.items().len(), 2);
    assert!(!third.has_next());

    let fourth = repos.products().find_page(&query, page(4, 5)).await.unwrap();
    assert!(fourth.items().is_empty());
    assert_eq!(fourth.total_count(), 12);
    assert!(fourth.has_previous());
}

#[tokio::test]
async fn ties_on_sort_key_fall_back_to_primary_key() {
    let (repos, _db) = provider().await;
    let cat = repos.categories().create(category("Bulk")).await.unwrap();
    let mut ids = Vec::new();
    for i in 0..7 {
        let p = repos
            .products()
            .create(product("Same name", &format!("S{}", i), cat.id, 500))
            .await
            .unwrap();
        ids.push(p.id);
    }

    let query = ProductQuery::default();
    let mut seen = Vec::new();
    for n in 1..=3 {
        let a = repos.products().find_page(&query, page(n, 3)).await.unwrap();
        let b = repos.products().find_page(&query, page(n, 3)).await.unwrap();
        assert_eq!(a, b);
        seen.extend(a.items().iter().map(|p| p.id));
    }
    assert_eq!(seen, ids);
}

#[tokio::test]
async fn empty_table_yields_empty_metadata() {
    let (repos, _db) = provider().await;
    let list = repos
        .customers()
        .find_page(&CustomerQuery::default(), page(2, 15))
        .await
        .unwrap();
    let meta = list.metadata();
    assert!(list.items().is_empty());
    assert_eq!((meta.total_count, meta.total_pages), (0, 0));
    assert!(!meta.has_next);
}

#[tokio::test]
async fn filters_are_anded_and_counted_before_paging() {
    let (repos, _db) = provider().await;
    let tools = repos.categories().create(category("Tools")).await.unwrap();
    let toys = repos.categories().create(category("Toys")).await.unwrap();
    repos.products().create(product("Hammer", "T-1", tools.id, 1_500)).await.unwrap();
    repos.products().create(product("Hammer drill", "T-2", tools.id, 9_000)).await.unwrap();
    repos.products().create(product("Toy hammer", "Y-1", toys.id, 300)).await.unwrap();
    repos.products().create(product("Saw", "T-3", tools.id, 2_000)).await.unwrap();

    let query = ProductQuery {
        search: Some("hammer".to_string()),
        category_id: Some(tools.id),
        max_price: Some(5_000),
        ..Default::default()
    };
    let list = repos.products().find_page(&query, page(1, 15)).await.unwrap();
    assert_eq!(list.total_count(), 1);
    assert_eq!(list.items()[0].product_code, "T-1");

    let by_code = ProductQuery {
        search: Some("Y-".to_string()),
        ..Default::default()
    };
    let list = repos.products().find_page(&by_code, page(1, 15)).await.unwrap();
    assert_eq!(list.items()[0].product_name, "Toy hammer");
}

#[tokio::test]
async fn explicit_sort_overrides_default() {
    let (repos, _db) = provider().await;
    let cat = repos.categories().create(category("Paint")).await.unwrap();
    repos.products().create(product("A", "P1", cat.id, 300)).await.unwrap();
    repos.products().create(product("B", "P2", cat.id, 100)).await.unwrap();
    repos.products().create(product("C", "P3", cat.id, 200)).await.unwrap();

    let query = ProductQuery {
        sort: Some(Sort::desc(ProductSortKey::SalePrice)),
        ..Default::default()
    };
    let list = repos.products().find_page(&query, page(1, 10)).await.unwrap();
    let prices: Vec<_> = list.items().iter().map(|p| p.sale_price).collect();
    assert_eq!(prices, [300, 200, 100]);
}

#[tokio::test]
async fn category_children_and_roots() {
    let (repos, _db) = provider().await;
    let root = repos.categories().create(category("Garden")).await.unwrap();
    let mut child = category("Seeds");
    child.parent_id = Some(root.id);
    repos.categories().create(child).await.unwrap();

    let children = repos
        .categories()
        .find_page(&CategoryQuery::children_of(root.id), page(1, 15))
        .await
        .unwrap();
    assert_eq!(children.total_count(), 1);
    assert_eq!(children.items()[0].category_name, "Seeds");

    let roots = CategoryQuery {
        roots_only: true,
        ..Default::default()
    };
    let roots = repos.categories().find_page(&roots, page(1, 15)).await.unwrap();
    assert_eq!(roots.total_count(), 1);
    assert!(roots.items()[0].is_root());
}

#[tokio::test]
async fn update_replaces_fields_and_bumps_timestamp() {
    let (repos, _db) = provider().await;
    let created = repos.customers().create(customer("Ann Lee")).await.unwrap();

    let mut draft = CustomerDraft::from(created.clone());
    draft.company = Some("Lee & Co".to_string());
    draft.discount = 5.0;
    let updated = repos.customers().update(created.id, draft).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.company.as_deref(), Some("Lee & Co"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let (repos, _db) = provider().await;
    assert!(repos.customers().find_by_id(99).await.unwrap().is_none());
    assert!(!repos.customers().exists(99).await.unwrap());
    assert!(matches!(
        repos.customers().update(99, customer("Nobody")).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        repos.customers().delete(99).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        repos.customers().get(99).await,
        Err(DomainError::NotFound { entity: "Customer", .. })
    ));
}

#[tokio::test]
async fn duplicate_product_code_is_a_conflict() {
    let (repos, _db) = provider().await;
    let cat = repos.categories().create(category("Misc")).await.unwrap();
    repos.products().create(product("One", "DUP", cat.id, 1)).await.unwrap();
    let err = repos
        .products()
        .create(product("Two", "DUP", cat.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn deleting_referenced_category_is_a_conflict() {
    let (repos, _db) = provider().await;
    let cat = repos.categories().create(category("Locked")).await.unwrap();
    repos.products().create(product("Pin", "PIN", cat.id, 1)).await.unwrap();
    let err = repos.categories().delete(cat.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn sales_filter_by_status_and_date_window() {
    let (repos, _db) = provider().await;
    let buyer = repos.customers().create(customer("Bo")).await.unwrap();
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

    for (i, status) in [SaleStatus::Completed, SaleStatus::Pending, SaleStatus::Completed]
        .into_iter()
        .enumerate()
    {
        repos
            .sales()
            .create(SaleDraft {
                receipt: format!("R-{}", i),
                comment: None,
                sale_date: base + Duration::days(i as i64),
                total_due: 1_000,
                total_paid: 0,
                discount_percentage: 0.0,
                discount: 0,
                sale_type: SaleType::Retail,
                status,
                customer_id: buyer.id,
            })
            .await
            .unwrap();
    }

    let query = SaleQuery {
        status: Some(SaleStatus::Completed),
        from: Some(base),
        to: Some(base + Duration::days(2)),
        ..SaleQuery::for_customer(buyer.id)
    };
    let list = repos.sales().find_page(&query, page(1, 15)).await.unwrap();
    assert_eq!(list.total_count(), 1);
    assert_eq!(list.items()[0].receipt, "R-0");

    let all = repos
        .sales()
        .find_page(&SaleQuery::default(), page(1, 15))
        .await
        .unwrap();
    let receipts: Vec<_> = all.items().iter().map(|s| s.receipt.as_str()).collect();
    assert_eq!(receipts, ["R-2", "R-1", "R-0"]);
}

#[tokio::test]
async fn deleting_sale_cascades_to_debts() {
    let (repos, _db) = provider().await;
    let buyer = repos.customers().create(customer("Cy")).await.unwrap();
    let sale = repos
        .sales()
        .create(SaleDraft {
            receipt: "R-9".to_string(),
            comment: None,
            sale_date: Utc::now(),
            total_due: 5_000,
            total_paid: 1_000,
            discount_percentage: 10.0,
            discount: 250,
            sale_type: SaleType::Wholesale,
            status: SaleStatus::Pending,
            customer_id: buyer.id,
        })
        .await
        .unwrap();
    let debt = repos
        .debts()
        .create(SaleDebtDraft {
            sale_id: sale.id,
            total_due: 4_000,
            total_paid: 0,
            debt_date: Utc::now(),
            closed_date: None,
            status: DebtStatus::Open,
        })
        .await
        .unwrap();
    assert_eq!(debt.remaining(), 4_000);
    assert_eq!(sale.sale_type, SaleType::Wholesale);
    assert_eq!(sale.discount, 250);

    let cat = repos.categories().create(category("Tea")).await.unwrap();
    let tea = repos.products().create(product("Green", "G-1", cat.id, 300)).await.unwrap();
    let line = repos
        .sale_details()
        .create(SaleDetailDraft {
            sale_id: sale.id,
            product_id: tea.id,
            quantity: 2,
            unit_price: 300,
            discount: 0,
        })
        .await
        .unwrap();

    repos.sales().delete(sale.id).await.unwrap();
    assert!(!repos.debts().exists(debt.id).await.unwrap());
    assert!(!repos.sale_details().exists(line.id).await.unwrap());
}

#[tokio::test]
async fn product_on_a_supply_line_cannot_be_deleted() {
    let (repos, _db) = provider().await;
    let cat = repos.categories().create(category("Bulk")).await.unwrap();
    let rice = repos.products().create(product("Rice", "R-1", cat.id, 900)).await.unwrap();
    let oats = repos.products().create(product("Oats", "O-1", cat.id, 700)).await.unwrap();
    let acme = repos
        .suppliers()
        .create(SupplierDraft {
            full_name: "Acme".to_string(),
            company: None,
            phone_number: None,
            balance: 0,
            is_active: true,
        })
        .await
        .unwrap();
    let delivery = repos
        .supplies()
        .create(SupplyDraft {
            supplier_id: acme.id,
            supply_date: Utc::now(),
            total_due: 0,
            total_paid: 0,
            received_by: None,
            comment: None,
        })
        .await
        .unwrap();

    for (product_id, quantity) in [(rice.id, 10), (oats.id, 4), (rice.id, 6)] {
        repos
            .supply_details()
            .create(SupplyDetailDraft {
                supply_id: delivery.id,
                product_id,
                quantity,
                unit_price: 500,
                unit_price_discount: None,
            })
            .await
            .unwrap();
    }

    let query = SupplyDetailQuery {
        product_id: Some(rice.id),
        sort: Some(Sort::asc(LineSortKey::Quantity)),
        ..SupplyDetailQuery::for_supply(delivery.id)
    };
    let lines = repos.supply_details().find_page(&query, page(1, 15)).await.unwrap();
    let quantities: Vec<_> = lines.items().iter().map(|l| l.quantity).collect();
    assert_eq!(quantities, [6, 10]);

    let err = repos.products().delete(rice.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}
