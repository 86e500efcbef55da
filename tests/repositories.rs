//! Both repositories against one store: identical rows, identical customers.

use customers_api::mapping::CustomerRow;
use customers_api::repository::{customer_entity, CustomerRepository, MappedCustomerRepository, SqlCustomerRepository};
use customers_api::{apply_migrations, store, Address, NewCustomer};
use sqlx::SqlitePool;

async fn migrated_pool() -> SqlitePool {
    let pool = store::memory_pool().await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}

fn customer() -> NewCustomer {
    NewCustomer {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        billing_address: Address {
            line1: "1 Main St".into(),
            line2: Some("Second floor".into()),
            line3: None,
            line4: None,
            city: "London".into(),
            post_code: "AB1 2CD".into(),
            country: "UK".into(),
        },
        shipping_address: Address {
            line1: "2 Side St".into(),
            line2: None,
            line3: Some("Back entrance".into()),
            line4: Some("Ring twice".into()),
            city: "Bath".into(),
            post_code: "BA1 1AA".into(),
            country: "UK".into(),
        },
    }
}

async fn stored_row(pool: &SqlitePool, id: i64) -> CustomerRow {
    sqlx::query_as::<_, CustomerRow>(r#"SELECT * FROM "Customer" WHERE "Id" = ?"#)
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn both_paths_store_identical_rows() {
    let pool = migrated_pool().await;
    let mapped = MappedCustomerRepository::new(pool.clone());
    let direct = SqlCustomerRepository::new(pool.clone());

    let a = mapped.create(&customer()).await.unwrap();
    let b = direct.create(&customer()).await.unwrap();
    assert_eq!(b, a + 1);

    let mut row_a = stored_row(&pool, a).await;
    let row_b = stored_row(&pool, b).await;
    row_a.id = row_b.id;
    assert_eq!(row_a, row_b);
}

#[tokio::test]
async fn each_path_reads_what_the_other_wrote() {
    let pool = migrated_pool().await;
    let mapped = MappedCustomerRepository::new(pool.clone());
    let direct = SqlCustomerRepository::new(pool.clone());

    let a = mapped.create(&customer()).await.unwrap();
    let b = direct.create(&customer()).await.unwrap();

    for id in [a, b] {
        let via_mapped = mapped.get(id).await.unwrap();
        let via_direct = direct.get(id).await.unwrap();
        assert_eq!(via_mapped, via_direct);
        assert_eq!(via_mapped, Some(customer().with_id(id)));
    }
}

#[tokio::test]
async fn absent_id_is_none_on_both_paths() {
    let pool = migrated_pool().await;
    assert_eq!(MappedCustomerRepository::new(pool.clone()).get(9999).await.unwrap(), None);
    assert_eq!(SqlCustomerRepository::new(pool).get(9999).await.unwrap(), None);
}

#[tokio::test]
async fn table_columns_match_entity_map() {
    let pool = migrated_pool().await;
    let columns: Vec<String> = sqlx::query_scalar(r#"SELECT name FROM pragma_table_info('Customer') ORDER BY cid"#)
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(columns, customer_entity().columns);
    assert_eq!(columns.len(), 17);
}
