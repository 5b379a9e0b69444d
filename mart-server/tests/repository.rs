//! Repository tests against the embedded engine
//!
//! Exercise the unique indexes that guard the login and order-number
//! invariants, including the duplicate classification the ingestion
//! workflow relies on.

use surrealdb::RecordId;

use mart_server::db::DbService;
use mart_server::db::models::OrderCreate;
use mart_server::db::repository::{
    OrderStore, RepoError, SurrealOrderRepository, SurrealUserRepository, UserStore,
};

async fn database() -> DbService {
    DbService::memory().await.expect("in-memory database")
}

#[tokio::test]
async fn test_login_unique_index_rejects_duplicates() {
    let db = database().await;
    let repo = SurrealUserRepository::new(db.db.clone());

    let user = repo.create("john_doe", "hash-a").await.unwrap();
    assert!(user.id.is_some());
    assert_eq!(user.login, "john_doe");

    let err = repo.create("john_doe", "hash-b").await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_find_by_login() {
    let db = database().await;
    let repo = SurrealUserRepository::new(db.db.clone());

    assert!(repo.find_by_login("john_doe").await.unwrap().is_none());

    repo.create("john_doe", "hash-a").await.unwrap();
    let found = repo.find_by_login("john_doe").await.unwrap().unwrap();
    assert_eq!(found.password_hash, "hash-a");
}

#[tokio::test]
async fn test_order_number_unique_across_owners() {
    let db = database().await;
    let repo = SurrealOrderRepository::new(db.db.clone());
    let owner_a = RecordId::from_table_key("user", "a");
    let owner_b = RecordId::from_table_key("user", "b");

    let order = repo
        .create(OrderCreate {
            numeral_id: "12345678903".to_string(),
            user: owner_a.clone(),
        })
        .await
        .unwrap();
    assert_eq!(order.accrual, 0);

    // The same number is rejected no matter who submits it.
    for owner in [&owner_a, &owner_b] {
        let err = repo
            .create(OrderCreate {
                numeral_id: "12345678903".to_string(),
                user: owner.clone(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)), "got {:?}", err);
    }

    let winner = repo
        .find_by_numeral_id("12345678903")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(winner.user, owner_a);
}

#[tokio::test]
async fn test_find_by_owner_is_newest_first() {
    let db = database().await;
    let repo = SurrealOrderRepository::new(db.db.clone());
    let owner = RecordId::from_table_key("user", "a");
    let other = RecordId::from_table_key("user", "b");

    for number in ["12345678903", "79927398713"] {
        repo.create(OrderCreate {
            numeral_id: number.to_string(),
            user: owner.clone(),
        })
        .await
        .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    repo.create(OrderCreate {
        numeral_id: "4532015112830366".to_string(),
        user: other.clone(),
    })
    .await
    .unwrap();

    let orders = repo.find_by_owner(&owner).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].numeral_id, "79927398713");
    assert_eq!(orders[1].numeral_id, "12345678903");
    assert!(orders[0].created_at >= orders[1].created_at);
}
