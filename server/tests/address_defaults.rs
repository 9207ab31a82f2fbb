//! Single-default-address behavior across create, update, promote and
//! delete paths.

mod common;

use bookstore_server::db::models::{Address, AddressCreate, AddressUpdate};
use bookstore_server::db::repository::{AddressRepository, RepoError};

fn address_create(name: &str, is_default: bool) -> AddressCreate {
    AddressCreate {
        name: name.to_string(),
        phone: "0901234567".to_string(),
        address: "12 Nguyễn Huệ, Quận 1".to_string(),
        note: None,
        is_default,
    }
}

fn defaults(addresses: &[Address]) -> Vec<i64> {
    addresses
        .iter()
        .filter(|a| a.is_default)
        .map(|a| a.id)
        .collect()
}

#[tokio::test]
async fn test_create_with_default_demotes_existing() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "a@example.com").await;
    let repo = AddressRepository::new(pool.clone());

    let first = repo
        .create(user_id, address_create("Nhà riêng", true))
        .await
        .unwrap();
    assert!(first.is_default);

    let second = repo
        .create(user_id, address_create("Văn phòng", true))
        .await
        .unwrap();

    let all = repo.find_all_for_user(user_id).await.unwrap();
    assert_eq!(defaults(&all), vec![second.id]);
}

#[tokio::test]
async fn test_set_default_swaps_atomically() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "a@example.com").await;
    let repo = AddressRepository::new(pool.clone());

    let first = repo
        .create(user_id, address_create("Nhà riêng", true))
        .await
        .unwrap();
    let second = repo
        .create(user_id, address_create("Văn phòng", false))
        .await
        .unwrap();

    let promoted = repo.set_default(user_id, second.id).await.unwrap();
    assert!(promoted.is_default);

    let all = repo.find_all_for_user(user_id).await.unwrap();
    assert_eq!(defaults(&all), vec![second.id]);

    let first = repo.find_owned(user_id, first.id).await.unwrap().unwrap();
    assert!(!first.is_default);
}

#[tokio::test]
async fn test_set_default_is_idempotent() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "a@example.com").await;
    let repo = AddressRepository::new(pool.clone());

    let addr = repo
        .create(user_id, address_create("Nhà riêng", true))
        .await
        .unwrap();

    let again = repo.set_default(user_id, addr.id).await.unwrap();
    assert!(again.is_default);

    let all = repo.find_all_for_user(user_id).await.unwrap();
    assert_eq!(defaults(&all), vec![addr.id]);
}

#[tokio::test]
async fn test_update_with_default_true_demotes_others() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "a@example.com").await;
    let repo = AddressRepository::new(pool.clone());

    let first = repo
        .create(user_id, address_create("Nhà riêng", true))
        .await
        .unwrap();
    let second = repo
        .create(user_id, address_create("Văn phòng", false))
        .await
        .unwrap();

    repo.update(
        user_id,
        second.id,
        AddressUpdate {
            name: None,
            phone: None,
            address: None,
            note: None,
            is_default: Some(true),
        },
    )
    .await
    .unwrap();

    let all = repo.find_all_for_user(user_id).await.unwrap();
    assert_eq!(defaults(&all), vec![second.id]);

    let first = repo.find_owned(user_id, first.id).await.unwrap().unwrap();
    assert!(!first.is_default);
}

#[tokio::test]
async fn test_delete_default_leaves_no_default() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "a@example.com").await;
    let repo = AddressRepository::new(pool.clone());

    let first = repo
        .create(user_id, address_create("Nhà riêng", true))
        .await
        .unwrap();
    repo.create(user_id, address_create("Văn phòng", false))
        .await
        .unwrap();

    repo.delete(user_id, first.id).await.unwrap();

    // No auto-promotion: remaining addresses stay non-default
    let all = repo.find_all_for_user(user_id).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(defaults(&all).is_empty());
}

#[tokio::test]
async fn test_foreign_address_behaves_as_missing() {
    let pool = common::test_pool().await;
    let owner = common::seed_user(&pool, "owner@example.com").await;
    let other = common::seed_user(&pool, "other@example.com").await;
    let repo = AddressRepository::new(pool.clone());

    let addr = repo
        .create(owner, address_create("Nhà riêng", true))
        .await
        .unwrap();

    let err = repo.set_default(other, addr.id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let err = repo.delete(other, addr.id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    // Untouched from the owner's perspective
    let all = repo.find_all_for_user(owner).await.unwrap();
    assert_eq!(defaults(&all), vec![addr.id]);
}

#[tokio::test]
async fn test_defaults_are_per_user() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice@example.com").await;
    let bob = common::seed_user(&pool, "bob@example.com").await;
    let repo = AddressRepository::new(pool.clone());

    let a = repo
        .create(alice, address_create("Nhà Alice", true))
        .await
        .unwrap();
    let b = repo.create(bob, address_create("Nhà Bob", true)).await.unwrap();

    // Each user keeps their own default
    assert_eq!(
        defaults(&repo.find_all_for_user(alice).await.unwrap()),
        vec![a.id]
    );
    assert_eq!(
        defaults(&repo.find_all_for_user(bob).await.unwrap()),
        vec![b.id]
    );
}
