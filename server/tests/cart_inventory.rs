//! Stock-bounded cart quantities, composed the way the cart handlers
//! compose repository and inventory guard.

mod common;

use bookstore_server::catalog::inventory;
use bookstore_server::db::repository::CartRepository;
use common::SeedBook;

#[tokio::test]
async fn test_add_up_to_stock_boundary() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "c@example.com").await;
    let book_id = common::seed_book(
        &pool,
        SeedBook {
            stock: 3,
            ..SeedBook::default()
        },
    )
    .await;

    let repo = CartRepository::new(pool.clone());
    let cart = repo.get_or_create(user_id).await.unwrap();

    // Requesting exactly the stock is allowed
    inventory::check_quantity(3, 3).unwrap();
    let item = repo.insert_item(cart.id, book_id, 3).await.unwrap();
    assert_eq!(item.quantity, 3);
}

#[tokio::test]
async fn test_exceeding_stock_is_rejected_with_available() {
    let err = inventory::check_quantity(2, 3).unwrap_err();
    assert_eq!(err.available, 2);
    assert_eq!(
        err.to_string(),
        "Số lượng yêu cầu vượt quá tồn kho (còn 2)"
    );
}

#[tokio::test]
async fn test_accumulating_add_is_bounded_by_combined_quantity() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "c@example.com").await;
    let book_id = common::seed_book(
        &pool,
        SeedBook {
            stock: 3,
            ..SeedBook::default()
        },
    )
    .await;

    let repo = CartRepository::new(pool.clone());
    let cart = repo.get_or_create(user_id).await.unwrap();
    let item = repo.insert_item(cart.id, book_id, 2).await.unwrap();

    // Second add of the same book accumulates: 2 + 1 = 3 fits
    let existing = repo
        .find_item_by_book(cart.id, book_id)
        .await
        .unwrap()
        .unwrap();
    let combined = existing.quantity + 1;
    inventory::check_quantity(3, combined).unwrap();
    let item = repo.set_quantity(item.id, combined).await.unwrap();
    assert_eq!(item.quantity, 3);

    // A third unit would exceed stock
    assert!(inventory::check_quantity(3, item.quantity + 1).is_err());
}

#[tokio::test]
async fn test_update_quantity_checks_new_value_not_delta() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "c@example.com").await;
    let book_id = common::seed_book(
        &pool,
        SeedBook {
            stock: 5,
            ..SeedBook::default()
        },
    )
    .await;

    let repo = CartRepository::new(pool.clone());
    let cart = repo.get_or_create(user_id).await.unwrap();
    let item = repo.insert_item(cart.id, book_id, 5).await.unwrap();

    // Lowering is always within bounds
    inventory::check_quantity(5, 1).unwrap();
    let item = repo.set_quantity(item.id, 1).await.unwrap();
    assert_eq!(item.quantity, 1);
}

#[tokio::test]
async fn test_removal_is_never_guarded() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "c@example.com").await;
    let book_id = common::seed_book(
        &pool,
        SeedBook {
            stock: 1,
            ..SeedBook::default()
        },
    )
    .await;

    let repo = CartRepository::new(pool.clone());
    let cart = repo.get_or_create(user_id).await.unwrap();
    let item = repo.insert_item(cart.id, book_id, 1).await.unwrap();

    repo.remove_item(cart.id, item.id).await.unwrap();
    assert!(repo.find_item(cart.id, item.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_cart_is_created_lazily_once() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "c@example.com").await;

    let repo = CartRepository::new(pool.clone());
    let first = repo.get_or_create(user_id).await.unwrap();
    let second = repo.get_or_create(user_id).await.unwrap();
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn test_soft_deleted_book_drops_out_of_cart_view() {
    let pool = common::test_pool().await;
    let user_id = common::seed_user(&pool, "c@example.com").await;
    let book_id = common::seed_book(&pool, SeedBook::default()).await;

    let repo = CartRepository::new(pool.clone());
    let cart = repo.get_or_create(user_id).await.unwrap();
    repo.insert_item(cart.id, book_id, 1).await.unwrap();
    assert_eq!(repo.list_items(cart.id).await.unwrap().len(), 1);

    bookstore_server::db::repository::BookRepository::new(pool.clone())
        .delete(book_id)
        .await
        .unwrap();

    assert!(repo.list_items(cart.id).await.unwrap().is_empty());
}
