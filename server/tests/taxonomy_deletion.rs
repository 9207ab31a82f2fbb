//! Usage-guarded deletion for categories/authors/publishers and cascading
//! deletion for book series.

mod common;

use bookstore_server::catalog::deletion;
use bookstore_server::db::models::{AuthorCreate, BookUpdate, CategoryCreate, SeriesCreate};
use bookstore_server::db::repository::{
    AuthorRepository, BookRepository, CategoryRepository, SeriesRepository,
};
use common::SeedBook;
use shared::ErrorCode;

#[tokio::test]
async fn test_category_in_use_blocks_with_count() {
    let pool = common::test_pool().await;
    let categories = CategoryRepository::new(pool.clone());
    let category = categories
        .create(CategoryCreate {
            name: "Văn học".to_string(),
            description: None,
            image_id: None,
        })
        .await
        .unwrap();

    for _ in 0..2 {
        common::seed_book(
            &pool,
            SeedBook {
                category_id: Some(category.id),
                ..SeedBook::default()
            },
        )
        .await;
    }

    let err = deletion::delete_guarded(&pool, deletion::CATEGORY, category.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InUse);
    assert_eq!(
        err.message,
        "Không thể xóa danh mục vì có 2 cuốn sách đang sử dụng"
    );

    // Guard failure mutates nothing
    assert!(categories.find_by_id(category.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_category_deletable_after_books_detached() {
    let pool = common::test_pool().await;
    let categories = CategoryRepository::new(pool.clone());
    let books = BookRepository::new(pool.clone());

    let category = categories
        .create(CategoryCreate {
            name: "Văn học".to_string(),
            description: None,
            image_id: None,
        })
        .await
        .unwrap();
    let book_id = common::seed_book(
        &pool,
        SeedBook {
            category_id: Some(category.id),
            ..SeedBook::default()
        },
    )
    .await;

    // Explicit null clears the reference
    books
        .update(
            book_id,
            BookUpdate {
                title: None,
                description: None,
                price: None,
                stock: None,
                status: None,
                author_id: None,
                publisher_id: None,
                category_id: Some(None),
                series_id: None,
                thumbnail_id: None,
                gallery_ids: None,
            },
        )
        .await
        .unwrap();

    deletion::delete_guarded(&pool, deletion::CATEGORY, category.id)
        .await
        .unwrap();
    assert!(categories.find_by_id(category.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_soft_deleted_books_do_not_block() {
    let pool = common::test_pool().await;
    let authors = AuthorRepository::new(pool.clone());
    let books = BookRepository::new(pool.clone());

    let author = authors
        .create(AuthorCreate {
            name: "Nguyễn Nhật Ánh".to_string(),
            description: None,
            image_id: None,
        })
        .await
        .unwrap();
    let book_id = common::seed_book(
        &pool,
        SeedBook {
            author_id: Some(author.id),
            ..SeedBook::default()
        },
    )
    .await;

    books.delete(book_id).await.unwrap();

    deletion::delete_guarded(&pool, deletion::AUTHOR, author.id)
        .await
        .unwrap();
    assert!(authors.find_by_id(author.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_entity_is_not_found() {
    let pool = common::test_pool().await;

    let err = deletion::delete_guarded(&pool, deletion::PUBLISHER, 9999)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_delete_is_not_repeatable() {
    let pool = common::test_pool().await;
    let categories = CategoryRepository::new(pool.clone());
    let category = categories
        .create(CategoryCreate {
            name: "Kỹ năng".to_string(),
            description: None,
            image_id: None,
        })
        .await
        .unwrap();

    deletion::delete_guarded(&pool, deletion::CATEGORY, category.id)
        .await
        .unwrap();

    // Already soft-deleted: behaves like missing
    let err = deletion::delete_guarded(&pool, deletion::CATEGORY, category.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_series_delete_detaches_member_books() {
    let pool = common::test_pool().await;
    let series_repo = SeriesRepository::new(pool.clone());
    let books = BookRepository::new(pool.clone());

    let series = series_repo
        .create(SeriesCreate {
            name: "Harry Potter".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let b1 = common::seed_book(
        &pool,
        SeedBook {
            series_id: Some(series.id),
            ..SeedBook::default()
        },
    )
    .await;
    let b2 = common::seed_book(
        &pool,
        SeedBook {
            series_id: Some(series.id),
            ..SeedBook::default()
        },
    )
    .await;

    // Cascade always succeeds, even with members attached
    deletion::delete_series(&pool, series.id).await.unwrap();

    assert!(series_repo.find_by_id(series.id).await.unwrap().is_none());
    for id in [b1, b2] {
        let book = books.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(book.series_id, None);
    }
}

#[tokio::test]
async fn test_series_delete_missing_is_not_found() {
    let pool = common::test_pool().await;

    let err = deletion::delete_series(&pool, 4242).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}
