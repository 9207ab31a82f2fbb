//! Derived bundle pricing over real series membership, end to end through
//! the repository.

mod common;

use bookstore_server::catalog::pricing;
use bookstore_server::db::models::SeriesCreate;
use bookstore_server::db::repository::SeriesRepository;
use common::SeedBook;
use shared::BookStatus;

async fn seed_series(pool: &sqlx::SqlitePool, name: &str) -> i64 {
    SeriesRepository::new(pool.clone())
        .create(SeriesCreate {
            name: name.to_string(),
            description: None,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_pricing_reflects_current_members() {
    let pool = common::test_pool().await;
    let series_id = seed_series(&pool, "Dế Mèn").await;

    for price in [100_000, 150_000] {
        common::seed_book(
            &pool,
            SeedBook {
                price,
                series_id: Some(series_id),
                ..SeedBook::default()
            },
        )
        .await;
    }

    let repo = SeriesRepository::new(pool.clone());
    let books = repo.find_member_books(series_id).await.unwrap();
    let pricing = pricing::price_series(&books);

    assert_eq!(pricing.total_price, 250_000);
    assert_eq!(pricing.discount, 25_000);
    assert_eq!(pricing.discounted_price, 225_000);
}

#[tokio::test]
async fn test_inactive_members_are_priced_out() {
    let pool = common::test_pool().await;
    let series_id = seed_series(&pool, "Kính Vạn Hoa").await;

    common::seed_book(
        &pool,
        SeedBook {
            price: 80_000,
            series_id: Some(series_id),
            ..SeedBook::default()
        },
    )
    .await;
    common::seed_book(
        &pool,
        SeedBook {
            price: 999_000,
            status: BookStatus::Inactive,
            series_id: Some(series_id),
            ..SeedBook::default()
        },
    )
    .await;

    let repo = SeriesRepository::new(pool.clone());
    let books = repo.find_member_books(series_id).await.unwrap();
    let pricing = pricing::price_series(&books);

    assert_eq!(pricing.total_price, 80_000);
    assert_eq!(pricing.discounted_price, 72_000);
}

#[tokio::test]
async fn test_empty_series_prices_to_zero() {
    let pool = common::test_pool().await;
    let series_id = seed_series(&pool, "Bộ trống").await;

    let repo = SeriesRepository::new(pool.clone());
    let books = repo.find_member_books(series_id).await.unwrap();
    let pricing = pricing::price_series(&books);

    assert_eq!(pricing.total_price, 0);
    assert_eq!(pricing.discounted_price, 0);
    assert_eq!(pricing.discount, 0);
}

#[tokio::test]
async fn test_availability_tracks_member_stock() {
    let pool = common::test_pool().await;
    let series_id = seed_series(&pool, "Tủ sách").await;

    for stock in [3, 0, 7] {
        common::seed_book(
            &pool,
            SeedBook {
                stock,
                series_id: Some(series_id),
                ..SeedBook::default()
            },
        )
        .await;
    }

    let repo = SeriesRepository::new(pool.clone());
    let books = repo.find_member_books(series_id).await.unwrap();
    let availability = pricing::series_availability(&books);

    assert!(!availability.all_in_stock);
    assert_eq!(availability.min_stock, 0);
}
