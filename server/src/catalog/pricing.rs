//! Bundle pricing calculator
//!
//! Derives a series' aggregate list price and the fixed 10% bundle discount
//! from its non-deleted, ACTIVE-status member books. All values are
//! recomputed on every read and never persisted, so they always reflect
//! current book prices and stock with no invalidation logic.

use shared::{BookStatus, SeriesAvailability, SeriesPricing};

use crate::db::models::Book;

/// Fixed bundle discount: 10% of the aggregate price
const BUNDLE_DISCOUNT_PERCENT: i64 = 10;

fn active_books(books: &[Book]) -> impl Iterator<Item = &Book> {
    books.iter().filter(|b| b.status == BookStatus::Active)
}

/// Compute the derived bundle pricing for a series' member books.
///
/// `total_price` sums ACTIVE member prices (empty set yields 0);
/// `discount` is 10% of the total (integer VND, floored);
/// `discounted_price = total_price - discount`.
pub fn price_series(books: &[Book]) -> SeriesPricing {
    let total_price: i64 = active_books(books).map(|b| b.price).sum();
    let discount = total_price * BUNDLE_DISCOUNT_PERCENT / 100;
    SeriesPricing {
        total_price,
        discounted_price: total_price - discount,
        discount,
    }
}

/// Derive stock availability for a series' member books (list views).
///
/// Unlike pricing, availability covers every non-deleted member
/// regardless of status: `all_in_stock` is true iff every member has
/// stock > 0, `min_stock` is the minimum member stock (0 for an empty
/// set).
pub fn series_availability(books: &[Book]) -> SeriesAvailability {
    let min_stock = books.iter().map(|b| b.stock).min().unwrap_or(0);
    let all_in_stock = books.iter().all(|b| b.stock > 0);
    SeriesAvailability {
        all_in_stock,
        min_stock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(price: i64, stock: i64, status: BookStatus) -> Book {
        let now = Utc::now();
        Book {
            id: 0,
            title: "test".to_string(),
            description: None,
            price,
            stock,
            status,
            author_id: None,
            publisher_id: None,
            category_id: None,
            series_id: Some(1),
            thumbnail_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_two_book_series() {
        let books = vec![
            book(100_000, 3, BookStatus::Active),
            book(150_000, 7, BookStatus::Active),
        ];
        let pricing = price_series(&books);
        assert_eq!(pricing.total_price, 250_000);
        assert_eq!(pricing.discounted_price, 225_000);
        assert_eq!(pricing.discount, 25_000);
    }

    #[test]
    fn test_empty_series() {
        let pricing = price_series(&[]);
        assert_eq!(pricing, SeriesPricing::zero());
    }

    #[test]
    fn test_inactive_books_excluded() {
        let books = vec![
            book(100_000, 3, BookStatus::Active),
            book(999_000, 1, BookStatus::Inactive),
            book(50_000, 2, BookStatus::OutOfStock),
        ];
        let pricing = price_series(&books);
        assert_eq!(pricing.total_price, 100_000);
        assert_eq!(pricing.discounted_price, 90_000);
        assert_eq!(pricing.discount, 10_000);
    }

    #[test]
    fn test_availability_with_out_of_stock_member() {
        let books = vec![
            book(1000, 3, BookStatus::Active),
            book(1000, 0, BookStatus::Active),
            book(1000, 7, BookStatus::Active),
        ];
        let availability = series_availability(&books);
        assert!(!availability.all_in_stock);
        assert_eq!(availability.min_stock, 0);
    }

    #[test]
    fn test_availability_all_in_stock() {
        let books = vec![
            book(1000, 3, BookStatus::Active),
            book(1000, 7, BookStatus::Active),
        ];
        let availability = series_availability(&books);
        assert!(availability.all_in_stock);
        assert_eq!(availability.min_stock, 3);
    }

    #[test]
    fn test_availability_empty_series() {
        let availability = series_availability(&[]);
        assert!(availability.all_in_stock); // vacuously true
        assert_eq!(availability.min_stock, 0);
    }
}
