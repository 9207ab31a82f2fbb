//! Database Models
//!
//! Row types (sqlx `FromRow`) and create/update payloads per entity.
//! Wire serialization is camelCase; `deleted_at` and credential fields
//! never leave the server.

// Serde helpers
pub mod serde_helpers;

// Accounts
pub mod address;
pub mod user;

// Catalog
pub mod author;
pub mod book;
pub mod category;
pub mod publisher;
pub mod series;

// Commerce
pub mod cart;

// Media
pub mod media;

// Re-exports
pub use address::{Address, AddressCreate, AddressUpdate};
pub use author::{Author, AuthorCreate, AuthorUpdate};
pub use book::{Book, BookCreate, BookPublic, BookUpdate};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use cart::{Cart, CartItem, CartItemCreate, CartItemUpdate, CartItemWithBook};
pub use media::Media;
pub use publisher::{Publisher, PublisherCreate, PublisherUpdate};
pub use series::{BookSeries, SeriesCreate, SeriesUpdate};
pub use user::{User, UserCreate};
