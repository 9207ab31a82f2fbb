//! Catalog business rules
//!
//! The cross-entity invariants and derived values that sit above plain
//! CRUD. Each module is an independent rule evaluator composed by the
//! request handlers; none holds state of its own:
//!
//! - [`inventory`] — stock-bounded cart quantity checks
//! - [`deletion`] — usage-guarded and cascading soft deletion
//! - [`pricing`] — bundle pricing derived on read

pub mod deletion;
pub mod inventory;
pub mod pricing;

pub use deletion::{DependentRelation, delete_guarded, delete_series};
pub use inventory::{InsufficientStock, check_quantity};
pub use pricing::{price_series, series_availability};
