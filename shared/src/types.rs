//! Common domain types shared between server and clients

use serde::{Deserialize, Serialize};

/// User role
///
/// Stored as TEXT in the database, serialized in uppercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[cfg_attr(feature = "db", sqlx(rename = "ADMIN"))]
    Admin,
    #[cfg_attr(feature = "db", sqlx(rename = "MANAGER"))]
    Manager,
    #[cfg_attr(feature = "db", sqlx(rename = "STAFF"))]
    Staff,
    #[cfg_attr(feature = "db", sqlx(rename = "CUSTOMER"))]
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Staff => "STAFF",
            Role::Customer => "CUSTOMER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "STAFF" => Ok(Role::Staff),
            "CUSTOMER" => Ok(Role::Customer),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Book publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    #[cfg_attr(feature = "db", sqlx(rename = "ACTIVE"))]
    Active,
    #[cfg_attr(feature = "db", sqlx(rename = "INACTIVE"))]
    Inactive,
    #[cfg_attr(feature = "db", sqlx(rename = "OUT_OF_STOCK"))]
    OutOfStock,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Active => "ACTIVE",
            BookStatus::Inactive => "INACTIVE",
            BookStatus::OutOfStock => "OUT_OF_STOCK",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived bundle pricing for a book series
///
/// Recomputed on every read from the series' non-deleted ACTIVE member
/// books; never persisted. Prices are integer VND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPricing {
    /// Sum of member book prices
    pub total_price: i64,
    /// Total minus the fixed 10% bundle discount
    pub discounted_price: i64,
    /// Absolute discount amount
    pub discount: i64,
}

impl SeriesPricing {
    pub fn zero() -> Self {
        Self {
            total_price: 0,
            discounted_price: 0,
            discount: 0,
        }
    }
}

/// Derived stock availability for a series, shown on list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesAvailability {
    /// True iff every member book has stock > 0
    pub all_in_stock: bool,
    /// Minimum member book stock (0 when the series has no members)
    pub min_stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::Admin, Role::Manager, Role::Staff, Role::Customer] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&BookStatus::OutOfStock).unwrap(),
            "\"OUT_OF_STOCK\""
        );
        assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"CUSTOMER\"");
    }
}
