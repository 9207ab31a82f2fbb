//! Permission Definitions
//!
//! Simplified RBAC: a single predicate over (role, action).
//!
//! ## Design
//! - Customer-facing operations (addresses, cart) require only an
//!   authenticated session; ownership is checked per record
//! - Admin console actions are gated by `has_permission`
//! - User management is ADMIN-only

use shared::Role;

/// Manage the catalog: books, authors, categories, publishers, series
pub const CATALOG_MANAGE: &str = "catalog:manage";
/// Upload and delete media files
pub const MEDIA_MANAGE: &str = "media:manage";
/// View the admin console resource lists
pub const CONSOLE_VIEW: &str = "console:view";
/// Manage user accounts
pub const USERS_MANAGE: &str = "users:manage";

/// All gated actions
pub const ALL_ACTIONS: &[&str] = &[CATALOG_MANAGE, MEDIA_MANAGE, CONSOLE_VIEW, USERS_MANAGE];

/// Check whether a role may perform an action
pub fn has_permission(role: Role, action: &str) -> bool {
    match role {
        Role::Admin => true,
        Role::Manager => action == CATALOG_MANAGE || action == MEDIA_MANAGE || action == CONSOLE_VIEW,
        Role::Staff => action == MEDIA_MANAGE || action == CONSOLE_VIEW,
        Role::Customer => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_all() {
        for action in ALL_ACTIONS {
            assert!(has_permission(Role::Admin, action));
        }
    }

    #[test]
    fn test_manager_matrix() {
        assert!(has_permission(Role::Manager, CATALOG_MANAGE));
        assert!(has_permission(Role::Manager, MEDIA_MANAGE));
        assert!(!has_permission(Role::Manager, USERS_MANAGE));
    }

    #[test]
    fn test_staff_matrix() {
        assert!(!has_permission(Role::Staff, CATALOG_MANAGE));
        assert!(has_permission(Role::Staff, MEDIA_MANAGE));
        assert!(has_permission(Role::Staff, CONSOLE_VIEW));
    }

    #[test]
    fn test_customer_has_none() {
        for action in ALL_ACTIONS {
            assert!(!has_permission(Role::Customer, action));
        }
    }
}
