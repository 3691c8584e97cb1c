//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260712000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

/// Returns `true` if `role` is one of the two accepted role names.
///
/// Comparison is case-sensitive: `"admin"` is not a valid role.
pub fn is_valid_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_USER
}
