//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Response structs serialized with the camelCase wire names the public
//!   API is committed to
//! - Create/update DTOs used by the repositories (update DTOs have all
//!   `Option` fields)

pub mod category;
pub mod stats;
pub mod task;
pub mod user;
