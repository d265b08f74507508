//! Canonical planning entities.
//!
//! # Responsibility
//! - Define the domain shapes produced by the record mapper.
//! - Keep wire enums (`source`, `syncStatus`, project status) in one place.
//!
//! # Invariants
//! - Entities are rebuilt from external input on every load; nothing here
//!   exposes in-place mutation helpers.
//! - `Employee::id` and `Project::id` are derived from the external reference.

pub mod assignment;
pub mod employee;
pub mod project;
pub mod sync_issue;
pub mod work_item;
