//! Use-case services over the planning core.
//!
//! # Responsibility
//! - Turn raw snapshots into a `PlanningBoard` plus sync issues.
//! - Assemble the full week grid render model for UI callers.
//!
//! # Invariants
//! - Services never fail on partial data; rejected input becomes a
//!   `SyncIssue`, dangling references become fallbacks.

pub mod grid_service;
pub mod import_service;
