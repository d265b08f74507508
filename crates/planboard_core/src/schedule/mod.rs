//! Week and cell resolution for the staffing grid.
//!
//! # Responsibility
//! - Compute the visible business week from an injected "today".
//! - Resolve which assignments are active in an employee/day cell.
//! - Derive continuity hints for multi-day spans.
//!
//! # Invariants
//! - No wall-clock reads except `week::today_utc`, which only outer layers call.
//! - Weekday numbering is `num_days_from_monday` (Mon=0..Sun=6) everywhere.
//! - Dangling references degrade to fallbacks; nothing here returns errors.

pub mod board;
pub mod continuity;
pub mod palette;
pub mod week;
