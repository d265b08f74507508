//! Record mapper: decoded CRM records -> canonical planning entities.
//!
//! # Responsibility
//! - Derive stable ids from CRM references.
//! - Normalize names, locations, calendar URLs and project status.
//!
//! # Invariants
//! - Mapping is total on decoded records: no panics, no errors.
//! - Missing data maps to documented fallbacks (`""`, `"Unbekannt"`,
//!   `unknown`), never to `Option::None` on the entity.

pub mod calendar_url;
pub mod contact;
pub mod project;
pub mod reference;

pub use calendar_url::{
    absence_calendar_url, find_calendar_url, parse_extra_fields, primary_calendar_url,
    CalendarKind, ExtraField, ExtraFields, ABSENCE_CALENDAR_TERMS, PRIMARY_CALENDAR_TERMS,
};
pub use contact::{
    contact_display_name, map_contact_to_employee, map_contact_to_employee_with,
    primary_address, MapperSettings,
};
pub use project::map_project_record_to_project;
pub use reference::extract_reference_id;
