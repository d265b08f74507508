//! Record guards for externally-sourced payloads.
//!
//! # Responsibility
//! - Decode untrusted JSON (`serde_json::Value`) into typed records.
//! - Expose boolean guards for callers that only need a yes/no gate.
//!
//! # Invariants
//! - Decoding is structural only: no I/O, no clock, no global state.
//! - Every rejection carries the record kind, field path and reason.
//! - Auxiliary collections (`keywords`, `urls`, `addresses`) never cause a
//!   rejection; malformed entries are skipped.

pub mod assignment;
pub mod contact;
mod decode;
pub mod project;

pub use assignment::{decode_assignment, decode_sync_issue, is_assignment, is_sync_issue};
pub use contact::{
    decode_contact_record, is_contact_record, ContactAddress, ContactRecord, ContactUrl,
    ExtraFieldsPayload,
};
pub use decode::{DecodeError, DecodeErrorKind, RecordKind};
pub use project::{decode_project_record, is_project_record, ProjectRecord};
