//! Extraction service boundary: wire types, normalization, HTTP client.
//!
//! The actual event extraction (NLP, date resolution) happens in a remote
//! service. This crate owns the conversation with it: the request/response
//! wire types, the client that performs the POST, and the normalizer that
//! turns a raw response into [`calendarize_core::CalendarEvent`] records.

pub mod client;
pub mod error;
pub mod normalize;
pub mod raw_event;

pub use client::GenerateClient;
pub use error::{ServiceError, ServiceResult};
pub use normalize::{normalize_record, normalize_records};
pub use raw_event::{GenerateRequest, RawEventRecord};
