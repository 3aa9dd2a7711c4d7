//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process stores used when no hosted backend is configured.
//!
//! Adapters are thin translators between domain types and the store. They
//! contain no request validation and never build HTTP responses.

pub mod memory;
