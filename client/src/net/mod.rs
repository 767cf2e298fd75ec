//! Networking modules for the remote education backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` defines the failure kinds views
//! render, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
