//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the shared wire schema and
//! the displayable error carried back to the forms.

pub mod api;
pub mod types;
