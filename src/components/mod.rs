//! Reusable view components.

pub mod auth_gate;
pub mod text_field;
