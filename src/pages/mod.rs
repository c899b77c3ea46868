//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, submission, busy
//! state) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod register;
