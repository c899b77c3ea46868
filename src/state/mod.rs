//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the persisted credential; `auth` owns the in-memory
//! authentication record and its transitions. Components consume both via
//! the `RwSignal<AuthState>` context provided by the app root.

pub mod auth;
pub mod session;
