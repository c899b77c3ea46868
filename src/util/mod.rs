//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure modules with no browser dependencies, so form rules and display
//! formatting stay unit-testable outside WASM.

pub mod format;
pub mod validate;
