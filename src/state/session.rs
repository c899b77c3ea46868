//! Persisted session-token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is there a saved credential". One
//! localStorage key holds the bearer token; absence means anonymous.
//! On the server (and in native tests) a thread-local slot backs the same
//! API so gating logic behaves identically everywhere.
//!
//! Writes are best-effort: a rejected write (e.g. quota) is logged and the
//! session simply does not survive a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

const TOKEN_KEY: &str = "token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK_TOKEN: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Persist the bearer token.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("session: localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            log::warn!("session: failed to persist token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    FALLBACK_TOKEN.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
}

/// Last saved token, or `None` on absence or any read inconsistency.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    FALLBACK_TOKEN.with(|slot| slot.borrow().clone())
}

/// Remove the stored token. Idempotent and best-effort.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.remove_item(TOKEN_KEY).is_err() {
            log::warn!("session: failed to clear token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    FALLBACK_TOKEN.with(|slot| *slot.borrow_mut() = None);
}

/// Whether a credential is currently persisted.
pub fn token_present() -> bool {
    read().is_some()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
