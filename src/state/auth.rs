//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The state machine is
//! Unresolved -> Resolving -> { Authenticated, Anonymous }; from either
//! settled state `apply_login` re-authenticates and `apply_logout` returns
//! to Anonymous. All transitions run on the single UI thread, so they apply
//! atomically from the perspective of every consumer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the startup session resolution (or an
/// in-flight transition) is pending; once settled it stays false until a
/// new resolution begins.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// The app starts unresolved: no user yet, resolution pending.
    fn default() -> Self {
        Self::resolving()
    }
}

impl AuthState {
    /// Initial state while a persisted credential may still resolve.
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// Settled state with a live user.
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// Settled state with no user.
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }
}

/// Map a session-resolution outcome onto the settled state it produces.
pub fn resolved_state(user: Option<User>) -> AuthState {
    user.map_or_else(AuthState::anonymous, AuthState::authenticated)
}

/// Persist the token and transition to `Authenticated`.
///
/// Does not navigate; callers react to the state change (the gate
/// re-evaluates as soon as the signal updates).
pub fn apply_login(state: &mut AuthState, token: &str, user: User) {
    session::save(token);
    *state = AuthState::authenticated(user);
}

/// Clear the persisted token (best-effort) and transition to `Anonymous`.
/// Idempotent.
pub fn apply_logout(state: &mut AuthState) {
    session::clear();
    *state = AuthState::anonymous();
}

/// Resolve any persisted credential into a live user. Runs once at startup.
///
/// No token settles to `Anonymous` immediately, without a network call.
/// With a token, `/api/user` decides: success authenticates, failure clears
/// the stale token and settles to `Anonymous`. Either way `loading`
/// terminates.
pub fn resolve_session(auth: RwSignal<AuthState>) {
    let Some(token) = session::read() else {
        auth.set(AuthState::anonymous());
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_current_user(&token).await;
        if outcome.is_none() {
            session::clear();
        }
        auth.set(resolved_state(outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        // No session resolution on the server; render as anonymous and let
        // the client resolve after hydration.
        let _ = token;
        auth.set(AuthState::anonymous());
    }
}
