//! Route guard for protected content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `RequireAuth`, so the whole app
//! applies one decision table for the content / placeholder / redirect
//! choice. Token presence is consulted independently of the in-memory user:
//! a reload with a stored credential must show the loading placeholder, not
//! flicker to the login page, while resolution is in flight.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session;

/// Outcome of a gate evaluation for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the protected children.
    Content,
    /// Render the loading placeholder.
    Loading,
    /// Send the visitor to the login page.
    RedirectLogin,
}

/// Pure decision function over `(token present, auth state)`.
pub fn gate_decision(token_present: bool, state: &AuthState) -> GateDecision {
    match (token_present, state.loading, state.user.is_some()) {
        // Credential saved, resolution still pending.
        (true, true, _) => GateDecision::Loading,
        // No credential, or a credential that resolved to nobody.
        (false, _, false) | (true, false, false) => GateDecision::RedirectLogin,
        (true, false, true) => GateDecision::Content,
        // User in memory but no token: transient, keep the placeholder.
        (false, _, true) => GateDecision::Loading,
    }
}

/// Route guard — renders children only for an authenticated session.
///
/// A `RedirectLogin` decision shows the placeholder for the current frame
/// and navigates to `/login` (replacing the history entry) from an effect.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if gate_decision(session::token_present(), &state) == GateDecision::RedirectLogin {
            navigate(
                "/login",
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
        }
    });

    view! {
        {move || match gate_decision(session::token_present(), &auth.get()) {
            GateDecision::Content => children().into_any(),
            GateDecision::Loading | GateDecision::RedirectLogin => view! {
                <div class="auth-gate__loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
        }}
    }
}
