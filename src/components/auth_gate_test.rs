use super::*;
use crate::net::types::User;

fn with_user() -> Option<User> {
    Some(User {
        id: 1,
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        role: "user".to_owned(),
        created_at: None,
    })
}

fn state(loading: bool, user: Option<User>) -> AuthState {
    AuthState { user, loading }
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn token_while_loading_renders_placeholder() {
    assert_eq!(gate_decision(true, &state(true, None)), GateDecision::Loading);
    assert_eq!(gate_decision(true, &state(true, with_user())), GateDecision::Loading);
}

#[test]
fn missing_token_without_user_redirects() {
    assert_eq!(gate_decision(false, &state(false, None)), GateDecision::RedirectLogin);
    assert_eq!(gate_decision(false, &state(true, None)), GateDecision::RedirectLogin);
}

#[test]
fn token_resolved_without_user_redirects() {
    assert_eq!(gate_decision(true, &state(false, None)), GateDecision::RedirectLogin);
}

#[test]
fn token_resolved_with_user_renders_content() {
    assert_eq!(gate_decision(true, &state(false, with_user())), GateDecision::Content);
}

#[test]
fn missing_token_with_user_defaults_to_placeholder() {
    assert_eq!(gate_decision(false, &state(false, with_user())), GateDecision::Loading);
    assert_eq!(gate_decision(false, &state(true, with_user())), GateDecision::Loading);
}

// =============================================================
// Properties
// =============================================================

#[test]
fn identical_inputs_yield_identical_decisions() {
    for token in [false, true] {
        for loading in [false, true] {
            for user in [None, with_user()] {
                let first = gate_decision(token, &state(loading, user.clone()));
                let second = gate_decision(token, &state(loading, user));
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn fresh_start_without_token_redirects_immediately() {
    // No persisted credential: resolution settles to anonymous and any
    // protected navigation must bounce to login.
    assert_eq!(
        gate_decision(false, &AuthState::anonymous()),
        GateDecision::RedirectLogin
    );
}
