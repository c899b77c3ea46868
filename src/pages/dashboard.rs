//! Dashboard page showing the authenticated user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route; the app wraps it in `RequireAuth`,
//! so by the time the profile renders a user is present in the auth state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::format::format_registration_date;

/// Dashboard page — profile fields, welcome line, and the logout action.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.update(crate::state::auth::apply_logout);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <div class="profile-card">
                <header class="profile-card__header">
                    <h1>"User Profile"</h1>
                    <button class="btn btn--logout" on:click=on_logout>
                        "Log Out"
                    </button>
                </header>
                {move || {
                    auth.get().user.map(|user| {
                        let welcome = welcome_line(&user.first_name, &user.last_name);
                        view! {
                            <div class="profile-card__info">
                                <ProfileRow label="First name" value=user.first_name.clone()/>
                                <ProfileRow label="Last name" value=user.last_name.clone()/>
                                <ProfileRow label="Email" value=user.email.clone()/>
                                <ProfileRow label="Role" value=display_role(&user.role).to_owned()/>
                                <ProfileRow
                                    label="Member since"
                                    value=format_registration_date(user.created_at.as_deref())
                                />
                            </div>
                            <div class="profile-card__welcome">
                                <p>{welcome}</p>
                                <p>"You have signed in successfully."</p>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}

/// Single label/value line in the profile card.
#[component]
fn ProfileRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="profile-card__row">
            <span class="profile-card__label">{label}</span>
            <span class="profile-card__value">{value}</span>
        </div>
    }
}

/// Role shown on the profile; blank server values fall back to `user`.
fn display_role(role: &str) -> &str {
    let role = role.trim();
    if role.is_empty() { "user" } else { role }
}

fn welcome_line(first_name: &str, last_name: &str) -> String {
    format!("Welcome, {first_name} {last_name}!")
}
