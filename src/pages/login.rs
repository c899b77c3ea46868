//! Login page with the email + password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::state::auth::AuthState;
use crate::util::validate::validate_login_input;

/// Login page — validates locally, submits to `/api/login`, applies the
/// auth transition on success, and surfaces the server message on failure.
///
/// Navigation is not tied to the request: an effect watches the auth signal
/// and leaves for the dashboard once a user is present, so an already
/// signed-in visitor is bounced the same way as a fresh login.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());

        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    // The effect above navigates once the state lands.
                    auth.update(|s| {
                        crate::state::auth::apply_login(s, &resp.access_token, resp.user);
                    });
                }
                Err(e) => {
                    error.set(e.message);
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign In"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-message form-message--error">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        input_type="email"
                        placeholder="Enter your email"
                        value=email
                        busy=busy
                    />
                    <TextField
                        label="Password"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                        busy=busy
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__link">
                    "No account? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
