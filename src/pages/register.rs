//! Registration page with the account-creation form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::util::validate::validate_register_input;

#[cfg(feature = "hydrate")]
const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to the login page...";

/// How long the success message stays visible before leaving for `/login`.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

/// Registration page — creates an account without signing in. On success a
/// confirmation message is shown briefly, then the visitor is sent to the
/// login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        let request = match validate_register_input(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &password.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(()) => {
                        success.set(SUCCESS_MESSAGE.to_owned());
                        // Display pause only; the account already exists.
                        gloo_timers::future::sleep(REDIRECT_DELAY).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.message);
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create Account"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-message form-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="form-message form-message--success">{move || success.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="First name"
                        input_type="text"
                        placeholder="Enter your first name"
                        value=first_name
                        busy=busy
                    />
                    <TextField
                        label="Last name"
                        input_type="text"
                        placeholder="Enter your last name"
                        value=last_name
                        busy=busy
                    />
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
                        placeholder="At least 6 characters"
                        value=password
                        busy=busy
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__link">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
