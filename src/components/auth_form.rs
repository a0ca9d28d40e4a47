//! Auth Form Component
//!
//! Email/password sign-in and sign-up. Success routes through the store's
//! session slot; the resolver effect in App takes it from there.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_apply_session, use_app_store};
use crate::supabase::auth;

#[component]
pub fn AuthForm() -> impl IntoView {
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (is_error, set_is_error) = signal(false);
    let (busy, set_busy) = signal(false);

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_message.set(String::new());
        set_is_error.set(false);
        let email = email.get();
        let password = password.get();

        set_busy.set(true);
        spawn_local(async move {
            match auth::sign_in(&email, &password).await {
                Ok(session) => {
                    auth::persist_session(&session);
                    store_apply_session(&store, Some(session));
                }
                Err(e) => {
                    set_is_error.set(true);
                    set_message.set(e);
                }
            }
            set_busy.set(false);
        });
    };

    let sign_up = move |_| {
        set_message.set(String::new());
        set_is_error.set(false);
        let email = email.get();
        let password = password.get();

        set_busy.set(true);
        spawn_local(async move {
            match auth::sign_up(&email, &password).await {
                Ok(()) => {
                    set_is_error.set(false);
                    set_message.set(
                        "Registration successful! Please check your email to confirm your account."
                            .to_string(),
                    );
                }
                Err(e) => {
                    set_is_error.set(true);
                    if e.contains("User already registered") {
                        set_message.set(
                            "A user with this email already exists. Please use the Sign In button."
                                .to_string(),
                        );
                    } else {
                        set_message.set(e);
                    }
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-panel">
                <h2 class="auth-title">"PAO KPI Tracker"</h2>
                <p class="auth-subtitle">"Sign in or create an account to continue"</p>
                <form class="auth-form" on:submit=sign_in>
                    <input
                        type="email"
                        placeholder="Email address"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <Show when=move || !message.get().is_empty()>
                        <div class=move || {
                            if is_error.get() { "auth-message error" } else { "auth-message success" }
                        }>
                            {move || message.get()}
                        </div>
                    </Show>

                    <div class="auth-buttons">
                        <button type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                        </button>
                        <button
                            type="button"
                            class="secondary"
                            disabled=move || busy.get()
                            on:click=sign_up
                        >
                            {move || if busy.get() { "..." } else { "Sign Up" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
