//! Login Page
//!
//! Email/password form plus the Google identity-provider path. Both roads
//! end at the same backend login endpoint and store the returned token on
//! the session.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::api;
use crate::components::Banner;
use crate::state::session::use_session;

const GOOGLE_CLIENT_ID: &str =
    "34128153484-2lfk3rb9pn431vscnsmb252t0n4oibqh.apps.googleusercontent.com";

/// Client-side check run before any request is issued
fn validate(username: &str, password: &str) -> Option<&'static str> {
    if username.is_empty() || password.is_empty() {
        Some("Both username and password are required.")
    } else {
        None
    }
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let navigate_for_submit = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let p = password.get();

        if let Some(msg) = validate(&u, &p) {
            set_error_message.set(msg.to_string());
            return;
        }

        set_submitting.set(true);

        let navigate = navigate_for_submit.clone();
        spawn_local(async move {
            match api::login(&u, &p).await {
                Ok(token) => {
                    session.set_token(&token);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    set_error_message.set(e);
                }
            }
            set_submitting.set(false);
        });
    };

    // The GIS script calls the window-level callback named in the
    // g_id_onload element with a credential response object.
    let navigate_for_google = use_navigate();
    create_effect(move |_| {
        let navigate_outer = navigate_for_google.clone();
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
                .ok()
                .and_then(|v| v.as_string());

            let Some(credential) = credential else {
                set_error_message.set("Google login failed. Please try again.".to_string());
                return;
            };

            let navigate = navigate_outer.clone();
            spawn_local(async move {
                match api::login_with_credential(&credential).await {
                    Ok(token) => {
                        session.set_token(&token);
                        navigate("/", Default::default());
                    }
                    Err(e) => {
                        set_error_message.set(e);
                    }
                }
            });
        });

        if let Some(window) = web_sys::window() {
            let target: JsValue = window.into();
            let _ = js_sys::Reflect::set(
                &target,
                &JsValue::from_str("onGoogleCredential"),
                callback.as_ref(),
            );
        }
        callback.forget();
    });

    view! {
        <div class="flex-grow flex justify-center items-center px-4 py-12">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-md">
                <h2 class="text-2xl font-semibold text-center mb-6 text-[#0f172a]">
                    "Login"
                </h2>

                <Banner message=Signal::derive(move || error_message.get()) />

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label for="username" class="block text-sm font-medium text-gray-700">
                            "Email"
                        </label>
                        <input
                            id="username"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border rounded-lg bg-gray-100
                                   focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full px-4 py-2 border rounded-lg bg-gray-100
                                   focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="btn-grad w-full py-2"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                // Google sign-in button rendered by the GIS script
                <div class="text-center mt-6">
                    <p class="text-gray-500 mb-2">"Or"</p>
                    <div
                        id="g_id_onload"
                        data-client_id=GOOGLE_CLIENT_ID
                        data-callback="onGoogleCredential"
                    ></div>
                    <div class="g_id_signin flex justify-center" data-type="standard"></div>
                </div>

                <div class="text-center mt-6">
                    <A href="/signup" class="text-[#00f7ff] hover:underline">
                        "Don't have an account? Sign Up"
                    </A>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_never_pass_validation() {
        assert_eq!(
            validate("", "secret"),
            Some("Both username and password are required.")
        );
        assert_eq!(
            validate("maya@example.com", ""),
            Some("Both username and password are required.")
        );
        assert_eq!(
            validate("", ""),
            Some("Both username and password are required.")
        );
    }

    #[test]
    fn test_complete_fields_pass_validation() {
        assert_eq!(validate("maya@example.com", "secret"), None);
    }
}
