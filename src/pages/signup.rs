//! Signup Page
//!
//! Registration form. All validation failures the client can catch are
//! caught before any request goes out.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Banner;

/// Client-side check run before any request is issued
fn validate(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Option<&'static str> {
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
    {
        return Some("All fields are required.");
    }
    if password != confirm_password {
        return Some("Passwords do not match.");
    }
    None
}

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let e = email.get();
        let p = password.get();
        let c = confirm_password.get();

        if let Some(msg) = validate(&u, &e, &p, &c) {
            set_error_message.set(msg.to_string());
            return;
        }

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::signup(&u, &e, &p, &c).await {
                Ok(_message) => {
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Signup error: {}", e).into());
                    set_error_message
                        .set("An error occurred during signup. Please try again.".to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex-grow flex items-center justify-center px-4 py-12">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-md">
                <h2 class="text-2xl font-semibold mb-6 text-center text-[#0f172a]">
                    "Sign Up"
                </h2>

                <Banner message=Signal::derive(move || error_message.get()) />

                <form on:submit=on_submit class="space-y-4">
                    <SignupField
                        label="Username"
                        input_type="text"
                        value=username
                        on_input=set_username
                    />
                    <SignupField
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=set_email
                    />
                    <SignupField
                        label="Password"
                        input_type="password"
                        value=password
                        on_input=set_password
                    />
                    <SignupField
                        label="Confirm Password"
                        input_type="password"
                        value=confirm_password
                        on_input=set_confirm_password
                    />

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="btn-grad w-full text-center py-3"
                    >
                        {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Single labeled input in the signup form
#[component]
fn SignupField(
    label: &'static str,
    input_type: &'static str,
    value: ReadSignal<String>,
    on_input: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.set(event_target_value(&ev))
                class="mt-1 block w-full border border-gray-300 rounded-md p-2
                       focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_missing_field_is_rejected() {
        assert_eq!(
            validate("", "a@b.c", "pw", "pw"),
            Some("All fields are required.")
        );
        assert_eq!(
            validate("maya", "", "pw", "pw"),
            Some("All fields are required.")
        );
        assert_eq!(
            validate("maya", "a@b.c", "", "pw"),
            Some("All fields are required.")
        );
        assert_eq!(
            validate("maya", "a@b.c", "pw", ""),
            Some("All fields are required.")
        );
    }

    #[test]
    fn test_password_mismatch_is_rejected() {
        assert_eq!(
            validate("maya", "a@b.c", "pw1", "pw2"),
            Some("Passwords do not match.")
        );
    }

    #[test]
    fn test_complete_matching_fields_pass() {
        assert_eq!(validate("maya", "a@b.c", "pw", "pw"), None);
    }
}
