//! Inline Banner Component
//!
//! Errors and confirmations are reported inline, local to the page that
//! owns the message. An empty message renders nothing.

use leptos::*;

#[component]
pub fn Banner(
    #[prop(into)]
    message: Signal<String>,
    #[prop(default = "error")]
    variant: &'static str,
) -> impl IntoView {
    let bg_class = match variant {
        "error" => "bg-red-500 text-white",
        "warning" => "bg-yellow-500 text-black",
        "success" => "bg-green-600 text-white",
        _ => "bg-gray-600 text-white",
    };

    view! {
        {move || {
            let msg = message.get();
            if msg.is_empty() {
                view! {}.into_view()
            } else {
                view! {
                    <div class=format!(
                        "{} px-4 py-3 rounded-lg mb-4 whitespace-pre-wrap",
                        bg_class
                    )>
                        {msg}
                    </div>
                }.into_view()
            }
        }}
    }
}
