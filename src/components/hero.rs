//! Hero Component
//!
//! Signed-out landing section: welcome copy, call-to-action buttons, and
//! the feature grid.

use leptos::*;
use leptos_router::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "AI Content Protection",
        "Our advanced AI analyzes images and text to filter out cyberbullying content before it reaches you.",
    ),
    (
        "Security Assistant",
        "Get personalized cybersecurity advice from our AI chatbot to protect your digital presence.",
    ),
    (
        "Safe Community",
        "Join a community where everyone's content is protected from harmful behavior and cyberbullying.",
    ),
];

/// Landing hero shown to signed-out visitors
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <main class="flex-grow pt-24 max-w-4xl mx-auto px-4 pb-12 text-center">
            <div class="mb-6 text-6xl">"🛡️"</div>

            <h1 class="text-4xl font-bold mb-4 text-[#0f172a]">
                "Welcome to CyberShield"
            </h1>

            <p class="text-gray-600 text-lg mb-8">
                "Your personal protection against cyberbullying and online harassment. "
                "Post content with confidence knowing our AI helps keep you safe."
            </p>

            // Action buttons
            <div class="flex flex-col sm:flex-row justify-center gap-4 mb-12">
                <A
                    href="/login"
                    class="btn-grad px-6 py-3 text-center text-lg w-full sm:w-auto"
                >
                    "Login"
                </A>
                <A
                    href="/signup"
                    class="btn-grad px-6 py-3 text-center text-lg w-full sm:w-auto"
                >
                    "Create Account"
                </A>
            </div>

            // Features
            <h2 class="text-2xl font-semibold mb-6 text-[#0f172a]">"Features"</h2>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {FEATURES.into_iter().map(|(title, text)| view! {
                    <div class="bg-gray-100 p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow">
                        <h3 class="text-xl font-semibold mb-2 text-[#0f172a]">{title}</h3>
                        <p class="text-gray-700 text-sm">{text}</p>
                    </div>
                }).collect_view()}
            </div>
        </main>
    }
}
