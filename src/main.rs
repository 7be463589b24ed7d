//! CyberShield
//!
//! Social platform frontend with AI cyberbullying protection, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Post feed with likes and comments
//! - Direct messaging with moderation warnings
//! - Image/text cleaning tools
//! - Session-scoped authentication
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic (moderation, user storage, auth) lives in
//! an external backend reached over HTTP; this crate is presentation,
//! routing, and thin fetch-based data binding.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
