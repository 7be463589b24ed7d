//! Home Page
//!
//! Signed-in visitors land on the feed; signed-out visitors get the
//! marketing hero.

use leptos::*;

use crate::components::{Footer, Hero};
use crate::pages::Posts;
use crate::state::session::use_session;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if session.is_authenticated() {
                view! { <Posts /> }.into_view()
            } else {
                view! {
                    <div class="flex flex-col flex-grow bg-white">
                        <Hero />
                        <Footer />
                    </div>
                }.into_view()
            }
        }}
    }
}
