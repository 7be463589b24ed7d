//! App Root Component
//!
//! Main application component with routing and the global session provider.

use leptos::*;
use leptos_router::*;

use crate::components::Header;
use crate::pages::{Chatbot, CyberTools, Home, Login, Posts, Profile, Signup, UploadPost};
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the session to all components
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-white flex flex-col">
                // Site-wide header
                <Header />

                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/login" view=Login />
                    <Route path="/signup" view=Signup />
                    <Route path="/posts" view=Posts />
                    <Route path="/text-post" view=UploadPost />
                    <Route path="/chatbot" view=Chatbot />
                    <Route path="/tools" view=CyberTools />
                    <Route path="/edit_profile" view=Profile />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2 text-[#0f172a]">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="btn-grad px-6 py-3 rounded-lg font-medium"
            >
                "Go Home"
            </A>
        </div>
    }
}
