//! Header Component
//!
//! Sticky top bar shown on every page: brand link, navigation, and either
//! auth buttons or the signed-in user's avatar dropdown. Fetches the
//! user's profile whenever the token changes and caches it on the session.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Avatar;
use crate::state::session::use_session;

const NAV_LINKS: [(&str, &str); 3] = [
    ("Upload", "/text-post"),
    ("Chatbot", "/chatbot"),
    ("Cyber Tools", "/tools"),
];

/// Site-wide header
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let (dropdown_open, set_dropdown_open) = create_signal(false);
    let (loading_user, set_loading_user) = create_signal(false);

    // Refresh the cached user whenever the token changes
    create_effect(move |_| {
        let token = session.token.get();
        if token.is_empty() {
            session.user.set(None);
            return;
        }
        set_loading_user.set(true);
        spawn_local(async move {
            match api::fetch_user_details(&token).await {
                Ok(user) => {
                    session.user.set(Some(user));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch user details: {}", e).into(),
                    );
                    session.user.set(None);
                }
            }
            set_loading_user.set(false);
        });
    });

    let navigate_for_logout = use_navigate();
    let logout = move |_| {
        session.clear();
        set_dropdown_open.set(false);
        set_menu_open.set(false);
        navigate_for_logout("/", Default::default());
    };

    let navigate_for_mobile = use_navigate();
    let logout_mobile = move |_| {
        session.clear();
        set_dropdown_open.set(false);
        set_menu_open.set(false);
        navigate_for_mobile("/", Default::default());
    };

    view! {
        <header class="bg-[#0f172a] shadow-lg sticky top-0 z-50">
            <nav class="container mx-auto px-4 py-4 flex justify-between items-center">
                // Logo
                <A href="/" class="text-2xl font-bold text-[#00f7ff] tracking-wide">
                    "CYBERSHIELD"
                </A>

                // Desktop navigation
                <div class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS.into_iter().map(|(name, path)| view! {
                        <A
                            href=path
                            class="text-white hover:text-[#00f7ff] transition-colors duration-200"
                        >
                            {name}
                        </A>
                    }).collect_view()}
                </div>

                // Profile & auth
                <div class="flex items-center space-x-4">
                    {move || {
                        // The dropdown is rebuilt on every run, so hand it
                        // its own clone of the logout handler
                        let logout = logout.clone();
                        if session.is_authenticated() {
                            view! {
                                <div class="relative">
                                    <button
                                        on:click=move |_| set_dropdown_open.update(|o| *o = !*o)
                                        class="focus:outline-none"
                                    >
                                        {move || {
                                            if loading_user.get() {
                                                view! {
                                                    <div class="w-9 h-9 rounded-full bg-gray-300 animate-pulse" />
                                                }.into_view()
                                            } else if let Some(user) = session.user.get() {
                                                view! {
                                                    <Avatar
                                                        name=user.name
                                                        image=user.profile_pic
                                                        size="w-9 h-9"
                                                    />
                                                }.into_view()
                                            } else {
                                                view! {
                                                    <span class="text-2xl text-white">"👤"</span>
                                                }.into_view()
                                            }
                                        }}
                                    </button>

                                    {move || {
                                        if dropdown_open.get() {
                                            view! {
                                                <div class="absolute right-0 mt-3 w-48 bg-white rounded-md shadow-md py-2 z-50">
                                                    <A
                                                        href="/edit_profile"
                                                        on:click=move |_| set_dropdown_open.set(false)
                                                        class="block px-4 py-2 text-gray-700 hover:bg-gray-100"
                                                    >
                                                        "View Profile"
                                                    </A>
                                                    <button
                                                        on:click=logout.clone()
                                                        class="w-full text-left px-4 py-2 text-gray-700 hover:bg-gray-100"
                                                    >
                                                        "Logout"
                                                    </button>
                                                </div>
                                            }.into_view()
                                        } else {
                                            view! {}.into_view()
                                        }
                                    }}
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="hidden md:flex gap-4">
                                    <A
                                        href="/login"
                                        class="bg-[#00f7ff] text-black px-4 py-2 rounded-md font-semibold hover:bg-white transition"
                                    >
                                        "Login"
                                    </A>
                                    <A
                                        href="/signup"
                                        class="bg-white text-black px-4 py-2 rounded-md font-semibold hover:bg-[#00f7ff] transition"
                                    >
                                        "Sign Up"
                                    </A>
                                </div>
                            }.into_view()
                        }
                    }}

                    // Mobile menu toggle
                    <button
                        class="md:hidden text-white text-2xl"
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        "☰"
                    </button>
                </div>
            </nav>

            // Mobile menu
            {move || {
                let logout_mobile = logout_mobile.clone();
                if menu_open.get() {
                    view! {
                        <div class="md:hidden bg-[#1e293b] text-white px-4 pb-4">
                            <div class="flex flex-col space-y-3">
                                {NAV_LINKS.into_iter().map(|(name, path)| view! {
                                    <A
                                        href=path
                                        on:click=move |_| set_menu_open.set(false)
                                        class="hover:text-[#00f7ff] transition"
                                    >
                                        {name}
                                    </A>
                                }).collect_view()}

                                {move || {
                                    if session.is_authenticated() {
                                        view! {
                                            <A
                                                href="/edit_profile"
                                                on:click=move |_| set_menu_open.set(false)
                                                class="hover:text-[#00f7ff]"
                                            >
                                                "View Profile"
                                            </A>
                                            <button
                                                on:click=logout_mobile.clone()
                                                class="text-left mt-2 hover:text-[#00f7ff]"
                                            >
                                                "Logout"
                                            </button>
                                        }.into_view()
                                    } else {
                                        view! {
                                            <div class="mt-4 flex flex-col space-y-2">
                                                <A
                                                    href="/login"
                                                    on:click=move |_| set_menu_open.set(false)
                                                    class="bg-[#00f7ff] text-black py-2 text-center rounded-md font-semibold"
                                                >
                                                    "Login"
                                                </A>
                                                <A
                                                    href="/signup"
                                                    on:click=move |_| set_menu_open.set(false)
                                                    class="bg-white text-black py-2 text-center rounded-md font-semibold"
                                                >
                                                    "Sign Up"
                                                </A>
                                            </div>
                                        }.into_view()
                                    }
                                }}
                            </div>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </header>
    }
}
