//! Profile Page
//!
//! View and edit the signed-in user's profile. Saving issues a multipart
//! PUT and re-fetches the details on success.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{Avatar, Banner};
use crate::state::session::{use_session, User};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session();

    let user = create_rw_signal(None::<User>);
    let (is_editing, set_is_editing) = create_signal(false);
    let (show_pic_modal, set_show_pic_modal) = create_signal(false);
    let (error_message, set_error_message) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    // Edit form fields, seeded from the fetched profile
    let (name, set_name) = create_signal(String::new());
    let (username, set_username) = create_signal(String::new());
    let (gender, set_gender) = create_signal(String::new());
    let (bio, set_bio) = create_signal(String::new());
    let (picture, set_picture) = create_signal(None::<web_sys::File>);

    let load_user = move || {
        let token = session.token.get_untracked();
        spawn_local(async move {
            match api::fetch_user_details(&token).await {
                Ok(details) => {
                    set_name.set(details.name.clone());
                    set_username.set(details.username.clone());
                    set_gender.set(details.gender.clone().unwrap_or_default());
                    set_bio.set(details.bio.clone().unwrap_or_default());
                    set_picture.set(None);
                    user.set(Some(details));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch user details: {}", e).into(),
                    );
                }
            }
        });
    };

    // Redirect to login before any fetch when there is no token
    let navigate = use_navigate();
    create_effect(move |_| {
        if !session.is_authenticated() {
            navigate("/login", Default::default());
        } else {
            load_user();
        }
    });

    let on_picture_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        set_picture.set(input.files().and_then(|files| files.get(0)));
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(String::new());
        set_saving.set(true);

        let token = session.token.get_untracked();
        let n = name.get_untracked();
        let u = username.get_untracked();
        let g = gender.get_untracked();
        let b = bio.get_untracked();
        let file = picture.get_untracked();

        spawn_local(async move {
            match api::edit_profile(&token, &n, &u, &g, &b, file.as_ref()).await {
                Ok(()) => {
                    load_user();
                    set_is_editing.set(false);
                }
                Err(e) => {
                    set_error_message.set(e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <main class="flex-grow container mx-auto px-4 py-12">
            {move || {
                let Some(current) = user.get() else {
                    return view! {
                        <div class="text-center text-gray-400 py-20">"Loading profile..."</div>
                    }.into_view();
                };

                view! {
                    <div class="max-w-3xl mx-auto bg-white shadow-xl rounded-2xl p-8">
                        // Header
                        <div class="mb-6">
                            <h1 class="text-3xl font-bold text-[#0f172a]">{current.name.clone()}</h1>
                            <h2 class="text-xl text-gray-500">"Profile"</h2>
                            <hr class="mt-4 border-gray-200" />
                        </div>

                        <Banner message=Signal::derive(move || error_message.get()) />

                        // Edit / view toggle
                        <div class="flex justify-end mb-6">
                            <button
                                on:click=move |_| set_is_editing.update(|e| *e = !*e)
                                class="btn-grad px-4 py-2 text-sm"
                            >
                                {move || if is_editing.get() { "Cancel" } else { "Edit Profile" }}
                            </button>
                        </div>

                        {move || {
                            if is_editing.get() {
                                view! {
                                    <form on:submit=on_save class="space-y-6">
                                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700">"Name"</label>
                                                <input
                                                    type="text"
                                                    prop:value=move || name.get()
                                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                                    class="mt-1 block w-full border rounded-lg p-2
                                                           focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                                                />
                                            </div>
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700">"Username"</label>
                                                <input
                                                    type="text"
                                                    prop:value=move || username.get()
                                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                                    class="mt-1 block w-full border rounded-lg p-2
                                                           focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                                                />
                                            </div>
                                        </div>

                                        <div>
                                            <label class="block text-sm font-medium text-gray-700">"Gender"</label>
                                            <select
                                                prop:value=move || gender.get()
                                                on:change=move |ev| set_gender.set(event_target_value(&ev))
                                                class="mt-1 block w-full border rounded-lg p-2
                                                       focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                                            >
                                                <option value="">"Select Gender"</option>
                                                <option value="male">"Male"</option>
                                                <option value="female">"Female"</option>
                                            </select>
                                        </div>

                                        <div>
                                            <label class="block text-sm font-medium text-gray-700">"Bio"</label>
                                            <textarea
                                                rows="3"
                                                prop:value=move || bio.get()
                                                on:input=move |ev| set_bio.set(event_target_value(&ev))
                                                class="mt-1 block w-full border rounded-lg p-2
                                                       focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                                            ></textarea>
                                        </div>

                                        <div>
                                            <label class="block text-sm font-medium text-gray-700">"Profile Picture"</label>
                                            <input
                                                type="file"
                                                accept="image/*"
                                                on:change=on_picture_change
                                                class="mt-1 block w-full"
                                            />
                                        </div>

                                        <div class="flex justify-end space-x-4">
                                            <button
                                                type="button"
                                                on:click=move |_| set_is_editing.set(false)
                                                class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-100"
                                            >
                                                "Cancel"
                                            </button>
                                            <button
                                                type="submit"
                                                disabled=move || saving.get()
                                                class="btn-grad px-6 py-2 rounded-lg"
                                            >
                                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                                            </button>
                                        </div>
                                    </form>
                                }.into_view()
                            } else {
                                let Some(current) = user.get() else {
                                    return view! {}.into_view();
                                };
                                view! {
                                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 items-center">
                                        <div class="sm:col-span-1 text-center">
                                            <button
                                                on:click=move |_| set_show_pic_modal.set(true)
                                                class="mx-auto block"
                                            >
                                                <Avatar
                                                    name=current.name.clone()
                                                    image=current.profile_pic.clone()
                                                    size="w-32 h-32 border-4 border-[#00f7ff]"
                                                />
                                            </button>
                                        </div>
                                        <div class="sm:col-span-2 space-y-4">
                                            <div>
                                                <span class="font-semibold text-gray-700">"Username: "</span>
                                                <span class="text-gray-900">{current.username.clone()}</span>
                                            </div>
                                            <div>
                                                <span class="font-semibold text-gray-700">"Gender: "</span>
                                                <span class="text-gray-900">
                                                    {current.gender.clone().filter(|g| !g.is_empty())
                                                        .unwrap_or_else(|| "Not set".to_string())}
                                                </span>
                                            </div>
                                            <div>
                                                <span class="font-semibold text-gray-700">"Bio: "</span>
                                                <span class="text-gray-900">
                                                    {current.bio.clone().filter(|b| !b.is_empty())
                                                        .unwrap_or_else(|| "No bio yet.".to_string())}
                                                </span>
                                            </div>
                                        </div>
                                    </div>
                                }.into_view()
                            }
                        }}

                        // Enlarged picture modal
                        {move || {
                            if show_pic_modal.get() {
                                let Some(current) = user.get() else {
                                    return view! {}.into_view();
                                };
                                view! {
                                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                                        <div class="relative bg-white rounded-lg p-4 max-w-sm">
                                            <button
                                                on:click=move |_| set_show_pic_modal.set(false)
                                                class="absolute top-2 right-2 text-gray-600 hover:text-gray-800"
                                            >
                                                "✕"
                                            </button>
                                            <Avatar
                                                name=current.name.clone()
                                                image=current.profile_pic.clone()
                                                size="w-64 h-64"
                                            />
                                        </div>
                                    </div>
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                    </div>
                }.into_view()
            }}
        </main>
    }
}
