//! Upload Post Page
//!
//! Composer for a new post: caption, mood, optional image. Content the
//! moderation model rejects comes back with a suggestion and category,
//! rendered in an inline banner.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::Banner;
use crate::state::session::use_session;

const MOODS: [&str; 6] = ["Happy", "Sad", "Excited", "Inspired", "Angry", "Peaceful"];

/// Format a moderation rejection for the inline banner
fn moderation_message(message: &str, suggestion: Option<&str>, category: Option<&str>) -> String {
    format!(
        "⚠️ {}\nSuggestion: {}\nType: {}",
        message,
        suggestion.unwrap_or(""),
        category.unwrap_or(""),
    )
}

/// Post composer page component
#[component]
pub fn UploadPost() -> impl IntoView {
    let session = use_session();

    let (caption, set_caption) = create_signal(String::new());
    let (mood, set_mood) = create_signal(String::new());
    let (image, set_image) = create_signal(None::<web_sys::File>);
    let (preview_url, set_preview_url) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(String::new());
    let (server_message, set_server_message) = create_signal(String::new());
    let (success_message, set_success_message) = create_signal(String::new());

    let on_image_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let file = input.files().and_then(|files| files.get(0));
        if let Some(file) = file {
            set_preview_url.set(web_sys::Url::create_object_url_with_blob(&file).ok());
            set_image.set(Some(file));
        }
    };

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_server_message.set(String::new());

        if !session.is_authenticated() {
            set_error.set("You must be logged in.".to_string());
            return;
        }

        let caption_text = caption.get().trim().to_string();
        let mood_value = mood.get();
        let file = image.get_untracked();

        if caption_text.is_empty() && file.is_none() {
            set_error.set("Please provide at least a caption or an image.".to_string());
            return;
        }

        set_loading.set(true);

        let token = session.token.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_post(&token, &caption_text, &mood_value, file.as_ref()).await {
                Ok(ack) if ack.status => {
                    set_success_message.set(format!("✅ {}", ack.message));
                    // Let the confirmation show before heading home
                    gloo_timers::callback::Timeout::new(1200, move || {
                        navigate("/", Default::default());
                    })
                    .forget();
                }
                Ok(ack) => {
                    set_server_message.set(moderation_message(
                        &ack.message,
                        ack.suggestion.as_deref(),
                        ack.cyberbullying_type.as_deref(),
                    ));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Post creation failed: {}", e).into());
                    set_error.set("Something went wrong. Please try again.".to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <main class="flex-grow container mx-auto px-6 py-12">
            // Heading
            <section class="text-center mb-12">
                <h1 class="text-4xl font-bold text-[#0f172a]">"Create a New Post"</h1>
                <p class="text-gray-600 mt-2">"Share your mood and thoughts with others"</p>
            </section>

            // Form card
            <div class="max-w-3xl mx-auto bg-gray-50 p-8 rounded-2xl shadow-lg transition hover:shadow-2xl">
                <form on:submit=on_submit class="space-y-6">
                    // Caption
                    <div>
                        <label class="block text-gray-700 font-semibold mb-2">"Caption"</label>
                        <textarea
                            rows="4"
                            placeholder="Write something..."
                            prop:value=move || caption.get()
                            on:input=move |ev| set_caption.set(event_target_value(&ev))
                            class="w-full border border-gray-300 rounded-lg p-4 resize-none
                                   focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                        ></textarea>
                    </div>

                    // Image upload
                    <div>
                        <label class="block text-gray-700 font-semibold mb-2">"Upload Image"</label>
                        <label class="w-full cursor-pointer">
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden"
                                on:change=on_image_change
                            />
                            <div class="border-2 border-dashed border-gray-300 rounded-lg p-4
                                        flex items-center justify-center hover:border-[#00f7ff] transition h-48">
                                {move || {
                                    match preview_url.get() {
                                        Some(url) => view! {
                                            <img src=url alt="Selected" class="max-h-full object-contain" />
                                        }.into_view(),
                                        None => view! {
                                            <p class="text-gray-400">"Click to upload"</p>
                                        }.into_view(),
                                    }
                                }}
                            </div>
                        </label>
                    </div>

                    // Mood selector
                    <div>
                        <label class="block text-gray-700 font-semibold mb-2">"Mood"</label>
                        <select
                            prop:value=move || mood.get()
                            on:change=move |ev| set_mood.set(event_target_value(&ev))
                            class="w-full border border-gray-300 rounded-lg p-4
                                   focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                        >
                            <option value="">"Select Mood"</option>
                            {MOODS.into_iter().map(|m| view! {
                                <option value=m>{m}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Submit
                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="btn-grad w-full py-3 rounded-lg flex justify-center items-center
                               text-white font-semibold text-lg transition"
                    >
                        {move || if loading.get() { "Posting..." } else { "Create Post" }}
                    </button>

                    <Banner message=Signal::derive(move || error.get()) />
                    <Banner message=Signal::derive(move || server_message.get()) />
                    <Banner message=Signal::derive(move || success_message.get()) variant="success" />
                </form>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_message_names_all_parts() {
        let rendered = moderation_message(
            "Your post was flagged.",
            Some("Share something kinder."),
            Some("harassment"),
        );
        assert!(rendered.contains("Your post was flagged."));
        assert!(rendered.contains("Suggestion: Share something kinder."));
        assert!(rendered.contains("Type: harassment"));
    }

    #[test]
    fn test_moderation_message_tolerates_missing_fields() {
        let rendered = moderation_message("Flagged.", None, None);
        assert!(rendered.contains("Flagged."));
        assert!(rendered.contains("Suggestion: "));
        assert!(rendered.contains("Type: "));
    }
}
