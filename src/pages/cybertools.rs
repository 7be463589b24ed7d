//! Cyber Tools Page
//!
//! Image and text cleaning on one page. The two modes share a loading
//! flag and a single error string. Switching modes stamps the request
//! sequence so an in-flight response from the abandoned mode is discarded
//! instead of landing in the other mode's output.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::loading::InlineLoading;
use crate::components::Banner;
use crate::state::requests::RequestSeq;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Image,
    Text,
}

/// Cyber tools page component
#[component]
pub fn CyberTools() -> impl IntoView {
    let (mode, set_mode) = create_signal(Mode::Image);
    let (selected_image, set_selected_image) = create_signal(None::<web_sys::File>);
    let (preview_url, set_preview_url) = create_signal(None::<String>);
    let (processed_image, set_processed_image) = create_signal(None::<String>);
    let (input_text, set_input_text) = create_signal(String::new());
    let (cleaned_text, set_cleaned_text) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(String::new());

    let seq = RequestSeq::new();

    let seq_for_switch = seq.clone();
    let switch_mode = move |target: Mode| {
        set_mode.set(target);
        set_error.set(String::new());
        // Supersede any in-flight request from the abandoned mode
        seq_for_switch.invalidate();
        set_loading.set(false);
    };

    let on_image_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let file = input.files().and_then(|files| files.get(0));
        if let Some(file) = file {
            set_preview_url.set(web_sys::Url::create_object_url_with_blob(&file).ok());
            set_selected_image.set(Some(file));
            set_processed_image.set(None);
            set_error.set(String::new());
        }
    };

    let seq_for_image = seq.clone();
    let on_image_submit = move |_| {
        let Some(file) = selected_image.get_untracked() else {
            set_error.set("Please select an image to clean.".to_string());
            return;
        };

        set_loading.set(true);
        set_error.set(String::new());

        let stamp = seq_for_image.next();
        let guard = seq_for_image.clone();
        spawn_local(async move {
            let result = api::clean_image(&file).await;

            if !guard.is_current(stamp) {
                return;
            }

            match result {
                Ok(b64) => {
                    set_processed_image.set(Some(api::image_data_url(&b64)));
                }
                Err(e) => {
                    set_error.set(e);
                }
            }
            set_loading.set(false);
        });
    };

    let seq_for_text = seq.clone();
    let on_text_submit = move |_| {
        let text = input_text.get_untracked();
        if text.trim().is_empty() {
            set_error.set("Please enter text to clean.".to_string());
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());

        let stamp = seq_for_text.next();
        let guard = seq_for_text.clone();
        spawn_local(async move {
            let result = api::clean_text(&text).await;

            if !guard.is_current(stamp) {
                return;
            }

            match result {
                Ok(cleaned) => {
                    set_cleaned_text.set(cleaned);
                }
                Err(e) => {
                    set_error.set(e);
                }
            }
            set_loading.set(false);
        });
    };

    let switch_for_image = switch_mode.clone();
    let switch_for_text = switch_mode;

    view! {
        <main class="flex-grow container mx-auto px-6 py-12">
            // Heading
            <section class="text-center mb-12">
                <h1 class="text-4xl font-bold text-[#0f172a]">"CyberShield Tools"</h1>
                <p class="text-gray-600 mt-2">"AI-powered cleaning for images & text"</p>
            </section>

            // Mode switch
            <div class="flex justify-center mb-10 gap-4">
                <ModeButton
                    label="Image Cleaner"
                    current=mode
                    target=Mode::Image
                    on_select=move || switch_for_image(Mode::Image)
                />
                <ModeButton
                    label="Text Cleaner"
                    current=mode
                    target=Mode::Text
                    on_select=move || switch_for_text(Mode::Text)
                />
            </div>

            <div class="max-w-5xl mx-auto">
                {move || {
                    // Handlers hold the request sequence, so hand each
                    // render its own clone
                    let on_image_submit = on_image_submit.clone();
                    let on_text_submit = on_text_submit.clone();
                    match mode.get() {
                        Mode::Image => view! {
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                                // Upload panel
                                <div class="bg-gray-50 p-8 rounded-2xl shadow-lg flex flex-col items-center space-y-6">
                                    <p class="text-gray-600 font-medium">"Select an image to clean"</p>
                                    <label class="w-full cursor-pointer">
                                        <input
                                            type="file"
                                            accept="image/*"
                                            class="hidden"
                                            on:change=on_image_change
                                        />
                                        <div class="border-2 border-dashed border-gray-300 rounded-lg p-4
                                                    flex items-center justify-center hover:border-[#00f7ff] h-64">
                                            {move || {
                                                match preview_url.get() {
                                                    Some(url) => view! {
                                                        <img src=url alt="Preview" class="max-h-full object-contain" />
                                                    }.into_view(),
                                                    None => view! {
                                                        <p class="text-gray-400">"Click to upload"</p>
                                                    }.into_view(),
                                                }
                                            }}
                                        </div>
                                    </label>
                                    <button
                                        on:click=on_image_submit
                                        disabled=move || loading.get()
                                        class="btn-grad w-full py-2 rounded-md flex justify-center items-center"
                                    >
                                        {move || loading.get().then(|| view! { <InlineLoading /> })}
                                        {move || if loading.get() { "Processing..." } else { "Clean Image" }}
                                    </button>
                                </div>

                                // Processed output
                                <div class="bg-gray-50 p-8 rounded-2xl shadow-lg flex flex-col items-center space-y-6">
                                    <p class="text-gray-600 font-medium">"Processed Output"</p>
                                    <div class="border rounded-lg overflow-hidden w-full h-64
                                                flex items-center justify-center bg-white">
                                        {move || {
                                            match processed_image.get() {
                                                Some(url) => view! {
                                                    <img src=url alt="Cleaned" class="max-h-full object-contain" />
                                                }.into_view(),
                                                None => view! {
                                                    <p class="text-gray-400">"No output yet"</p>
                                                }.into_view(),
                                            }
                                        }}
                                    </div>
                                    {move || {
                                        processed_image.get().map(|url| view! {
                                            <a href=url download="cleaned_image.png" class="w-full">
                                                <button class="btn-grad w-full py-2 rounded-md">
                                                    "Download Image"
                                                </button>
                                            </a>
                                        })
                                    }}
                                </div>
                            </div>
                        }.into_view(),
                        Mode::Text => view! {
                            <div class="bg-gray-50 p-8 rounded-2xl shadow-lg">
                                <p class="text-gray-600 font-medium mb-6">"Enter text to clean"</p>
                                <textarea
                                    rows="6"
                                    placeholder="Type or paste your text here..."
                                    prop:value=move || input_text.get()
                                    on:input=move |ev| set_input_text.set(event_target_value(&ev))
                                    class="w-full border border-gray-300 rounded-lg p-4 mb-4
                                           focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                                ></textarea>
                                <button
                                    on:click=on_text_submit
                                    disabled=move || loading.get()
                                    class="btn-grad py-2 px-6 rounded-md flex justify-center items-center"
                                >
                                    {move || loading.get().then(|| view! { <InlineLoading /> })}
                                    {move || if loading.get() { "Cleaning..." } else { "Clean Text" }}
                                </button>

                                {move || {
                                    let cleaned = cleaned_text.get();
                                    if cleaned.is_empty() {
                                        view! {
                                            <div class="text-gray-400 mt-6">"No cleaned text yet."</div>
                                        }.into_view()
                                    } else {
                                        view! {
                                            <div class="bg-white p-6 rounded-lg border border-gray-200 shadow mt-6">
                                                <h3 class="text-xl font-medium mb-2 text-[#0f172a]">"Cleaned Text"</h3>
                                                <p class="text-gray-800 whitespace-pre-line">{cleaned}</p>
                                            </div>
                                        }.into_view()
                                    }
                                }}
                            </div>
                        }.into_view(),
                    }
                }}

                <div class="mt-6">
                    <Banner message=Signal::derive(move || error.get()) />
                </div>
            </div>
        </main>
    }
}

/// One of the two mode tabs
#[component]
fn ModeButton(
    label: &'static str,
    current: ReadSignal<Mode>,
    target: Mode,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_select()
            class=move || {
                let base = "px-6 py-2 rounded-full font-semibold transition-colors duration-200";
                if current.get() == target {
                    format!("{} bg-[#00f7ff] text-white shadow-lg", base)
                } else {
                    format!("{} bg-gray-200 text-gray-600 hover:bg-gray-300", base)
                }
            }
        >
            {label}
        </button>
    }
}
