//! Avatar Component
//!
//! Profile picture with an initial-letter fallback, used by the header,
//! feed, comments, and chat.

use leptos::*;

/// Build the public URL for a stored profile image
pub fn profile_image_url(file: &str) -> String {
    format!("/assets/profile_images/{}", file)
}

/// Circular avatar: the user's picture when one is set, otherwise the
/// first letter of their name.
#[component]
pub fn Avatar(
    /// Display name, used for the fallback initial and alt text
    #[prop(into)]
    name: String,
    /// Stored image file name, if the user has one
    #[prop(optional_no_strip)]
    image: Option<String>,
    /// Tailwind size classes
    #[prop(default = "w-10 h-10")]
    size: &'static str,
) -> impl IntoView {
    let initial = name.chars().next().map(|c| c.to_string()).unwrap_or_default();

    view! {
        <div class=format!("{} rounded-full overflow-hidden bg-gray-300 flex-shrink-0", size)>
            {match image.filter(|f| !f.is_empty()) {
                Some(file) => view! {
                    <img
                        src=profile_image_url(&file)
                        alt=name
                        class="w-full h-full object-cover"
                    />
                }.into_view(),
                None => view! {
                    <span class="flex items-center justify-center h-full text-lg font-medium text-white">
                        {initial}
                    </span>
                }.into_view(),
            }}
        </div>
    }
}
