//! Posts Page
//!
//! The feed: post cards with like toggles and a per-post comment modal.
//! Comment drafts and error messages are keyed by post id so one post's
//! state never leaks into another's.

use leptos::*;
use leptos_router::*;
use std::collections::HashMap;

use crate::api;
use crate::components::{Avatar, Banner, Loading};
use crate::format::{format_date, format_time};
use crate::state::feed::{apply_like, Post};
use crate::state::session::use_session;

/// Build the public URL for a stored post image
fn post_image_url(file: &str) -> String {
    format!("/assets/post_images/{}", file)
}

/// Feed page component
#[component]
pub fn Posts() -> impl IntoView {
    let session = use_session();

    let posts = create_rw_signal(Vec::<Post>::new());
    let loading = create_rw_signal(true);
    // Post id whose comment modal is open
    let active_modal = create_rw_signal(None::<String>);
    // Pending comment text per post
    let drafts = create_rw_signal(HashMap::<String, String>::new());
    // Comment error per post
    let comment_errors = create_rw_signal(HashMap::<String, String>::new());

    let load_posts = move || {
        let token = session.token.get_untracked();
        spawn_local(async move {
            match api::fetch_posts(&token).await {
                Ok(list) => {
                    posts.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch posts: {}", e).into());
                }
            }
            loading.set(false);
        });
    };

    // Redirect to login before any fetch when there is no token
    let navigate = use_navigate();
    create_effect(move |_| {
        if !session.is_authenticated() {
            navigate("/login", Default::default());
        } else {
            load_posts();
        }
    });

    view! {
        <main class="flex-grow bg-blue-50">
            <div class="max-w-3xl mx-auto px-4 py-8">
                <h2 class="text-2xl font-semibold mb-6 text-center text-gray-800">
                    "Explore Posts"
                </h2>

                {move || {
                    if loading.get() {
                        return view! { <Loading /> }.into_view();
                    }

                    let list = posts.get();
                    if list.is_empty() {
                        view! {
                            <div class="text-center text-gray-500 py-20">
                                "No posts available."
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-6">
                                {list.into_iter().map(|post| view! {
                                    <PostCard
                                        post=post
                                        posts=posts
                                        active_modal=active_modal
                                        drafts=drafts
                                        comment_errors=comment_errors
                                        on_refresh=load_posts
                                    />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </div>
        </main>
    }
}

/// Single post card
#[component]
fn PostCard(
    post: Post,
    posts: RwSignal<Vec<Post>>,
    active_modal: RwSignal<Option<String>>,
    drafts: RwSignal<HashMap<String, String>>,
    comment_errors: RwSignal<HashMap<String, String>>,
    on_refresh: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let session = use_session();

    let like_id = post.id.clone();
    let on_like = move |_| {
        let token = session.token.get_untracked();
        let id = like_id.clone();
        spawn_local(async move {
            match api::toggle_like(&token, &id).await {
                Ok(liked) => {
                    posts.update(|ps| apply_like(ps, &id, liked));
                }
                Err(e) => {
                    // No rollback path: the toggle failure is only logged
                    web_sys::console::error_1(&format!("Failed to toggle like: {}", e).into());
                }
            }
        });
    };

    let modal_id = post.id.clone();
    let open_modal = move |_| active_modal.set(Some(modal_id.clone()));

    let card_id = post.id.clone();
    let post_for_modal = post.clone();
    let on_refresh_for_modal = on_refresh;

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
            // Author row
            <div class="flex items-center px-6 py-4">
                <Avatar
                    name=post.user.name.clone()
                    image=post.user.profile_pic.clone()
                    size="w-12 h-12"
                />
                <div class="ml-4">
                    <p class="font-medium text-gray-800">{post.user.name.clone()}</p>
                    <p class="text-xs text-gray-500">{format_date(&post.created_at)}</p>
                </div>
                {post.mood.clone().filter(|m| !m.is_empty()).map(|mood| view! {
                    <span class="ml-auto text-xs text-gray-400">{mood}</span>
                })}
            </div>

            // Content
            <div class="px-6 pb-4">
                <p class="text-gray-700 mb-4 leading-relaxed">{post.caption.clone()}</p>

                {post.image.clone().filter(|i| !i.is_empty()).map(|image| view! {
                    <div class="w-full mb-4">
                        <img
                            src=post_image_url(&image)
                            alt="Post"
                            class="w-full rounded-lg object-contain"
                        />
                    </div>
                })}

                // Actions
                <div class="flex items-center gap-6 mb-2">
                    <button on:click=on_like class="flex items-center focus:outline-none">
                        <span class="text-lg">
                            {if post.liked { "❤️" } else { "🤍" }}
                        </span>
                        <span class="ml-1 text-gray-800 text-sm">{post.like_count}</span>
                    </button>
                    <button on:click=open_modal class="flex items-center focus:outline-none">
                        <span class="text-lg">"💬"</span>
                        <span class="ml-1 text-gray-800 text-sm">{post.comment_count}</span>
                    </button>
                </div>
            </div>

            // Comment modal
            {move || {
                if active_modal.get().as_deref() == Some(card_id.as_str()) {
                    view! {
                        <CommentModal
                            post=post_for_modal.clone()
                            active_modal=active_modal
                            drafts=drafts
                            comment_errors=comment_errors
                            on_refresh=on_refresh_for_modal.clone()
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

/// Comment list and composer for one post
#[component]
fn CommentModal(
    post: Post,
    active_modal: RwSignal<Option<String>>,
    drafts: RwSignal<HashMap<String, String>>,
    comment_errors: RwSignal<HashMap<String, String>>,
    on_refresh: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let session = use_session();

    let draft_id = post.id.clone();
    let draft = move || drafts.get().get(&draft_id).cloned().unwrap_or_default();

    let error_id = post.id.clone();
    let error = move || comment_errors.get().get(&error_id).cloned().unwrap_or_default();

    let input_id = post.id.clone();
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        drafts.update(|d| {
            d.insert(input_id.clone(), value);
        });
    };

    let submit_id = post.id.clone();
    let on_comment = move |_| {
        let text = drafts
            .get_untracked()
            .get(&submit_id)
            .cloned()
            .unwrap_or_default();
        if text.is_empty() {
            return;
        }

        let token = session.token.get_untracked();
        let id = submit_id.clone();
        let refresh = on_refresh.clone();
        spawn_local(async move {
            match api::submit_comment(&token, &id, &text).await {
                Ok(ack) if ack.status => {
                    // Success: wholesale re-fetch, then clear only this
                    // post's draft and error
                    refresh();
                    drafts.update(|d| {
                        d.remove(&id);
                    });
                    comment_errors.update(|m| {
                        m.remove(&id);
                    });
                }
                Ok(ack) => {
                    comment_errors.update(|m| {
                        m.insert(
                            id.clone(),
                            ack.message
                                .unwrap_or_else(|| "Unable to add comment.".to_string()),
                        );
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Comment submit failed: {}", e).into());
                    comment_errors.update(|m| {
                        m.insert(id.clone(), "Error submitting comment.".to_string());
                    });
                }
            }
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex justify-center items-center z-50">
            <div class="bg-white w-full max-w-lg rounded-xl shadow-lg overflow-hidden mx-4">
                // Modal header
                <div class="flex items-center justify-between px-6 py-4 border-b">
                    <h3 class="text-lg font-medium text-gray-800">"Comments"</h3>
                    <button
                        on:click=move |_| active_modal.set(None)
                        class="text-gray-600 hover:text-gray-800"
                    >
                        "✕"
                    </button>
                </div>

                // Comment list
                <div class="max-h-80 overflow-y-auto px-6 py-4 space-y-4">
                    {if post.comments.is_empty() {
                        view! {
                            <p class="text-center text-gray-400">"No comments yet."</p>
                        }.into_view()
                    } else {
                        post.comments.iter().map(|comment| view! {
                            <div class="flex items-start">
                                <Avatar
                                    name=comment.user.name.clone()
                                    image=comment.user.profile_pic.clone()
                                    size="w-8 h-8"
                                />
                                <div class="ml-3 w-full">
                                    <p class="text-sm text-gray-700">
                                        <span class="font-semibold">{comment.user.name.clone()}</span>
                                        " "
                                        {comment.text.clone()}
                                    </p>
                                    <p class="text-xs text-gray-400 mt-1">
                                        {format_time(&comment.created_at)}
                                    </p>
                                </div>
                            </div>
                        }).collect_view()
                    }}
                </div>

                // Composer
                <div class="border-t px-6 py-4">
                    <Banner message=Signal::derive(error) />
                    <div class="flex items-center">
                        <input
                            type="text"
                            placeholder="Add a comment..."
                            prop:value=draft
                            on:input=on_input
                            class="flex-1 border border-gray-300 rounded-full px-4 py-2 text-sm
                                   focus:ring-2 focus:ring-blue-400 focus:outline-none"
                        />
                        <button
                            on:click=on_comment
                            class="ml-4 text-sm font-semibold text-blue-600"
                        >
                            "Post"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
