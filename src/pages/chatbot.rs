//! Chatbot Page
//!
//! Direct-messaging view: counterpart sidebar, message thread, and a send
//! box. Sends flagged by the moderation model surface the category and the
//! suggested rewrite; the message never reaches the thread.
//!
//! Thread fetches are stamped with a request sequence so that rapidly
//! switching conversations cannot let a slow, superseded response
//! overwrite the newer thread.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ChatMessage, ChatUser};
use crate::components::loading::ListSkeleton;
use crate::components::{Avatar, Banner, Loading};
use crate::format::format_time;
use crate::state::requests::RequestSeq;
use crate::state::session::use_session;

/// Chat page component
#[component]
pub fn Chatbot() -> impl IntoView {
    let session = use_session();

    let users = create_rw_signal(Vec::<ChatUser>::new());
    let selected = create_rw_signal(None::<ChatUser>);
    let messages = create_rw_signal(Vec::<ChatMessage>::new());
    let (text, set_text) = create_signal(String::new());
    let (loading_users, set_loading_users) = create_signal(false);
    let (loading_msgs, set_loading_msgs) = create_signal(false);
    let (sending, set_sending) = create_signal(false);
    let (error_message, set_error_message) = create_signal(String::new());

    let thread_seq = RequestSeq::new();
    let bottom_ref = create_node_ref::<html::Div>();

    // Defer the scroll until the new messages have rendered
    let scroll_to_bottom = move || {
        gloo_timers::callback::Timeout::new(50, move || {
            if let Some(el) = bottom_ref.get_untracked() {
                el.scroll_into_view();
            }
        })
        .forget();
    };

    let load_users = move || {
        set_loading_users.set(true);
        let token = session.token.get_untracked();
        spawn_local(async move {
            match api::fetch_chat_users(&token).await {
                Ok(list) => {
                    users.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch chat users: {}", e).into());
                    set_error_message.set("Failed to load chat list.".to_string());
                }
            }
            set_loading_users.set(false);
        });
    };

    // Redirect to login before any fetch when there is no token
    let navigate = use_navigate();
    create_effect(move |_| {
        if !session.is_authenticated() {
            navigate("/login", Default::default());
        } else {
            load_users();
        }
    });

    let select_user = {
        let thread_seq = thread_seq.clone();
        move |user: ChatUser| {
            selected.set(Some(user.clone()));
            messages.set(Vec::new());
            set_error_message.set(String::new());
            set_loading_msgs.set(true);

            let stamp = thread_seq.next();
            let seq = thread_seq.clone();
            let token = session.token.get_untracked();
            spawn_local(async move {
                let result = api::fetch_messages(&token, &user.id).await;

                // A newer selection supersedes this response
                if !seq.is_current(stamp) {
                    return;
                }

                match result {
                    Ok(list) => {
                        messages.set(list);
                        scroll_to_bottom();
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch messages: {}", e).into(),
                        );
                        set_error_message.set("Failed to fetch messages.".to_string());
                    }
                }
                set_loading_msgs.set(false);
            });
        }
    };

    let on_send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(String::new());

        let body = text.get().trim().to_string();
        let Some(user) = selected.get_untracked() else {
            return;
        };
        if body.is_empty() {
            return;
        }

        set_sending.set(true);
        let token = session.token.get_untracked();
        spawn_local(async move {
            match api::send_message(&token, &user.id, &body).await {
                Ok(message) => {
                    messages.update(|m| m.push(message));
                    set_text.set(String::new());
                    scroll_to_bottom();
                }
                Err(e) => {
                    // Moderation rejections surface verbatim; the message is
                    // never appended to the thread
                    set_error_message.set(e.to_string());
                }
            }
            set_sending.set(false);
        });
    };

    let select_for_sidebar = select_user.clone();

    view! {
        <div class="flex flex-1 overflow-hidden bg-gray-50">
            // Sidebar
            <aside class="w-1/4 bg-white border-r overflow-y-auto">
                <h2 class="px-4 py-3 text-xl font-semibold text-[#0f172a]">"Chats"</h2>
                {move || {
                    if loading_users.get() {
                        view! { <ListSkeleton count=4 /> }.into_view()
                    } else {
                        let select = select_for_sidebar.clone();
                        users.get().into_iter().map(|user| {
                            let select = select.clone();
                            let user_for_click = user.clone();
                            let is_active = selected.get().map(|s| s.id == user.id).unwrap_or(false);
                            view! {
                                <button
                                    on:click=move |_| select(user_for_click.clone())
                                    class=format!(
                                        "w-full flex items-center px-4 py-3 hover:bg-gray-100 focus:outline-none {}",
                                        if is_active { "bg-gray-100" } else { "" }
                                    )
                                >
                                    <Avatar
                                        name=user.display_name().to_string()
                                        image=user.profile_pic.clone()
                                        size="w-10 h-10"
                                    />
                                    <div class="text-left ml-3">
                                        <p class="font-medium text-gray-800">{user.display_name().to_string()}</p>
                                        <p class="text-sm text-gray-500">{format!("@{}", user.username)}</p>
                                    </div>
                                </button>
                            }
                        }).collect_view()
                    }
                }}
            </aside>

            // Thread
            <main class="flex-1 flex flex-col">
                {move || {
                    match selected.get() {
                        None => view! {
                            <div class="flex-1 flex items-center justify-center text-gray-400">
                                "Select a chat from the sidebar."
                            </div>
                        }.into_view(),
                        Some(user) => view! {
                            // Conversation header
                            <div class="flex items-center px-6 py-4 bg-white border-b">
                                <button
                                    on:click=move |_| selected.set(None)
                                    class="text-gray-600 mr-4 hover:text-gray-800 focus:outline-none"
                                >
                                    "←"
                                </button>
                                <Avatar
                                    name=user.display_name().to_string()
                                    image=user.profile_pic.clone()
                                    size="w-10 h-10"
                                />
                                <div class="ml-3">
                                    <p class="font-semibold text-gray-800">{user.display_name().to_string()}</p>
                                    <p class="text-sm text-gray-500">{format!("@{}", user.username)}</p>
                                </div>
                            </div>

                            // Messages
                            <div class="flex-1 overflow-y-auto p-6 space-y-4">
                                {move || {
                                    if loading_msgs.get() {
                                        return view! { <Loading /> }.into_view();
                                    }

                                    let list = messages.get();
                                    if list.is_empty() {
                                        view! {
                                            <p class="text-center text-gray-400">"No messages yet."</p>
                                        }.into_view()
                                    } else {
                                        let my_id = session.user.get().map(|u| u.id);
                                        list.into_iter().map(|message| {
                                            let is_mine = match (&message.sender, &my_id) {
                                                (Some(sender), Some(id)) => &sender.id == id,
                                                _ => false,
                                            };
                                            view! {
                                                <MessageBubble message=message is_mine=is_mine />
                                            }
                                        }).collect_view()
                                    }
                                }}
                                <div node_ref=bottom_ref />
                            </div>

                            // Error banner
                            <div class="px-6">
                                <Banner message=Signal::derive(move || error_message.get()) />
                            </div>

                            // Input
                            <form
                                on:submit=on_send
                                class="flex items-center px-6 py-4 bg-white border-t"
                            >
                                <input
                                    type="text"
                                    placeholder="Type a message…"
                                    prop:value=move || text.get()
                                    on:input=move |ev| set_text.set(event_target_value(&ev))
                                    class="flex-1 px-4 py-2 border rounded-full bg-gray-100 mr-4
                                           focus:outline-none focus:ring-2 focus:ring-[#00f7ff]"
                                />
                                <button
                                    type="submit"
                                    disabled=move || sending.get()
                                    class="px-5 py-2 rounded-full bg-[#00f7ff] text-white font-semibold
                                           hover:bg-[#00e7ee] disabled:opacity-50 focus:outline-none"
                                >
                                    {move || if sending.get() { "…" } else { "Send" }}
                                </button>
                            </form>
                        }.into_view(),
                    }
                }}
            </main>
        </div>
    }
}

/// Single chat bubble
#[component]
fn MessageBubble(message: ChatMessage, is_mine: bool) -> impl IntoView {
    let (row_class, bubble_class, name_class) = if is_mine {
        (
            "flex justify-end",
            "bg-blue-600 text-white rounded-br-none",
            "text-blue-600 text-right",
        )
    } else {
        (
            "flex justify-start",
            "bg-gray-200 text-gray-800 rounded-bl-none",
            "text-gray-700",
        )
    };

    let sender_name = message
        .sender
        .as_ref()
        .map(|s| s.display_name().to_string())
        .unwrap_or_default();
    let sender_pic = message.sender.as_ref().and_then(|s| s.profile_pic.clone());

    view! {
        <div class=row_class>
            <div class="max-w-xs">
                <p class=format!("mb-1 text-sm font-medium {}", name_class)>
                    {sender_name.clone()}
                </p>
                <div class="flex items-end">
                    {(!is_mine).then(|| view! {
                        <div class="mr-2">
                            <Avatar name=sender_name.clone() image=sender_pic.clone() size="w-8 h-8" />
                        </div>
                    })}
                    <div class=format!("px-4 py-2 rounded-lg break-words {}", bubble_class)>
                        <p>{message.text.clone()}</p>
                        <p class="mt-1 text-xs text-right opacity-70">
                            {format_time(&message.created_at)}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
