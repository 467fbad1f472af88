//! Chat Widget Component
//!
//! Coaching chat over the accumulated plan context. The user message
//! renders immediately; the assistant reply is appended on success, or
//! a fixed apology on any failure. Each request carries only the
//! latest message plus the context snapshot, never the transcript.

use leptos::*;

use crate::api;
use crate::state::session::{ChatMessage, ChatRole, SessionState, CHAT_APOLOGY};

/// Chat widget component
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let (input, set_input) = create_signal(String::new());
    let messages_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view
    {
        let transcript = state.transcript;
        create_effect(move |_| {
            transcript.with(|_| ());
            request_animation_frame(move || {
                if let Some(div) = messages_ref.get_untracked() {
                    div.set_scroll_top(div.scroll_height());
                }
            });
        });
    }

    let send = {
        let state = state.clone();
        move || {
            let message = input.get_untracked().trim().to_string();
            if message.is_empty() {
                return;
            }
            set_input.set(String::new());

            // Optimistic append, not waiting for the server
            state.push_message(ChatMessage::user(message.as_str()));

            let context = state.user_context.get_untracked();
            let state_clone = state.clone();
            spawn_local(async move {
                match api::send_chat(&message, &context).await {
                    Ok(reply) => {
                        state_clone.push_message(ChatMessage::assistant(reply));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Chat error: {}", e).into());
                        state_clone.push_message(ChatMessage::assistant(CHAT_APOLOGY));
                    }
                }
            });
        }
    };

    let send_on_click = send.clone();
    let send_on_enter = send;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Ask Your Coach"</h2>

            // Transcript
            <div
                node_ref=messages_ref
                class="h-72 overflow-y-auto space-y-3 mb-4 pr-2"
            >
                {move || {
                    state.transcript.get().into_iter().map(|message| view! {
                        <MessageBubble message=message />
                    }).collect_view()
                }}
            </div>

            // Input row
            <div class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Ask about your plan..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send_on_enter();
                        }
                    }
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=move |_| send_on_click()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (align, bubble) = match message.role {
        ChatRole::User => ("flex justify-end", "bg-primary-600 text-white"),
        ChatRole::Assistant => ("flex justify-start", "bg-gray-700 text-gray-200"),
    };

    view! {
        <div class=align>
            <div class=format!("{} max-w-[80%] rounded-lg px-4 py-2 whitespace-pre-wrap", bubble)>
                {message.content}
            </div>
        </div>
    }
}
