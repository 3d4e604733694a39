//! Caramel Chat Widget
//!
//! Floating assistant with canned replies. The reply is chosen immediately
//! and shown after a simulated typing delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use petaid_core::chatbot::{reply_to, ChatMessage, Sender, ASSISTANT_NAME, TYPING_DELAY_MS};

#[component]
pub fn Chatbot() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (messages, set_messages) = signal(vec![ChatMessage::greeting()]);
    let (input, set_input) = signal(String::new());
    let (is_typing, set_is_typing) = signal(false);

    let send = move || {
        let text = input.get();
        if text.trim().is_empty() || is_typing.get_untracked() {
            return;
        }
        let reply = reply_to(&text);
        set_messages.update(|list| list.push(ChatMessage::user(text)));
        set_input.set(String::new());
        set_is_typing.set(true);

        spawn_local(async move {
            TimeoutFuture::new(TYPING_DELAY_MS).await;
            set_messages.update(|list| list.push(ChatMessage::assistant(reply)));
            set_is_typing.set(false);
        });
    };

    view! {
        <div class="chatbot">
            <Show when=move || is_open.get()>
                <div class="chatbot-window">
                    <div class="chatbot-header">
                        <span>{ASSISTANT_NAME} " 🐕"</span>
                        <button class="chatbot-close" on:click=move |_| set_is_open.set(false)>"×"</button>
                    </div>
                    <ul class="chatbot-messages">
                        {move || {
                            messages
                                .get()
                                .into_iter()
                                .map(|message| {
                                    let class = match message.sender {
                                        Sender::User => "chat-message from-user",
                                        Sender::Assistant => "chat-message from-assistant",
                                    };
                                    view! { <li class=class>{message.text}</li> }
                                })
                                .collect_view()
                        }}
                        <Show when=move || is_typing.get()>
                            <li class="chat-message from-assistant typing">{ASSISTANT_NAME} " is typing..."</li>
                        </Show>
                    </ul>
                    <form
                        class="chatbot-input"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            type="text"
                            placeholder="Ask Caramel anything..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || is_typing.get()>"Send"</button>
                    </form>
                </div>
            </Show>
            <button
                class="chatbot-toggle"
                aria-label="Toggle Caramel Chatbot"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                "💬"
            </button>
        </div>
    }
}
