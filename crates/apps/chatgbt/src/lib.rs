//! ChatGBT desktop app: a chat window whose assistant is never any help.

pub mod session;

use desktop_app_contract::AppMountContext;
use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use rand::{rngs::SmallRng, SeedableRng};

use crate::session::{reply_delay, ChatSession, Role};

/// Mounts ChatGBT into a runtime window.
pub fn mount(_context: AppMountContext) -> View {
    view! { <ChatGbtApp /> }.into_view()
}

#[component]
pub fn ChatGbtApp() -> impl IntoView {
    let session = create_rw_signal(ChatSession::default());
    let input = create_rw_signal(String::new());
    let rng = store_value(SmallRng::seed_from_u64(
        (js_sys::Math::random() * u64::MAX as f64) as u64,
    ));
    let reply_timer = store_value(None::<TimeoutHandle>);
    let scroll_ref = create_node_ref::<html::Div>();

    let is_typing = Signal::derive(move || session.with(ChatSession::is_typing));

    create_effect(move |_| {
        session.track();
        if let Some(container) = scroll_ref.get() {
            // Wait for the new row to be laid out.
            request_animation_frame(move || container.set_scroll_top(container.scroll_height()));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let mut accepted = true;
        session.update(|session| accepted = session.submit(&text).is_ok());
        if !accepted {
            return;
        }
        input.set(String::new());

        let delay = rng.try_update_value(|rng| reply_delay(rng)).unwrap_or_default();
        match set_timeout_with_handle(move || session.update(ChatSession::resolve_reply), delay) {
            Ok(handle) => reply_timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("chat reply timer failed: {err:?}");
                session.update(ChatSession::resolve_reply);
            }
        }
    };

    on_cleanup(move || {
        if let Some(handle) = reply_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    view! {
        <div class="chatgbt-app">
            <header class="chatgbt-header">
                <span class="chatgbt-name">"ChatGBT"</span>
                <span class="chatgbt-tagline">"Always Helpful™"</span>
            </header>

            <div class="chatgbt-transcript" node_ref=scroll_ref>
                <For
                    each=move || session.with(|session| session.messages().to_vec())
                    key=|message| message.id
                    children=|message| {
                        let role = match message.role {
                            Role::User => "user",
                            Role::Bot => "bot",
                        };
                        view! {
                            <div class="chatgbt-row" data-role=role>
                                <div class="chatgbt-bubble">{message.content}</div>
                            </div>
                        }
                    }
                />
                <Show when=move || is_typing.get()>
                    <div class="chatgbt-row" data-role="bot">
                        <div class="chatgbt-bubble chatgbt-typing" aria-label="ChatGBT is typing">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </Show>
            </div>

            <form class="chatgbt-composer" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ask me anything..."
                    prop:value=move || input.get()
                    disabled=move || is_typing.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || is_typing.get() || input.with(|text| text.trim().is_empty())
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
