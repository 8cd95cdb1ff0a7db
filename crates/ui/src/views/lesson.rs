use dioxus::prelude::*;

use lesson_core::LessonSequencer;

use crate::context::AppContext;
use crate::views::KeyConcepts;
use crate::vm::{ChatBubbleVm, map_lesson_page};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LessonView() -> Element {
    let ctx = use_context::<AppContext>();
    let script = ctx.script();
    let video_id = ctx.video_id();

    // The step counter lives here and nowhere else. `advance` is the single
    // mutating entry point; everything below renders from the derived view.
    let mut sequencer = use_signal(move || LessonSequencer::new(script));
    let advance = use_callback(move |()| {
        sequencer.write().advance();
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(advance);
            }
        }
    }

    let page = map_lesson_page(&sequencer.read());
    let embed_url = video_id.embed_url();

    rsx! {
        div { class: "lesson",
            if page.show_video {
                section { class: "panel",
                    h2 { class: "panel-title", "'탑건: 매버릭' 도입 영상" }
                    div { class: "video-frame",
                        iframe {
                            class: "video-embed",
                            src: "{embed_url}",
                            title: "YouTube video player",
                            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                            allowfullscreen: true,
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "panel-title", "대화형 수업 흐름" }
                div { class: "chat",
                    for bubble in page.bubbles {
                        ChatBubble { key: "{bubble.index}", bubble, onadvance: advance }
                    }
                }
            }

            if page.show_next_button {
                div { class: "next-row",
                    button {
                        class: "next-button",
                        r#type: "button",
                        aria_label: "다음 단계로 이동",
                        onclick: move |_| advance.call(()),
                        "다음"
                    }
                }
            }

            if page.show_concepts {
                KeyConcepts {}
            }
        }
    }
}

#[component]
fn ChatBubble(bubble: ChatBubbleVm, onadvance: EventHandler<()>) -> Element {
    let clickable = bubble.clickable;
    let side = if bubble.is_teacher {
        "chat-row--teacher"
    } else {
        "chat-row--student"
    };
    let bubble_class = if clickable {
        "chat-bubble chat-bubble--clickable"
    } else {
        "chat-bubble"
    };

    rsx! {
        div { class: "chat-row {side}",
            div { class: "chat-column",
                span { class: "chat-speaker", "{bubble.speaker_label}" }
                div {
                    class: "{bubble_class}",
                    onclick: move |_| {
                        if clickable {
                            onadvance.call(());
                        }
                    },
                    "{bubble.text}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    advance: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, advance: Callback<()>) {
        *self.advance.borrow_mut() = Some(advance);
    }

    pub(crate) fn advance(&self) -> Callback<()> {
        (*self.advance.borrow()).expect("lesson advance registered")
    }
}
