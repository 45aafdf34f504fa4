use dioxus::prelude::*;
use tracing::warn;

use services::practice::{ModeKind, PracticeIntent};

use crate::speech::{BACK_LANG, FRONT_LANG, is_ready, speak};
use crate::vm::{MODE_TABS, PracticeVm};

/// How the card front is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    /// The front is an image URL.
    Image,
}

#[component]
fn Prompt(text: String, kind: PromptKind) -> Element {
    match kind {
        PromptKind::Text => rsx! {
            span { class: "prompt-text", "{text}" }
        },
        PromptKind::Image if text.is_empty() => rsx! {
            span { class: "prompt-missing", "Không có ảnh" }
        },
        PromptKind::Image => rsx! {
            img { class: "prompt-image", src: "{text}", alt: "" }
        },
    }
}

#[component]
fn SpeakButton(text: String, lang: &'static str) -> Element {
    rsx! {
        button {
            class: "btn btn-icon speak",
            r#type: "button",
            title: "Đọc",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                let text = text.clone();
                spawn(async move {
                    if !is_ready().await {
                        warn!(lang, "no speech voices loaded; using the platform default");
                    }
                    speak(&text, lang).await;
                });
            },
            "🔊"
        }
    }
}

fn feedback_class(correct: bool) -> &'static str {
    if correct {
        "feedback feedback--ok"
    } else {
        "feedback feedback--bad"
    }
}

/// Flip / typing / quiz controls over one practice snapshot.
#[component]
pub fn PracticeBoard(
    vm: PracticeVm,
    prompt: PromptKind,
    speech: bool,
    on_intent: EventHandler<PracticeIntent>,
) -> Element {
    let mode = vm.mode;
    let tabs = MODE_TABS.iter().map(|(kind, label)| {
        let kind = *kind;
        let class = if kind == mode {
            "mode-tab mode-tab--active"
        } else {
            "mode-tab"
        };
        rsx! {
            button {
                key: "{label}",
                class,
                r#type: "button",
                onclick: move |_| on_intent.call(PracticeIntent::SwitchMode(kind)),
                "{label}"
            }
        }
    });

    let body = match mode {
        ModeKind::Flip => {
            let flip_class = if vm.flipped {
                "flip-card flip-card--flipped"
            } else {
                "flip-card"
            };
            rsx! {
                div {
                    id: "flip-card",
                    class: flip_class,
                    onclick: move |_| on_intent.call(PracticeIntent::Flip),
                    if vm.flipped {
                        div { class: "flip-face flip-face--back",
                            span { class: "prompt-text", "{vm.back}" }
                            if speech {
                                SpeakButton { text: vm.back.clone(), lang: BACK_LANG }
                            }
                        }
                    } else {
                        div { class: "flip-face flip-face--front",
                            Prompt { text: vm.front.clone(), kind: prompt }
                            if speech {
                                SpeakButton { text: vm.front.clone(), lang: FRONT_LANG }
                            }
                        }
                    }
                }
            }
        }
        ModeKind::Typing => rsx! {
            div { class: "typing-card",
                div { class: "typing-prompt",
                    Prompt { text: vm.front.clone(), kind: prompt }
                    if speech {
                        SpeakButton { text: vm.front.clone(), lang: FRONT_LANG }
                    }
                }
                input {
                    id: "typing-answer",
                    class: "input",
                    placeholder: "Nhập đáp án...",
                    value: "{vm.typed}",
                    oninput: move |evt| on_intent.call(PracticeIntent::TypeAnswer(evt.value())),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_intent.call(PracticeIntent::Check);
                        }
                    },
                }
                div { class: "typing-actions",
                    button {
                        id: "typing-check",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(PracticeIntent::Check),
                        "Kiểm tra"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(PracticeIntent::Random),
                        "Ngẫu nhiên"
                    }
                }
            }
        },
        ModeKind::Quiz => rsx! {
            div { class: "quiz-card",
                div { class: "quiz-prompt",
                    Prompt { text: vm.front.clone(), kind: prompt }
                }
                div { class: "quiz-options",
                    for option in vm.options.iter().cloned() {
                        {
                            let text = option.text.clone();
                            rsx! {
                                button {
                                    key: "{option.text}",
                                    class: option.class,
                                    r#type: "button",
                                    disabled: option.locked,
                                    onclick: move |_| on_intent.call(PracticeIntent::Select(text.clone())),
                                    "{option.text}"
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    let feedback = vm.feedback.clone();
    let show_jump = mode != ModeKind::Quiz;
    let position = vm.position;
    let len = vm.len;

    rsx! {
        div { class: "practice-board",
            div { class: "mode-tabs", {tabs} }
            {body}
            if let Some((correct, text)) = feedback {
                p { class: feedback_class(correct), "{text}" }
            }
            div { class: "practice-footer",
                button {
                    id: "practice-next",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(PracticeIntent::Next),
                    "Thẻ tiếp theo"
                }
                p { class: "progress", "{vm.progress}" }
                if show_jump {
                    label { class: "jump",
                        "Chọn thẻ: "
                        input {
                            id: "jump-to",
                            class: "input input--narrow",
                            r#type: "number",
                            min: "1",
                            max: "{len}",
                            value: "{position}",
                            oninput: move |evt| {
                                if let Ok(number) = evt.value().trim().parse::<usize>() {
                                    on_intent.call(PracticeIntent::JumpTo(number));
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
