//! Text-to-speech through the webview's `speechSynthesis`.

use dioxus::document::eval;
use serde::Deserialize;
use tracing::debug;

use crate::scripts::js_string_literal;

pub const DEFAULT_LANG: &str = "en-US";
/// Card fronts are Japanese.
pub const FRONT_LANG: &str = "ja-JP";
/// Card backs are Vietnamese.
pub const BACK_LANG: &str = "vi-VN";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

/// Read `text` aloud in `lang`, interrupting anything already speaking.
///
/// Empty text is ignored.
pub async fn speak(text: &str, lang: &str) {
    let Some(script) = speak_script(text, lang) else {
        return;
    };
    debug!(lang, "speaking");
    let _ = eval(&script).await;
}

/// Voices currently installed; empty until the platform has loaded them.
pub async fn voices() -> Vec<Voice> {
    eval(VOICES_SCRIPT)
        .join::<Vec<Voice>>()
        .await
        .unwrap_or_default()
}

/// Speech is usable once at least one voice is available.
pub async fn is_ready() -> bool {
    !voices().await.is_empty()
}

const VOICES_SCRIPT: &str = r#"
    if (!window.speechSynthesis) { return []; }
    return window.speechSynthesis.getVoices().map(v => ({ name: v.name, lang: v.lang }));
"#;

fn speak_script(text: &str, lang: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let lang = if lang.is_empty() { DEFAULT_LANG } else { lang };
    let text_literal = js_string_literal(text);
    let lang_literal = js_string_literal(lang);
    Some(format!(
        r#"
        const synth = window.speechSynthesis;
        if (!synth) {{ return; }}
        if (synth.speaking) {{ synth.cancel(); }}
        const utterance = new SpeechSynthesisUtterance({text_literal});
        const lang = {lang_literal};
        const voice = synth.getVoices().find(v => v.lang === lang);
        if (voice) {{ utterance.voice = voice; }}
        utterance.lang = lang;
        utterance.rate = 1;
        utterance.pitch = 1;
        synth.speak(utterance);
        "#
    ))
}
