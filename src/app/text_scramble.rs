use leptos::{prelude::*, text_prop::TextProp};

use crate::scramble::{BrowserFrames, ScrambleRun};

/// Reveals `text` with a decrypting effect, one animation frame at a time.
/// A new value restarts the effect from a fully scrambled state.
#[component]
pub fn TextScramble(#[prop(into)] text: TextProp) -> impl IntoView {
    let (display, set_display) = signal(String::new());
    let run = StoredValue::new_local(ScrambleRun::new(BrowserFrames, move |s| {
        set_display.set(s)
    }));

    let label = text.clone();
    Effect::new(move |_| {
        let text = text.get();
        run.try_with_value(|run| run.start(&text));
    });

    on_cleanup(move || {
        run.try_with_value(|run| run.stop());
    });

    view! { <span aria-label=move || label.get().to_string()>{display}</span> }
}
