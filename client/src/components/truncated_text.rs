//! Long text with a read-more / read-less toggle.

use leptos::prelude::*;

use crate::state::viewer::{TRUNCATE_AT, needs_truncation, truncated};

#[component]
pub fn TruncatedText(text: String, #[prop(default = TRUNCATE_AT)] max_chars: usize) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let long = needs_truncation(&text, max_chars);
    let text = StoredValue::new(text);

    let shown = move || text.with_value(|t| truncated(t, max_chars, expanded.get()));

    view! {
        <div class="truncated-text">
            <p class="truncated-text__body">{shown}</p>
            <Show when=move || long>
                <button
                    class="truncated-text__toggle"
                    type="button"
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Read Less" } else { "Read More" }}
                </button>
            </Show>
        </div>
    }
}
