//! Multi-image carousel with wrap-around controls.

use leptos::prelude::*;

use crate::state::viewer::Carousel;

/// One image at a time, with prev/next and an `i / n` indicator when there
/// is more than one.
#[component]
pub fn ImageCarousel(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let images = StoredValue::new(images);

    let current = move || {
        let index = carousel.get().index();
        images.with_value(|list| list.get(index).cloned().unwrap_or_default())
    };
    let alt_text = move || format!("{alt} {}", carousel.get().index() + 1);

    view! {
        <div class="carousel">
            <img class="carousel__image" src=current alt=alt_text/>
            <Show when=move || carousel.get().has_controls()>
                <button
                    class="carousel__nav carousel__nav--prev"
                    aria-label="Previous image"
                    on:click=move |_| carousel.update(|c| *c = c.prev())
                >
                    "‹"
                </button>
                <button
                    class="carousel__nav carousel__nav--next"
                    aria-label="Next image"
                    on:click=move |_| carousel.update(|c| *c = c.next())
                >
                    "›"
                </button>
                <span class="carousel__position">{move || carousel.get().position_label()}</span>
            </Show>
        </div>
    }
}
