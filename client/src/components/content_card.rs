//! A single contribution as shown on the public wall.
//!
//! DESIGN
//! ======
//! Rendering follows `content_type`: one image for `image`/`text_image`, the
//! carousel for `images`/`images_text`, and the read-more text block for every
//! type that carries text. Fields a type does not use are ignored even when the
//! API returns them.

use leptos::prelude::*;

use crate::components::image_carousel::ImageCarousel;
use crate::components::truncated_text::TruncatedText;
use crate::net::types::Content;
use crate::util::format::display_date;

#[component]
pub fn ContentCard(content: Content) -> impl IntoView {
    let kind = content.content_type;
    let image = content.image_url.clone().filter(|_| kind.uses_single_image());
    let gallery = if kind.uses_multiple_images() { content.gallery().to_vec() } else { Vec::new() };
    let text = content.message().filter(|_| kind.shows_text()).map(str::to_owned);
    let author = content.author_name.clone().filter(|name| !name.trim().is_empty());
    let date = display_date(&content.created_at);

    view! {
        <article class=format!("content-card content-card--{}", kind.as_str())>
            {image.map(|src| view! { <img class="content-card__image" src=src alt="Contribution"/> })}
            {(!gallery.is_empty()).then(|| view! { <ImageCarousel images=gallery alt="Contribution"/> })}
            {text.map(|text| view! { <TruncatedText text=text/> })}
            <footer class="content-card__meta">
                {author.map(|name| view! { <span class="content-card__author">{name}</span> })}
                <time class="content-card__date">{date}</time>
            </footer>
        </article>
    }
}
