//! Photo gallery component
//!
//! Renders the selected entries as clickable cards. The grid is keyed
//! by entry date, so swapping in a new selection replaces the cards
//! instead of appending to them.

use apod_gallery_common::{format_human, ApodEntry};
use leptos::prelude::*;

#[component]
pub fn Gallery<F>(entries: Vec<ApodEntry>, on_select: F) -> impl IntoView
where
    F: Fn(ApodEntry) + 'static + Clone + Send,
{
    view! {
        <div class="gallery">
            <For
                each=move || entries.clone()
                key=|entry| entry.date.clone()
                children=move |entry| {
                    let on_select = on_select.clone();
                    view! {
                        <GalleryCard entry=entry on_select=on_select />
                    }
                }
            />
        </div>
    }
}

#[component]
fn GalleryCard<F>(entry: ApodEntry, on_select: F) -> impl IntoView
where
    F: Fn(ApodEntry) + 'static + Clone + Send,
{
    let title = entry.display_title().to_string();
    let date_label = format_human(&entry.date);
    let preview = entry.preview_url().to_string();
    let alt = entry.alt_text().to_string();

    view! {
        <div class="gallery-item">
            <img
                src=preview
                alt=alt
                loading="lazy"
                decoding="async"
                on:click={
                    let entry = entry.clone();
                    move |_| on_select(entry.clone())
                }
            />
            <h3>{title}</h3>
            <p>{date_label}</p>
        </div>
    }
}
