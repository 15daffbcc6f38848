//! Detail modal component
//!
//! Shown for at most one entry at a time; the app swaps the entry
//! rather than stacking modals. The Escape handler is a window keydown
//! listener removed on cleanup, so closing by any path detaches it.

use apod_gallery_common::{format_human, ApodEntry};
use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;

#[component]
pub fn DetailModal<F>(entry: ApodEntry, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let handle = window_event_listener(ev::keydown, {
        let close = on_close.clone();
        move |event| {
            if event.key() == "Escape" {
                close(());
            }
        }
    });
    on_cleanup(move || handle.remove());

    let title = entry.title.clone();
    let date_label = format_human(&entry.date);
    let explanation = entry.explanation.clone();

    let media = if entry.is_video() {
        view! {
            <iframe
                src=entry.url.clone()
                width="100%"
                height="420"
                title=entry.alt_text().to_string()
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                allowfullscreen=true
            ></iframe>
        }
        .into_any()
    } else {
        view! {
            <img
                src=entry.full_image_url().to_string()
                alt=entry.alt_text().to_string()
                style="max-height: 70vh; object-fit: contain;"
            />
        }
        .into_any()
    };

    view! {
        <div
            class="modal"
            on:click={
                let on_close = on_close.clone();
                move |_| on_close(())
            }
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <span
                    class="close-btn"
                    on:click={
                        let on_close = on_close.clone();
                        move |_| on_close(())
                    }
                >
                    "×"
                </span>
                <h2>{title}</h2>
                <p>{date_label}</p>
                {media}
                <p>{explanation}</p>
            </div>
        </div>
    }
}
