//! Main application component
//!
//! Owns every piece of UI state (inputs, gallery, modal) and hands the
//! child components signals plus callbacks. Children never touch the
//! DOM outside their own view.

use crate::api::apod;
use crate::components::{
    date_controls::DateControls, gallery::Gallery, header::Header, modal::DetailModal,
    status::StatusCard,
};
use apod_gallery_common::{date, select_gallery, ApodEntry, DateRange, FetchResult};
use chrono::NaiveDate;
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// What the gallery area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryState {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Entries selected for the requested window.
    Loaded(Vec<ApodEntry>),
    /// Fetch succeeded but no entry fell inside the window.
    Empty,
    /// Fetch failed; holds the full user-facing message.
    Failed(String),
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let today = local_today();
    let default_start = date::default_range_start(today);

    // date inputs, seeded with the default nine-day window
    let (start_value, set_start_value) = signal(date::to_canonical(default_start));
    let (end_value, set_end_value) = signal(date::to_canonical(today));
    let start_hint = date::format_short(default_start);
    let end_hint = date::format_short(today);

    let (gallery, set_gallery) = signal(GalleryState::Idle);
    let (modal_entry, set_modal_entry) = signal(None::<ApodEntry>);

    // Monotonic fetch counter. Each click bumps it; a response only
    // lands if no newer fetch started while it was in flight.
    let request_seq = StoredValue::new(0u64);

    let on_fetch = move |_| {
        let range =
            DateRange::from_inputs(&start_value.get(), &end_value.get()).or_default(local_today());

        let seq = request_seq.with_value(|n| n + 1);
        request_seq.set_value(seq);
        set_gallery.set(GalleryState::Loading);

        spawn_local(async move {
            let result = apod::fetch_dataset().await;
            match state_if_current(seq, request_seq.get_value(), result, &range) {
                Some(state) => {
                    if let GalleryState::Failed(message) = &state {
                        logging::warn!("{message}");
                    }
                    set_gallery.set(state);
                }
                None => logging::log!("discarding stale gallery response (request {seq})"),
            }
        });
    };

    let on_select = move |entry: ApodEntry| set_modal_entry.set(Some(entry));
    let on_close = move |_| set_modal_entry.set(None);

    view! {
        <div class="container">
            <Header />

            <DateControls
                start_value=start_value
                set_start_value=set_start_value
                end_value=end_value
                set_end_value=set_end_value
                start_hint=start_hint
                end_hint=end_hint
                on_fetch=on_fetch
            />

            {move || match gallery.get() {
                GalleryState::Idle => view! {
                    <StatusCard
                        icon="🔭"
                        message="Pick a date range, then press “Get Space Images”.".to_string()
                    />
                }
                .into_any(),
                GalleryState::Loading => view! {
                    <StatusCard icon="🔄" message="Loading space photos…".to_string() />
                }
                .into_any(),
                GalleryState::Empty => view! {
                    <StatusCard
                        icon="⚠️"
                        message="No APOD entries found for that date range.".to_string()
                        error=true
                    />
                }
                .into_any(),
                GalleryState::Failed(message) => view! {
                    <StatusCard icon="⚠️" message=message error=true />
                }
                .into_any(),
                GalleryState::Loaded(entries) => view! {
                    <Gallery entries=entries on_select=on_select />
                }
                .into_any(),
            }}

            {move || {
                modal_entry
                    .get()
                    .map(|entry| view! { <DetailModal entry=entry on_close=on_close /> })
            }}
        </div>
    }
}

/// State for a finished fetch, or `None` when a newer request started
/// while this one was in flight.
fn state_if_current(
    issued_seq: u64,
    current_seq: u64,
    result: FetchResult<Vec<ApodEntry>>,
    range: &DateRange,
) -> Option<GalleryState> {
    if issued_seq != current_seq {
        return None;
    }
    Some(gallery_state_for(result, range))
}

/// Turns a finished fetch into the state the gallery area shows.
fn gallery_state_for(result: FetchResult<Vec<ApodEntry>>, range: &DateRange) -> GalleryState {
    match result {
        Ok(entries) => {
            let selected = select_gallery(entries, range);
            if selected.is_empty() {
                GalleryState::Empty
            } else {
                GalleryState::Loaded(selected)
            }
        }
        Err(error) => GalleryState::Failed(format!("Failed to load APOD data. {error}")),
    }
}

/// Today in the browser's local calendar.
fn local_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .expect("JS Date produced an invalid calendar day")
}
