//! Placeholder card for the gallery area

use leptos::prelude::*;

/// Full-width placeholder shown instead of the grid while idle,
/// loading, empty, or failed.
#[component]
pub fn StatusCard(
    icon: &'static str,
    message: String,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    view! {
        <div class="placeholder" class:placeholder-error=error>
            <div class="placeholder-icon">{icon}</div>
            <p>{message}</p>
        </div>
    }
}
