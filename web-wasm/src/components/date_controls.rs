//! Date range controls

use leptos::prelude::*;

#[component]
pub fn DateControls<F>(
    start_value: ReadSignal<String>,
    set_start_value: WriteSignal<String>,
    end_value: ReadSignal<String>,
    set_end_value: WriteSignal<String>,
    start_hint: String,
    end_hint: String,
    on_fetch: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="date-controls">
            <div class="form-group">
                <label for="start-date">"Start date"</label>
                <input
                    type="date"
                    id="start-date"
                    placeholder=start_hint
                    prop:value=move || start_value.get()
                    on:input=move |ev| {
                        set_start_value.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="end-date">"End date"</label>
                <input
                    type="date"
                    id="end-date"
                    placeholder=end_hint
                    prop:value=move || end_value.get()
                    on:input=move |ev| {
                        set_end_value.set(event_target_value(&ev));
                    }
                />
            </div>

            <button
                class="btn btn-primary"
                id="get-image-btn"
                on:click={
                    let on_fetch = on_fetch.clone();
                    move |_| on_fetch(())
                }
            >
                "Get Space Images"
            </button>
        </div>
    }
}
