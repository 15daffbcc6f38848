//! Header component

use leptos::prelude::*;

const SPACE_FACTS: [&str; 10] = [
    "Did you know? 🌌  One day on Venus is longer than one year on Venus!",
    "Did you know? 🚀  There are more trees on Earth than stars in the Milky Way galaxy.",
    "Did you know? 🌕  The footprints on the Moon will likely last millions of years.",
    "Did you know? 🌠  Jupiter’s Great Red Spot is a giant storm that’s been raging for over 350 years.",
    "Did you know? 🪐  Saturn could float in water because it’s mostly made of gas!",
    "Did you know? ☄️  A day on Mercury lasts 1,408 hours — that’s almost 59 Earth days!",
    "Did you know? 🌍  The Sun accounts for 99.8% of the total mass of our solar system.",
    "Did you know? 🌑  There are more stars in the universe than grains of sand on Earth.",
    "Did you know? 🛰️  Space is completely silent because there’s no air to carry sound waves.",
    "Did you know? 🪄  The Milky Way galaxy will collide with Andromeda in about 4.5 billion years!",
];

fn random_fact() -> &'static str {
    let index = (js_sys::Math::random() * SPACE_FACTS.len() as f64) as usize;
    SPACE_FACTS.get(index).copied().unwrap_or(SPACE_FACTS[0])
}

#[component]
pub fn Header() -> impl IntoView {
    let fact = random_fact();

    view! {
        <header class="header">
            <h1>"NASA APOD Gallery"</h1>
            <div class="space-fact">
                <strong>{fact}</strong>
            </div>
        </header>
    }
}
