use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, experience::Experience, hero::Hero, projects::Projects,
};
use crate::theme::ThemePreference;

#[component]
pub fn HomePage(theme: Signal<ThemePreference>) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero theme />
        <About theme />
        <Projects theme />
        <Experience theme />
        <Contact theme />
    }
}

/// Centered section title with a one-line lead, revealed on scroll.
#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
    theme: Signal<ThemePreference>,
) -> impl IntoView {
    view! {
        <div class="animate-on-scroll text-center mb-16">
            <h2 class=move || {
                format!(
                    "text-4xl md:text-5xl font-bold mb-4 {}",
                    theme.get().pick("text-gray-900", "text-white"),
                )
            }>{title}</h2>
            <p class=move || {
                format!("text-xl {}", theme.get().pick("text-gray-600", "text-gray-300"))
            }>{subtitle}</p>
        </div>
    }
}
