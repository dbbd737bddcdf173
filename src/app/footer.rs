use leptos::prelude::*;

use super::motion::use_scroller;
use crate::{portfolio::Portfolio, theme::ThemePreference};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(theme: Signal<ThemePreference>) -> impl IntoView {
    let name = &Portfolio::get().profile.name;
    let scroller = use_scroller();

    view! {
        <footer class=move || {
            format!(
                "py-12 border-t {}",
                theme.get().pick("bg-gray-50 border-gray-200", "bg-gray-800 border-gray-700"),
            )
        }>
            <div class="container mx-auto px-6">
                <div class="flex flex-col items-center justify-center space-y-4">
                    <button
                        aria-label="Scroll to top"
                        on:click=move |_| scroller.scroll_to_top()
                        class=move || {
                            format!(
                                "p-3 rounded-full transition-all duration-200 hover:scale-110 shadow-lg hover:shadow-xl {}",
                                theme.get().pick(
                                    "bg-white hover:bg-purple-500 text-gray-700 hover:text-white",
                                    "bg-gray-700 hover:bg-purple-600 text-gray-300",
                                ),
                            )
                        }
                    >
                        "↑"
                    </button>
                    <div class="text-center">
                        <p class=move || {
                            format!(
                                "flex items-center justify-center gap-2 {}",
                                theme.get().pick("text-gray-600", "text-gray-300"),
                            )
                        }>
                            "Made with " <span class="text-red-500">"♥"</span> " by " {name.clone()}
                        </p>
                        <p class=move || {
                            format!(
                                "text-sm mt-2 {}",
                                theme.get().pick("text-gray-500", "text-gray-400"),
                            )
                        }>{format!("© {BUILD_YEAR} {name}. All rights reserved.")}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
