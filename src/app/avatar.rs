use leptos::prelude::*;

use crate::theme::ThemePreference;

/// Gradient-framed tile showing the owner's initials.
#[component]
pub fn Avatar(initials: String, theme: Signal<ThemePreference>) -> impl IntoView {
    view! {
        <div class="aspect-square rounded-2xl bg-gradient-to-br from-purple-500 to-blue-500 p-1">
            <div class=move || {
                format!(
                    "w-full h-full rounded-2xl flex items-center justify-center {}",
                    theme.get().pick("bg-white", "bg-gray-700"),
                )
            }>
                <div class="w-48 h-48 bg-gradient-to-br from-purple-400 to-blue-400 rounded-full flex items-center justify-center text-white text-4xl font-bold">
                    {initials}
                </div>
            </div>
        </div>
    }
}
