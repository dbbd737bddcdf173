use leptos::prelude::*;

use super::{motion::use_scroller, theme::ThemeToggle};
use crate::{
    nav::{NavMenu, SectionId, NAV_ITEMS},
    portfolio::{Portfolio, SocialNetwork},
    theme::ThemePreference,
};

const SOCIAL_IN_NAV: [SocialNetwork; 2] = [SocialNetwork::Github, SocialNetwork::Linkedin];

#[component]
pub fn Header(theme: Signal<ThemePreference>) -> impl IntoView {
    let profile = &Portfolio::get().profile;
    let scroller = use_scroller();
    let (menu, set_menu) = signal(NavMenu::default());

    let go = move |section: SectionId| {
        let mut m = menu.get_untracked();
        let target = m.select(section.as_str());
        set_menu.set(m);
        scroller.scroll_to(target);
    };

    let link_class = move || {
        format!(
            "p-2 rounded-full transition-colors duration-200 hover:bg-purple-500 hover:text-white {}",
            theme.get().pick("text-gray-700", "text-gray-300"),
        )
    };
    let item_class = move || {
        format!(
            "transition-colors duration-200 hover:text-purple-500 {}",
            theme.get().pick("text-gray-700", "text-gray-300"),
        )
    };
    let social = SOCIAL_IN_NAV
        .into_iter()
        .filter_map(|network| {
            profile
                .social_url(network)
                .map(|url| (network, url.to_string()))
        })
        .collect::<Vec<_>>();

    view! {
        <header class=move || {
            format!(
                "fixed top-0 w-full z-50 transition-all duration-300 backdrop-blur-md border-b {}",
                theme.get().pick("bg-white/90 border-gray-200", "bg-gray-900/90 border-gray-700"),
            )
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <h1 class=move || {
                        format!(
                            "text-2xl font-bold {}",
                            theme.get().pick("text-gray-900", "text-white"),
                        )
                    }>
                        <button
                            class="cursor-pointer hover:text-purple-500 transition-colors duration-200"
                            on:click=move |_| go(SectionId::Home)
                        >
                            {profile.name.clone()}
                        </button>
                    </h1>

                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button class=item_class on:click=move |_| go(section)>
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center space-x-4">
                        {social
                            .clone()
                            .into_iter()
                            .map(|(network, url)| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=link_class
                                        aria-label=network.label()
                                    >
                                        <i class=network.icon() />
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>

                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            class=link_class
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu.update(NavMenu::toggle)
                        >
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class=move || {
                        format!(
                            "md:hidden mt-4 pb-4 border-t {}",
                            theme.get().pick("border-gray-200", "border-gray-700"),
                        )
                    }>
                        <nav class="flex flex-col space-y-4 pt-4">
                            {NAV_ITEMS
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            class=move || format!("text-left {}", item_class())
                                            on:click=move |_| go(section)
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                            <div class="flex items-center space-x-4 pt-4">
                                {social
                                    .clone()
                                    .into_iter()
                                    .map(|(network, url)| {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=link_class
                                                aria-label=network.label()
                                            >
                                                <i class=network.icon() />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <a href=profile.mailto() class=link_class aria-label="Email">
                                    "✉"
                                </a>
                            </div>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}
