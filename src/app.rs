mod about;
mod avatar;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
pub mod motion;
mod projects;
pub mod theme;

use footer::Footer;
use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use motion::provide_smooth_scrolling;
use theme::provide_theme;

use crate::portfolio::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = provide_theme().preference();
    provide_smooth_scrolling();

    let name = Portfolio::get().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=Portfolio::get().profile.headline.clone() />

        <Router>
            <div class=move || {
                format!(
                    "min-h-screen transition-colors duration-300 {}",
                    theme.get().pick("bg-white", "bg-gray-900"),
                )
            }>
                <Header theme />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=move || view! { <HomePage theme /> } />
                    </Routes>
                </main>
                <Footer theme />
            </div>
        </Router>
    }
}
