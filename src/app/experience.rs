use leptos::{html, prelude::*};

use super::{
    homepage::SectionHeading,
    motion::{query_all, query_one, use_section_motion},
};
use crate::{
    motion::TransitionDescriptor,
    nav::SectionId,
    portfolio::{ChannelKind, ExperienceRecord, Portfolio},
    theme::ThemePreference,
};

#[component]
pub fn Experience(theme: Signal<ThemePreference>) -> impl IntoView {
    let portfolio = Portfolio::get();
    let root = NodeRef::<html::Section>::new();

    use_section_motion(root, |motion, section| {
        motion.register_each(
            query_all(section, ".animate-on-scroll"),
            TransitionDescriptor::fade_slide,
        );
        motion.register(
            query_one(section, ".timeline-line"),
            TransitionDescriptor::height_grow(),
        );
    });

    view! {
        <section
            id=SectionId::Experience.as_str()
            node_ref=root
            class=move || format!("py-20 {}", theme.get().pick("bg-gray-50", "bg-gray-800"))
        >
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Experience"
                        subtitle="My professional journey and career highlights"
                        theme
                    />

                    <div class="relative">
                        <div class=move || {
                            format!(
                                "absolute left-8 md:left-1/2 md:-translate-x-1/2 w-0.5 h-full {}",
                                theme.get().pick("bg-gray-300", "bg-gray-600"),
                            )
                        }>
                            <div class="timeline-line w-full bg-gradient-to-b from-purple-500 to-blue-500 h-0" />
                        </div>

                        <div class="space-y-12">
                            {portfolio
                                .experience
                                .iter()
                                .enumerate()
                                .map(|(index, record)| view! { <Entry index record theme /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Entry(
    index: usize,
    record: &'static ExperienceRecord,
    theme: Signal<ThemePreference>,
) -> impl IntoView {
    let left = index % 2 == 0;
    view! {
        <div class=format!(
            "animate-on-scroll relative flex items-center {}",
            if left { "md:flex-row" } else { "md:flex-row-reverse" },
        )>
            <div class=move || {
                format!(
                    "absolute left-8 md:left-1/2 md:-translate-x-1/2 w-4 h-4 rounded-full border-4 border-purple-500 z-10 {}",
                    theme.get().pick("bg-white", "bg-gray-800"),
                )
            } />

            <div class=format!(
                "ml-20 md:ml-0 md:w-1/2 {}",
                if left { "md:pr-8" } else { "md:pl-8" },
            )>
                <div class=move || {
                    format!(
                        "rounded-2xl p-8 shadow-xl hover:shadow-2xl transition-all duration-300 {}",
                        theme.get().pick("bg-white", "bg-gray-700"),
                    )
                }>
                    <div class="mb-4">
                        <h3 class=move || {
                            format!(
                                "text-xl font-bold mb-2 {}",
                                theme.get().pick("text-gray-900", "text-white"),
                            )
                        }>{record.position.clone()}</h3>
                        <div class=move || {
                            format!(
                                "font-medium mb-2 {}",
                                theme.get().pick("text-purple-600", "text-purple-400"),
                            )
                        }>{record.company.clone()}</div>
                        <div class=move || {
                            format!(
                                "flex items-center gap-4 text-sm {}",
                                theme.get().pick("text-gray-600", "text-gray-400"),
                            )
                        }>
                            <span>{record.period()}</span>
                            <span>
                                {ChannelKind::Location.glyph()}" "
                                {record.location.clone()}
                            </span>
                        </div>
                    </div>

                    <ul class=move || {
                        format!(
                            "mb-6 space-y-2 {}",
                            theme.get().pick("text-gray-600", "text-gray-300"),
                        )
                    }>
                        {record
                            .highlights
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="flex items-start gap-2">
                                        <span class="text-purple-500 mt-1">"•"</span>
                                        <span>{item.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="flex flex-wrap gap-2">
                        {record
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class=move || {
                                        format!(
                                            "px-3 py-1 rounded-full text-sm font-medium {}",
                                            theme.get().pick("bg-gray-100 text-gray-700", "bg-gray-600 text-gray-300"),
                                        )
                                    }>{tech.clone()}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
