use leptos::{html, prelude::*};

use super::{
    avatar::Avatar,
    homepage::SectionHeading,
    motion::{query_all, use_section_motion},
};
use crate::{
    motion::{parse_percentage, TransitionDescriptor},
    nav::SectionId,
    portfolio::Portfolio,
    theme::ThemePreference,
};

#[component]
pub fn About(theme: Signal<ThemePreference>) -> impl IntoView {
    let profile = &Portfolio::get().profile;
    let root = NodeRef::<html::Section>::new();

    use_section_motion(root, |motion, section| {
        motion.register_each(query_all(section, ".animate-on-scroll"), |_| {
            TransitionDescriptor::fade_rise()
        });
        for bar in query_all(section, ".skill-bar") {
            match bar.get_attribute("data-width").map(|raw| parse_percentage(&raw)) {
                Some(Ok(pct)) => {
                    motion.register(Some(bar), TransitionDescriptor::width_grow(pct));
                }
                Some(Err(e)) => log::debug!("skipping skill bar: {e}"),
                None => log::debug!("skill bar without data-width"),
            }
        }
    });

    let card = move || {
        format!(
            "rounded-2xl p-8 shadow-2xl {}",
            theme.get().pick("bg-white", "bg-gray-700"),
        )
    };
    let body_text = move || theme.get().pick("text-gray-600", "text-gray-300");

    view! {
        <section
            id=SectionId::About.as_str()
            node_ref=root
            class=move || format!("py-20 {}", theme.get().pick("bg-gray-50", "bg-gray-800"))
        >
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="About Me"
                        subtitle="Get to know more about my journey and expertise"
                        theme
                    />

                    <div class="grid lg:grid-cols-2 gap-16 items-center">
                        <div class="animate-on-scroll">
                            <div class=move || format!("relative max-w-md mx-auto lg:max-w-none {}", card())>
                                <Avatar initials=profile.initials.clone() theme />
                            </div>
                        </div>

                        <div class="animate-on-scroll">
                            <div class=card>
                                <h3 class=move || {
                                    format!(
                                        "text-2xl font-bold mb-6 {}",
                                        theme.get().pick("text-gray-900", "text-white"),
                                    )
                                }>{profile.about_title.clone()}</h3>
                                {profile
                                    .bio
                                    .iter()
                                    .map(|paragraph| {
                                        view! {
                                            <p class=move || {
                                                format!("text-lg mb-6 leading-relaxed {}", body_text())
                                            }>{paragraph.clone()}</p>
                                        }
                                    })
                                    .collect_view()}

                                <div class="space-y-4">
                                    {profile
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="skill-item">
                                                    <div class=move || {
                                                        format!(
                                                            "flex justify-between mb-2 {}",
                                                            theme.get().pick("text-gray-700", "text-gray-300"),
                                                        )
                                                    }>
                                                        <span class="font-medium">{skill.name.clone()}</span>
                                                        <span>{skill.width()}</span>
                                                    </div>
                                                    <div class=move || {
                                                        format!(
                                                            "w-full h-2 rounded-full {}",
                                                            theme.get().pick("bg-gray-200", "bg-gray-600"),
                                                        )
                                                    }>
                                                        <div
                                                            class="skill-bar h-2 rounded-full bg-gradient-to-r from-purple-500 to-blue-500"
                                                            data-width=skill.width()
                                                        />
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
