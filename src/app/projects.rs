use leptos::{html, prelude::*};

use super::{
    homepage::SectionHeading,
    motion::{query_all, use_section_motion},
};
use crate::{
    gallery::{ProjectModal, ScrollLock},
    motion::{TransitionDescriptor, ENTRANCE_STAGGER},
    nav::SectionId,
    portfolio::{Portfolio, ProjectRecord},
    theme::ThemePreference,
};

/// Locks page scrolling through the body's `overflow` style.
struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        let Some(body) = document().body() else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("could not set body overflow: {e:?}");
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&mut self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&mut self) {
        Self::set_overflow("");
    }
}

fn chip_class(theme: ThemePreference) -> &'static str {
    theme.pick("bg-gray-100 text-gray-700", "bg-gray-700 text-gray-300")
}

fn secondary_button(theme: ThemePreference) -> &'static str {
    theme.pick(
        "bg-gray-100 text-gray-700 hover:bg-gray-200",
        "bg-gray-700 text-gray-300 hover:bg-gray-600",
    )
}

const PRIMARY_BUTTON: &str = "bg-gradient-to-r from-purple-500 to-blue-500 text-white hover:from-purple-600 hover:to-blue-600 transition-all duration-200";

#[component]
pub fn Projects(theme: Signal<ThemePreference>) -> impl IntoView {
    let portfolio = Portfolio::get();
    let root = NodeRef::<html::Section>::new();
    let modal = StoredValue::new_local(ProjectModal::new(BodyScrollLock));
    let (shown, set_shown) = signal(None::<u32>);

    let sync = move || set_shown.set(modal.with_value(|m| m.selected().map(|p| p.id)));
    let open = move |project: &ProjectRecord| {
        modal.update_value(|m| m.open(project.clone()));
        sync();
    };
    let close = move || {
        modal.update_value(ProjectModal::close);
        sync();
    };

    on_cleanup(move || {
        modal.try_update_value(ProjectModal::close);
    });

    use_section_motion(root, |motion, section| {
        motion.register_each(query_all(section, ".animate-on-scroll"), |i| {
            TransitionDescriptor::fade_rise().staggered(i, ENTRANCE_STAGGER)
        });
    });

    view! {
        <section
            id=SectionId::Projects.as_str()
            node_ref=root
            class=move || format!("py-20 {}", theme.get().pick("bg-white", "bg-gray-900"))
        >
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Featured Projects"
                        subtitle="Some of my recent work that I'm proud of"
                        theme
                    />

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {portfolio
                            .projects
                            .iter()
                            .map(|project| {
                                view! {
                                    <div class="animate-on-scroll">
                                        <ProjectCard project theme on_open=move || open(project) />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            {move || {
                shown
                    .get()
                    .and_then(|id| portfolio.project(id))
                    .map(|project| view! { <ProjectDetail project theme on_close=close /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static ProjectRecord,
    theme: Signal<ThemePreference>,
    on_open: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "group cursor-pointer rounded-2xl overflow-hidden shadow-xl hover:shadow-2xl transition-all duration-300 hover:-translate-y-2 {}",
                    theme.get().pick("bg-white", "bg-gray-800"),
                )
            }
            on:click=move |_| on_open()
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-300"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
            </div>
            <div class="p-6">
                <h3 class=move || {
                    format!(
                        "text-xl font-bold mb-3 {}",
                        theme.get().pick("text-gray-900", "text-white"),
                    )
                }>{project.title.clone()}</h3>
                <p class=move || {
                    format!("text-sm mb-4 {}", theme.get().pick("text-gray-600", "text-gray-300"))
                }>{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "px-3 py-1 rounded-full text-xs font-medium {}",
                                        chip_class(theme.get()),
                                    )
                                }>{tag.clone()}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3">
                    <a
                        href=project.github_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                        class=move || {
                            format!(
                                "flex items-center gap-2 px-4 py-2 rounded-lg transition-colors duration-200 {}",
                                secondary_button(theme.get()),
                            )
                        }
                    >
                        <i class="devicon-github-plain" />
                        "Code"
                    </a>
                    <a
                        href=project.live_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                        class=format!("flex items-center gap-2 px-4 py-2 rounded-lg {PRIMARY_BUTTON}")
                    >
                        "↗ Live"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(
    project: &'static ProjectRecord,
    theme: Signal<ThemePreference>,
    on_close: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
            role="dialog"
            aria-modal="true"
            aria-label=project.title.clone()
        >
            <div class=move || {
                format!(
                    "relative w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-2xl shadow-2xl {}",
                    theme.get().pick("bg-white", "bg-gray-800"),
                )
            }>
                <button
                    class=move || {
                        format!(
                            "absolute top-4 right-4 p-2 rounded-full transition-colors duration-200 {}",
                            secondary_button(theme.get()),
                        )
                    }
                    aria-label="Close"
                    on:click=move |_| on_close()
                >
                    "✕"
                </button>

                <div class="p-8">
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full h-64 object-cover rounded-xl mb-6"
                    />
                    <h3 class=move || {
                        format!(
                            "text-3xl font-bold mb-4 {}",
                            theme.get().pick("text-gray-900", "text-white"),
                        )
                    }>{project.title.clone()}</h3>
                    <p class=move || {
                        format!(
                            "text-lg mb-6 leading-relaxed {}",
                            theme.get().pick("text-gray-600", "text-gray-300"),
                        )
                    }>{project.long_description.clone()}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class=move || {
                                        format!(
                                            "px-4 py-2 rounded-full text-sm font-medium {}",
                                            chip_class(theme.get()),
                                        )
                                    }>{tag.clone()}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-4">
                        <a
                            href=project.github_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=move || {
                                format!(
                                    "flex items-center gap-2 px-6 py-3 rounded-lg transition-colors duration-200 {}",
                                    secondary_button(theme.get()),
                                )
                            }
                        >
                            <i class="devicon-github-plain" />
                            "View Code"
                        </a>
                        <a
                            href=project.live_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=format!("flex items-center gap-2 px-6 py-3 rounded-lg {PRIMARY_BUTTON}")
                        >
                            "↗ Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
