use std::time::Duration;

use leptos::{html, prelude::*};

use super::motion::{query_all, query_one, register_timeline, use_scroller, use_section_motion};
use crate::{
    motion::{
        scatter, Easing, Position, Timeline, TransitionDescriptor, VisualState, ENTRANCE_STAGGER,
    },
    nav::SectionId,
    portfolio::Portfolio,
    theme::ThemePreference,
};

const PARTICLE_COUNT: usize = 20;

struct Shape {
    placement: &'static str,
    light: &'static str,
    dark: &'static str,
    style: &'static str,
    sway: VisualState,
    period: Duration,
}

static SHAPES: [Shape; 3] = [
    Shape {
        placement: "top-32 right-32 w-16 h-16",
        light: "rounded-lg rotate-45 opacity-20 bg-purple-500",
        dark: "rounded-lg rotate-45 opacity-20 bg-purple-400",
        style: "",
        sway: VisualState::REST.with_y(-20.0).with_x(10.0).with_rotation(5.0),
        period: Duration::from_secs(4),
    },
    Shape {
        placement: "bottom-40 left-20 w-12 h-12",
        light: "rounded-full opacity-25 bg-blue-500",
        dark: "rounded-full opacity-25 bg-blue-400",
        style: "",
        sway: VisualState::REST.with_y(15.0).with_x(-15.0).with_rotation(-3.0),
        period: Duration::from_secs(5),
    },
    Shape {
        placement: "top-1/2 right-20 w-8 h-8",
        light: "rotate-12 opacity-30 bg-indigo-500",
        dark: "rotate-12 opacity-30 bg-indigo-400",
        style: "clip-path: polygon(50% 0%, 0% 100%, 100% 100%)",
        sway: VisualState::REST.with_y(-10.0).with_x(20.0).with_rotation(8.0),
        period: Duration::from_secs(6),
    },
];

struct Particle {
    left: f64,
    top: f64,
    drift: VisualState,
    duration: Duration,
}

fn particle(index: usize) -> Particle {
    Particle {
        left: scatter(index, 0) * 100.0,
        top: scatter(index, 1) * 100.0,
        drift: VisualState::REST
            .with_y(-100.0 - scatter(index, 2) * 200.0)
            .with_x((scatter(index, 3) - 0.5) * 200.0)
            .with_opacity(0.0),
        duration: Duration::from_secs_f64(3.0 + 2.0 * scatter(index + PARTICLE_COUNT, 2)),
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn entrance_timeline(words: usize, buttons: usize) -> Timeline<&'static str> {
    let rise = |y: f64| VisualState::REST.with_y(y).with_opacity(0.0);
    Timeline::new()
        .add(
            ".hero-bg",
            1,
            TransitionDescriptor::enter_from(
                VisualState::REST.with_scale(1.05),
                ms(1500),
                Easing::Power2Out,
            ),
            Duration::ZERO,
            Position::Sequential,
        )
        .add(
            ".floating-element",
            SHAPES.len(),
            TransitionDescriptor::enter_from(rise(100.0), ms(1200), Easing::BackOut(1.7)),
            ms(200),
            Position::Overlap(ms(1000)),
        )
        .add(
            ".hero-title-word",
            words,
            TransitionDescriptor::enter_from(rise(100.0), ms(1000), Easing::Power3Out),
            ms(150),
            Position::Overlap(ms(800)),
        )
        .add(
            ".hero-subtitle",
            1,
            TransitionDescriptor::enter_from(rise(40.0), ms(800), Easing::Power2Out),
            Duration::ZERO,
            Position::Overlap(ms(500)),
        )
        .add(
            ".hero-description",
            2,
            TransitionDescriptor::enter_from(rise(20.0), ms(800), Easing::Power2Out),
            Duration::ZERO,
            Position::Overlap(ms(400)),
        )
        .add(
            ".hero-button",
            buttons,
            TransitionDescriptor::enter_from(
                VisualState::REST.with_y(20.0).with_opacity(0.8).with_scale(0.95),
                ms(600),
                Easing::BackOut(1.7),
            ),
            ms(100),
            Position::Overlap(ms(300)),
        )
        .add(
            ".hero-scroll",
            1,
            TransitionDescriptor::enter_from(rise(10.0), ms(600), Easing::Power2Out),
            Duration::ZERO,
            Position::Overlap(ms(200)),
        )
}

#[component]
pub fn Hero(theme: Signal<ThemePreference>) -> impl IntoView {
    let profile = &Portfolio::get().profile;
    let scroller = use_scroller();
    let root = NodeRef::<html::Section>::new();

    let name_words = profile.name.split_whitespace().collect::<Vec<_>>();
    let greeting = ["Hi,", "I'm"];
    let word_count = greeting.len() + name_words.len();

    use_section_motion(root, move |motion, section| {
        let timeline = entrance_timeline(word_count, 2);
        register_timeline(motion, section, &timeline);
        for (i, shape) in SHAPES.iter().enumerate() {
            motion.register(
                query_one(section, &format!(".floating-loop-{i}")),
                TransitionDescriptor::oscillate(shape.sway, shape.period),
            );
        }
        motion.register(
            query_one(section, ".hero-scroll-bounce"),
            TransitionDescriptor::oscillate(VisualState::REST.with_y(10.0), ms(2000)),
        );
        motion.register_each(query_all(section, ".particle"), |i| {
            let p = particle(i);
            TransitionDescriptor::drift(p.drift, p.duration).staggered(i, ENTRANCE_STAGGER)
        });
    });

    let muted = move || theme.get().pick("text-gray-600", "text-gray-300");

    view! {
        <section
            id=SectionId::Home.as_str()
            node_ref=root
            class=move || {
                format!(
                    "min-h-screen flex items-center justify-center relative overflow-hidden {}",
                    theme.get().pick("bg-white", "bg-gray-900"),
                )
            }
        >
            <div class="hero-bg absolute inset-0 z-0">
                <div class=move || {
                    format!(
                        "absolute inset-0 bg-gradient-to-br {}",
                        theme
                            .get()
                            .pick(
                                "from-purple-50 via-blue-50 to-indigo-50",
                                "from-purple-900/30 via-blue-900/20 to-indigo-900/30",
                            ),
                    )
                } />

                {SHAPES
                    .iter()
                    .enumerate()
                    .map(|(i, shape)| {
                        view! {
                            <div class=format!("floating-element absolute {}", shape.placement)>
                                <div class=format!("floating-loop-{i} w-full h-full")>
                                    <div
                                        class=move || {
                                            format!("w-full h-full {}", theme.get().pick(shape.light, shape.dark))
                                        }
                                        style=shape.style
                                    />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="absolute inset-0 pointer-events-none">
                    {(0..PARTICLE_COUNT)
                        .map(|i| {
                            let p = particle(i);
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "particle absolute w-1 h-1 rounded-full {}",
                                            theme.get().pick("bg-gray-400/40", "bg-white/30"),
                                        )
                                    }
                                    style=format!(
                                        "left: {:.2}%; top: {:.2}%; will-change: transform, opacity",
                                        p.left,
                                        p.top,
                                    )
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="container mx-auto px-6 text-center relative z-10">
                <div class="max-w-5xl mx-auto">
                    <div class="overflow-hidden mb-6 pt-4">
                        <h1 class=move || {
                            format!(
                                "text-3xl md:text-8xl font-bold leading-tight {}",
                                theme.get().pick("text-gray-900", "text-white"),
                            )
                        }>
                            {greeting
                                .into_iter()
                                .map(|word| {
                                    view! {
                                        <span class="hero-title-word inline-block mr-4">{word}</span>
                                    }
                                })
                                .collect_view()}
                            {name_words
                                .into_iter()
                                .map(|word| {
                                    view! {
                                        <span class="hero-title-word inline-block mr-4">
                                            <span class="bg-gradient-to-r from-purple-500 via-blue-500 to-purple-500 bg-clip-text text-transparent inline-block">
                                                {word}
                                            </span>
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </h1>
                    </div>

                    <div class="hero-subtitle flex items-center justify-center gap-4 text-xl md:text-3xl mb-6 flex-wrap">
                        {profile
                            .roles
                            .iter()
                            .enumerate()
                            .map(|(i, role)| {
                                view! {
                                    {(i > 0)
                                        .then(|| {
                                            view! {
                                                <span class="hidden md:inline text-gray-400">"•"</span>
                                            }
                                        })}
                                    <span class=muted>{role.clone()}</span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class=move || {
                        format!(
                            "hero-description text-lg md:text-xl mb-8 max-w-3xl mx-auto leading-relaxed {}",
                            theme.get().pick("text-gray-600", "text-gray-400"),
                        )
                    }>{profile.headline.clone()}</p>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center items-center mb-20">
                        <div class="hero-button">
                            <button
                                class="bg-gradient-to-r from-purple-500 to-blue-500 text-white px-10 py-4 rounded-full font-semibold shadow-2xl hover:shadow-purple-500/25 hover:scale-105 transition-all duration-300"
                                on:click=move |_| {
                                    scroller.scroll_to(SectionId::Contact.as_str());
                                }
                            >
                                "⚡ Let's Create Something Amazing"
                            </button>
                        </div>
                        <div class="hero-button">
                            <a
                                href=profile.resume_path.clone()
                                download=profile.resume_path.trim_start_matches('/')
                                class=move || {
                                    format!(
                                        "flex items-center gap-3 px-10 py-4 rounded-full font-semibold border-2 transition-all duration-300 hover:scale-105 {}",
                                        theme
                                            .get()
                                            .pick(
                                                "border-gray-300 text-gray-700 hover:border-purple-500 hover:text-purple-600 hover:bg-purple-50",
                                                "border-gray-600 text-gray-300 hover:border-purple-500 hover:text-purple-400 hover:bg-purple-500/10",
                                            ),
                                    )
                                }
                            >
                                "⤓ Download Resume"
                            </a>
                        </div>
                    </div>

                    <div class="hero-description flex flex-wrap justify-center gap-3 mb-16">
                        {profile
                            .hero_badges
                            .iter()
                            .map(|badge| {
                                view! {
                                    <span class=move || {
                                        format!(
                                            "px-4 py-2 rounded-full text-sm font-medium backdrop-blur-sm border transition-all duration-300 hover:scale-110 {}",
                                            theme
                                                .get()
                                                .pick(
                                                    "bg-white/50 text-gray-700 border-gray-200",
                                                    "bg-gray-800/50 text-gray-300 border-gray-700",
                                                ),
                                        )
                                    }>{badge.clone()}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <button
                    class="hero-scroll cursor-pointer group"
                    on:click=move |_| {
                        scroller.scroll_to(SectionId::About.as_str());
                    }
                >
                    <div class="hero-scroll-bounce flex flex-col items-center gap-3 group-hover:text-purple-500 transition-colors duration-300">
                        <span class=move || {
                            format!(
                                "text-sm font-medium {}",
                                theme.get().pick("text-gray-600", "text-gray-400"),
                            )
                        }>"Discover More"</span>
                        <span class="text-2xl">"⌄"</span>
                    </div>
                </button>
            </div>
        </section>
    }
}
