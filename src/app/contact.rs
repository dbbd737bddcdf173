use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::{
    homepage::SectionHeading,
    motion::{query_all, use_section_motion},
};
use crate::{
    contact::{ContactField, ContactForm, SUBMIT_DELAY},
    motion::{TransitionDescriptor, ENTRANCE_STAGGER},
    nav::SectionId,
    portfolio::Portfolio,
    theme::ThemePreference,
};

fn field_from_event(ev: &Event) -> Option<ContactField> {
    let name = ev
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.get_attribute("name"))?;
    match name.parse() {
        Ok(field) => Some(field),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

#[component]
pub fn Contact(theme: Signal<ThemePreference>) -> impl IntoView {
    let profile = &Portfolio::get().profile;
    let root = NodeRef::<html::Section>::new();

    let form = RwSignal::new(ContactForm::new());
    let notice = RwSignal::new(None::<String>);
    let pending = StoredValue::new(None::<TimeoutHandle>);

    use_section_motion(root, |motion, section| {
        motion.register_each(query_all(section, ".animate-on-scroll"), |i| {
            TransitionDescriptor::fade_rise().staggered(i, ENTRANCE_STAGGER)
        });
    });

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_update_value(Option::take) {
            handle.clear();
        }
        form.try_update(ContactForm::reset);
    });

    let on_input = move |ev: Event| {
        if let Some(field) = field_from_event(&ev) {
            let value = event_target_value(&ev);
            form.update(|f| f.set_field(field, value));
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        notice.set(None);
        let res = set_timeout_with_handle(
            move || {
                pending.set_value(None);
                if let Some(message) = form.try_update(|f| f.complete(submission)) {
                    notice.set(Some(message));
                }
            },
            SUBMIT_DELAY,
        );
        match res {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => {
                log::error!("could not schedule submission: {e:?}");
                form.update(ContactForm::reset);
            }
        }
    };

    let panel = move || {
        format!(
            "rounded-2xl p-8 {}",
            theme.get().pick("bg-gray-50", "bg-gray-800"),
        )
    };
    let panel_title = move || {
        format!(
            "text-2xl font-bold mb-6 {}",
            theme.get().pick("text-gray-900", "text-white"),
        )
    };
    let strong_text = move || theme.get().pick("text-gray-900", "text-white");
    let label_class = move || {
        format!(
            "block text-sm font-medium mb-2 {}",
            theme.get().pick("text-gray-700", "text-gray-300"),
        )
    };
    let input_class = move || {
        format!(
            "w-full px-4 py-3 rounded-xl border transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-purple-500 {}",
            theme.get().pick(
                "bg-white border-gray-300 text-gray-900 placeholder-gray-500",
                "bg-gray-700 border-gray-600 text-white placeholder-gray-400",
            ),
        )
    };
    let value_of = move |field: ContactField| form.with(|f| f.draft().get(field).to_string());

    view! {
        <section
            id=SectionId::Contact.as_str()
            node_ref=root
            class=move || format!("py-20 {}", theme.get().pick("bg-white", "bg-gray-900"))
        >
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        title="Get In Touch"
                        subtitle="Let's discuss your next project or just say hello"
                        theme
                    />

                    <div class="grid lg:grid-cols-2 gap-16">
                        <div class="animate-on-scroll">
                            <div class=panel>
                                <h3 class=panel_title>"Let's Connect"</h3>
                                <p class=move || {
                                    format!(
                                        "text-lg mb-8 {}",
                                        theme.get().pick("text-gray-600", "text-gray-300"),
                                    )
                                }>
                                    "I'm always open to discussing new opportunities, creative projects, or potential collaborations. Feel free to reach out!"
                                </p>

                                <div class="space-y-6 mb-8">
                                    {profile
                                        .contact
                                        .iter()
                                        .map(|channel| {
                                            view! {
                                                <a
                                                    href=channel.href.clone()
                                                    class=move || {
                                                        format!(
                                                            "flex items-center gap-4 p-4 rounded-xl transition-all duration-200 shadow-md hover:shadow-lg {}",
                                                            theme.get().pick(
                                                                "bg-white hover:bg-gray-50 text-gray-700",
                                                                "bg-gray-700 hover:bg-gray-600 text-gray-300",
                                                            ),
                                                        )
                                                    }
                                                >
                                                    <div class="w-9 h-9 flex items-center justify-center bg-gradient-to-r from-purple-500 to-blue-500 rounded-lg text-white">
                                                        {channel.kind.glyph()}
                                                    </div>
                                                    <div>
                                                        <h4 class=move || format!("font-medium {}", strong_text())>
                                                            {channel.kind.label()}
                                                        </h4>
                                                        <p class=move || {
                                                            format!(
                                                                "text-sm {}",
                                                                theme.get().pick("text-gray-600", "text-gray-400"),
                                                            )
                                                        }>{channel.value.clone()}</p>
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>

                                <div>
                                    <h4 class=move || format!("font-medium mb-4 {}", strong_text())>
                                        "Follow me on social media"
                                    </h4>
                                    <div class="flex gap-4">
                                        {profile
                                            .social
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <a
                                                        href=link.url.clone()
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        aria-label=link.network.label()
                                                        class=move || {
                                                            format!(
                                                                "p-3 rounded-full transition-all duration-200 shadow-md hover:shadow-lg {}",
                                                                theme.get().pick(
                                                                    "bg-white hover:bg-purple-500 text-gray-700 hover:text-white",
                                                                    "bg-gray-700 hover:bg-purple-600 text-gray-300",
                                                                ),
                                                            )
                                                        }
                                                    >
                                                        <i class=link.network.icon() />
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="animate-on-scroll">
                            <div class=panel>
                                <h3 class=panel_title>"Send Message"</h3>
                                <form class="space-y-6" on:submit=on_submit>
                                    <div>
                                        <label for="name" class=label_class>"Your Name"</label>
                                        <input
                                            type="text"
                                            id="name"
                                            name=ContactField::Name.as_str()
                                            required
                                            placeholder="Enter your name"
                                            class=input_class
                                            prop:value=move || value_of(ContactField::Name)
                                            on:input=on_input
                                        />
                                    </div>
                                    <div>
                                        <label for="email" class=label_class>"Email Address"</label>
                                        <input
                                            type="email"
                                            id="email"
                                            name=ContactField::Email.as_str()
                                            required
                                            placeholder="Enter your email"
                                            class=input_class
                                            prop:value=move || value_of(ContactField::Email)
                                            on:input=on_input
                                        />
                                    </div>
                                    <div>
                                        <label for="message" class=label_class>"Message"</label>
                                        <textarea
                                            id="message"
                                            name=ContactField::Message.as_str()
                                            required
                                            rows="5"
                                            placeholder="Tell me about your project or just say hello..."
                                            class=move || format!("{} resize-none", input_class())
                                            prop:value=move || value_of(ContactField::Message)
                                            on:input=on_input
                                        />
                                    </div>
                                    <button
                                        type="submit"
                                        disabled=move || form.with(ContactForm::is_submitting)
                                        class="w-full py-4 px-6 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-semibold rounded-xl hover:from-purple-700 hover:to-blue-700 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2 shadow-lg hover:shadow-xl"
                                    >
                                        <Show when=move || form.with(ContactForm::is_submitting)>
                                            <span class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin" />
                                        </Show>
                                        {move || form.with(ContactForm::button_label)}
                                    </button>
                                    <p
                                        role="status"
                                        aria-live="polite"
                                        class=move || {
                                            format!(
                                                "text-sm {}",
                                                theme.get().pick("text-green-700", "text-green-400"),
                                            )
                                        }
                                    >
                                        {move || notice.get()}
                                    </p>
                                </form>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
