use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::{StorageError, ThemeController, ThemePreference, ThemeStore};

/// Theme persistence on top of a `localStorage`-synced signal pair.
pub struct LocalStorageStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let raw = self
            .stored
            .try_get_untracked()
            .ok_or(StorageError::Unavailable)?;
        Ok(Some(raw).filter(|s| !s.is_empty()))
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        match self.set_stored.try_set(value.to_string()) {
            None => Ok(()),
            Some(_) => Err(StorageError::WriteFailed(
                "storage signal was disposed".to_string(),
            )),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<ThemePreference>,
    controller: StoredValue<Option<ThemeController<LocalStorageStore>>, LocalStorage>,
}

impl ThemeContext {
    pub fn preference(&self) -> Signal<ThemePreference> {
        self.preference.into()
    }

    pub fn toggle(&self) {
        let persisted = self
            .controller
            .try_update_value(|c| c.as_mut().map(ThemeController::toggle))
            .flatten();
        if persisted.is_none() {
            // storage not loaded yet, flip in memory only
            self.preference.update(|p| *p = p.toggled());
            apply_to_document(self.preference.get_untracked());
        }
    }
}

/// Sets up the page-wide theme and makes it available as context.
///
/// The server and the first client render both use the default preference.
/// The stored one is read once hydration is done.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        preference: RwSignal::new(ThemePreference::default()),
        controller: StoredValue::new_local(None),
    };

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                let mut controller = ThemeController::new(LocalStorageStore { stored, set_stored });
                let preference = ctx.preference;
                controller.on_change(move |p| {
                    preference.set(p);
                    apply_to_document(p);
                });
                let initial = controller.get();
                log::debug!("theme loaded: {initial}");
                preference.set(initial);
                apply_to_document(initial);
                ctx.controller.set_value(Some(controller));
            },
            true,
        );
    }

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn apply_to_document(preference: ThemePreference) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force("dark", preference.is_dark())
    {
        log::warn!("could not update root class: {e:?}");
    }
    if let Err(e) = root.set_attribute("data-theme", preference.as_str()) {
        log::warn!("could not update data-theme: {e:?}");
    }
}

#[component]
pub fn ThemeToggle(#[prop(optional)] class: &'static str) -> impl IntoView {
    let theme = use_theme();
    let preference = theme.preference();
    view! {
        <button
            class=move || {
                format!(
                    "p-2 rounded-full transition-colors duration-200 {} {class}",
                    preference.get().pick("hover:bg-gray-100 text-gray-700", "hover:bg-gray-800 text-yellow-400"),
                )
            }
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || if preference.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
