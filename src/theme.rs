use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// localStorage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Selects the variant matching this preference.
    ///
    /// Sections route every light/dark class decision through here so a
    /// single flag decides the whole page.
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme preference: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    WriteFailed(String),
}

/// Durable key-value slot for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// In-process store, used on the server and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

type Listener = Box<dyn Fn(ThemePreference)>;

/// Owns the current preference, persists every change and notifies
/// subscribers.
pub struct ThemeController<S: ThemeStore> {
    current: ThemePreference,
    store: S,
    listeners: Vec<Listener>,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Reads the stored preference, falling back to the default when the
    /// value is missing, unparseable or the store fails.
    pub fn new(store: S) -> Self {
        let current = match store.load() {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                log::warn!("ignoring stored theme: {e}");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                log::warn!("theme store unavailable, using default: {e}");
                ThemePreference::default()
            }
        };
        Self {
            current,
            store,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> ThemePreference {
        self.current
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.current.toggled());
        self.current
    }

    pub fn set(&mut self, preference: ThemePreference) {
        self.current = preference;
        if let Err(e) = self.store.save(preference.as_str()) {
            log::warn!("failed to persist theme: {e}");
        }
        for listener in &self.listeners {
            listener(preference);
        }
    }

    pub fn on_change(&mut self, listener: impl Fn(ThemePreference) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&mut self, value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed(value.to_string()))
        }
    }

    #[test]
    fn test_default_without_stored_value() {
        let controller = ThemeController::new(MemoryStore::new());
        assert_eq!(controller.get(), ThemePreference::Light);
    }

    #[test]
    fn test_reads_stored_value() {
        let controller = ThemeController::new(MemoryStore::with_value("dark"));
        assert_eq!(controller.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_garbage_stored_value_falls_back() {
        let controller = ThemeController::new(MemoryStore::with_value("\"solarized\""));
        assert_eq!(controller.get(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut controller = ThemeController::new(MemoryStore::new());
        assert_eq!(controller.toggle(), ThemePreference::Dark);
        assert_eq!(controller.store().value(), Some("dark"));
        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.store().value(), Some("light"));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for start in ["light", "dark"] {
            let mut controller = ThemeController::new(MemoryStore::with_value(start));
            let original = controller.get();
            controller.toggle();
            controller.toggle();
            assert_eq!(controller.get(), original);
        }
    }

    #[test]
    fn test_on_change_notifies_every_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut controller = ThemeController::new(MemoryStore::new());
        for _ in 0..2 {
            let seen = seen.clone();
            controller.on_change(move |p| seen.borrow_mut().push(p));
        }
        controller.toggle();
        assert_eq!(
            *seen.borrow(),
            vec![ThemePreference::Dark, ThemePreference::Dark]
        );
    }

    #[test]
    fn test_broken_store_never_fails() {
        let mut controller = ThemeController::new(BrokenStore);
        assert_eq!(controller.get(), ThemePreference::Light);
        assert_eq!(controller.toggle(), ThemePreference::Dark);
        assert_eq!(controller.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_pick_selects_exactly_one_variant() {
        let light = ThemePreference::Light.pick("bg-white", "bg-gray-900");
        let dark = ThemePreference::Dark.pick("bg-white", "bg-gray-900");
        assert_eq!(light, "bg-white");
        assert_eq!(dark, "bg-gray-900");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" light\n".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(
            serde_json::to_string(&ThemePreference::Light).unwrap(),
            "\"light\""
        );
    }
}
