use std::{cell::RefCell, collections::HashMap, fmt, str::FromStr};

use thiserror::Error;

use crate::environment::EnvironmentSignals;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("couldn't read preference {0}")]
    Read(String),
    #[error("couldn't write preference {0}")]
    Write(String),
}

/// Durable key/value preferences (local storage in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The document scope the theme is mirrored onto.
pub trait RootScope {
    fn set_dark(&self, dark: bool);
}

/// In-memory [`PreferenceStore`]; nothing outlives the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<R: RootScope + ?Sized> RootScope for &R {
    fn set_dark(&self, dark: bool) {
        (**self).set_dark(dark)
    }
}

/// Stored preference wins, then the environment hint, then light.
///
/// A store that can't be read, or holds something other than `light`/`dark`,
/// falls back without retrying.
pub fn resolve_initial<S, E>(store: &S, env: &E) -> ThemeMode
where
    S: PreferenceStore + ?Sized,
    E: EnvironmentSignals + ?Sized,
{
    match store.get(THEME_STORAGE_KEY) {
        Ok(Some(saved)) => match saved.parse::<ThemeMode>() {
            Ok(mode) => mode,
            Err(e) => {
                log::debug!("ignoring stored theme: {e}");
                ThemeMode::from_dark(env.prefers_dark())
            }
        },
        Ok(None) => ThemeMode::from_dark(env.prefers_dark()),
        Err(e) => {
            log::warn!("theme preference unavailable, using light: {e}");
            ThemeMode::Light
        }
    }
}

/// Page-lifetime theme state.
///
/// Every change is applied to the root scope first and persisted second.
pub struct ThemeController<S, R> {
    mode: ThemeMode,
    store: S,
    root: R,
}

impl<S, R> ThemeController<S, R>
where
    S: PreferenceStore,
    R: RootScope,
{
    /// Resolves the initial mode and mirrors it onto the root scope.
    pub fn load<E>(store: S, root: R, env: &E) -> Self
    where
        E: EnvironmentSignals + ?Sized,
    {
        let mode = resolve_initial(&store, env);
        root.set_dark(mode.is_dark());
        log::debug!("initial theme: {mode}");
        Self { mode, store, root }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.root.set_dark(mode.is_dark());
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, mode.as_str()) {
            log::warn!("couldn't persist theme: {e}");
        }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingRoot {
        dark: Cell<Option<bool>>,
    }

    impl RootScope for RecordingRoot {
        fn set_dark(&self, dark: bool) {
            self.dark.set(Some(dark));
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }
    }

    #[test]
    fn test_theme_mode_round_trips_literals() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_initial_precedence() {
        let dark_env = FixedEnvironment::new(true, false);
        let light_env = FixedEnvironment::new(false, false);

        let empty = MemoryStore::default();
        assert_eq!(resolve_initial(&empty, &dark_env), ThemeMode::Dark);
        assert_eq!(resolve_initial(&empty, &light_env), ThemeMode::Light);

        let saved_light = MemoryStore::with_entry(THEME_STORAGE_KEY, "light");
        assert_eq!(resolve_initial(&saved_light, &dark_env), ThemeMode::Light);

        let saved_dark = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
        assert_eq!(resolve_initial(&saved_dark, &light_env), ThemeMode::Dark);

        let garbage = MemoryStore::with_entry(THEME_STORAGE_KEY, "sepia");
        assert_eq!(resolve_initial(&garbage, &dark_env), ThemeMode::Dark);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_light() {
        let root = RecordingRoot::default();
        let mut controller =
            ThemeController::load(BrokenStore, &root, &FixedEnvironment::new(true, false));
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(root.dark.get(), Some(false));

        // write failures are swallowed, the in-memory state still changes
        controller.toggle();
        assert!(controller.is_dark());
        assert_eq!(root.dark.get(), Some(true));
    }

    #[test]
    fn test_toggle_parity_and_root_agreement() {
        for n in 1..=7usize {
            let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "light");
            let root = RecordingRoot::default();
            let mut controller =
                ThemeController::load(&store, &root, &FixedEnvironment::new(false, false));
            for _ in 0..n {
                controller.toggle();
                assert_eq!(root.dark.get(), Some(controller.is_dark()));
            }
            let persisted = store.get(THEME_STORAGE_KEY).unwrap();
            let expected = if n % 2 == 1 { "dark" } else { "light" };
            assert_eq!(persisted.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_second_load_honours_saved_choice() {
        let store = MemoryStore::default();
        let dark_env = FixedEnvironment::new(true, false);

        let root = RecordingRoot::default();
        let mut first = ThemeController::load(&store, &root, &dark_env);
        assert_eq!(first.mode(), ThemeMode::Dark);
        assert_eq!(root.dark.get(), Some(true));
        first.set(ThemeMode::Light);

        let root = RecordingRoot::default();
        let second = ThemeController::load(&store, &root, &dark_env);
        assert_eq!(
            store.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(second.mode(), ThemeMode::Light);
        assert_eq!(root.dark.get(), Some(false));
    }
}
