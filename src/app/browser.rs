use leptos::prelude::*;
use leptos_use::{use_media_query, use_preferred_dark};

use crate::{
    environment::EnvironmentSignals,
    theme::{PreferenceStore, RootScope, StorageError, DARK_CLASS},
};

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// The `<html>` element's class list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl RootScope for DocumentRoot {
    fn set_dark(&self, dark: bool) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let Some(root) = root else {
            log::warn!("no document root to apply theme to");
            return;
        };
        if root.class_list().toggle_with_force(DARK_CLASS, dark).is_err() {
            log::warn!("couldn't toggle {DARK_CLASS} class on document root");
        }
    }
}

/// Media-query backed environment hints, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct BrowserEnvironment {
    pub dark: Signal<bool>,
    pub reduced_motion: Signal<bool>,
}

impl BrowserEnvironment {
    pub fn new() -> Self {
        Self {
            dark: use_preferred_dark(),
            reduced_motion: use_media_query("(prefers-reduced-motion: reduce)"),
        }
    }
}

impl EnvironmentSignals for BrowserEnvironment {
    fn prefers_dark(&self) -> bool {
        self.dark.get_untracked()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.get_untracked()
    }
}

/// Document height minus viewport height, 0 while rendering on the server.
pub fn scrollable_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let doc_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        (doc_height - viewport).max(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
