use leptos::prelude::*;

use crate::theme::ThemeController;

use super::browser::{BrowserEnvironment, DocumentRoot, LocalStorageStore};

type BrowserTheme = ThemeController<LocalStorageStore, DocumentRoot>;

/// Read handle for the theme flag plus the toggle the header button calls.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub dark: ReadSignal<bool>,
    pub toggle: Callback<()>,
}

/// Loads the theme once on the client and keeps the signal and `<html>` class in step.
pub fn provide_theme(env: BrowserEnvironment) -> ThemeContext {
    let (dark, set_dark) = signal(false);
    let controller = StoredValue::new(None::<BrowserTheme>);

    Effect::watch(
        || (),
        move |_, _, _| {
            let loaded = ThemeController::load(LocalStorageStore, DocumentRoot, &env);
            set_dark.set(loaded.is_dark());
            controller.set_value(Some(loaded));
        },
        true,
    );

    let toggle = Callback::new(move |_: ()| {
        controller.update_value(|c| {
            if let Some(c) = c.as_mut() {
                let mode = c.toggle();
                log::debug!("theme switched to {mode}");
                set_dark.set(mode.is_dark());
            }
        });
    });

    let ctx = ThemeContext { dark, toggle };
    provide_context(ctx);
    ctx
}
