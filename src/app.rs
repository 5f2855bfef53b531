mod browser;
mod contact;
mod header;
mod homepage;
mod layout;
mod theme;
mod ui;

use std::time::Duration;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;
use ui::{LoadingSpinner, SpinnerSize};

pub use browser::BrowserEnvironment;
pub use theme::{provide_theme, ThemeContext};

/// How long the loading screen stays up before the page content mounts.
pub const LOADING_DURATION: Duration = Duration::from_secs(1);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Portfolio: experience, projects, skills and contact details."
                />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let env = BrowserEnvironment::new();
    provide_context(env);
    provide_theme(env);

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Holds the loading screen for [`LOADING_DURATION`], then mounts the page.
#[component]
fn PortfolioPage() -> impl IntoView {
    let (loading, set_loading) = signal(true);

    Effect::watch(
        || (),
        move |_, _, _| match set_timeout_with_handle(
            move || set_loading.set(false),
            LOADING_DURATION,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't arm loading timer: {e:?}");
                set_loading.set(false);
            }
        },
        true,
    );

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="min-h-screen flex flex-col items-center justify-center gap-4 text-muted-foreground">
                        <LoadingSpinner size=SpinnerSize::Lg />
                        <p class="text-sm">"Loading portfolio..."</p>
                    </div>
                }
            }
        >
            {match content::portfolio() {
                Ok(portfolio) => view! { <HomePage portfolio /> }.into_any(),
                Err(e) => {
                    log::error!("portfolio content unavailable: {e}");
                    view! {
                        <p class="min-h-screen flex items-center justify-center text-sm">
                            "Portfolio content is unavailable right now."
                        </p>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}
