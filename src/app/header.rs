use leptos::{either::Either, prelude::*};

use crate::{
    icons::Icon,
    kit::{ButtonSize, ButtonVariant},
    navigation::{MobileMenu, SectionId},
};

use super::{
    theme::ThemeContext,
    ui::{Button, Glyph, Tooltip},
};

const NAV_LINK_CLASS: &str = "text-sm md:text-[15px] px-3 py-2 rounded-xl transition-colors focus:outline-none focus:ring-2 focus:ring-primary focus:ring-offset-2";

#[component]
fn NavLink(
    section: SectionId,
    #[prop(optional)] active: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let is_active = move || active.map(|a| a.get()).unwrap_or(false);
    view! {
        <a
            href=section.href()
            class=move || {
                let state = if is_active() {
                    "bg-primary text-primary-foreground"
                } else {
                    "hover:bg-muted"
                };
                format!("{NAV_LINK_CLASS} {state}")
            }
            aria-label=format!("Navigate to {} section", section.label())
            aria-current=move || is_active().then_some("page")
            on:click=move |_| {
                if let Some(cb) = on_click.as_ref() {
                    cb.run(());
                }
            }
        >
            {section.label()}
        </a>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ThemeContext { dark, toggle } = expect_context::<ThemeContext>();
    view! {
        <Tooltip content="Toggle theme">
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Icon
                on_click=toggle
                attr:aria-label=move || {
                    format!("Switch to {} mode", if dark.get() { "light" } else { "dark" })
                }
            >
                {move || {
                    if dark.get() {
                        Either::Left(view! { <Glyph icon=Icon::Sun class="h-4 w-4" /> })
                    } else {
                        Either::Right(view! { <Glyph icon=Icon::Moon class="h-4 w-4" /> })
                    }
                }}
            </Button>
        </Tooltip>
    }
}

#[component]
pub fn Header(
    #[prop(into)] brand: String,
    active: Memo<SectionId>,
    menu: RwSignal<MobileMenu>,
) -> impl IntoView {
    let toggle_menu = Callback::new(move |_: ()| menu.update(|m| m.toggle()));
    let close_menu = Callback::new(move |_: ()| menu.update(|m| m.navigated()));
    let menu_open = move || menu.with(|m| m.is_open());

    view! {
        <header class="sticky top-0 z-50 backdrop-blur bg-white/70 dark:bg-black/30 border-b">
            <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
                <a
                    href=SectionId::Home.href()
                    class="font-medium tracking-tight text-sm md:text-base focus:outline-none focus:ring-2 focus:ring-primary focus:ring-offset-2 rounded-lg"
                    aria-label="Go to home section"
                >
                    {brand}
                </a>

                <nav class="hidden md:flex items-center" aria-label="Main navigation">
                    {SectionId::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <NavLink
                                    section
                                    active=Signal::derive(move || active.get() == section)
                                />
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        class="md:hidden"
                        on_click=toggle_menu
                        attr:aria-label="Toggle mobile menu"
                        attr:aria-expanded=move || menu_open().to_string()
                    >
                        {move || {
                            if menu_open() {
                                Either::Left(view! { <Glyph icon=Icon::Close class="h-4 w-4" /> })
                            } else {
                                Either::Right(view! { <Glyph icon=Icon::Menu class="h-4 w-4" /> })
                            }
                        }}
                    </Button>
                    <a href=SectionId::Contact.href() class="hidden md:block">
                        <Button>"Hire Me"</Button>
                    </a>
                </div>
            </div>

            <Show when=menu_open>
                <nav
                    class="md:hidden border-t bg-background/95 backdrop-blur"
                    aria-label="Mobile navigation"
                >
                    <div class="px-4 py-3 space-y-2">
                        {SectionId::NAV
                            .into_iter()
                            .map(|section| view! { <NavLink section on_click=close_menu /> })
                            .collect_view()}
                        <div class="pt-2">
                            <a href=SectionId::Contact.href() on:click=move |_| close_menu.run(())>
                                <Button class="w-full">"Hire Me"</Button>
                            </a>
                        </div>
                    </div>
                </nav>
            </Show>
        </header>
    }
}
