use leptos::{ev, html, prelude::*};
use leptos_use::use_event_listener;

use crate::{
    icons::Icon,
    kit::{
        badge_class, button_class, cn, tabs_trigger_class, BadgeVariant, ButtonSize,
        ButtonVariant, TabState, TooltipEvent, TooltipVisibility, CARD_CLASS,
        CARD_CONTENT_CLASS, CARD_HEADER_CLASS, CARD_TITLE_CLASS, SEPARATOR_CLASS,
        TABS_LIST_CLASS,
    },
};

const TOOLTIP_CLASS: &str = "absolute top-full left-1/2 -translate-x-1/2 mt-2 z-50 px-3 py-2 text-sm text-white bg-gray-900 rounded-lg shadow-lg whitespace-nowrap";

#[component]
pub fn Glyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <i class=cn(&[icon.class_name(), &class]) aria-hidden="true"></i> }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional)] submit: bool,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=button_class(variant, size, &class)
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |_| {
                if let Some(cb) = on_click.as_ref() {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=badge_class(variant, &class)>{children()}</span> }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=cn(&[CARD_CLASS, &class])>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=cn(&[CARD_HEADER_CLASS, &class])>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=cn(&[CARD_TITLE_CLASS, &class])>{children()}</h3> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=cn(&[CARD_CONTENT_CLASS, &class])>{children()}</div> }
}

#[component]
pub fn Separator(#[prop(optional, into)] class: String) -> impl IntoView {
    view! { <div role="separator" class=cn(&[SEPARATOR_CLASS, &class])></div> }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[component]
pub fn LoadingSpinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let size = match size {
        SpinnerSize::Sm => "h-4 w-4 border-2",
        SpinnerSize::Md => "h-8 w-8 border-2",
        SpinnerSize::Lg => "h-12 w-12 border-4",
    };
    view! {
        <span
            role="status"
            aria-label="Loading"
            class=cn(
                &[
                    "inline-block animate-spin rounded-full border-current border-t-transparent",
                    size,
                    &class,
                ],
            )
        ></span>
    }
}

#[derive(Debug, Clone, Copy)]
struct TabsContext(RwSignal<TabState>);

/// Selection is local to this instance; panes for other keys are unmounted.
#[component]
pub fn Tabs(
    #[prop(into)] default_value: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    provide_context(TabsContext(RwSignal::new(TabState::new(default_value))));
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn TabsList(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div role="tablist" class=cn(&[TABS_LIST_CLASS, &class])>
            {children()}
        </div>
    }
}

#[component]
pub fn TabsTrigger(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let TabsContext(state) = expect_context::<TabsContext>();
    let key = value.clone();
    let selected = Memo::new(move |_| state.with(|s| s.is_active(&key)));
    view! {
        <button
            type="button"
            role="tab"
            aria-selected=move || selected.get().to_string()
            class=move || tabs_trigger_class(selected.get(), &class)
            on:click=move |_| state.update(|s| s.select(&value))
        >
            {children()}
        </button>
    }
}

#[component]
pub fn TabsContent(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let TabsContext(state) = expect_context::<TabsContext>();
    let class = cn(&["mt-2", &class]);
    view! {
        <Show when=move || state.with(|s| s.is_active(&value))>
            <div role="tabpanel" class=class.clone()>
                {children()}
            </div>
        </Show>
    }
}

/// Shows `content` while the wrapped trigger is hovered or holds focus.
#[component]
pub fn Tooltip(#[prop(into)] content: String, children: Children) -> impl IntoView {
    let trigger = NodeRef::<html::Span>::new();
    let (visibility, set_visibility) = signal(TooltipVisibility::default());
    let handle = move |event: TooltipEvent| set_visibility.update(|v| v.handle(event));

    let _ = use_event_listener(trigger, ev::mouseenter, move |_| {
        handle(TooltipEvent::PointerEnter)
    });
    let _ = use_event_listener(trigger, ev::mouseleave, move |_| {
        handle(TooltipEvent::PointerLeave)
    });
    let _ = use_event_listener(trigger, ev::focusin, move |_| handle(TooltipEvent::Focus));
    let _ = use_event_listener(trigger, ev::focusout, move |_| handle(TooltipEvent::Blur));

    view! {
        <span node_ref=trigger class="relative inline-flex">
            {children()}
            <Show when=move || visibility.get().is_visible()>
                <div role="tooltip" class=TOOLTIP_CLASS>
                    {content.clone()}
                    <div class="absolute -top-1 left-1/2 -translate-x-1/2 w-2 h-2 bg-gray-900 rotate-45" />
                </div>
            </Show>
        </span>
    }
}
