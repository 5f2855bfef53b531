use leptos::{html, prelude::*};
use leptos_use::{
    use_element_size, use_intersection_observer_with_options, use_window_scroll,
    use_window_size, UseElementSizeReturn, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn, UseWindowSizeReturn,
};

use crate::{
    icons::Icon,
    motion::{hero_drift, Motion, RevealOnce, REVEAL_THRESHOLD},
    navigation::{scroll_progress, SectionId, SectionTracker, ACTIVE_ROOT_MARGIN, ACTIVE_THRESHOLD},
};

use super::{
    browser::{scrollable_height, BrowserEnvironment},
    ui::Glyph,
};

/// One anchor element per page section, shared by the layout and the tracker.
#[derive(Clone, Copy)]
pub struct SectionRefs([NodeRef<html::Section>; SectionId::ALL.len()]);

impl SectionRefs {
    pub fn new() -> Self {
        Self(std::array::from_fn(|_| NodeRef::new()))
    }

    pub fn get(&self, id: SectionId) -> NodeRef<html::Section> {
        self.0[id as usize]
    }
}

/// Highlights whichever section last crossed into the middle band of the viewport.
pub fn use_active_section(refs: SectionRefs) -> Memo<SectionId> {
    let tracker = RwSignal::new(SectionTracker::default());
    for id in SectionId::ALL {
        let _ = use_intersection_observer_with_options(
            refs.get(id),
            move |entries, _| {
                for entry in entries {
                    let mut next = tracker.get_untracked();
                    if next.observe(id, entry.is_intersecting(), entry.intersection_ratio()) {
                        log::debug!("active section: {id}");
                        tracker.set(next);
                    }
                }
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![ACTIVE_THRESHOLD])
                .root_margin(ACTIVE_ROOT_MARGIN.to_string()),
        );
    }
    Memo::new(move |_| tracker.get().current())
}

/// Plays `motion` once, the first time the wrapper is at least 20% visible.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let env = expect_context::<BrowserEnvironment>();
    let target = NodeRef::<html::Div>::new();
    let latch = StoredValue::new(RevealOnce::default());
    let (shown, set_shown) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                latch.update_value(|r| {
                    if r.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        set_shown.set(true);
                    }
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::new(move |_| {
        if shown.get() {
            stop();
        }
    });

    let style = move || motion.reduced(env.reduced_motion.get()).style(shown.get());

    view! {
        <div node_ref=target class=class style=style>
            {children()}
        </div>
    }
}

#[component]
pub fn Section(
    id: SectionId,
    title: &'static str,
    node_ref: NodeRef<html::Section>,
    #[prop(optional)] icon: Option<Icon>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id.as_str() node_ref=node_ref class="scroll-mt-24 py-14 md:py-20">
            <Reveal motion=Motion::SECTION>
                <div class="flex items-center gap-3 mb-6">
                    {icon
                        .map(|icon| {
                            view! {
                                <div class="rounded-2xl p-2 ring-1 ring-border">
                                    <Glyph icon class="h-5 w-5" />
                                </div>
                            }
                        })}
                    <h2 class="text-2xl md:text-3xl font-semibold tracking-tight">{title}</h2>
                </div>
                {children()}
            </Reveal>
        </section>
    }
}

/// Page-wide scroll position, 0 at the top and 1 at the bottom.
///
/// Recomputed on scroll, on viewport resize and whenever `page` changes height.
pub fn use_scroll_progress(page: NodeRef<html::Div>) -> Memo<f64> {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn {
        height: viewport, ..
    } = use_window_size();
    let UseElementSizeReturn {
        height: content, ..
    } = use_element_size(page);
    progress_memo(
        scroll_y,
        Signal::derive(move || (viewport.get(), content.get())),
        scrollable_height,
    )
}

fn progress_memo<F>(scroll_y: Signal<f64>, layout: Signal<(f64, f64)>, scrollable: F) -> Memo<f64>
where
    F: Fn() -> f64 + Send + Sync + 'static,
{
    Memo::new(move |_| {
        layout.track();
        scroll_progress(scroll_y.get(), scrollable())
    })
}

#[component]
pub fn ScrollProgress(progress: Memo<f64>) -> impl IntoView {
    view! {
        <div
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-indigo-500 to-rose-500 z-50 origin-left"
            style=move || format!("transform: scaleX({})", progress.get())
        ></div>
    }
}

/// Inline transform for the hero block drifting up as the page scrolls.
pub fn hero_style(progress: Memo<f64>) -> impl Fn() -> String + Send + Sync + Copy + 'static {
    move || format!("transform: translateY({}px)", hero_drift(progress.get()))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_progress_follows_layout_without_scrolling() {
        let owner = Owner::new();
        owner.with(|| {
            let scroll_y = RwSignal::new(500.0);
            let layout = RwSignal::new((800.0, 1800.0));
            let scrollable = Arc::new(Mutex::new(1000.0));
            let progress = progress_memo(scroll_y.into(), layout.into(), {
                let scrollable = Arc::clone(&scrollable);
                move || *scrollable.lock().unwrap()
            });
            assert_eq!(progress.get_untracked(), 0.5);

            // a tab switch grows the page while the scroll offset stays put
            *scrollable.lock().unwrap() = 2000.0;
            layout.set((800.0, 2800.0));
            assert_eq!(progress.get_untracked(), 0.25);

            scroll_y.set(2000.0);
            assert_eq!(progress.get_untracked(), 1.0);
        });
    }
}
