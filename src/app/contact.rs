use std::sync::{Arc, Mutex};

use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    contact::{ContactForm, Scheduled, SimulatedTransport, SubmissionStatus},
    content::Profile,
    icons::Icon,
};

use super::ui::{Button, Card, CardContent, Glyph, LoadingSpinner, SpinnerSize};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 rounded-xl bg-muted focus:outline-none focus:ring-2 ring-offset-1 ring-primary";

/// The one browser timeout the form has pending, cleared when the form goes away.
#[derive(Clone, Default)]
pub struct FormTimers(Arc<Mutex<Option<TimeoutHandle>>>);

impl FormTimers {
    /// Stores `handle` as the pending timeout, clearing the one it supersedes.
    fn replace(&self, handle: TimeoutHandle) {
        if let Ok(mut pending) = self.0.lock() {
            if let Some(old) = pending.replace(handle) {
                old.clear();
            }
        }
    }

    pub fn clear(&self) {
        if let Ok(mut pending) = self.0.lock() {
            if let Some(handle) = pending.take() {
                handle.clear();
            }
        }
    }
}

/// Runs an elapsed form timer. `None` once the form has been disposed.
fn fire(form: RwSignal<ContactForm>, step: Scheduled) -> Option<Scheduled> {
    form.try_update(|f| f.on_timer(step.timer, &SimulatedTransport))
        .flatten()
}

fn arm(form: RwSignal<ContactForm>, timers: FormTimers, step: Scheduled) {
    let pending = timers.clone();
    let res = set_timeout_with_handle(
        move || {
            if let Some(next) = fire(form, step) {
                arm(form, pending, next);
            }
        },
        step.after,
    );
    match res {
        Ok(handle) => timers.replace(handle),
        Err(e) => log::warn!("couldn't arm contact form timer: {e:?}"),
    }
}

/// Owned by the page: the form machine plus its pending timer.
pub fn use_contact_form() -> (RwSignal<ContactForm>, FormTimers) {
    let form = RwSignal::new(ContactForm::default());
    let timers = FormTimers::default();
    on_cleanup({
        let timers = timers.clone();
        move || timers.clear()
    });
    (form, timers)
}

#[component]
pub fn MessageForm(form: RwSignal<ContactForm>, timers: FormTimers) -> impl IntoView {
    let invalid = Memo::new(move |_| form.with(|f| f.rejection()));
    let status = Memo::new(move |_| form.with(|f| f.status()));

    let name = move || form.with(|f| f.draft().name.clone());
    let email = move || form.with(|f| f.draft().email.clone());
    let message = move || form.with(|f| f.draft().message.clone());
    let set_name = move |v: String| form.update(|f| f.draft_mut().name = v);
    let set_email = move |v: String| form.update(|f| f.draft_mut().email = v);
    let set_message = move |v: String| form.update(|f| f.draft_mut().message = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(Some(step))) => arm(form, timers.clone(), step),
            Some(Err(e)) => log::debug!("contact draft rejected: {e}"),
            Some(Ok(None)) | None => {}
        }
    };

    view! {
        <form on:submit=on_submit class="grid gap-3" aria-label="Contact form" novalidate>
            <div class="grid md:grid-cols-2 gap-3">
                <div>
                    <label for="name" class="sr-only">
                        "Your name"
                    </label>
                    <input
                        id="name"
                        required
                        placeholder="Your name"
                        class=INPUT_CLASS
                        prop:value=name
                        on:input=move |ev| set_name(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="email" class="sr-only">
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        required
                        placeholder="Your email"
                        class=INPUT_CLASS
                        prop:value=email
                        on:input=move |ev| set_email(event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <label for="message" class="sr-only">
                    "Message"
                </label>
                <textarea
                    id="message"
                    required
                    placeholder="Message"
                    class=format!("{INPUT_CLASS} min-h-[120px]")
                    prop:value=message
                    on:input=move |ev| set_message(event_target_value(&ev))
                ></textarea>
            </div>
            {move || {
                invalid
                    .get()
                    .map(|e| {
                        view! {
                            <div class="text-amber-600 text-sm" role="alert">
                                {e.to_string()}
                            </div>
                        }
                    })
            }}
            <Show when=move || status.get() == SubmissionStatus::Success>
                <div class="text-green-600 text-sm" role="alert">
                    "Thanks! I'll get back to you soon."
                </div>
            </Show>
            <Show when=move || status.get() == SubmissionStatus::Error>
                <div class="text-red-600 text-sm" role="alert">
                    "Something went wrong. Please try again."
                </div>
            </Show>
            <Button submit=true class="w-fit" disabled=Signal::derive(move || status.get().is_submitting())>
                <Show
                    when=move || status.get().is_submitting()
                    fallback=|| view! { "Send Message" }
                >
                    <LoadingSpinner size=SpinnerSize::Sm class="mr-2" />
                    "Sending..."
                </Show>
            </Button>
        </form>
    }
}

#[component]
pub fn ContactCard(
    profile: &'static Profile,
    form: RwSignal<ContactForm>,
    timers: FormTimers,
) -> impl IntoView {
    view! {
        <Card>
            <CardContent class="py-6">
                <div class="grid md:grid-cols-3 gap-6 items-start">
                    <div class="space-y-3 text-sm">
                        <div class="flex items-center gap-2">
                            <Glyph icon=Icon::Mail class="h-4 w-4" />
                            {profile.email.as_str()}
                        </div>
                        <div class="flex items-center gap-2">
                            <Glyph icon=Icon::Phone class="h-4 w-4" />
                            {profile.phone.as_str()}
                        </div>
                        <div class="flex items-center gap-2">
                            <Glyph icon=Icon::MapPin class="h-4 w-4" />
                            {profile.location.as_str()}
                        </div>
                    </div>
                    <div class="md:col-span-2">
                        <MessageForm form timers />
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::contact::FormTimer;

    fn filled(form: RwSignal<ContactForm>) {
        form.update(|f| {
            let draft = f.draft_mut();
            draft.name = "Ada".to_string();
            draft.email = "ada@example.com".to_string();
            draft.message = "Hello there".to_string();
        });
    }

    #[test]
    fn test_fire_runs_the_lifecycle() {
        let owner = Owner::new();
        owner.with(|| {
            let (form, _timers) = use_contact_form();
            filled(form);
            let deliver = form.try_update(|f| f.submit()).unwrap().unwrap().unwrap();

            let reset = fire(form, deliver).expect("delivery schedules a reset");
            assert!(matches!(reset.timer, FormTimer::Reset { .. }));
            assert_eq!(form.get_untracked().status(), SubmissionStatus::Success);

            assert_eq!(fire(form, reset), None);
            assert_eq!(form.get_untracked().status(), SubmissionStatus::Idle);
        });
    }

    #[test]
    fn test_timer_after_teardown_is_inert() {
        let owner = Owner::new();
        let (form, timers) = owner.with(use_contact_form);
        owner.with(|| filled(form));
        let deliver = owner
            .with(|| form.try_update(|f| f.submit()))
            .unwrap()
            .unwrap()
            .unwrap();

        owner.cleanup();

        assert_eq!(fire(form, deliver), None);
        assert!(form.try_get_untracked().is_none());
        // no handle is pending after teardown
        timers.clear();
    }
}
