use std::time::Duration;

use thiserror::Error;

/// Artificial latency of the simulated send.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);
/// How long the success/error message stays before the form returns to idle.
pub const STATUS_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
}

impl ContactDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DraftError::MissingEmail);
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(DraftError::InvalidEmail),
        }
        if self.message.trim().is_empty() {
            return Err(DraftError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("transport unavailable")]
    Unavailable,
}

/// Where a finished draft goes. The page ships with [`SimulatedTransport`].
pub trait ContactTransport {
    fn send(&self, draft: &ContactDraft) -> Result<(), SubmitError>;
}

/// Accepts every message without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl ContactTransport for SimulatedTransport {
    fn send(&self, draft: &ContactDraft) -> Result<(), SubmitError> {
        log::info!(
            "simulated contact submission from {} ({} chars)",
            draft.email,
            draft.message.len()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTimer {
    Deliver { generation: u64 },
    Reset { generation: u64 },
}

/// A timer the caller must arm, then hand back to [`ContactForm::on_timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub timer: FormTimer,
    pub after: Duration,
}

/// Draft plus submission lifecycle.
///
/// Timers carry the generation of the submission that armed them, so a reset
/// left over from an earlier attempt can't cut a newer one short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmissionStatus,
    generation: u64,
    rejection: Option<DraftError>,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Mutable draft access. Any edit dismisses the last validation error.
    pub fn draft_mut(&mut self) -> &mut ContactDraft {
        self.rejection = None;
        &mut self.draft
    }

    /// Why the last submit was refused, until the draft is edited again.
    pub fn rejection(&self) -> Option<DraftError> {
        self.rejection
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Starts a submission.
    ///
    /// `Ok(None)` when one is already in flight; invalid drafts are rejected
    /// without touching the status.
    pub fn submit(&mut self) -> Result<Option<Scheduled>, DraftError> {
        if self.status.is_submitting() {
            return Ok(None);
        }
        if let Err(e) = self.draft.validate() {
            self.rejection = Some(e);
            return Err(e);
        }
        self.rejection = None;
        self.generation += 1;
        self.status = SubmissionStatus::Submitting;
        Ok(Some(Scheduled {
            timer: FormTimer::Deliver {
                generation: self.generation,
            },
            after: SUBMIT_DELAY,
        }))
    }

    pub fn on_timer<T>(&mut self, timer: FormTimer, transport: &T) -> Option<Scheduled>
    where
        T: ContactTransport + ?Sized,
    {
        match timer {
            FormTimer::Deliver { generation } => {
                if generation != self.generation || !self.status.is_submitting() {
                    return None;
                }
                match transport.send(&self.draft) {
                    Ok(()) => {
                        self.status = SubmissionStatus::Success;
                        self.draft = ContactDraft::default();
                    }
                    Err(e) => {
                        log::warn!("contact submission failed: {e}");
                        self.status = SubmissionStatus::Error;
                    }
                }
                Some(Scheduled {
                    timer: FormTimer::Reset { generation },
                    after: STATUS_DISPLAY,
                })
            }
            FormTimer::Reset { generation } => {
                if generation == self.generation
                    && matches!(
                        self.status,
                        SubmissionStatus::Success | SubmissionStatus::Error
                    )
                {
                    self.status = SubmissionStatus::Idle;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct FailingTransport;

    impl ContactTransport for FailingTransport {
        fn send(&self, _draft: &ContactDraft) -> Result<(), SubmitError> {
            Err(SubmitError::Unavailable)
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        let draft = form.draft_mut();
        draft.name = "Ada".to_string();
        draft.email = "ada@example.com".to_string();
        draft.message = "Hello there".to_string();
        form
    }

    /// Fires the next armed timer, arming whatever it schedules in turn.
    fn fire_next<T: ContactTransport>(
        form: &mut ContactForm,
        queue: &mut VecDeque<Scheduled>,
        transport: &T,
    ) -> Scheduled {
        let next = queue.pop_front().expect("a timer should be armed");
        if let Some(follow_up) = form.on_timer(next.timer, transport) {
            queue.push_back(follow_up);
        }
        next
    }

    #[test]
    fn test_successful_lifecycle() {
        let mut form = filled();
        let mut queue = VecDeque::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        queue.extend(form.submit().unwrap());
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        let fired = fire_next(&mut form, &mut queue, &SimulatedTransport);
        assert_eq!(fired.after, SUBMIT_DELAY);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(form.draft().is_empty());

        let fired = fire_next(&mut form, &mut queue, &SimulatedTransport);
        assert_eq!(fired.after, STATUS_DISPLAY);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_failure_keeps_draft_and_resets() {
        let mut form = filled();
        let mut queue = VecDeque::new();
        queue.extend(form.submit().unwrap());

        fire_next(&mut form, &mut queue, &FailingTransport);
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.draft().name, "Ada");

        fire_next(&mut form, &mut queue, &FailingTransport);
        assert_eq!(form.status(), SubmissionStatus::Idle);

        // user may resubmit by hand
        assert!(form.submit().unwrap().is_some());
    }

    #[test]
    fn test_submit_while_submitting_is_noop() {
        let mut form = filled();
        let first = form.submit().unwrap();
        assert!(first.is_some());
        let before = form.clone();
        assert_eq!(form.submit(), Ok(None));
        assert_eq!(form, before);
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut form = filled();
        let mut queue = VecDeque::new();
        queue.extend(form.submit().unwrap());
        fire_next(&mut form, &mut queue, &SimulatedTransport);
        let stale_reset = queue.pop_front().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Success);

        // resubmit while the success message is still showing
        let draft = form.draft_mut();
        draft.name = "Grace".to_string();
        draft.email = "grace@example.com".to_string();
        draft.message = "Second note".to_string();
        let second = form.submit().unwrap().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        assert_eq!(form.on_timer(stale_reset.timer, &SimulatedTransport), None);
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        let reset = form.on_timer(second.timer, &SimulatedTransport).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Success);
        form.on_timer(reset.timer, &SimulatedTransport);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_invalid_draft_is_rejected() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), Err(DraftError::MissingName));
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.draft_mut().name = "Ada".to_string();
        form.draft_mut().email = "not-an-email".to_string();
        assert_eq!(form.submit(), Err(DraftError::InvalidEmail));

        form.draft_mut().email = "ada@".to_string();
        assert_eq!(form.submit(), Err(DraftError::InvalidEmail));

        form.draft_mut().email = "ada@example.com".to_string();
        form.draft_mut().message = "   ".to_string();
        assert_eq!(form.submit(), Err(DraftError::MissingMessage));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_rejection_clears_on_edit() {
        let mut form = ContactForm::default();
        form.draft_mut().name = "Ada".to_string();
        form.draft_mut().email = "ada".to_string();
        assert_eq!(form.submit(), Err(DraftError::InvalidEmail));
        assert_eq!(form.rejection(), Some(DraftError::InvalidEmail));

        form.draft_mut().email = "ada@example.com".to_string();
        assert_eq!(form.rejection(), None);

        assert_eq!(form.submit(), Err(DraftError::MissingMessage));
        form.draft_mut().message = "Hi".to_string();
        assert!(form.submit().unwrap().is_some());
        assert_eq!(form.rejection(), None);
    }
}
