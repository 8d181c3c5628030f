use crate::models::{BookingDraft, BookingRequest, DraftField};

/// The three ordered steps of the booking-request form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Contact,
    Student,
    Schedule,
}

impl WizardStep {
    /// All steps in form order
    pub const ALL: [WizardStep; 3] = [WizardStep::Contact, WizardStep::Student, WizardStep::Schedule];

    /// 1-based position shown in the progress indicator
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Contact => 1,
            WizardStep::Student => 2,
            WizardStep::Schedule => 3,
        }
    }

    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Contact => Some(WizardStep::Student),
            WizardStep::Student => Some(WizardStep::Schedule),
            WizardStep::Schedule => None,
        }
    }

    fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Contact => None,
            WizardStep::Student => Some(WizardStep::Contact),
            WizardStep::Schedule => Some(WizardStep::Student),
        }
    }
}

/// Whether `draft` satisfies the validity rules for `step`.
///
/// Pure function of the fields belonging to that step:
/// - Contact: the chosen contact method's fields must be non-empty; an
///   unrecognized contact method is never valid.
/// - Student: student age and frequency must both be set.
/// - Schedule: timeframe must be set; notes are always optional.
pub fn step_valid(step: WizardStep, draft: &BookingDraft) -> bool {
    match step {
        WizardStep::Contact => match draft.contact_method.as_str() {
            "email" => !draft.email.is_empty(),
            "phone" => !draft.phone.is_empty(),
            "both" => !draft.email.is_empty() && !draft.phone.is_empty(),
            _ => false,
        },
        WizardStep::Student => !draft.student_age.is_empty() && !draft.frequency.is_empty(),
        WizardStep::Schedule => !draft.timeframe.is_empty(),
    }
}

/// Drives the fixed three-step booking-request form for one coach target.
///
/// The wizard owns a single [`BookingDraft`] that callers mutate field by
/// field. Forward navigation and submission are guarded by the step validity
/// rules; blocked transitions are silent no-ops signalled through the return
/// value, never errors. The wizard performs no I/O itself: `submit` hands the
/// completed [`BookingRequest`] back to the caller, which passes it to the
/// notification collaborator.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    coach_id: String,
    step: WizardStep,
    draft: BookingDraft,
}

impl BookingWizard {
    /// Open a wizard for a coach with an empty draft at step 1
    pub fn new(coach_id: impl Into<String>) -> Self {
        Self {
            coach_id: coach_id.into(),
            step: WizardStep::Contact,
            draft: BookingDraft::default(),
        }
    }

    pub fn coach_id(&self) -> &str {
        &self.coach_id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Whether the step currently shown may be advanced past.
    ///
    /// The embedding UI reads this to enable or disable its Next/Send control.
    pub fn current_step_valid(&self) -> bool {
        step_valid(self.step, &self.draft)
    }

    /// Overwrite one draft field. Available in any state, never changes the
    /// step, never fails.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        self.draft.set(field, value);
    }

    /// Advance to the next step. Returns false (and stays put) when the
    /// current step is invalid or already the last one.
    pub fn next(&mut self) -> bool {
        if !self.current_step_valid() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false at step 1. Data entered on later
    /// steps is kept, so advancing again shows the previous values.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// The completed request, if every step is valid.
    ///
    /// Leaves the wizard untouched, so a caller whose delivery attempt fails
    /// can keep the draft and retry instead of losing the entered data.
    pub fn completed_request(&self) -> Option<BookingRequest> {
        if WizardStep::ALL.iter().all(|step| step_valid(*step, &self.draft)) {
            Some(BookingRequest {
                coach_id: self.coach_id.clone(),
                draft: self.draft.clone(),
            })
        } else {
            None
        }
    }

    /// Submit the booking request.
    ///
    /// Only succeeds when the final step (and, by construction, every earlier
    /// step) is valid: yields the completed request for the notification
    /// collaborator and resets the wizard to step 1 with an empty draft.
    /// Otherwise a silent no-op returning `None`.
    pub fn submit(&mut self) -> Option<BookingRequest> {
        let request = self.completed_request()?;
        self.reset();
        Some(request)
    }

    /// Close or cancel the dialog: reset to step 1 with an empty draft
    /// without submitting anything.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.step = WizardStep::Contact;
        self.draft = BookingDraft::default();
    }
}
