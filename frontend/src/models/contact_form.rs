use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use yew::Reducible;

use crate::config;
use crate::utils::timer::Scheduler;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SENT_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";

/// Form fields in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

impl FieldKind {
    /// `type` attribute for kinds rendered as `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            _ => "text",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

pub static FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        id: FieldId::Name,
        label: "Full Name",
        kind: FieldKind::Text,
        placeholder: "Enter your name",
        required: true,
    },
    FieldSpec {
        id: FieldId::Email,
        label: "Email Address",
        kind: FieldKind::Email,
        placeholder: "Enter your email",
        required: true,
    },
    FieldSpec {
        id: FieldId::Phone,
        label: "Phone Number",
        kind: FieldKind::Tel,
        placeholder: "Enter your phone number",
        required: false,
    },
    FieldSpec {
        id: FieldId::Service,
        label: "Service Interested In",
        kind: FieldKind::Select,
        placeholder: "Select a service",
        required: true,
    },
    FieldSpec {
        id: FieldId::Message,
        label: "Message",
        kind: FieldKind::TextArea,
        placeholder: "Tell us about your project...",
        required: true,
    },
];

impl FieldId {
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Service => "service",
            FieldId::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

fn check(spec: &FieldSpec, value: &str) -> Option<String> {
    let mut error = None;
    if spec.required && value.trim().is_empty() {
        error = Some(format!("{} is required", spec.label));
    }
    // A malformed address wins over the required message.
    if spec.kind == FieldKind::Email && !value.is_empty() && !EMAIL_PATTERN.is_match(value) {
        error = Some(INVALID_EMAIL.to_string());
    }
    error
}

/// Snapshot of every field. Edits and validation passes build a new
/// snapshot instead of patching this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    fields: BTreeMap<FieldId, FieldState>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: FIELD_SPECS
                .iter()
                .map(|spec| (spec.id, FieldState::default()))
                .collect(),
        }
    }
}

impl ContactForm {
    pub fn field(&self, id: FieldId) -> &FieldState {
        // Every id is inserted by `default` and never removed.
        &self.fields[&id]
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.field(id).error.as_deref()
    }

    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.fields
            .iter()
            .filter_map(|(id, state)| state.error.as_deref().map(|e| (*id, e)))
    }

    /// New value for one field; only that field's error is dropped.
    pub fn edit(&self, id: FieldId, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.fields.insert(id, FieldState { value: value.into(), error: None });
        next
    }

    /// Checks every field and returns the resulting snapshot together with
    /// the overall verdict.
    pub fn validate(&self) -> (Self, bool) {
        let fields: BTreeMap<FieldId, FieldState> = self
            .fields
            .iter()
            .map(|(id, state)| {
                let error = check(id.spec(), &state.value);
                (*id, FieldState { value: state.value.clone(), error })
            })
            .collect();
        let is_valid = fields.values().all(|state| state.error.is_none());
        (Self { fields }, is_valid)
    }

    pub fn to_request(&self) -> ContactRequest {
        let optional = |id| {
            let value = self.value(id).trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        ContactRequest {
            name: self.value(FieldId::Name).trim().to_string(),
            email: self.value(FieldId::Email).trim().to_string(),
            phone: optional(FieldId::Phone),
            service: self.value(FieldId::Service).to_string(),
            message: self.value(FieldId::Message).trim().to_string(),
        }
    }
}

/// What a real delivery would send. Only logged; there is no endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitStatus {
    pub message: String,
    pub is_error: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub phase: SubmitPhase,
    pub status: Option<SubmitStatus>,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            phase: SubmitPhase::Idle,
            status: None,
        }
    }
}

pub enum ContactAction {
    Edit(FieldId, String),
    Submit,
    /// The simulated delivery delay has elapsed.
    Delivered,
}

impl ContactState {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn apply(&self, action: ContactAction) -> Self {
        match action {
            ContactAction::Edit(id, value) => Self {
                form: self.form.edit(id, value),
                phase: self.phase,
                status: None,
            },
            ContactAction::Submit => {
                if self.is_submitting() {
                    return self.clone();
                }
                let (form, is_valid) = self.form.validate();
                if !is_valid {
                    let rejected: Vec<&str> = form.errors().map(|(id, _)| id.dom_id()).collect();
                    log::debug!("Contact form rejected, invalid fields: {:?}", rejected);
                }
                Self {
                    form,
                    phase: if is_valid { SubmitPhase::Submitting } else { SubmitPhase::Idle },
                    status: self.status.clone(),
                }
            }
            ContactAction::Delivered => {
                if !self.is_submitting() {
                    return self.clone();
                }
                Self {
                    form: ContactForm::default(),
                    phase: SubmitPhase::Idle,
                    status: Some(SubmitStatus {
                        message: SENT_MESSAGE.to_string(),
                        is_error: false,
                    }),
                }
            }
        }
    }
}

/// Arms the simulated delivery of an accepted submission. Dropping the
/// returned handle cancels it.
pub fn schedule_delivery<S: Scheduler>(scheduler: &S, deliver: impl FnOnce() + 'static) -> S::Handle {
    scheduler.after(config::SUBMIT_DELAY_MS, Box::new(deliver))
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::utils::timer::manual::ManualScheduler;

    fn filled() -> ContactForm {
        ContactForm::default()
            .edit(FieldId::Name, "Ada Lovelace")
            .edit(FieldId::Email, "ada@example.com")
            .edit(FieldId::Service, "branding")
            .edit(FieldId::Message, "Need 200 shirts")
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let (form, is_valid) = ContactForm::default().validate();
        assert!(!is_valid);
        let errors: Vec<(FieldId, &str)> = form.errors().collect();
        assert_eq!(
            errors,
            vec![
                (FieldId::Name, "Full Name is required"),
                (FieldId::Email, "Email Address is required"),
                (FieldId::Service, "Service Interested In is required"),
                (FieldId::Message, "Message is required"),
            ]
        );
        assert_eq!(form.error(FieldId::Phone), None);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let form = filled().edit(FieldId::Email, "not-an-email");
        let (form, is_valid) = form.validate();
        assert!(!is_valid);
        let errors: Vec<(FieldId, &str)> = form.errors().collect();
        assert_eq!(errors, vec![(FieldId::Email, INVALID_EMAIL)]);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let (form, is_valid) = filled().edit(FieldId::Name, "   ").validate();
        assert!(!is_valid);
        assert_eq!(form.error(FieldId::Name), Some("Full Name is required"));
    }

    #[test]
    fn blank_email_reports_the_format_problem() {
        let (form, _) = filled().edit(FieldId::Email, "  ").validate();
        assert_eq!(form.error(FieldId::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@mail.example.org"] {
            assert!(EMAIL_PATTERN.is_match(good), "{good}");
        }
        for bad in ["not-an-email", "a@b", "@.", "a b@c.d", "a@b."] {
            assert!(!EMAIL_PATTERN.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn validation_keeps_values() {
        let before = filled().edit(FieldId::Email, "nope");
        let (after, _) = before.validate();
        assert_eq!(after.value(FieldId::Email), "nope");
        assert_eq!(after.value(FieldId::Name), "Ada Lovelace");
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let (form, _) = ContactForm::default().validate();
        let form = form.edit(FieldId::Email, "a");
        assert_eq!(form.error(FieldId::Email), None);
        assert_eq!(form.error(FieldId::Name), Some("Full Name is required"));
        assert_eq!(form.error(FieldId::Message), Some("Message is required"));
        assert_eq!(form.errors().count(), 3);
    }

    #[test]
    fn rejected_submit_stays_idle_with_errors() {
        let state = ContactState::default().apply(ContactAction::Submit);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.form.errors().count(), 4);
        assert_eq!(state.status, None);
    }

    #[test]
    fn accepted_submit_then_delivery_resets_form() {
        let state = ContactState { form: filled(), ..ContactState::default() };
        let submitting = state.apply(ContactAction::Submit);
        assert!(submitting.is_submitting());
        assert_eq!(submitting.form.errors().count(), 0);
        assert_eq!(submitting.form.value(FieldId::Name), "Ada Lovelace");

        let done = submitting.apply(ContactAction::Delivered);
        assert_eq!(done.phase, SubmitPhase::Idle);
        assert_eq!(done.form, ContactForm::default());
        assert_eq!(
            done.status,
            Some(SubmitStatus { message: SENT_MESSAGE.to_string(), is_error: false })
        );
    }

    #[test]
    fn delivery_lands_after_the_submit_delay() {
        let scheduler = ManualScheduler::default();
        let state = Rc::new(RefCell::new(
            ContactState { form: filled(), ..ContactState::default() }.apply(ContactAction::Submit),
        ));
        assert!(state.borrow().is_submitting());

        let target = state.clone();
        let _handle = schedule_delivery(&scheduler, move || {
            let next = target.borrow().apply(ContactAction::Delivered);
            *target.borrow_mut() = next;
        });

        scheduler.advance(config::SUBMIT_DELAY_MS - 1);
        assert!(state.borrow().is_submitting());
        assert_eq!(state.borrow().form.value(FieldId::Name), "Ada Lovelace");

        scheduler.advance(1);
        let done = state.borrow();
        assert_eq!(done.phase, SubmitPhase::Idle);
        assert_eq!(done.form, ContactForm::default());
        assert_eq!(done.form.errors().count(), 0);
        assert_eq!(done.status.as_ref().map(|s| s.message.as_str()), Some(SENT_MESSAGE));
    }

    #[test]
    fn dropped_delivery_never_lands() {
        let scheduler = ManualScheduler::default();
        let delivered = Rc::new(Cell::new(false));
        let flag = delivered.clone();
        drop(schedule_delivery(&scheduler, move || flag.set(true)));
        scheduler.advance(config::SUBMIT_DELAY_MS * 2);
        assert!(!delivered.get());
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let state = ContactState { form: filled(), ..ContactState::default() };
        let submitting = state.apply(ContactAction::Submit);
        assert_eq!(submitting.apply(ContactAction::Submit), submitting);
    }

    #[test]
    fn stray_delivery_does_nothing() {
        let state = ContactState::default().apply(ContactAction::Edit(FieldId::Name, "x".into()));
        assert_eq!(state.apply(ContactAction::Delivered), state);
    }

    #[test]
    fn editing_clears_status_banner() {
        let state = ContactState { form: filled(), ..ContactState::default() }
            .apply(ContactAction::Submit)
            .apply(ContactAction::Delivered);
        assert!(state.status.is_some());
        let state = state.apply(ContactAction::Edit(FieldId::Message, "again".into()));
        assert_eq!(state.status, None);
        assert_eq!(state.form.value(FieldId::Message), "again");
    }

    #[test]
    fn request_trims_and_omits_blank_phone() {
        let form = filled().edit(FieldId::Name, "  Ada Lovelace ");
        let json = serde_json::to_value(form.to_request()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "service": "branding",
                "message": "Need 200 shirts",
            })
        );
    }

    #[test]
    fn field_specs_line_up_with_ids() {
        for spec in &FIELD_SPECS {
            assert_eq!(spec.id.spec(), spec);
        }
    }
}
