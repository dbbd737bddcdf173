use std::{str::FromStr, time::Duration};

use thiserror::Error;

/// How long a submission pretends to be in flight.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// The draft as it stood when submit was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    draft: ContactFormDraft,
}

impl Submission {
    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }
}

pub fn confirmation(name: &str) -> String {
    format!("Thank you, {name}! Your message has been sent. We will get back to you soon.")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactFormDraft,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Moves to `Submitting` and captures the draft. Returns `None` if a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_submitting() {
            log::debug!("ignoring submit while another is in flight");
            return None;
        }
        self.state = SubmissionState::Submitting;
        Some(Submission {
            draft: self.draft.clone(),
        })
    }

    /// Finishes `submission`: clears every field, returns to `Idle` and hands
    /// back the confirmation to show.
    pub fn complete(&mut self, submission: Submission) -> String {
        self.draft.clear();
        self.state = SubmissionState::Idle;
        confirmation(submission.name())
    }

    /// Drops the draft and any in-flight submission.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.state = SubmissionState::Idle;
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SubmissionState::Idle => "Send Message",
            SubmissionState::Submitting => "Sending...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jane");
        form.set_field(ContactField::Email, "jane@x.com");
        form.set_field(ContactField::Message, "Hi");
        form
    }

    #[test]
    fn test_submit_flow() {
        let mut form = filled();
        assert_eq!(form.button_label(), "Send Message");

        let submission = form.begin_submit().expect("idle form accepts submit");
        assert!(form.is_submitting());
        assert_eq!(form.button_label(), "Sending...");
        assert_eq!(form.draft().get(ContactField::Email), "jane@x.com");

        let notice = form.complete(submission);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.draft().is_empty());
        assert_eq!(
            notice,
            "Thank you, Jane! Your message has been sent. We will get back to you soon."
        );
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit();
        assert!(first.is_some());
        assert_eq!(form.begin_submit(), None);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_confirmation_uses_name_at_submit_time() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        form.set_field(ContactField::Name, "Someone Else");
        assert!(form.complete(submission).contains("Jane"));
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.begin_submit();
        form.reset();
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_field_names() {
        for field in ContactField::ALL {
            assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
        }
        assert!("phone".parse::<ContactField>().is_err());
    }
}
