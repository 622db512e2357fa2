use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulated network latency for the contact form submission.
pub const SUBMIT_DELAY_MS: f64 = 1500.0;
/// How long the success banner stays up before clearing itself.
pub const SUCCESS_BANNER_MS: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// Per-field inline error messages, cleared individually as fields are edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    fn set(&mut self, field: Field, message: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = Some(message);
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// View-model for the contact form.
///
/// Owns the field values, per-field errors, and the submission state
/// machine (`Idle -> Submitting -> Success -> Idle`). The simulated
/// network delay and the success-banner timeout are owned by the caller,
/// which drives `finish_submit` and `dismiss_success` from its own clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    data: FormData,
    errors: FormErrors,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state != SubmitState::Submitting
    }

    /// Update a single field, clearing only that field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        self.data.set(field, value);
        self.errors.clear(field);
    }

    /// Validate all fields and, if everything passes, enter `Submitting`.
    ///
    /// On failure the offending fields get their error messages set,
    /// field values are left intact, and the state does not change.
    pub fn submit(&mut self) -> Result<(), Vec<ValidationError>> {
        let failures = Field::ALL
            .iter()
            .filter_map(|f| validate_field(*f, self.data.get(*f)).err())
            .collect::<Vec<_>>();

        if !failures.is_empty() {
            for err in &failures {
                self.errors.set(err.field, err.message.clone());
            }
            return Err(failures);
        }

        self.errors = FormErrors::default();
        self.state = SubmitState::Submitting;
        Ok(())
    }

    /// Complete the simulated submission: log the payload, clear the
    /// fields, and show the success banner.
    pub fn finish_submit(&mut self) {
        if self.state != SubmitState::Submitting {
            return;
        }
        match serde_json::to_string(&self.data) {
            Ok(payload) => log::info!("contact form submitted: {}", payload),
            Err(e) => log::warn!("contact form submitted (payload unserializable: {})", e),
        }
        self.data = FormData::default();
        self.errors = FormErrors::default();
        self.state = SubmitState::Success;
    }

    /// Clear the success banner, whether by timeout or manual dismissal.
    pub fn dismiss_success(&mut self) {
        if self.state == SubmitState::Success {
            self.state = SubmitState::Idle;
        }
    }
}

pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    let message = match field {
        Field::Name => {
            if trimmed.is_empty() {
                Some("Please enter your name")
            } else if trimmed.chars().count() < 2 {
                Some("Name must be at least 2 characters")
            } else {
                None
            }
        }
        Field::Email => {
            if trimmed.is_empty() {
                Some("Please enter your email address")
            } else if !is_valid_email(trimmed) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Subject => {
            if trimmed.is_empty() {
                Some("Please enter a subject")
            } else if trimmed.chars().count() < 3 {
                Some("Subject must be at least 3 characters")
            } else {
                None
            }
        }
        Field::Message => {
            if trimmed.is_empty() {
                Some("Please enter a message")
            } else if trimmed.chars().count() < 10 {
                Some("Message must be at least 10 characters")
            } else {
                None
            }
        }
    };
    match message {
        Some(m) => Err(ValidationError {
            field,
            message: m.to_string(),
        }),
        None => Ok(()),
    }
}

/// A deliberately simple `local@domain.tld` check, no RFC 5322 ambitions.
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot, and every dot-separated label must be non-empty
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Ada Lovelace".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Subject, "Project inquiry".to_string());
        form.edit(Field::Message, "I would like to discuss a project.".to_string());
        form
    }

    #[test]
    fn test_valid_submission_flow() {
        let mut form = filled_form();

        assert!(form.submit().is_ok());
        assert_eq!(form.state(), SubmitState::Submitting);
        assert!(!form.can_submit());
        // Values survive until the simulated send completes
        assert_eq!(form.data().get(Field::Name), "Ada Lovelace");

        form.finish_submit();
        assert_eq!(form.state(), SubmitState::Success);
        assert!(form.data().is_empty());
        assert!(form.errors().is_empty());

        form.dismiss_success();
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_empty_field_rejected_without_touching_others() {
        let mut form = filled_form();
        form.edit(Field::Subject, String::new());

        let errs = form.submit().expect_err("empty subject should fail");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, Field::Subject);

        // Error set only for the failing field
        assert!(form.errors().get(Field::Subject).is_some());
        assert!(form.errors().get(Field::Name).is_none());
        assert!(form.errors().get(Field::Email).is_none());
        assert!(form.errors().get(Field::Message).is_none());

        // Prior values and state untouched
        assert_eq!(form.data().get(Field::Email), "ada@example.com");
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        let errs = form.submit().expect_err("empty form should fail");
        assert_eq!(errs.len(), 4);

        form.edit(Field::Email, "a".to_string());
        assert!(form.errors().get(Field::Email).is_none());
        assert!(form.errors().get(Field::Name).is_some());
        assert!(form.errors().get(Field::Subject).is_some());
        assert!(form.errors().get(Field::Message).is_some());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_field(Field::Email, "a@b.co").is_ok());
        assert!(validate_field(Field::Email, "a@b").is_err());
        assert!(validate_field(Field::Email, "abc").is_err());
        assert!(validate_field(Field::Email, "@b.co").is_err());
        assert!(validate_field(Field::Email, "a@b.").is_err());
        assert!(validate_field(Field::Email, "a@.co").is_err());
        // Empty labels between dots are not a valid domain
        assert!(validate_field(Field::Email, "a@b..co").is_err());
        assert!(validate_field(Field::Email, "a@b..co.uk").is_err());
        assert!(validate_field(Field::Email, "a@b.co.uk").is_ok());
        assert!(validate_field(Field::Email, "a b@c.co").is_err());
        assert!(validate_field(Field::Email, "a@b@c.co").is_err());
    }

    #[test]
    fn test_length_boundaries() {
        assert!(validate_field(Field::Name, "A").is_err());
        assert!(validate_field(Field::Name, "Al").is_ok());
        // Trimming happens before the length check
        assert!(validate_field(Field::Name, " A ").is_err());

        assert!(validate_field(Field::Subject, "Hi").is_err());
        assert!(validate_field(Field::Subject, "Hey").is_ok());

        assert!(validate_field(Field::Message, "123456789").is_err());
        assert!(validate_field(Field::Message, "1234567890").is_ok());
        assert!(validate_field(Field::Message, "  1234567890  ").is_ok());
    }

    #[test]
    fn test_finish_submit_requires_submitting_state() {
        let mut form = filled_form();
        form.finish_submit();
        // Not submitting, so nothing happens
        assert_eq!(form.state(), SubmitState::Idle);
        assert!(!form.data().is_empty());
    }

    #[test]
    fn test_dismiss_is_a_noop_outside_success() {
        let mut form = filled_form();
        assert!(form.submit().is_ok());
        form.dismiss_success();
        assert_eq!(form.state(), SubmitState::Submitting);
    }
}
