use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Couldn't send message: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FullName,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form control name, also used as the element id.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "Your Full Name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project...",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

/// Unsent contact form contents. Lives only as long as the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// First blank field in form order.
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        match self.missing_field() {
            Some(field) => Err(SubmitError::MissingField(field.label())),
            None => Ok(()),
        }
    }
}

/// Transport for a completed contact form.
pub trait FormSubmitter {
    fn submit(&self, draft: &ContactDraft) -> Result<(), SubmitError>;
}

/// Submitter that only records the message in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl FormSubmitter for LogSubmitter {
    fn submit(&self, draft: &ContactDraft) -> Result<(), SubmitError> {
        let json =
            serde_json::to_string(draft).map_err(|e| SubmitError::Transport(e.to_string()))?;
        log::info!("Form submitted: {json}");
        Ok(())
    }
}

/// Validate and send `draft`, clearing it once the submitter accepts it.
/// On error the draft is left untouched so the user can fix it.
pub fn submit_draft<S>(submitter: &S, draft: &mut ContactDraft) -> Result<(), SubmitError>
where
    S: FormSubmitter + ?Sized,
{
    draft.validate()?;
    submitter.submit(draft)?;
    *draft = ContactDraft::default();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSubmitter {
        sent: RefCell<Vec<ContactDraft>>,
        fail: bool,
    }

    impl FormSubmitter for RecordingSubmitter {
        fn submit(&self, draft: &ContactDraft) -> Result<(), SubmitError> {
            if self.fail {
                return Err(SubmitError::Transport("offline".to_string()));
            }
            self.sent.borrow_mut().push(draft.clone());
            Ok(())
        }
    }

    fn filled() -> ContactDraft {
        ContactDraft {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Engines".to_string(),
            message: "Let's build an analytical engine.".to_string(),
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Subject, "Hello".to_string());
        assert_eq!(draft.get(ContactField::Subject), "Hello");
        assert_eq!(draft.subject, "Hello");
        assert_eq!(draft.get(ContactField::Message), "");
    }

    #[test]
    fn test_missing_field_in_form_order() {
        let mut draft = filled();
        assert_eq!(draft.missing_field(), None);
        draft.message = "   ".to_string();
        draft.email.clear();
        assert_eq!(draft.missing_field(), Some(ContactField::Email));
        assert_eq!(
            draft.validate(),
            Err(SubmitError::MissingField("Email Address"))
        );
    }

    #[test]
    fn test_submit_clears_draft() {
        let submitter = RecordingSubmitter::default();
        let mut draft = filled();
        submit_draft(&submitter, &mut draft).unwrap();
        assert_eq!(draft, ContactDraft::default());
        assert_eq!(*submitter.sent.borrow(), vec![filled()]);
    }

    #[test]
    fn test_incomplete_draft_not_sent() {
        let submitter = RecordingSubmitter::default();
        let mut draft = filled();
        draft.full_name.clear();
        let res = submit_draft(&submitter, &mut draft);
        assert_eq!(res, Err(SubmitError::MissingField("Full Name")));
        assert!(submitter.sent.borrow().is_empty());
        assert_eq!(draft.email, "ada@example.com");
    }

    #[test]
    fn test_transport_failure_keeps_draft() {
        let submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };
        let mut draft = filled();
        let err = submit_draft(&submitter, &mut draft).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't send message: offline");
        assert_eq!(draft, filled());
    }

    #[test]
    fn test_log_submitter_accepts() {
        let mut draft = filled();
        assert!(submit_draft(&LogSubmitter, &mut draft).is_ok());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["message"], "Let's build an analytical engine.");
    }
}
