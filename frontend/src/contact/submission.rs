//! Contact form state machine: Idle -> Sending -> Succeeded | Failed.

use thiserror::Error;

use super::draft::{ContactDraft, ContactField, ValidationError};

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const REJECTED_MESSAGE: &str = "Failed to send. Please try again.";
pub const TRANSPORT_MESSAGE: &str = "Error sending message.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay rejected the message: {0}")]
    Rejected(String),
    #[error("unreadable relay response: {0}")]
    Malformed(String),
    #[error("could not encode the form: {0}")]
    Encode(String),
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Transport(_) | SubmitError::Encode(_) => TRANSPORT_MESSAGE,
            SubmitError::Rejected(_) | SubmitError::Malformed(_) => REJECTED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(SubmitError),
    /// Submit was refused before anything went over the wire.
    Invalid(ValidationError),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(SENDING_MESSAGE.to_string()),
            SubmissionStatus::Succeeded => Some(SUCCESS_MESSAGE.to_string()),
            SubmissionStatus::Failed(err) => Some(err.user_message().to_string()),
            SubmissionStatus::Invalid(err) => Some(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    AlreadySending,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    draft: ContactDraft,
    status: SubmissionStatus,
}

impl ContactFlow {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Moves to `Sending` and hands back the draft to post. Refused while a
    /// previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Result<ContactDraft, SubmitBlocked> {
        if self.is_sending() {
            return Err(SubmitBlocked::AlreadySending);
        }
        if let Err(err) = self.draft.validate() {
            self.status = SubmissionStatus::Invalid(err.clone());
            return Err(SubmitBlocked::Invalid(err));
        }
        self.status = SubmissionStatus::Sending;
        Ok(self.draft.clone())
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if !self.is_sending() {
            log::warn!("submission finished while not sending, ignoring");
            return;
        }
        self.status = match outcome {
            Ok(()) => {
                self.draft.clear();
                SubmissionStatus::Succeeded
            }
            Err(err) => SubmissionStatus::Failed(err),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::draft::tests::filled;

    fn ready_flow() -> ContactFlow {
        let mut flow = ContactFlow::default();
        for field in ContactField::ALL {
            flow.set_field(field, filled().get(field));
        }
        flow
    }

    #[test]
    fn idle_shows_no_message() {
        let flow = ContactFlow::default();
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert_eq!(flow.status().message(), None);
    }

    #[test]
    fn begin_moves_to_sending_and_snapshots_draft() {
        let mut flow = ready_flow();
        let draft = flow.begin_submit().unwrap();
        assert_eq!(draft, filled());
        assert!(flow.is_sending());
        assert_eq!(flow.status().message().as_deref(), Some("Sending..."));
    }

    #[test]
    fn second_submit_while_sending_is_refused() {
        let mut flow = ready_flow();
        flow.begin_submit().unwrap();
        assert_eq!(flow.begin_submit(), Err(SubmitBlocked::AlreadySending));
        assert!(flow.is_sending());
    }

    #[test]
    fn success_clears_every_field() {
        let mut flow = ready_flow();
        flow.begin_submit().unwrap();
        flow.finish(Ok(()));

        assert_eq!(flow.status(), &SubmissionStatus::Succeeded);
        assert_eq!(
            flow.status().message().as_deref(),
            Some("Message sent successfully!")
        );
        for field in ContactField::ALL {
            assert_eq!(flow.draft().get(field), "");
        }
        assert!(!flow.is_sending());
    }

    #[test]
    fn failure_keeps_fields_and_lifts_guard() {
        let mut flow = ready_flow();
        flow.begin_submit().unwrap();
        flow.finish(Err(SubmitError::Rejected("error".to_string())));

        assert_eq!(flow.draft(), &filled());
        assert_eq!(
            flow.status().message().as_deref(),
            Some("Failed to send. Please try again.")
        );
        assert!(flow.begin_submit().is_ok());
    }

    #[test]
    fn transport_and_rejection_read_differently() {
        assert_eq!(
            SubmitError::Transport("offline".into()).user_message(),
            "Error sending message."
        );
        assert_eq!(
            SubmitError::Malformed("not json".into()).user_message(),
            "Failed to send. Please try again."
        );
    }

    #[test]
    fn invalid_draft_never_enters_sending() {
        let mut flow = ready_flow();
        flow.set_field(ContactField::Name, "");
        assert_eq!(
            flow.begin_submit(),
            Err(SubmitBlocked::Invalid(ValidationError::Missing(
                ContactField::Name
            )))
        );
        assert!(!flow.is_sending());
        assert_eq!(
            flow.status().message().as_deref(),
            Some("Please enter your name.")
        );
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut flow = ready_flow();
        flow.finish(Ok(()));
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert_eq!(flow.draft(), &filled());
    }
}
