use std::cell::RefCell;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, error, info, warn};
use serde::Deserialize;

use super::draft::ContactDraft;
use super::submission::{ContactFlow, SubmitError};

/// Third-party endpoint that turns a posted form into a spreadsheet row.
#[async_trait(?Send)]
pub trait FormRelay {
    /// Posts `body` and returns the raw response text.
    async fn post(&self, body: String) -> Result<String, SubmitError>;
}

pub struct GlooRelay {
    endpoint: String,
}

impl GlooRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl FormRelay for GlooRelay {
    async fn post(&self, body: String) -> Result<String, SubmitError> {
        // Sent as a plain string body: a JSON content type would make the
        // browser preflight, and the relay does not answer OPTIONS.
        let response = Request::post(&self.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        debug!("form relay answered with HTTP {}", response.status());

        response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))
    }
}

#[derive(Deserialize)]
struct RelayAck {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// Only `{"status":"success"}` counts as delivered.
pub fn parse_ack(body: &str) -> Result<(), SubmitError> {
    let ack: RelayAck =
        serde_json::from_str(body).map_err(|e| SubmitError::Malformed(e.to_string()))?;
    if ack.status == "success" {
        Ok(())
    } else {
        Err(SubmitError::Rejected(ack.message.unwrap_or(ack.status)))
    }
}

pub async fn deliver<R: FormRelay + ?Sized>(
    relay: &R,
    draft: &ContactDraft,
) -> Result<(), SubmitError> {
    let body = serde_json::to_string(draft).map_err(|e| SubmitError::Encode(e.to_string()))?;
    let reply = relay.post(body).await?;
    parse_ack(&reply)
}

/// Runs one submission against `flow`. `notify` is called after every state
/// change so the view can re-render. Returns `None` when the submit was
/// refused (already sending, or the draft is incomplete).
pub async fn submit<R: FormRelay + ?Sized>(
    flow: &RefCell<ContactFlow>,
    relay: &R,
    notify: impl Fn(),
) -> Option<Result<(), SubmitError>> {
    let begun = flow.borrow_mut().begin_submit();
    notify();
    let draft = match begun {
        Ok(draft) => draft,
        Err(blocked) => {
            debug!("contact submit refused: {:?}", blocked);
            return None;
        }
    };

    let outcome = deliver(relay, &draft).await;
    match &outcome {
        Ok(()) => info!("contact message delivered"),
        Err(err @ (SubmitError::Transport(_) | SubmitError::Encode(_))) => {
            error!("contact message not sent: {}", err)
        }
        Err(err) => warn!("contact message not accepted: {}", err),
    }

    flow.borrow_mut().finish(outcome.clone());
    notify();
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::channel::oneshot;
    use futures::executor::block_on;

    use super::*;
    use crate::contact::draft::tests::filled;
    use crate::contact::draft::ContactField;
    use crate::contact::submission::SubmissionStatus;

    enum Reply {
        Now(Result<String, SubmitError>),
        Later(oneshot::Receiver<Result<String, SubmitError>>),
    }

    struct MockRelay {
        bodies: RefCell<Vec<String>>,
        reply: RefCell<Option<Reply>>,
    }

    impl MockRelay {
        fn replying(reply: Result<&str, SubmitError>) -> Self {
            Self {
                bodies: RefCell::new(Vec::new()),
                reply: RefCell::new(Some(Reply::Now(reply.map(str::to_string)))),
            }
        }

        fn held() -> (Self, oneshot::Sender<Result<String, SubmitError>>) {
            let (tx, rx) = oneshot::channel();
            let relay = Self {
                bodies: RefCell::new(Vec::new()),
                reply: RefCell::new(Some(Reply::Later(rx))),
            };
            (relay, tx)
        }

        fn calls(&self) -> usize {
            self.bodies.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for MockRelay {
        async fn post(&self, body: String) -> Result<String, SubmitError> {
            self.bodies.borrow_mut().push(body);
            let reply = self.reply.borrow_mut().take();
            match reply {
                Some(Reply::Now(reply)) => reply,
                Some(Reply::Later(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(SubmitError::Transport("dropped".into()))),
                None => Err(SubmitError::Transport("no reply scripted".into())),
            }
        }
    }

    fn ready_flow() -> RefCell<ContactFlow> {
        let mut flow = ContactFlow::default();
        for field in ContactField::ALL {
            flow.set_field(field, filled().get(field));
        }
        RefCell::new(flow)
    }

    #[test]
    fn parses_relay_acknowledgements() {
        assert_eq!(parse_ack(r#"{"status":"success"}"#), Ok(()));
        assert_eq!(
            parse_ack(r#"{"status":"error"}"#),
            Err(SubmitError::Rejected("error".to_string()))
        );
        assert_eq!(
            parse_ack(r#"{"status":"error","message":"quota exceeded"}"#),
            Err(SubmitError::Rejected("quota exceeded".to_string()))
        );
        assert!(matches!(
            parse_ack("<!DOCTYPE html><p>Moved</p>"),
            Err(SubmitError::Malformed(_))
        ));
        assert!(matches!(parse_ack(r#"{"ok":true}"#), Err(SubmitError::Malformed(_))));
    }

    #[test]
    fn posts_the_draft_as_json_text() {
        let relay = MockRelay::replying(Ok(r#"{"status":"success"}"#));
        block_on(deliver(&relay, &filled())).unwrap();

        let bodies = relay.bodies.borrow();
        let sent: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
        assert_eq!(sent["email"], "riya@example.com");
        assert_eq!(sent["number"], "+91 09598 822384");
    }

    #[test]
    fn success_reply_clears_the_form() {
        let flow = ready_flow();
        let relay = MockRelay::replying(Ok(r#"{"status":"success"}"#));
        let renders = Cell::new(0);

        let outcome = block_on(submit(&flow, &relay, || renders.set(renders.get() + 1)));

        assert_eq!(outcome, Some(Ok(())));
        assert_eq!(relay.calls(), 1);
        assert_eq!(renders.get(), 2);
        let flow = flow.borrow();
        assert_eq!(
            flow.status().message().as_deref(),
            Some("Message sent successfully!")
        );
        for field in ContactField::ALL {
            assert_eq!(flow.draft().get(field), "");
        }
    }

    #[test]
    fn error_reply_keeps_the_form() {
        let flow = ready_flow();
        let relay = MockRelay::replying(Ok(r#"{"status":"error"}"#));

        block_on(submit(&flow, &relay, || ()));

        let flow = flow.borrow();
        assert_eq!(
            flow.status().message().as_deref(),
            Some("Failed to send. Please try again.")
        );
        assert_eq!(flow.draft(), &filled());
    }

    #[test]
    fn transport_failure_reenables_submit() {
        let flow = ready_flow();
        let relay = MockRelay::replying(Err(SubmitError::Transport(
            "TypeError: Failed to fetch".into(),
        )));

        block_on(submit(&flow, &relay, || ()));

        {
            let flow = flow.borrow();
            assert_eq!(
                flow.status().message().as_deref(),
                Some("Error sending message.")
            );
            assert!(!flow.is_sending());
            assert_eq!(flow.draft(), &filled());
        }

        let retry = MockRelay::replying(Ok(r#"{"status":"success"}"#));
        assert_eq!(block_on(submit(&flow, &retry, || ())), Some(Ok(())));
    }

    #[test]
    fn malformed_reply_is_a_failure_not_a_panic() {
        let flow = ready_flow();
        let relay = MockRelay::replying(Ok("Service unavailable"));

        let outcome = block_on(submit(&flow, &relay, || ()));

        assert!(matches!(outcome, Some(Err(SubmitError::Malformed(_)))));
        assert!(matches!(
            flow.borrow().status(),
            SubmissionStatus::Failed(SubmitError::Malformed(_))
        ));
    }

    #[test]
    fn submit_while_pending_sends_nothing() {
        let flow = ready_flow();
        let (relay, release) = MockRelay::held();

        let (first, second) = block_on(async {
            futures::join!(submit(&flow, &relay, || ()), async {
                assert!(flow.borrow().is_sending());
                let second = submit(&flow, &relay, || ()).await;
                release
                    .send(Ok(r#"{"status":"success"}"#.to_string()))
                    .unwrap();
                second
            })
        });

        assert_eq!(first, Some(Ok(())));
        assert_eq!(second, None);
        assert_eq!(relay.calls(), 1);
        assert_eq!(flow.borrow().status(), &SubmissionStatus::Succeeded);
    }

    #[test]
    fn incomplete_form_never_reaches_the_relay() {
        let flow = ready_flow();
        flow.borrow_mut().set_field(ContactField::Message, "  ");
        let relay = MockRelay::replying(Ok(r#"{"status":"success"}"#));

        assert_eq!(block_on(submit(&flow, &relay, || ())), None);
        assert_eq!(relay.calls(), 0);
        assert!(matches!(
            flow.borrow().status(),
            SubmissionStatus::Invalid(_)
        ));
    }
}
