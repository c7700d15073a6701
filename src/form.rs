//! Form controller.
//!
//! Holds the JSON text, the chosen file, the submit outcome and the filter
//! selection. A submit is split in two halves so that async hosts can await
//! the request in between:
//!
//! ```text
//! begin_submit()  -> clear error, parse JSON, hand out a ticketed submission
//! (send request)
//! finish_submit() -> store the response, or the fixed error message
//! ```
//!
//! Resubmitting while a request is in flight is allowed. Only the result of
//! the most recently issued ticket is applied; late results of superseded
//! submits are dropped.

use tracing::{debug, warn};

use crate::error::{FormError, USER_ERROR_MESSAGE};
use crate::filter::{FilterSelection, FilterTag, FilteredView, render};
use crate::response::BfhlResponse;
use crate::submission::{Attachment, Submission};

/// Sends a prepared submission and returns the decoded response.
pub trait Transport<F = Attachment> {
    fn send(&self, submission: &Submission<F>) -> Result<BfhlResponse, FormError>;
}

/// Result of the last submit attempt.
///
/// A failed attempt keeps the last good response, so the stored response is
/// never lost to an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    #[default]
    Empty,
    Ready(BfhlResponse),
    Failed {
        message: String,
        previous: Option<BfhlResponse>,
    },
}

impl Outcome {
    pub fn response(&self) -> Option<&BfhlResponse> {
        match self {
            Outcome::Empty => None,
            Outcome::Ready(resp) => Some(resp),
            Outcome::Failed { previous, .. } => previous.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Drop the error, keeping any stored response.
    fn cleared(self) -> Self {
        match self {
            Outcome::Failed {
                previous: Some(resp),
                ..
            } => Outcome::Ready(resp),
            Outcome::Failed { previous: None, .. } => Outcome::Empty,
            other => other,
        }
    }

    fn failed(self, message: &str) -> Self {
        let previous = match self {
            Outcome::Empty => None,
            Outcome::Ready(resp) => Some(resp),
            Outcome::Failed { previous, .. } => previous,
        };
        Outcome::Failed {
            message: message.to_string(),
            previous,
        }
    }
}

/// A submission handed out by [`FormState::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit<F = Attachment> {
    pub ticket: u64,
    pub submission: Submission<F>,
}

/// Form state. `F` is the attachment handle type.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F = Attachment> {
    json_input: String,
    file: Option<F>,
    outcome: Outcome,
    selection: FilterSelection,
    last_ticket: u64,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self {
            json_input: String::new(),
            file: None,
            outcome: Outcome::Empty,
            selection: FilterSelection::new(),
            last_ticket: 0,
        }
    }
}

impl<F: Clone> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json_input(&self) -> &str {
        &self.json_input
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn response(&self) -> Option<&BfhlResponse> {
        self.outcome.response()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.error()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.json_input = text.into();
    }

    /// Keep the first selected file; an empty selection clears the file.
    pub fn on_file_change<I: IntoIterator<Item = F>>(&mut self, files: I) {
        self.file = files.into_iter().next();
    }

    pub fn on_filter_change<I: IntoIterator<Item = FilterTag>>(&mut self, selected: I) {
        self.selection.replace(selected);
    }

    /// Start a submit: clear the error and prepare the payload.
    ///
    /// Returns `None` when the JSON does not parse; the error is then set and
    /// nothing should be sent. Every attempt, rejected or not, supersedes the
    /// tickets handed out before it.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit<F>> {
        self.last_ticket += 1;
        self.outcome = std::mem::take(&mut self.outcome).cleared();

        match Submission::prepare(&self.json_input, self.file.clone()) {
            Ok(submission) => {
                debug!(
                    ticket = self.last_ticket,
                    bytes = submission.data.len(),
                    with_file = submission.file.is_some(),
                    "submission prepared"
                );
                Some(PendingSubmit {
                    ticket: self.last_ticket,
                    submission,
                })
            }
            Err(e) => {
                warn!(error = %e, "rejected form input");
                self.fail();
                None
            }
        }
    }

    /// Apply the result of a request. Returns `false` if the ticket was
    /// superseded by a later submit and the result was dropped.
    pub fn finish_submit(&mut self, ticket: u64, result: Result<BfhlResponse, FormError>) -> bool {
        if ticket != self.last_ticket {
            debug!(ticket, latest = self.last_ticket, "dropping superseded result");
            return false;
        }
        match result {
            Ok(response) => {
                debug!(ticket, "response stored");
                self.outcome = Outcome::Ready(response);
            }
            Err(e) => {
                warn!(ticket, error = %e, "submission failed");
                self.fail();
            }
        }
        true
    }

    /// Run a whole submit through a synchronous transport.
    pub fn submit<T: Transport<F> + ?Sized>(&mut self, transport: &T) {
        if let Some(pending) = self.begin_submit() {
            let result = transport.send(&pending.submission);
            self.finish_submit(pending.ticket, result);
        }
    }

    /// Render the stored response through the active selection.
    pub fn filtered_view(&self) -> Option<FilteredView> {
        render(self.response(), &self.selection)
    }

    fn fail(&mut self) {
        self.outcome = std::mem::take(&mut self.outcome).failed(USER_ERROR_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every submission and replies with queued results.
    struct MockTransport {
        sent: RefCell<Vec<Submission>>,
        replies: RefCell<Vec<Result<BfhlResponse, FormError>>>,
    }

    impl MockTransport {
        fn replying(replies: Vec<Result<BfhlResponse, FormError>>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                replies: RefCell::new(replies.into_iter().rev().collect()),
            }
        }
    }

    impl Transport for MockTransport {
        fn send(&self, submission: &Submission) -> Result<BfhlResponse, FormError> {
            self.sent.borrow_mut().push(submission.clone());
            self.replies
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(FormError::Transport("no reply queued".into())))
        }
    }

    fn sample() -> BfhlResponse {
        BfhlResponse::new(&["1", "2"], &["A", "B"], Some("b"))
    }

    #[test]
    fn test_initial_state() {
        let form: FormState = FormState::new();
        assert_eq!(form.json_input(), "");
        assert!(form.file().is_none());
        assert_eq!(form.outcome(), &Outcome::Empty);
        assert!(form.filtered_view().is_none());
    }

    #[test]
    fn test_submit_without_file() {
        let transport = MockTransport::replying(vec![Ok(sample())]);
        let mut form: FormState = FormState::new();
        form.on_input_change(r#"{"data": ["A","C","1","z"]}"#);
        form.submit(&transport);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].data, r#"{"data":["A","C","1","z"]}"#);
        assert!(sent[0].file.is_none());
        assert_eq!(form.response(), Some(&sample()));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_submit_with_first_file() {
        let transport = MockTransport::replying(vec![Ok(sample())]);
        let mut form: FormState = FormState::new();
        form.on_input_change("{}");
        form.on_file_change([
            Attachment::new("a.png", vec![1]),
            Attachment::new("b.pdf", vec![2]),
        ]);
        form.submit(&transport);

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].file.as_ref().map(|f| f.name.as_str()), Some("a.png"));
    }

    #[test]
    fn test_empty_file_selection_clears_file() {
        let mut form: FormState = FormState::new();
        form.on_file_change([Attachment::new("a.png", vec![1])]);
        form.on_file_change(std::iter::empty());
        assert!(form.file().is_none());
    }

    #[test]
    fn test_bad_json_sends_nothing() {
        let transport = MockTransport::replying(vec![Ok(sample())]);
        let mut form: FormState = FormState::new();
        form.on_input_change("{}");
        form.submit(&transport);

        form.on_input_change("not-json");
        form.submit(&transport);

        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(form.error(), Some(USER_ERROR_MESSAGE));
        assert_eq!(form.response(), Some(&sample()));
    }

    #[test]
    fn test_transport_failure_sets_error() {
        let transport = MockTransport::replying(vec![Err(FormError::Status { status: 500 })]);
        let mut form: FormState = FormState::new();
        form.on_input_change("[]");
        form.submit(&transport);

        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(form.error(), Some(USER_ERROR_MESSAGE));
        assert!(form.response().is_none());
    }

    #[test]
    fn test_resubmit_clears_error_and_replaces_response() {
        let second = BfhlResponse::new(&["9"], &[], Some("q"));
        let transport = MockTransport::replying(vec![
            Ok(sample()),
            Err(FormError::Transport("refused".into())),
            Ok(second.clone()),
        ]);
        let mut form: FormState = FormState::new();
        form.on_input_change("{}");

        form.submit(&transport);
        form.submit(&transport);
        assert!(form.error().is_some());
        assert_eq!(form.response(), Some(&sample()));

        form.submit(&transport);
        assert!(form.error().is_none());
        assert_eq!(form.outcome(), &Outcome::Ready(second));
    }

    #[test]
    fn test_begin_submit_clears_error() {
        let mut form: FormState = FormState::new();
        form.on_input_change("nope");
        assert!(form.begin_submit().is_none());
        assert!(form.error().is_some());

        form.on_input_change("{}");
        let pending = form.begin_submit().unwrap();
        assert!(form.error().is_none());
        assert_eq!(pending.ticket, 2);
    }

    #[test]
    fn test_superseded_result_dropped() {
        let mut form: FormState = FormState::new();
        form.on_input_change("{}");
        let first = form.begin_submit().unwrap();
        let second = form.begin_submit().unwrap();
        assert!(second.ticket > first.ticket);

        let latest = BfhlResponse::new(&["2"], &[], None);
        assert!(form.finish_submit(second.ticket, Ok(latest.clone())));
        assert!(!form.finish_submit(first.ticket, Ok(sample())));
        assert_eq!(form.response(), Some(&latest));
    }

    #[test]
    fn test_rejected_input_supersedes_in_flight() {
        let mut form: FormState = FormState::new();
        form.on_input_change("{}");
        let first = form.begin_submit().unwrap();

        form.on_input_change("not-json");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some(USER_ERROR_MESSAGE));

        assert!(!form.finish_submit(first.ticket, Ok(sample())));
        assert_eq!(form.error(), Some(USER_ERROR_MESSAGE));
        assert!(form.response().is_none());
    }

    #[test]
    fn test_superseded_failure_dropped() {
        let mut form: FormState = FormState::new();
        form.on_input_change("{}");
        let first = form.begin_submit().unwrap();
        let second = form.begin_submit().unwrap();

        form.finish_submit(second.ticket, Ok(sample()));
        form.finish_submit(first.ticket, Err(FormError::Transport("late".into())));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_filtered_view_follows_selection() {
        let transport = MockTransport::replying(vec![Ok(sample())]);
        let mut form: FormState = FormState::new();
        form.on_input_change("{}");
        form.on_filter_change([FilterTag::Alphabets]);
        assert!(form.filtered_view().is_none());

        form.submit(&transport);
        assert_eq!(form.filtered_view().unwrap().to_string(), "Alphabets: A, B");

        form.on_filter_change(std::iter::empty());
        assert!(form.filtered_view().unwrap().is_empty());
    }
}
