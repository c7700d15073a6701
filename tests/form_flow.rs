//! End-to-end form flow against an in-memory transport.

use bfhl_form::{
    Attachment, BfhlResponse, FilterTag, FormError, FormState, Outcome, Submission, Transport,
    USER_ERROR_MESSAGE,
};
use std::cell::RefCell;

/// Replies with a fixed body and counts requests.
struct FixedReply {
    body: &'static str,
    sent: RefCell<Vec<Submission>>,
}

impl FixedReply {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for FixedReply {
    fn send(&self, submission: &Submission) -> Result<BfhlResponse, FormError> {
        self.sent.borrow_mut().push(submission.clone());
        serde_json::from_str(self.body).map_err(|e| FormError::Decode(e.to_string()))
    }
}

const SAMPLE_BODY: &str = r#"{
    "is_success": true,
    "numbers": ["1", "2"],
    "alphabets": ["A", "B"],
    "highest_lowercase_alphabet": "b"
}"#;

#[test]
fn test_one_post_per_submit() {
    let transport = FixedReply::new(SAMPLE_BODY);
    let mut form: FormState = FormState::new();
    form.on_input_change(r#"{"data": ["A","C","1","z"]}"#);
    form.submit(&transport);

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].data, r#"{"data":["A","C","1","z"]}"#);
    assert!(sent[0].file.is_none());
}

#[test]
fn test_attachment_travels_with_data() {
    let transport = FixedReply::new(SAMPLE_BODY);
    let mut form: FormState = FormState::new();
    form.on_input_change(r#"{"data": []}"#);
    form.on_file_change([Attachment::new("scan.png", vec![0x89, b'P', b'N', b'G'])]);
    form.submit(&transport);

    let sent = transport.sent.borrow();
    let file = sent[0].file.as_ref().unwrap();
    assert_eq!(file.name, "scan.png");
    assert_eq!(file.mime.as_deref(), Some("image/png"));
}

#[test]
fn test_filtered_summary_two_lines() {
    let transport = FixedReply::new(SAMPLE_BODY);
    let mut form: FormState = FormState::new();
    form.on_input_change("{}");
    form.submit(&transport);

    form.on_filter_change([FilterTag::HighestLowercaseAlphabet, FilterTag::Numbers]);
    let view = form.filtered_view().unwrap();
    assert_eq!(
        view.lines,
        vec!["Numbers: 1, 2", "Highest Lowercase Alphabet: b"]
    );
}

#[test]
fn test_undecodable_body_is_error() {
    let transport = FixedReply::new("<html>oops</html>");
    let mut form: FormState = FormState::new();
    form.on_input_change("{}");
    form.submit(&transport);

    assert_eq!(transport.sent.borrow().len(), 1);
    assert_eq!(
        form.outcome(),
        &Outcome::Failed {
            message: USER_ERROR_MESSAGE.to_string(),
            previous: None,
        }
    );
    assert!(form.filtered_view().is_none());
}

#[test]
fn test_response_kept_through_bad_input() {
    let transport = FixedReply::new(SAMPLE_BODY);
    let mut form: FormState = FormState::new();
    form.on_input_change("{}");
    form.submit(&transport);
    form.on_filter_change([FilterTag::Alphabets]);

    form.on_input_change("not-json");
    form.submit(&transport);

    assert_eq!(transport.sent.borrow().len(), 1);
    assert_eq!(form.error(), Some(USER_ERROR_MESSAGE));
    assert_eq!(form.filtered_view().unwrap().to_string(), "Alphabets: A, B");
}
