//! # bfhl-form
//!
//! A small form controller for the `/bfhl` endpoint.
//!
//! The form takes raw JSON text and an optional file, posts both as a single
//! multipart request, and renders a filtered summary of the response.
//!
//! ## Overview
//!
//! - **Submission**: JSON is parsed and re-serialized under the `data` part,
//!   the attachment (if any) goes under the `file` part
//! - **Outcome**: one tagged value holding the last response and/or the
//!   user-facing error
//! - **Filtering**: three fixed options rendered in a fixed order
//!
//! ## Example
//!
//! ```
//! use bfhl_form::{BfhlResponse, FilterTag, FormState};
//!
//! let mut form: FormState = FormState::default();
//! form.on_input_change(r#"{"data": ["A", "C", "1", "z"]}"#);
//!
//! let pending = form.begin_submit().expect("valid JSON");
//! assert_eq!(pending.submission.data, r#"{"data":["A","C","1","z"]}"#);
//!
//! let response: BfhlResponse = serde_json::from_str(
//!     r#"{"numbers": ["1"], "alphabets": ["A", "C", "z"], "highest_lowercase_alphabet": "z"}"#,
//! )
//! .unwrap();
//! form.finish_submit(pending.ticket, Ok(response));
//!
//! form.on_filter_change([FilterTag::HighestLowercaseAlphabet, FilterTag::Numbers]);
//! let view = form.filtered_view().expect("response stored");
//! assert_eq!(view.to_string(), "Numbers: 1\nHighest Lowercase Alphabet: z");
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod form;
#[cfg(feature = "cli")]
pub mod http;
#[cfg(feature = "cli")]
pub mod logging;
pub mod response;
pub mod submission;

pub use config::{DEFAULT_ENDPOINT, FormConfig};
pub use error::{FormError, USER_ERROR_MESSAGE};
pub use filter::{
    FILTER_OPTIONS, FilterOption, FilterSelection, FilterTag, FilteredView, PICKER_ORDER,
    picker_options, render,
};
pub use form::{FormState, Outcome, PendingSubmit, Transport};
#[cfg(feature = "cli")]
pub use http::HttpTransport;
pub use response::{BfhlResponse, FieldValue, ResponseField};
pub use submission::{ACCEPT_FILTER, Attachment, Submission, accepts};
