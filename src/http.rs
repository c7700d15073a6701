//! Blocking multipart transport for native hosts.

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::form::Transport;
use crate::response::BfhlResponse;
use crate::submission::{Attachment, DATA_PART, FILE_PART, Submission};

impl From<reqwest::Error> for FormError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FormError::Decode(e.to_string())
        } else {
            FormError::Transport(e.to_string())
        }
    }
}

/// Posts submissions to the configured endpoint. One request per call, no
/// retries and no timeout.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &FormConfig) -> Result<Self, FormError> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Build the multipart body: `data` always, `file` only when attached.
fn multipart_form(submission: &Submission) -> Result<Form, FormError> {
    let mut form = Form::new().text(DATA_PART, submission.data.clone());
    if let Some(file) = &submission.file {
        form = form.part(FILE_PART, file_part(file)?);
    }
    Ok(form)
}

fn file_part(file: &Attachment) -> Result<Part, FormError> {
    let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
    match &file.mime {
        Some(mime) => Ok(part.mime_str(mime)?),
        None => Ok(part),
    }
}

impl Transport for HttpTransport {
    fn send(&self, submission: &Submission) -> Result<BfhlResponse, FormError> {
        debug!(endpoint = %self.endpoint, "posting submission");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(multipart_form(submission)?)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| FormError::Decode(e.to_string()))
    }
}
