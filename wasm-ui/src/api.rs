//! Browser transport: one multipart POST per submit.

use bfhl_form::submission::{DATA_PART, FILE_PART};
use bfhl_form::{BfhlResponse, FormError, Submission};
use gloo::net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Post a submission and decode the response body.
///
/// The browser picks the multipart boundary, so no content type is set here.
pub async fn post_submission(
    endpoint: &str,
    submission: &Submission<File>,
) -> Result<BfhlResponse, FormError> {
    let body = form_data(submission)?;
    let response = Request::post(endpoint)
        .body(body)
        .map_err(|e| FormError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| FormError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FormError::Status {
            status: response.status(),
        });
    }

    response
        .json::<BfhlResponse>()
        .await
        .map_err(|e| FormError::Decode(e.to_string()))
}

fn form_data(submission: &Submission<File>) -> Result<FormData, FormError> {
    let data = FormData::new().map_err(js_error)?;
    data.append_with_str(DATA_PART, &submission.data)
        .map_err(js_error)?;
    if let Some(file) = &submission.file {
        data.append_with_blob_and_filename(FILE_PART, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(data)
}

fn js_error(e: JsValue) -> FormError {
    FormError::Transport(format!("{e:?}"))
}
