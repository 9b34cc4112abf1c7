//! Submission gateway: one multipart POST to the generation service.
//!
//! Single attempt, no retry, no timeout. The gateway never touches UI state;
//! the view model applies the returned result or error.

use crate::generator::session::SubmissionDraft;
use crate::shared::api_utils::api_url;
use contracts::generation::{
    GenerateResponse, FIELD_CODE, FIELD_FILE, FIELD_FORMAT, FIELD_LANGUAGE, FIELD_MODE,
    GENERATE_PATH,
};
use gloo_net::http::Request;
use thiserror::Error;

/// How a submission attempt failed. Every variant is terminal for that
/// attempt only; the session stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Connection failure: host unreachable, request aborted
    #[error("{0}")]
    Transport(String),
    /// Server answered with a non-success status
    #[error("{0}")]
    Remote(String),
    /// Success status, but the body did not match the expected shape
    #[error("{0}")]
    Protocol(String),
}

/// Submit the current draft. `file` must carry the picked handle when the
/// draft is in file mode; validation has already run by the time we get here.
pub async fn generate(
    draft: &SubmissionDraft,
    file: Option<web_sys::File>,
) -> Result<GenerateResponse, SubmitError> {
    let form = build_form(draft, file).map_err(SubmitError::Transport)?;

    let url = api_url(GENERATE_PATH);
    log::info!(
        "POST {} ({}, {}, mode={})",
        url,
        draft.language.name(),
        draft.format.name(),
        draft.mode.name()
    );

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| SubmitError::Transport(format!("failed to build request: {e}")))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let message = remote_message(response.status(), &body);
        log::error!("generate failed: HTTP {}: {}", response.status(), message);
        return Err(SubmitError::Remote(message));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    GenerateResponse::from_json(&body).map_err(|e| {
        log::error!("generate returned an unexpected body: {e:#}");
        SubmitError::Protocol(format!("{e:#}"))
    })
}

/// Multipart body: `language`, `format`, `mode`, and `code` or `file`
/// depending on the mode.
fn build_form(
    draft: &SubmissionDraft,
    file: Option<web_sys::File>,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_str(FIELD_LANGUAGE, draft.language.name())
        .map_err(|e| format!("{e:?}"))?;
    form.append_with_str(FIELD_FORMAT, draft.format.name())
        .map_err(|e| format!("{e:?}"))?;
    form.append_with_str(FIELD_MODE, draft.mode.name())
        .map_err(|e| format!("{e:?}"))?;

    match file {
        Some(file) => {
            form.append_with_blob(FIELD_FILE, &file)
                .map_err(|e| format!("{e:?}"))?;
        }
        None => {
            form.append_with_str(FIELD_CODE, &draft.code)
                .map_err(|e| format!("{e:?}"))?;
        }
    }
    Ok(form)
}

/// Error message shown for a non-success status: the response body text, or a
/// generic fallback when the body is empty.
fn remote_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("Failed to generate docstring (HTTP {status})")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_message_uses_body_text() {
        assert_eq!(remote_message(400, "bad input"), "bad input");
    }

    #[test]
    fn test_remote_message_falls_back_when_body_empty() {
        assert_eq!(
            remote_message(502, ""),
            "Failed to generate docstring (HTTP 502)"
        );
        assert_eq!(
            remote_message(500, "  \n"),
            "Failed to generate docstring (HTTP 500)"
        );
    }
}
