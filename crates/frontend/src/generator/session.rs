//! Form state for a single generation session.
//!
//! Plain data, no signals: the view model wraps this in a `RwSignal`. The
//! `web_sys::File` handle itself stays in the view layer; the draft only
//! carries the metadata needed for validation and display.

use contracts::enums::{DocstringFormat, InputMode, TargetLanguage};
use contracts::generation::{FunctionDoc, GenerateResponse, MAX_UPLOAD_BYTES};
use thiserror::Error;

/// Metadata of the file picked in the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

/// Where the session is in the submit round-trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    /// Last submission failed; draft fields are untouched and may be resubmitted
    Failed,
    /// A result is available and shown by the result panel
    Ready,
}

/// Input missing or unusable; checked before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some code!")]
    EmptyCode,
    #[error("Please upload a file!")]
    MissingFile,
    #[error("The uploaded file is larger than 10 MB.")]
    FileTooLarge,
}

/// The user's current input selections
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDraft {
    pub language: TargetLanguage,
    pub format: DocstringFormat,
    pub mode: InputMode,
    pub code: String,
    pub file: Option<SelectedFile>,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            language: TargetLanguage::Python,
            format: DocstringFormat::Google,
            mode: InputMode::Code,
            code: String::new(),
            file: None,
        }
    }
}

impl SubmissionDraft {
    /// Switch the input mode. The payload of the other mode is cleared so the
    /// draft never carries both code text and a file.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        match mode {
            InputMode::Code => self.file = None,
            InputMode::File => self.code.clear(),
        }
    }

    pub fn set_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.mode {
            InputMode::Code => {
                if self.code.trim().is_empty() {
                    return Err(ValidationError::EmptyCode);
                }
            }
            InputMode::File => match &self.file {
                None => return Err(ValidationError::MissingFile),
                Some(file) if file.size_bytes > MAX_UPLOAD_BYTES => {
                    return Err(ValidationError::FileTooLarge);
                }
                Some(_) => {}
            },
        }
        Ok(())
    }
}

/// One view instance's state: draft + phase + the editable result
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub draft: SubmissionDraft,
    pub phase: Phase,
    pub result_code: String,
    pub docs: Vec<FunctionDoc>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The submit control is inert while a call is outstanding
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Submitting
    }

    pub fn start_submit(&mut self) {
        self.phase = Phase::Submitting;
    }

    pub fn succeed(&mut self, response: GenerateResponse) {
        self.result_code = response.modified_code;
        self.docs = response.docs;
        self.phase = Phase::Ready;
    }

    pub fn fail(&mut self) {
        self.phase = Phase::Failed;
    }

    /// Drop the result and return to the form. Field selections survive.
    pub fn reset(&mut self) {
        self.result_code.clear();
        self.docs.clear();
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file(size_bytes: u64) -> SelectedFile {
        SelectedFile {
            name: "main.py".to_string(),
            size_bytes,
        }
    }

    #[test]
    fn test_empty_code_fails_validation() {
        let mut draft = SubmissionDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyCode));
        draft.code = "   \n\t ".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyCode));
        draft.code = "def f(): pass".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_missing_file_fails_validation() {
        let mut draft = SubmissionDraft::default();
        draft.set_mode(InputMode::File);
        assert_eq!(draft.validate(), Err(ValidationError::MissingFile));
        draft.set_file(sample_file(1024));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_oversized_file_fails_validation() {
        let mut draft = SubmissionDraft::default();
        draft.set_mode(InputMode::File);
        draft.set_file(sample_file(MAX_UPLOAD_BYTES + 1));
        assert_eq!(draft.validate(), Err(ValidationError::FileTooLarge));
        draft.set_file(sample_file(MAX_UPLOAD_BYTES));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_mode_switch_clears_other_payload() {
        let mut draft = SubmissionDraft::default();
        draft.code = "print(1)".to_string();
        draft.set_mode(InputMode::File);
        assert!(draft.code.is_empty());

        draft.set_file(sample_file(10));
        draft.set_mode(InputMode::Code);
        assert!(draft.file.is_none());
    }

    #[test]
    fn test_duplicate_submit_is_suppressed() {
        let mut session = Session::new();
        assert!(session.can_submit());
        session.start_submit();
        assert!(!session.can_submit());
        session.fail();
        assert!(session.can_submit());
    }

    #[test]
    fn test_success_stores_result_verbatim() {
        let mut session = Session::new();
        session.start_submit();
        session.succeed(GenerateResponse {
            modified_code: "X".to_string(),
            docs: vec![],
        });
        assert_eq!(session.phase, Phase::Ready);
        assert_eq!(session.result_code, "X");
    }

    #[test]
    fn test_reset_keeps_field_selections() {
        let mut session = Session::new();
        session.draft.language = TargetLanguage::Java;
        session.draft.format = DocstringFormat::NumPy;
        session.draft.code = "class A {}".to_string();
        session.start_submit();
        session.succeed(GenerateResponse {
            modified_code: "class A { /** doc */ }".to_string(),
            docs: vec![],
        });

        session.reset();
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.result_code.is_empty());
        assert!(session.docs.is_empty());
        assert_eq!(session.draft.language, TargetLanguage::Java);
        assert_eq!(session.draft.format, DocstringFormat::NumPy);
        assert_eq!(session.draft.code, "class A {}");
    }

    #[test]
    fn test_failure_keeps_draft_for_retry() {
        let mut session = Session::new();
        session.draft.code = "print(1)".to_string();
        session.start_submit();
        session.fail();
        assert_eq!(session.phase, Phase::Failed);
        assert_eq!(session.draft.code, "print(1)");
        assert!(session.can_submit());
    }
}
