use super::{api, session::SelectedFile, session::Session};
use crate::shared::alert::alert;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::download::save_text_file;
use contracts::enums::{DocstringFormat, InputMode, TargetLanguage};
use leptos::prelude::*;

/// ViewModel for the generator page
///
/// State lives in a single `Session` signal; the picked `web_sys::File`
/// handle is kept out of the reactive graph in a local `StoredValue` and is
/// cleared in lockstep with the draft's file metadata.
#[derive(Clone, Copy)]
pub struct GeneratorViewModel {
    pub session: RwSignal<Session>,
    file_handle: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl GeneratorViewModel {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            file_handle: StoredValue::new_local(None),
        }
    }

    pub fn set_language(&self, language: TargetLanguage) {
        self.session.update(|s| s.draft.language = language);
    }

    pub fn set_format(&self, format: DocstringFormat) {
        self.session.update(|s| s.draft.format = format);
    }

    /// Switching to code mode also drops the held file handle
    pub fn set_mode(&self, mode: InputMode) {
        self.session.update(|s| s.draft.set_mode(mode));
        if mode == InputMode::Code {
            self.file_handle.set_value(None);
        }
    }

    pub fn set_code(&self, code: String) {
        self.session.update(|s| s.draft.code = code);
    }

    pub fn set_file(&self, file: web_sys::File) {
        let meta = SelectedFile {
            name: file.name(),
            size_bytes: file.size() as u64,
        };
        self.file_handle.set_value(Some(file));
        self.session.update(|s| s.draft.set_file(meta));
    }

    pub fn set_result_code(&self, code: String) {
        self.session.update(|s| s.result_code = code);
    }

    /// Validate and fire the generation request. Inert while a request is
    /// already outstanding; validation failures alert and skip the network.
    pub fn submit_command(&self) {
        if !self.session.with_untracked(|s| s.can_submit()) {
            return;
        }
        let draft = self.session.with_untracked(|s| s.draft.clone());
        if let Err(e) = draft.validate() {
            alert(&e.to_string());
            return;
        }

        self.session.update(|s| s.start_submit());
        let session = self.session;
        let file = self.file_handle.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::generate(&draft, file).await {
                Ok(response) => {
                    log::info!(
                        "generation finished: {} documented item(s)",
                        response.docs.len()
                    );
                    session.update(|s| s.succeed(response));
                }
                Err(e) => {
                    session.update(|s| s.fail());
                    alert(&e.to_string());
                }
            }
        });
    }

    /// Save the current (possibly edited) result text. No-op on empty text.
    pub fn download_command(&self) {
        let (text, language) = self
            .session
            .with_untracked(|s| (s.result_code.clone(), s.draft.language));
        if text.is_empty() {
            return;
        }
        if let Err(e) = save_text_file(&text, &download_filename(language)) {
            log::error!("download failed: {e}");
        }
    }

    /// Fire-and-forget clipboard copy
    pub fn copy_command(&self) {
        let text = self.session.with_untracked(|s| s.result_code.clone());
        copy_to_clipboard(&text);
    }

    /// Back to the form; prior field selections stay as they were
    pub fn reset_command(&self) {
        self.session.update(|s| s.reset());
    }
}

impl Default for GeneratorViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Filename offered for the downloaded result
pub fn download_filename(language: TargetLanguage) -> String {
    format!("docstring_output.{}", language.file_extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename_follows_language() {
        assert_eq!(
            download_filename(TargetLanguage::Java),
            "docstring_output.java"
        );
        assert_eq!(
            download_filename(TargetLanguage::Python),
            "docstring_output.py"
        );
        assert_eq!(
            download_filename(TargetLanguage::Cpp),
            "docstring_output.cpp"
        );
    }
}
