pub mod docstring_format;
pub mod input_mode;
pub mod target_language;

pub use docstring_format::DocstringFormat;
pub use input_mode::InputMode;
pub use target_language::{extension_for, TargetLanguage};
