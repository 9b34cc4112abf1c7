use serde::{Deserialize, Serialize};

/// How the user supplies source code: pasted text or an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Code,
    File,
}

impl InputMode {
    /// Wire name, as sent in the `mode` multipart field
    pub fn name(&self) -> &'static str {
        match self {
            InputMode::Code => "code",
            InputMode::File => "file",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "code" => Some(InputMode::Code),
            "file" => Some(InputMode::File),
            _ => None,
        }
    }
}

impl ToString for InputMode {
    fn to_string(&self) -> String {
        self.name().to_string()
    }
}
