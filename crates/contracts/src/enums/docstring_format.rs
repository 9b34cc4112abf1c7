use serde::{Deserialize, Serialize};

/// Docstring conventions the generation service can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocstringFormat {
    Google,
    NumPy,
    #[serde(rename = "PEP-257")]
    Pep257,
}

impl DocstringFormat {
    /// Wire/display name, as sent in the `format` multipart field
    pub fn name(&self) -> &'static str {
        match self {
            DocstringFormat::Google => "Google",
            DocstringFormat::NumPy => "NumPy",
            DocstringFormat::Pep257 => "PEP-257",
        }
    }

    /// All selectable formats, in UI order
    pub fn all() -> Vec<DocstringFormat> {
        vec![
            DocstringFormat::Google,
            DocstringFormat::NumPy,
            DocstringFormat::Pep257,
        ]
    }

    /// Parse from the wire/display name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Google" => Some(DocstringFormat::Google),
            "NumPy" => Some(DocstringFormat::NumPy),
            "PEP-257" => Some(DocstringFormat::Pep257),
            _ => None,
        }
    }
}

impl ToString for DocstringFormat {
    fn to_string(&self) -> String {
        self.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for format in DocstringFormat::all() {
            assert_eq!(DocstringFormat::from_name(format.name()), Some(format));
        }
        assert_eq!(DocstringFormat::from_name("reST"), None);
    }
}
