use serde::{Deserialize, Serialize};

/// Languages the generation service can annotate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLanguage {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    #[serde(rename = "C++")]
    Cpp,
}

impl TargetLanguage {
    /// Wire/display name, as sent in the `language` multipart field
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Python => "Python",
            TargetLanguage::JavaScript => "JavaScript",
            TargetLanguage::TypeScript => "TypeScript",
            TargetLanguage::Java => "Java",
            TargetLanguage::C => "C",
            TargetLanguage::Cpp => "C++",
        }
    }

    /// File extension used for the downloaded result
    pub fn file_extension(&self) -> &'static str {
        extension_for(self.name())
    }

    /// All selectable languages, in UI order
    pub fn all() -> Vec<TargetLanguage> {
        vec![
            TargetLanguage::Python,
            TargetLanguage::JavaScript,
            TargetLanguage::TypeScript,
            TargetLanguage::Java,
            TargetLanguage::C,
            TargetLanguage::Cpp,
        ]
    }

    /// Parse from the wire/display name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Python" => Some(TargetLanguage::Python),
            "JavaScript" => Some(TargetLanguage::JavaScript),
            "TypeScript" => Some(TargetLanguage::TypeScript),
            "Java" => Some(TargetLanguage::Java),
            "C" => Some(TargetLanguage::C),
            "C++" => Some(TargetLanguage::Cpp),
            _ => None,
        }
    }
}

impl ToString for TargetLanguage {
    fn to_string(&self) -> String {
        self.name().to_string()
    }
}

/// Download extension for a language label. Labels the mapping does not know
/// (a future language value) fall back to `txt`.
pub fn extension_for(language: &str) -> &'static str {
    match language {
        "Python" => "py",
        "JavaScript" => "js",
        "TypeScript" => "ts",
        "Java" => "java",
        "C" => "c",
        "C++" => "cpp",
        _ => "txt",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(TargetLanguage::Python.file_extension(), "py");
        assert_eq!(TargetLanguage::JavaScript.file_extension(), "js");
        assert_eq!(TargetLanguage::TypeScript.file_extension(), "ts");
        assert_eq!(TargetLanguage::Java.file_extension(), "java");
        assert_eq!(TargetLanguage::C.file_extension(), "c");
        assert_eq!(TargetLanguage::Cpp.file_extension(), "cpp");
    }

    #[test]
    fn test_unknown_label_falls_back_to_txt() {
        assert_eq!(extension_for("Rust"), "txt");
        assert_eq!(extension_for(""), "txt");
    }

    #[test]
    fn test_name_roundtrip() {
        for lang in TargetLanguage::all() {
            assert_eq!(TargetLanguage::from_name(lang.name()), Some(lang));
        }
        assert_eq!(TargetLanguage::from_name("Cobol"), None);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&TargetLanguage::Cpp).unwrap();
        assert_eq!(json, "\"C++\"");
        let parsed: TargetLanguage = serde_json::from_str("\"C++\"").unwrap();
        assert_eq!(parsed, TargetLanguage::Cpp);
    }
}
