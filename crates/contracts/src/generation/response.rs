use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Successful response of `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Source code with docstrings inserted
    pub modified_code: String,

    /// Per-function report. Older servers omit this field.
    #[serde(default)]
    pub docs: Vec<FunctionDoc>,
}

/// One documented function or class in the submitted source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDoc {
    pub name: String,

    pub start_lineno: u32,

    /// Absent for languages whose parser reports no end position
    pub end_lineno: Option<u32>,

    pub existing_docstring: Option<String>,

    pub generated_docstring: Option<String>,
}

impl GenerateResponse {
    /// Strict parse of the response body. A body without `modified_code` is
    /// rejected rather than defaulted.
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        serde_json::from_str(body).context("malformed generate response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_body() {
        let resp = GenerateResponse::from_json(r#"{"modified_code": "X"}"#).unwrap();
        assert_eq!(resp.modified_code, "X");
        assert!(resp.docs.is_empty());
    }

    #[test]
    fn test_parse_full_body() {
        let body = r#"{
            "modified_code": "def f():\n    \"\"\"Doc.\"\"\"\n    pass",
            "docs": [{
                "name": "f",
                "start_lineno": 1,
                "end_lineno": 2,
                "existing_docstring": null,
                "generated_docstring": "Doc."
            }]
        }"#;
        let resp = GenerateResponse::from_json(body).unwrap();
        assert_eq!(resp.docs.len(), 1);
        assert_eq!(resp.docs[0].name, "f");
        assert_eq!(resp.docs[0].start_lineno, 1);
        assert_eq!(resp.docs[0].generated_docstring.as_deref(), Some("Doc."));
    }

    #[test]
    fn test_missing_modified_code_is_rejected() {
        assert!(GenerateResponse::from_json(r#"{"docs": []}"#).is_err());
        assert!(GenerateResponse::from_json("not json").is_err());
    }
}
