//! Extraction of the JSON object a model embeds in a fenced code block
//!
//! The model is prompted to answer with a single JSON object wrapped in a
//! Markdown code fence. Every fence marker is removed wherever it appears and
//! the remainder is parsed as-is.

use crate::utils::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static FENCE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("Invalid code fence regex"));

/// Remove every `` ```json `` and `` ``` `` marker and trim the result
pub fn strip_code_fences(text: &str) -> String {
    FENCE_MARKER.replace_all(text, "").trim().to_string()
}

/// Strip code fences from a model reply and parse what is left as JSON
pub fn parse_fenced_json(text: &str) -> Result<Value> {
    let stripped = strip_code_fences(text);
    Ok(serde_json::from_str(&stripped)?)
}
