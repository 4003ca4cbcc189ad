use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LogscrubError, Result};
use crate::scrub::case::CaseSet;

/// Masking rules as loaded from configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Rules are applied to every event in this order.
    #[serde(default)]
    pub rules: Vec<MaskRule>,
}

impl MaskConfig {
    /// Load masking config from a YAML file. Returns default (no rules) if
    /// the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| LogscrubError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// One masking rule: which fields are sensitive, under which case variants
/// a key matches them, the replacement token, and optionally the target
/// paths that narrow where masking applies.
///
/// Gating predicates are runtime functions and cannot appear in file
/// config; attach one with [`crate::scrub::build_masker_with`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskRule {
    /// Sensitive field names, pre-case-transform. A single string or a list.
    #[serde(deserialize_with = "one_or_many")]
    pub fields: Vec<String>,

    /// Case variants under which a key matches a field. Must be non-empty
    /// for the rule to build.
    pub case: CaseSet,

    /// Replacement token written over matched values.
    pub mask: String,

    /// Dot-separated target paths. A single string or a list; omitted
    /// targets the event root.
    #[serde(default, deserialize_with = "one_or_many")]
    pub target: Vec<String>,
}

/// Accepts a single value or a sequence of values.
fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
