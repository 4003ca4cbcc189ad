use std::collections::HashSet;

use serde_json::Value;

use crate::error::{LogscrubError, Result};

use super::case::CaseSet;
use super::Masker;

/// Base masking stage: walks a payload depth-first and overwrites the value
/// of any key whose name equals some case variant of a configured field.
#[derive(Debug)]
pub struct RecursiveScrubber {
    match_keys: HashSet<String>,
    mask: String,
}

impl RecursiveScrubber {
    /// Build from field names, the case variants to match under, and the
    /// replacement token. The match set (every case transform of every
    /// field) is expanded once here, not per event.
    ///
    /// An empty case set can never match anything and is rejected.
    pub fn new(fields: &[String], cases: CaseSet, mask: impl Into<String>) -> Result<Self> {
        if cases.is_empty() {
            return Err(LogscrubError::EmptyCaseSet {
                fields: fields.to_vec(),
            });
        }
        let mut match_keys = HashSet::new();
        for case in cases.iter() {
            for field in fields {
                match_keys.insert(case.transform(field));
            }
        }
        Ok(Self {
            match_keys,
            mask: mask.into(),
        })
    }

    fn walk(&self, node: &mut Value) {
        match node {
            Value::Object(map) => {
                for (key, value) in map.iter_mut() {
                    if self.match_keys.contains(key.as_str()) {
                        // Matched values are overwritten whole, whatever
                        // their prior type; never recursed into.
                        *value = Value::String(self.mask.clone());
                    } else if value.is_object() || value.is_array() {
                        self.walk(value);
                    }
                }
            }
            Value::Array(items) => {
                // Sequences are never match targets themselves.
                for item in items {
                    self.walk(item);
                }
            }
            _ => {}
        }
    }
}

impl Masker for RecursiveScrubber {
    fn mask(&self, event: &mut Value) {
        self.walk(event);
    }

    fn name(&self) -> &str {
        "recursive-scrubber"
    }
}
