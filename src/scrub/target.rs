use serde_json::Value;

use super::{path, Masker};

/// Target stage: narrows masking to one or more dot-separated paths,
/// applying the wrapped masker to every sub-value each path resolves to
/// instead of the event root. Paths are independent and cumulative; a path
/// that resolves to nothing is a no-op, not an error.
pub struct TargetSelector {
    paths: Vec<String>,
    inner: Box<dyn Masker>,
}

impl TargetSelector {
    /// An empty `paths` list targets the event root itself.
    pub fn new(paths: Vec<String>, inner: Box<dyn Masker>) -> Self {
        let paths = if paths.is_empty() {
            vec![String::new()]
        } else {
            paths
        };
        Self { paths, inner }
    }
}

impl Masker for TargetSelector {
    fn mask(&self, event: &mut Value) {
        for target in &self.paths {
            for node in path::resolve_mut(event, target) {
                self.inner.mask(node);
            }
        }
    }

    fn name(&self) -> &str {
        "target-selector"
    }
}
