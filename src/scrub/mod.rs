pub mod case;
pub mod gate;
pub mod path;
pub mod recursive;
pub mod target;

use std::fmt;

use serde_json::Value;

use crate::config::MaskRule;
use crate::error::Result;

use gate::PredicateGate;
use recursive::RecursiveScrubber;
use target::TargetSelector;

/// A single masking layer.
pub trait Masker: Send + Sync {
    /// Mask sensitive fields in `event`, mutating it in place.
    fn mask(&self, event: &mut Value);

    /// Name of this masker layer (for logging/debugging).
    fn name(&self) -> &str;
}

/// Boolean gate evaluated against the whole event before a rule applies.
pub type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// Build the three-stage masker for one rule:
/// predicate gate -> target selection -> recursive mask.
///
/// The gate sees the whole, untouched event; only if it passes does target
/// narrowing and then field masking occur. The default predicate is
/// constant-true.
pub fn build_masker(rule: &MaskRule) -> Result<Box<dyn Masker>> {
    build_masker_with(rule, Box::new(|_| true))
}

/// Like [`build_masker`], with a caller-supplied gating predicate.
pub fn build_masker_with(rule: &MaskRule, predicate: Box<Predicate>) -> Result<Box<dyn Masker>> {
    let base = RecursiveScrubber::new(&rule.fields, rule.case, rule.mask.clone())?;
    let targeted = TargetSelector::new(rule.target.clone(), Box::new(base));
    Ok(Box::new(PredicateGate::new(predicate, Box::new(targeted))))
}

/// The complete masking pipeline. Runs all configured maskers in order.
///
/// The pipeline holds no per-event state; one instance is safely shared
/// across threads as long as each invocation owns its event. When a later
/// rule's target path references structure an earlier rule already
/// overwrote, the later path resolves against the mutated event; this
/// order-dependence follows configuration order and is intentional.
pub struct ScrubPipeline {
    maskers: Vec<Box<dyn Masker>>,
}

impl ScrubPipeline {
    pub fn new(maskers: Vec<Box<dyn Masker>>) -> Self {
        Self { maskers }
    }

    /// Build one composed masker per rule, in configuration order.
    pub fn from_rules(rules: &[MaskRule]) -> Result<Self> {
        let maskers = rules
            .iter()
            .map(build_masker)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { maskers })
    }

    /// Append a masker, after those already configured.
    pub fn push(&mut self, masker: Box<dyn Masker>) {
        self.maskers.push(masker);
    }

    /// Run every masker in order on `event`, in place.
    pub fn mask(&self, event: &mut Value) {
        for masker in &self.maskers {
            masker.mask(event);
        }
    }
}

impl fmt::Debug for ScrubPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.maskers.iter().map(|m| m.name()).collect();
        f.debug_struct("ScrubPipeline")
            .field("maskers", &names)
            .finish()
    }
}
