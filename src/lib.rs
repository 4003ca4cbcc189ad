//! Structured-logging decorator with declarative sensitive-field masking.
//!
//! Callers configure a list of [`MaskRule`]s naming sensitive fields, the
//! letter-casing conventions under which they match, a replacement token,
//! and optionally the sub-paths of the event to scrub and a gating
//! predicate. Every log event is passed through the ordered rule pipelines
//! in place before it reaches the underlying transport.
//!
//! ```
//! use logscrub::{Case, MaskRule, ScrubPipeline};
//! use serde_json::json;
//!
//! let rule = MaskRule {
//!     fields: vec!["password".into(), "username".into()],
//!     case: Case::Lower.into(),
//!     mask: "**scrubbed**".into(),
//!     target: vec![],
//! };
//! let pipeline = ScrubPipeline::from_rules(&[rule]).unwrap();
//!
//! let mut event = json!({"password": "hunter2", "nested": {"username": "alice"}});
//! pipeline.mask(&mut event);
//! assert_eq!(event["password"], "**scrubbed**");
//! assert_eq!(event["nested"]["username"], "**scrubbed**");
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod scrub;

pub use config::{MaskConfig, MaskRule};
pub use error::{LogscrubError, Result};
pub use logger::{Level, LogEvent, Logger, NullSink, Sink, TracingSink};
pub use scrub::case::{Case, CaseSet};
pub use scrub::{build_masker, build_masker_with, Masker, Predicate, ScrubPipeline};
