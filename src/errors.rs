/*!
 * Error types for the subcheck library.
 *
 * Two disjoint taxonomies are kept apart on purpose:
 * - `RuleError::Violation` is the expected, first-class outcome of a
 *   conformance rule (non-conformant input).
 * - `ResolutionError` covers structural problems: timecodes matching no
 *   supported pattern, fields that cannot be resolved, collaborator
 *   failures (bad input).
 *
 * The orchestrator recovers both locally and never aborts a run, but
 * formats them differently so operators can tell them apart.
 */

use thiserror::Error;

/// Structural errors raised while resolving documents, fields or timecodes.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// Timecode string matches neither the tick nor the fractional pattern
    #[error("malformed timecode: {0}")]
    MalformedTimecode(String),

    /// A field the rule needs is structurally absent from the document
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but its value cannot be interpreted
    #[error("invalid value for {field}: {value}")]
    InvalidField {
        /// Logical field name
        field: &'static str,
        /// Raw value as found in the document
        value: String,
    },

    /// An external collaborator (resolver, unwrapper, prober) failed
    #[error("collaborator failure: {0}")]
    Collaborator(String),

    /// Underlying I/O failure while probing files
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome-bearing error type returned by every conformance rule.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The asset is non-conformant; carries the operator-facing message
    #[error("{0}")]
    Violation(String),

    /// The rule could not be evaluated because its input is malformed
    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),
}

impl RuleError {
    /// Build a conformance violation from any displayable message
    pub fn violation(message: impl Into<String>) -> Self {
        Self::Violation(message.into())
    }
}
