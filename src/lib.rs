/*!
 * # subcheck - DCP Subtitle Conformance Checker
 *
 * A Rust library validating subtitle assets of a Digital Cinema
 * Package composition playlist against the Interop and SMPTE subtitle
 * schema dialects.
 *
 * ## Features
 *
 * - Timecode conversion for tick-based (4 msec) and fractional-second
 *   subtitle timecodes at arbitrary edit rates
 * - Dialect adapter resolving logically-identical fields from the
 *   Interop (DCSubtitle) and SMPTE (SubtitleReel) document shapes
 * - Independent conformance rules for container format, schema
 *   validity, reel/language/edit-rate/uuid consistency, font files,
 *   cue timing, track duration, cue content and vertical positions
 * - Orchestrator aggregating one outcome per (rule, asset) pair
 *   without letting one failing rule block the others
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: timecode to frame-count conversion
 * - `document`: playlist, asset and subtitle document model
 * - `schema`: dialect tag and field resolution
 * - `validation`: the conformance rule set:
 *   - `validation::format`: container and XML-schema rules
 *   - `validation::metadata`: reel, language, edit-rate, uuid rules
 *   - `validation::fonts`: font reference and font file rules
 *   - `validation::timing`: cue timing and track duration rules
 *   - `validation::content`: cue content and position rules
 * - `checker`: the orchestrator
 * - `collaborators`: interfaces to the external document resolver,
 *   container unwrapper, file probe and schema validator
 * - `language_utils`: ISO language code resolution
 * - `config`: checker configuration
 * - `errors`: conformance vs. resolution error taxonomies
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod checker;
pub mod collaborators;
pub mod config;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod schema;
pub mod timecode;
pub mod validation;

// Re-export main types for easier usage
pub use checker::{Collaborators, Outcome, RuleOutcome, SubtitleChecker};
pub use config::CheckerConfig;
pub use document::{AssetDescriptor, Cpl, Cue, Reel, SubtitleDocument};
pub use errors::{ResolutionError, RuleError};
pub use language_utils::{LanguageIdentity, language_codes_match, lookup_language};
pub use schema::{Dialect, SchemaAdapter};
