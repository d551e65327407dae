/*!
 * Conformance rule set for subtitle assets.
 *
 * Each rule is an independently-evaluable predicate over the playlist,
 * the asset descriptor, the container folder and the resolved subtitle
 * document. A rule either passes silently or fails with a descriptive
 * violation; structural problems surface as resolution errors instead.
 *
 * # Architecture
 *
 * - `format`: container extension and XML-schema validity
 * - `metadata`: reel number, language, edit rate and uuid consistency
 * - `fonts`: font reference integrity and font file checks
 * - `timing`: per-cue timing and whole-track duration
 * - `content`: cue content and vertical position sanity
 */

use std::path::{Path, PathBuf};

use crate::collaborators::{FileProbe, SchemaValidator};
use crate::config::CheckerConfig;
use crate::document::{AssetDescriptor, Cpl, SubtitleDocument};
use crate::errors::{ResolutionError, RuleError};
use crate::schema::SchemaAdapter;

pub mod content;
pub mod fonts;
pub mod format;
pub mod metadata;
pub mod timing;

/// Outcome of evaluating one rule against one asset
pub type RuleResult = Result<(), RuleError>;

/// Everything a rule may consult, resolved once per asset
pub struct RuleContext<'a> {
    /// Playlist owning the asset
    pub cpl: &'a Cpl,
    /// Descriptor of the subtitle asset under check
    pub asset: &'a AssetDescriptor,
    /// Folder holding the asset's content (extraction folder for
    /// wrapped tracks)
    pub folder: &'a Path,
    /// Parsed subtitle document, resolved once by the collaborator
    pub doc: &'a SubtitleDocument,
    /// Dialect adapter selected for the document
    pub adapter: SchemaAdapter,
    /// Checker configuration (font limits, allow-lists)
    pub config: &'a CheckerConfig,
    /// File probe collaborator
    pub probe: &'a dyn FileProbe,
    /// XML-schema validator collaborator
    pub schema_validator: &'a dyn SchemaValidator,
}

impl RuleContext<'_> {
    /// Resolved path and declared URI of the loaded font.
    ///
    /// Structural error when the document declares no font; rules that
    /// treat a missing declaration as a conformance failure (font
    /// existence) check the URI themselves first.
    pub(crate) fn font_path(&self) -> Result<(PathBuf, String), ResolutionError> {
        let uri = self
            .adapter
            .loaded_font_uri(self.doc)
            .ok_or(ResolutionError::MissingField("LoadFont"))?;
        Ok((self.folder.join(uri), uri.to_string()))
    }
}
