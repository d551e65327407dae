/*!
 * Schema-dialect adapter.
 *
 * Interop and SMPTE subtitle documents store logically identical fields
 * under different root elements and attribute spellings. The adapter is
 * selected once per document and owns every dialect-specific lookup, so
 * individual rules never branch on the dialect themselves.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::document::{AssetDescriptor, Cue, SubtitleDocument};
use crate::errors::ResolutionError;
use crate::timecode;

/// Subtitle schema dialect of a composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// Interop (DCSubtitle) schema
    Interop,
    /// SMPTE (SubtitleReel) schema
    Smpte,
}

impl Dialect {
    /// Capitalized dialect name for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Interop => "Interop",
            Self::Smpte => "SMPTE",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "interop" => Ok(Self::Interop),
            "smpte" => Ok(Self::Smpte),
            _ => Err(anyhow!("Invalid subtitle dialect: {}", s)),
        }
    }
}

/// Resolves logical fields out of a parsed subtitle document for one dialect
#[derive(Debug, Clone, Copy)]
pub struct SchemaAdapter {
    dialect: Dialect,
}

impl SchemaAdapter {
    /// Create an adapter for the given dialect
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Dialect this adapter resolves for
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Root element the dialect expects
    pub fn root_element(&self) -> &'static str {
        match self.dialect {
            Dialect::Interop => "DCSubtitle",
            Dialect::Smpte => "SubtitleReel",
        }
    }

    /// File extension the dialect requires for the subtitle asset
    pub fn required_extension(&self) -> &'static str {
        match self.dialect {
            Dialect::Interop => ".xml",
            Dialect::Smpte => ".mxf",
        }
    }

    /// Field lookup guarded by the root element: a document whose root
    /// does not match the dialect resolves every field as absent.
    fn field<'a>(&self, doc: &'a SubtitleDocument, name: &str) -> Option<&'a str> {
        if doc.root != self.root_element() {
            return None;
        }
        doc.field(name)
    }

    /// Document uuid (`SubtitleID` for Interop, `Id` for SMPTE)
    pub fn uuid<'a>(&self, doc: &'a SubtitleDocument) -> Option<&'a str> {
        match self.dialect {
            Dialect::Interop => self.field(doc, "SubtitleID"),
            Dialect::Smpte => self.field(doc, "Id"),
        }
    }

    /// Reel number declared by the document, if any
    pub fn reel_number<'a>(&self, doc: &'a SubtitleDocument) -> Option<&'a str> {
        self.field(doc, "ReelNumber")
    }

    /// Language declared by the document, if any
    pub fn language<'a>(&self, doc: &'a SubtitleDocument) -> Option<&'a str> {
        self.field(doc, "Language")
    }

    /// Id of the loaded font declared by the document, if any
    pub fn loaded_font_id<'a>(&self, doc: &'a SubtitleDocument) -> Option<&'a str> {
        match self.dialect {
            Dialect::Interop => self.field(doc, "LoadFont@Id"),
            Dialect::Smpte => self.field(doc, "LoadFont@ID"),
        }
    }

    /// URI of the loaded font file, relative to the container folder
    pub fn loaded_font_uri<'a>(&self, doc: &'a SubtitleDocument) -> Option<&'a str> {
        match self.dialect {
            // Interop points at the file through the URI attribute,
            // SMPTE through the LoadFont element text.
            Dialect::Interop => self.field(doc, "LoadFont@URI"),
            Dialect::Smpte => self.field(doc, "LoadFont"),
        }
    }

    /// Edit rate the document's timecodes are expressed at.
    ///
    /// SMPTE documents declare their own `TimeCodeRate`; Interop has no
    /// independent declaration and falls back to the playlist's rate.
    pub fn edit_rate(
        &self,
        asset: &AssetDescriptor,
        doc: &SubtitleDocument,
    ) -> Result<f64, ResolutionError> {
        match self.dialect {
            Dialect::Interop => Ok(asset.edit_rate),
            Dialect::Smpte => {
                let raw = self
                    .field(doc, "TimeCodeRate")
                    .ok_or(ResolutionError::MissingField("TimeCodeRate"))?;
                raw.parse::<f64>().map_err(|_| ResolutionError::InvalidField {
                    field: "TimeCodeRate",
                    value: raw.to_string(),
                })
            }
        }
    }

    /// Font ids referenced by the cue's text elements
    pub fn cue_font_refs<'a>(&self, cue: &'a Cue) -> &'a [String] {
        &cue.font_refs
    }

    /// Fade up/down frame counts of a cue.
    ///
    /// Interop fade timing is not tick-quantized the same way, so fades
    /// are only evaluated for SMPTE, and only when both are declared.
    pub fn cue_fades(
        &self,
        cue: &Cue,
        edit_rate: f64,
    ) -> Result<(Option<i64>, Option<i64>), ResolutionError> {
        if self.dialect != Dialect::Smpte {
            return Ok((None, None));
        }

        match (cue.attr("FadeUpTime"), cue.attr("FadeDownTime")) {
            (Some(up), Some(down)) => Ok((
                Some(timecode::frames(up, edit_rate)?),
                Some(timecode::frames(down, edit_rate)?),
            )),
            _ => Ok((None, None)),
        }
    }
}
