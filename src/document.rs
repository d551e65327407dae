/*!
 * Data model for composition playlists and resolved subtitle documents.
 *
 * Everything here is a read-only snapshot: playlists and asset
 * descriptors are built by the ingesting driver before validation
 * starts, and subtitle documents are produced once per asset by the
 * document resolver. Rules never mutate them.
 */

use serde::{Deserialize, Serialize};

use crate::schema::Dialect;

/// Kind of track an asset carries inside a reel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// Picture track
    Picture,
    /// Sound track
    Sound,
    /// Timed-text (subtitle) track
    Subtitle,
}

/// One asset referenced by a reel of a composition playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Unique id of the asset (usually a urn:uuid)
    pub id: String,
    /// Path of the asset file, relative to the package root
    pub path: String,
    /// Whether the track is encrypted (encrypted assets are skipped)
    pub encrypted: bool,
    /// Edit rate declared by the playlist, in frames per second
    pub edit_rate: f64,
    /// Track duration declared by the playlist, in frames
    pub duration: i64,
    /// Language code declared by the playlist, if any
    pub language: Option<String>,
    /// Track kind
    pub kind: AssetKind,
}

impl AssetDescriptor {
    /// Identity used in operator-facing messages: the path when present,
    /// otherwise the asset id.
    pub fn display_identity(&self) -> &str {
        if self.path.is_empty() { &self.id } else { &self.path }
    }
}

/// One positional segment of a composition playlist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reel {
    /// Assets referenced by this reel
    pub assets: Vec<AssetDescriptor>,
}

/// A composition playlist: the ordered reels of one composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cpl {
    /// Display name of the playlist file, used to tag messages
    pub file_name: String,
    /// Subtitle schema dialect the composition was authored against
    pub dialect: Dialect,
    /// Ordered reels; reel positions are 1-based
    pub reels: Vec<Reel>,
}

impl Cpl {
    /// 1-based position of the reel that references the given asset
    pub fn reel_position_for_asset(&self, asset_id: &str) -> Option<usize> {
        self.reels
            .iter()
            .position(|reel| reel.assets.iter().any(|a| a.id == asset_id))
            .map(|index| index + 1)
    }

    /// Subtitle assets of every reel, in reel order, restricted to
    /// entries with a resolvable path.
    pub fn subtitle_assets(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.reels
            .iter()
            .flat_map(|reel| reel.assets.iter())
            .filter(|asset| asset.kind == AssetKind::Subtitle && !asset.path.is_empty())
    }
}

/// The generic parsed representation of one subtitle document.
///
/// The document resolver flattens the dialect-specific XML into ordered
/// (name, value) pairs; attribute values are keyed `Element@Attr`. The
/// schema adapter decides which names are meaningful for which dialect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubtitleDocument {
    /// Name of the document's root element as found in the file
    pub root: String,
    /// XML namespace reported by the resolver, when known
    pub namespace: Option<String>,
    /// Label-set type reported by the resolver, when known
    pub label: Option<String>,
    /// Top-level elements and attributes in document order
    pub fields: Vec<(String, String)>,
    /// Subtitle cues in document order
    pub cues: Vec<Cue>,
}

impl SubtitleDocument {
    /// First value recorded under the given field name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// One subtitle event with raw timing and display attributes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cue {
    /// Attributes of the cue and its children, in document order.
    /// Names repeat when the source element repeats.
    pub attrs: Vec<(String, String)>,
    /// Font ids referenced by the cue's text elements, in order
    pub font_refs: Vec<String>,
    /// Whether the cue carries at least one image element
    pub has_image: bool,
    /// Whether the cue carries at least one text element
    pub has_text: bool,
}

impl Cue {
    /// First value recorded under the given attribute name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value whose attribute name ends with the given suffix, in
    /// document order. Stands in for pattern matching over nested
    /// elements (e.g. `@VAlign` on both Text and Image children).
    pub fn attrs_with_suffix(&self, suffix: &str) -> Vec<&str> {
        self.attrs
            .iter()
            .filter(|(key, _)| key.ends_with(suffix))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Spot number as written in the document, for messages
    pub fn spot_number(&self) -> &str {
        self.attr("SpotNumber").unwrap_or("?")
    }
}
