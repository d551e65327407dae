/*!
 * Orchestrator for subtitle conformance runs.
 *
 * Walks the subtitle assets of a composition playlist, resolves each
 * document once, evaluates every registered rule against it and
 * collects one outcome per (rule, asset) pair. A failing rule never
 * prevents the remaining rules from running, and the outcome order
 * follows rule registration order so runs are deterministic.
 */

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::collaborators::{
    ContainerUnwrapper, DocumentResolver, FileProbe, SchemaValidator, UnwrappedFolder,
};
use crate::config::CheckerConfig;
use crate::document::{AssetDescriptor, Cpl};
use crate::errors::RuleError;
use crate::schema::SchemaAdapter;
use crate::validation::{RuleContext, RuleResult, content, fonts, format, metadata, timing};

/// Result of one rule for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The asset conforms as far as this rule is concerned
    Pass,
    /// The asset does not conform; message describes how and where
    Fail(String),
}

/// One record of the aggregated run output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Name of the rule, as registered
    pub rule: &'static str,
    /// Id of the asset the rule was evaluated against
    pub asset_id: String,
    /// Pass or fail
    pub outcome: Outcome,
}

type RuleFn = fn(&RuleContext<'_>) -> RuleResult;

/// Registered rules, evaluated in this order for every asset.
/// Placeholder rules are registered too so the registry shape is
/// stable for downstream report tooling.
const RULES: &[(&str, RuleFn)] = &[
    ("container_format", format::check_container_format),
    ("schema", format::check_schema),
    ("reel_number", metadata::check_reel_number),
    ("language", metadata::check_language),
    ("font_reference", fonts::check_font_reference),
    ("font_exists", fonts::check_font_exists),
    ("font_size", fonts::check_font_size),
    ("font_format", fonts::check_font_format),
    ("font_glyphs", fonts::check_font_glyphs),
    ("cue_timing", timing::check_cue_timing),
    ("track_duration", timing::check_track_duration),
    ("edit_rate", metadata::check_edit_rate),
    ("uuid", metadata::check_uuid),
    ("cue_content", content::check_cue_content),
    ("vertical_position", content::check_vertical_position),
    ("image_payload", content::check_image_payload),
];

/// External collaborators the checker delegates to
pub struct Collaborators {
    /// Produces the parsed subtitle document for an asset
    pub resolver: Box<dyn DocumentResolver>,
    /// Extracts wrapped binary subtitle tracks
    pub unwrapper: Box<dyn ContainerUnwrapper>,
    /// Probes referenced files
    pub probe: Box<dyn FileProbe>,
    /// Validates documents against their XML schema
    pub schema_validator: Box<dyn SchemaValidator>,
}

/// Subtitle conformance checker for one content package
pub struct SubtitleChecker {
    root: PathBuf,
    config: CheckerConfig,
    collaborators: Collaborators,
}

impl SubtitleChecker {
    /// Create a checker rooted at the package folder
    pub fn new<P: Into<PathBuf>>(
        root: P,
        config: CheckerConfig,
        collaborators: Collaborators,
    ) -> Self {
        Self { root: root.into(), config, collaborators }
    }

    /// Names of the registered rules, in evaluation order
    pub fn rule_names() -> Vec<&'static str> {
        RULES.iter().map(|(name, _)| *name).collect()
    }

    /// Run every rule against every subtitle asset of the playlist.
    ///
    /// Encrypted assets are skipped entirely: their content is not
    /// accessible without decryption. Each asset's document is resolved
    /// once; wrapped tracks are extracted into a scoped folder that is
    /// released when the asset's validation completes.
    pub fn run(&self, cpl: &Cpl) -> Vec<RuleOutcome> {
        let mut outcomes = Vec::new();

        for asset in cpl.subtitle_assets() {
            if asset.encrypted {
                debug!("Skipping encrypted subtitle asset {}", asset.id);
                continue;
            }

            let absolute = self.root.join(&asset.path);
            let wrapped =
                asset.path.ends_with(".mxf") && self.collaborators.probe.exists(&absolute);

            let folder = if wrapped {
                match self.collaborators.unwrapper.unwrap_container(&absolute) {
                    Ok(folder) => folder,
                    Err(e) => {
                        warn!("Failed to unwrap {}: {}", asset.path, e);
                        self.record_resolution_failure(cpl, asset, &e.to_string(), &mut outcomes);
                        continue;
                    }
                }
            } else {
                let parent = absolute
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                UnwrappedFolder::existing(parent)
            };

            self.run_rules(cpl, asset, folder.path(), &mut outcomes);
            // `folder` dropped here: extraction folders are released on
            // every exit path once the asset is done
        }

        outcomes
    }

    fn run_rules(
        &self,
        cpl: &Cpl,
        asset: &AssetDescriptor,
        folder: &Path,
        outcomes: &mut Vec<RuleOutcome>,
    ) {
        let dialect = cpl.dialect;
        let doc = match self.collaborators.resolver.resolve(asset, folder, dialect) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Failed to resolve subtitle document for {}: {}", asset.id, e);
                self.record_resolution_failure(cpl, asset, &e.to_string(), outcomes);
                return;
            }
        };

        let ctx = RuleContext {
            cpl,
            asset,
            folder,
            doc: &doc,
            adapter: SchemaAdapter::new(dialect),
            config: &self.config,
            probe: self.collaborators.probe.as_ref(),
            schema_validator: self.collaborators.schema_validator.as_ref(),
        };

        for &(name, rule) in RULES {
            let outcome = match rule(&ctx) {
                Ok(()) => Outcome::Pass,
                Err(RuleError::Violation(message)) => {
                    Outcome::Fail(Self::tag(cpl, asset, &message))
                }
                Err(RuleError::Resolution(e)) => {
                    Outcome::Fail(Self::tag(cpl, asset, &format!("resolution error: {}", e)))
                }
            };

            if let Outcome::Fail(message) = &outcome {
                debug!("Rule {} failed: {}", name, message);
            }
            outcomes.push(RuleOutcome { rule: name, asset_id: asset.id.clone(), outcome });
        }
    }

    /// When the document cannot be resolved at all, every registered
    /// rule gets a resolution-error outcome so the record count per
    /// asset stays stable.
    fn record_resolution_failure(
        &self,
        cpl: &Cpl,
        asset: &AssetDescriptor,
        reason: &str,
        outcomes: &mut Vec<RuleOutcome>,
    ) {
        let message = Self::tag(cpl, asset, &format!("resolution error: {}", reason));
        for &(name, _) in RULES {
            outcomes.push(RuleOutcome {
                rule: name,
                asset_id: asset.id.clone(),
                outcome: Outcome::Fail(message.clone()),
            });
        }
    }

    /// Tag a message with the owning playlist and the asset identity
    fn tag(cpl: &Cpl, asset: &AssetDescriptor, message: &str) -> String {
        format!("{} (Asset {}): {}", cpl.file_name, asset.display_identity(), message)
    }
}
