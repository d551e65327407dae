/*!
 * Font rules: reference integrity, and existence/size/format of the
 * loaded font file.
 */

use log::debug;

use crate::errors::RuleError;
use crate::file_utils::human_size;

use super::{RuleContext, RuleResult};

/// Every font id referenced by a cue must equal the single loaded-font
/// id declared by the document.
pub fn check_font_reference(ctx: &RuleContext<'_>) -> RuleResult {
    let loaded = ctx.adapter.loaded_font_id(ctx.doc);

    for cue in &ctx.doc.cues {
        for reference in ctx.adapter.cue_font_refs(cue) {
            if Some(reference.as_str()) != loaded {
                return Err(RuleError::violation(format!(
                    "Subtitle references unknown font {} (loaded font: {})",
                    reference,
                    loaded.unwrap_or("none")
                )));
            }
        }
    }
    Ok(())
}

/// The loaded font file must exist in the container folder. A document
/// that declares no font at all fails here too: cues cannot render
/// without one.
pub fn check_font_exists(ctx: &RuleContext<'_>) -> RuleResult {
    let Some(uri) = ctx.adapter.loaded_font_uri(ctx.doc) else {
        return Err(RuleError::violation("Subtitle document declares no font file"));
    };

    let path = ctx.folder.join(uri);
    if !ctx.probe.exists(&path) {
        return Err(RuleError::violation(format!("Subtitle missing font file: {}", uri)));
    }
    Ok(())
}

/// The font file must not exceed the configured maximum size.
pub fn check_font_size(ctx: &RuleContext<'_>) -> RuleResult {
    let (path, _) = ctx.font_path()?;
    let size = ctx.probe.size(&path)?;
    let max_size = ctx.config.font_max_size;

    debug!("Font {} is {} (cap {})", path.display(), human_size(size), human_size(max_size));

    if size > max_size {
        return Err(RuleError::violation(format!(
            "Subtitle font maximum size is {}, got {}",
            human_size(max_size),
            human_size(size)
        )));
    }
    Ok(())
}

/// The sniffed type of the font file must be on the configured
/// allow-list.
pub fn check_font_format(ctx: &RuleContext<'_>) -> RuleResult {
    let (path, _) = ctx.font_path()?;
    let file_type = ctx.probe.sniff(&path)?;

    if !ctx.config.font_formats.iter().any(|allowed| *allowed == file_type) {
        return Err(RuleError::violation(format!(
            "Subtitle font format not valid: {}",
            file_type
        )));
    }
    Ok(())
}

/// Check that the font can render every glyph used by the cues.
///
/// Not implemented yet; registered so the rule registry keeps a stable
/// shape.
pub fn check_font_glyphs(_ctx: &RuleContext<'_>) -> RuleResult {
    Ok(())
}
