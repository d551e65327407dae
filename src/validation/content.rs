/*!
 * Cue content rules: every cue must carry something to display, and
 * vertical positions must keep it on screen.
 */

use crate::errors::{ResolutionError, RuleError};

use super::{RuleContext, RuleResult};

/// Every cue must declare at least one Text or Image element.
pub fn check_cue_content(ctx: &RuleContext<'_>) -> RuleResult {
    for cue in &ctx.doc.cues {
        if !cue.has_image && !cue.has_text {
            return Err(RuleError::violation(format!(
                "Subtitle {} must define at least one Text or Image",
                cue.spot_number()
            )));
        }
    }
    Ok(())
}

/// Vertical positions represent the character baseline:
/// `VAlign="top"` with `VPosition="0"` puts the cue entirely off the
/// top of the frame; `VAlign="bottom"` with `VPosition="0"` clips
/// descenders like 'g'.
pub fn check_vertical_position(ctx: &RuleContext<'_>) -> RuleResult {
    for cue in &ctx.doc.cues {
        let spot = cue.spot_number();
        let alignments = cue.attrs_with_suffix("@VAlign");
        let positions = cue.attrs_with_suffix("@VPosition");

        for (alignment, position) in alignments.iter().zip(positions.iter()) {
            let position: f64 = position.parse().map_err(|_| ResolutionError::InvalidField {
                field: "VPosition",
                value: position.to_string(),
            })?;

            if *alignment == "top" && position == 0.0 {
                return Err(RuleError::violation(format!(
                    "Subtitle {} is out of screen (top)",
                    spot
                )));
            }
            if *alignment == "bottom" && position == 0.0 {
                return Err(RuleError::violation(format!(
                    "Subtitle {} is nearly out of screen (bottom), some characters will be cut",
                    spot
                )));
            }
        }
    }
    Ok(())
}

/// Check that referenced images exist and are valid PNG payloads.
///
/// Not implemented yet; registered so the rule registry keeps a stable
/// shape.
pub fn check_image_payload(_ctx: &RuleContext<'_>) -> RuleResult {
    Ok(())
}
