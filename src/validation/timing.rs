/*!
 * Timing rules: per-cue duration and fades, and whole-track duration.
 *
 * Cue timecodes are expressed at the document's edit rate (SMPTE
 * declares its own, Interop inherits the playlist's), so the track
 * duration check rescales before comparing against the playlist frame
 * count.
 */

use crate::errors::{ResolutionError, RuleError};
use crate::timecode;

use super::{RuleContext, RuleResult};

/// Every cue must span a strictly positive number of frames, and SMPTE
/// fades must fit inside that span.
pub fn check_cue_timing(ctx: &RuleContext<'_>) -> RuleResult {
    let edit_rate = ctx.adapter.edit_rate(ctx.asset, ctx.doc)?;

    for cue in &ctx.doc.cues {
        let spot = cue.spot_number();
        let time_in = cue.attr("TimeIn").ok_or(ResolutionError::MissingField("TimeIn"))?;
        let time_out = cue.attr("TimeOut").ok_or(ResolutionError::MissingField("TimeOut"))?;

        let duration = timecode::frames(time_out, edit_rate)? - timecode::frames(time_in, edit_rate)?;
        if duration <= 0 {
            return Err(RuleError::violation(format!(
                "Subtitle {} has null or negative duration",
                spot
            )));
        }

        let (fade_up, fade_down) = ctx.adapter.cue_fades(cue, edit_rate)?;
        if let Some(fade_up) = fade_up {
            if fade_up > duration {
                return Err(RuleError::violation(format!(
                    "Subtitle {} FadeUpTime longer than duration",
                    spot
                )));
            }
        }
        if let Some(fade_down) = fade_down {
            if fade_down > duration {
                return Err(RuleError::violation(format!(
                    "Subtitle {} FadeDownTime longer than duration",
                    spot
                )));
            }
        }
    }
    Ok(())
}

/// The last cue's TimeOut, rescaled to the playlist's edit rate, must
/// not exceed the asset's declared track duration.
pub fn check_track_duration(ctx: &RuleContext<'_>) -> RuleResult {
    let document_rate = ctx.adapter.edit_rate(ctx.asset, ctx.doc)?;

    let mut last_out = 0_i64;
    for cue in &ctx.doc.cues {
        let time_out = cue.attr("TimeOut").ok_or(ResolutionError::MissingField("TimeOut"))?;
        last_out = last_out.max(timecode::frames(time_out, document_rate)?);
    }

    let rate_ratio = document_rate / ctx.asset.edit_rate;
    let last_out_track = last_out as f64 / rate_ratio;

    if last_out_track > ctx.asset.duration as f64 {
        let reel_position = ctx
            .cpl
            .reel_position_for_asset(&ctx.asset.id)
            .ok_or(ResolutionError::MissingField("Reel position"))?;
        return Err(RuleError::violation(format!(
            "Subtitle exceeds track duration. Subtitle {} - Track {} - Reel {}",
            timecode::timecode(last_out_track.round() as i64, ctx.asset.edit_rate),
            timecode::timecode(ctx.asset.duration, ctx.asset.edit_rate),
            reel_position
        )));
    }
    Ok(())
}
