/*!
 * Timecode conversion for subtitle documents.
 *
 * Two timecode shapes appear in subtitle files:
 * - `HH:MM:SS:TTT` where TTT is a tick count in [0, 249]. A tick is
 *   4 msec (DLP Cinema Subtitle Spec), chosen so the same file stays
 *   frame accurate at multiple frame rates without declaring one.
 * - `HH:MM:SS.sss` with fractional seconds.
 *
 * Tick timecodes are re-quantized to a frame boundary at the *target*
 * edit rate before the ordinary HH:MM:SS:FF arithmetic is applied.
 * Skipping that step produces off-by-one frame counts whenever the
 * edit rate does not evenly divide the 250 ticks/second grid.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ResolutionError;

static TICK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}:(?P<Tick>\d{3})$").unwrap());

static SECONDS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<H>\d{2}):(?P<M>\d{2}):(?P<S>\d{2})\.(?P<Frac>\d{3})$").unwrap());

static FRAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<H>\d{2}):(?P<M>\d{2}):(?P<S>\d{2}):(?P<F>\d{1,3})$").unwrap());

/// Highest valid tick value within one second (ticks are 4 msec units)
const MAX_TICK: u32 = 249;

/// Convert a subtitle timecode to a frame count at the given edit rate.
///
/// Accepts the tick format `HH:MM:SS:TTT` and the fractional-seconds
/// format `HH:MM:SS.sss`. Anything else, including tick values above
/// 249, is reported as [`ResolutionError::MalformedTimecode`].
pub fn frames(tc: &str, edit_rate: f64) -> Result<i64, ResolutionError> {
    if let Some(caps) = TICK_PATTERN.captures(tc) {
        let ticks: u32 = caps["Tick"]
            .parse()
            .map_err(|_| ResolutionError::MalformedTimecode(tc.to_string()))?;
        if ticks > MAX_TICK {
            return Err(ResolutionError::MalformedTimecode(tc.to_string()));
        }

        // Land on a frame boundary at the target rate first: elapsed
        // seconds floor-divided by the frame period.
        let time_base = 1.0 / edit_rate;
        let frame = ((ticks as f64 * 0.004) / time_base).floor() as i64;
        let corrected = format!("{}:{:02}", &tc[..8], frame);
        frame_timecode_to_frames(&corrected, edit_rate)
            .ok_or_else(|| ResolutionError::MalformedTimecode(tc.to_string()))
    } else if let Some(caps) = SECONDS_PATTERN.captures(tc) {
        let whole = field_seconds(&caps);
        let frac: f64 = caps["Frac"]
            .parse::<u32>()
            .map(|ms| ms as f64 / 1000.0)
            .map_err(|_| ResolutionError::MalformedTimecode(tc.to_string()))?;
        Ok((whole as f64 * edit_rate) as i64 + (frac * edit_rate).round() as i64)
    } else {
        Err(ResolutionError::MalformedTimecode(tc.to_string()))
    }
}

/// Render a frame count as an `HH:MM:SS.sss` timecode at the given rate.
///
/// Exact left inverse of [`frames`] for the fractional-seconds format at
/// integer edit rates; used to report durations in rule messages.
pub fn timecode(frame_count: i64, edit_rate: f64) -> String {
    let whole_seconds = (frame_count as f64 / edit_rate).floor() as i64;
    let leftover_frames = frame_count as f64 - whole_seconds as f64 * edit_rate;
    let millis = (leftover_frames / edit_rate * 1000.0).round() as i64;

    let hours = whole_seconds / 3600;
    let minutes = (whole_seconds % 3600) / 60;
    let seconds = whole_seconds % 60;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Ordinary `HH:MM:SS:FF` arithmetic: whole seconds times the rate plus
/// the frame remainder.
fn frame_timecode_to_frames(tc: &str, edit_rate: f64) -> Option<i64> {
    let caps = FRAME_PATTERN.captures(tc)?;
    let whole = field_seconds(&caps);
    let ff: i64 = caps["F"].parse().ok()?;
    Some((whole as f64 * edit_rate) as i64 + ff)
}

fn field_seconds(caps: &regex::Captures<'_>) -> i64 {
    let h: i64 = caps["H"].parse().unwrap_or(0);
    let m: i64 = caps["M"].parse().unwrap_or(0);
    let s: i64 = caps["S"].parse().unwrap_or(0);
    h * 3600 + m * 60 + s
}
