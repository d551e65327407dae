/*!
 * Tests for the timecode engine
 */

use subcheck::errors::ResolutionError;
use subcheck::timecode::{frames, timecode};

/// Tick timecodes land on the frame boundary of the target edit rate
#[test]
fn test_frames_withTickTimecodes_shouldQuantizeAtTargetRate() {
    // 4 msec per tick: 125 ticks is exactly half a second
    assert_eq!(frames("00:00:00:125", 24.0).unwrap(), 12);
    assert_eq!(frames("00:00:00:125", 48.0).unwrap(), 24);

    // 25 fps frame period is 40 msec = 10 ticks
    assert_eq!(frames("00:00:00:010", 25.0).unwrap(), 1);
    assert_eq!(frames("00:00:00:009", 25.0).unwrap(), 0);

    // Hours, minutes and seconds carry straight through
    assert_eq!(frames("01:02:03:000", 24.0).unwrap(), (3600 + 123) * 24);
}

/// Re-quantization keeps tick conversion monotonic in the tick value
#[test]
fn test_frames_withIncreasingTicks_shouldBeMonotonicNonDecreasing() {
    for rate in [23.976, 24.0, 25.0, 30.0, 48.0, 60.0] {
        let mut previous = i64::MIN;
        for ticks in 0..=249_u32 {
            let count = frames(&format!("00:00:10:{:03}", ticks), rate).unwrap();
            assert!(count >= previous, "tick {} at {} fps went backwards", ticks, rate);
            previous = count;
        }
    }
}

/// Fractional-second timecodes round to the nearest frame
#[test]
fn test_frames_withFractionalSeconds_shouldRoundToNearestFrame() {
    assert_eq!(frames("00:00:01.000", 24.0).unwrap(), 24);
    assert_eq!(frames("00:00:01.500", 24.0).unwrap(), 36);
    assert_eq!(frames("10:00:00.000", 25.0).unwrap(), 900_000);
}

/// `frames` is the left inverse of `timecode` at exact integer rates
#[test]
fn test_frames_afterTimecode_shouldRoundTripExactly() {
    for rate in [24.0, 25.0, 30.0] {
        for count in 0..2_000_i64 {
            let rendered = timecode(count, rate);
            assert_eq!(frames(&rendered, rate).unwrap(), count, "at {} fps", rate);
        }
    }
}

/// Strings matching neither supported pattern are malformed input,
/// not conformance failures
#[test]
fn test_frames_withUnsupportedPatterns_shouldReportMalformedTimecode() {
    for bad in ["", "1:2:3:4", "00:00:00", "00:00:00,500", "00-00-00-000", "00:00:00:250"] {
        assert!(
            matches!(frames(bad, 24.0), Err(ResolutionError::MalformedTimecode(_))),
            "{:?} should be malformed",
            bad
        );
    }
}

#[test]
fn test_timecode_shouldRenderFractionalSecondsFormat() {
    assert_eq!(timecode(0, 24.0), "00:00:00.000");
    assert_eq!(timecode(36, 24.0), "00:00:01.500");
    assert_eq!(timecode(90_000 + 12, 25.0), "01:00:00.480");
}
