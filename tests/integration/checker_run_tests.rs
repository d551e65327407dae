/*!
 * End-to-end conformance run tests over mock collaborators
 */

use subcheck::checker::{Collaborators, Outcome, SubtitleChecker};
use subcheck::collaborators::mock::{
    MockProbe, MockResolver, MockSchemaValidator, MockUnwrapper,
};
use subcheck::config::CheckerConfig;
use subcheck::document::{AssetKind, Reel};
use subcheck::schema::Dialect;
use subcheck::Cpl;

use crate::common::{
    checker_for, conforming_probe, init_logging, interop_document, single_reel_cpl,
    smpte_document, subtitle_asset, text_cue, ASSET_ID,
};

#[test]
fn test_run_withConformingInteropPackage_shouldPassEveryRule() {
    init_logging();
    let cpl = single_reel_cpl(Dialect::Interop, subtitle_asset("sub/st.xml"));
    let checker = checker_for(interop_document(), conforming_probe());

    let outcomes = checker.run(&cpl);

    assert_eq!(outcomes.len(), SubtitleChecker::rule_names().len());
    for outcome in &outcomes {
        assert_eq!(outcome.outcome, Outcome::Pass, "rule {} failed", outcome.rule);
        assert_eq!(outcome.asset_id, ASSET_ID);
    }
}

#[test]
fn test_run_withConformingSmpteWrappedTrack_shouldPassEveryRule() {
    let cpl = single_reel_cpl(Dialect::Smpte, subtitle_asset("sub/st.mxf"));
    let checker = checker_for(smpte_document(), conforming_probe());

    let outcomes = checker.run(&cpl);

    assert_eq!(outcomes.len(), SubtitleChecker::rule_names().len());
    for outcome in &outcomes {
        assert_eq!(outcome.outcome, Outcome::Pass, "rule {} failed", outcome.rule);
    }
}

#[test]
fn test_run_withEncryptedAsset_shouldProduceZeroOutcomes() {
    let mut asset = subtitle_asset("sub/st.mxf");
    asset.encrypted = true;
    let cpl = single_reel_cpl(Dialect::Smpte, asset);
    // Document is deliberately broken; encrypted assets are skipped
    // before any rule could notice
    let checker = checker_for(Default::default(), conforming_probe());

    assert!(checker.run(&cpl).is_empty());
}

#[test]
fn test_run_withNonSubtitleAssets_shouldIgnoreThem() {
    let mut picture = subtitle_asset("picture/j2c.mxf");
    picture.kind = AssetKind::Picture;
    let cpl = Cpl {
        file_name: "CPL_feature.xml".to_string(),
        dialect: Dialect::Interop,
        reels: vec![Reel { assets: vec![picture] }],
    };
    let checker = checker_for(interop_document(), conforming_probe());

    assert!(checker.run(&cpl).is_empty());
}

#[test]
fn test_run_withSecondReelDeclaredAsFirst_shouldFailReelNumberOnly() {
    let mut cpl = single_reel_cpl(Dialect::Interop, subtitle_asset("sub/st.xml"));
    // Move the subtitle asset to reel 2 while the document says reel 1
    let reel = cpl.reels.remove(0);
    cpl.reels.push(Reel { assets: vec![] });
    cpl.reels.push(reel);
    let checker = checker_for(interop_document(), conforming_probe());

    let outcomes = checker.run(&cpl);

    let failed: Vec<_> = outcomes
        .iter()
        .filter(|o| matches!(o.outcome, Outcome::Fail(_)))
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].rule, "reel_number");
    match &failed[0].outcome {
        Outcome::Fail(message) => {
            assert!(message.contains("Reel 1"));
            assert!(message.contains("Reel 2"));
            assert!(message.contains("CPL_feature.xml (Asset sub/st.xml)"));
        }
        Outcome::Pass => unreachable!(),
    }
}

#[test]
fn test_run_withOversizedFont_shouldRespectConfiguredCap() {
    let cpl = single_reel_cpl(Dialect::Interop, subtitle_asset("sub/st.xml"));
    let probe = MockProbe::default()
        .with_file("st.xml", 8_192, "XML document")
        .with_file("arial.ttf", 120_000, "TrueType font data");
    let checker = SubtitleChecker::new(
        "/pkg",
        CheckerConfig { font_max_size: 64 * 1024, ..Default::default() },
        Collaborators {
            resolver: Box::new(MockResolver::with_document(interop_document())),
            unwrapper: Box::new(MockUnwrapper::with_folder("/tmp/unwrap")),
            probe: Box::new(probe),
            schema_validator: Box::new(MockSchemaValidator::accepting()),
        },
    );

    let outcomes = checker.run(&cpl);

    let font_size = outcomes.iter().find(|o| o.rule == "font_size").unwrap();
    match &font_size.outcome {
        Outcome::Fail(message) => {
            assert!(message.contains("64.0 KiB"));
            assert!(message.contains("117.2 KiB"));
        }
        Outcome::Pass => panic!("font_size should have failed"),
    }
}

#[test]
fn test_run_withTrackOverrun_shouldReportTimecodesAndReel() {
    let mut asset = subtitle_asset("sub/st.xml");
    asset.duration = 100;
    let cpl = single_reel_cpl(Dialect::Interop, asset);

    let mut doc = interop_document();
    doc.cues = vec![text_cue("1", "00:00:00.000", "00:00:04.208")]; // frame 101
    let checker = checker_for(doc, conforming_probe());

    let outcomes = checker.run(&cpl);

    let duration = outcomes.iter().find(|o| o.rule == "track_duration").unwrap();
    match &duration.outcome {
        Outcome::Fail(message) => {
            assert!(message.contains("exceeds track duration"));
            assert!(message.contains("00:00:04.208"));
            assert!(message.contains("00:00:04.167"));
            assert!(message.contains("Reel 1"));
        }
        Outcome::Pass => panic!("track_duration should have failed"),
    }
}

#[test]
fn test_run_withResolverFailure_shouldPrefixResolutionErrors() {
    let cpl = single_reel_cpl(Dialect::Interop, subtitle_asset("sub/st.xml"));
    let checker = SubtitleChecker::new(
        "/pkg",
        CheckerConfig::default(),
        Collaborators {
            resolver: Box::new(MockResolver::failing("document is not well-formed")),
            unwrapper: Box::new(MockUnwrapper::with_folder("/tmp/unwrap")),
            probe: Box::new(conforming_probe()),
            schema_validator: Box::new(MockSchemaValidator::accepting()),
        },
    );

    let outcomes = checker.run(&cpl);

    assert_eq!(outcomes.len(), SubtitleChecker::rule_names().len());
    for outcome in &outcomes {
        match &outcome.outcome {
            Outcome::Fail(message) => {
                assert!(message.contains("resolution error:"));
                assert!(message.contains("document is not well-formed"));
            }
            Outcome::Pass => panic!("rule {} unexpectedly passed", outcome.rule),
        }
    }
}

#[test]
fn test_run_twice_shouldYieldIdenticalOrderedSequences() {
    let cpl = single_reel_cpl(Dialect::Smpte, subtitle_asset("sub/st.mxf"));
    let checker = checker_for(smpte_document(), conforming_probe());

    assert_eq!(checker.run(&cpl), checker.run(&cpl));
}
