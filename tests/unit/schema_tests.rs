/*!
 * Tests for the schema-dialect adapter
 */

use std::str::FromStr;

use subcheck::document::Cue;
use subcheck::schema::{Dialect, SchemaAdapter};

use crate::common::{interop_document, smpte_document, subtitle_asset};

#[test]
fn test_dialect_shouldParseAndDisplayRoundTrip() {
    assert_eq!(Dialect::from_str("interop").unwrap(), Dialect::Interop);
    assert_eq!(Dialect::from_str("SMPTE").unwrap(), Dialect::Smpte);
    assert!(Dialect::from_str("dts").is_err());

    assert_eq!(Dialect::Interop.to_string(), "Interop");
    assert_eq!(Dialect::Smpte.to_string(), "SMPTE");
}

/// The same logical fields resolve from both dialects' spellings
#[test]
fn test_adapter_shouldResolveLogicalFieldsPerDialect() {
    let interop = SchemaAdapter::new(Dialect::Interop);
    let interop_doc = interop_document();
    assert!(interop.uuid(&interop_doc).is_some());
    assert_eq!(interop.language(&interop_doc), Some("fr"));
    assert_eq!(interop.loaded_font_id(&interop_doc), Some("Font1"));
    assert_eq!(interop.loaded_font_uri(&interop_doc), Some("arial.ttf"));
    assert_eq!(interop.required_extension(), ".xml");

    let smpte = SchemaAdapter::new(Dialect::Smpte);
    let smpte_doc = smpte_document();
    assert!(smpte.uuid(&smpte_doc).is_some());
    assert_eq!(smpte.language(&smpte_doc), Some("fr"));
    assert_eq!(smpte.loaded_font_id(&smpte_doc), Some("Font1"));
    assert_eq!(smpte.loaded_font_uri(&smpte_doc), Some("arial.ttf"));
    assert_eq!(smpte.required_extension(), ".mxf");
}

/// A document rooted in the other dialect resolves as absent
#[test]
fn test_adapter_withForeignRootElement_shouldResolveAbsent() {
    let adapter = SchemaAdapter::new(Dialect::Smpte);
    let foreign = interop_document();

    assert_eq!(adapter.uuid(&foreign), None);
    assert_eq!(adapter.language(&foreign), None);
    assert_eq!(adapter.loaded_font_id(&foreign), None);
    assert_eq!(adapter.reel_number(&foreign), None);
}

/// Interop falls back to the playlist edit rate, SMPTE declares its own
#[test]
fn test_adapter_editRate_shouldFollowDialectPolicy() {
    let asset = subtitle_asset("sub/st.xml");

    let interop = SchemaAdapter::new(Dialect::Interop);
    assert_eq!(interop.edit_rate(&asset, &interop_document()).unwrap(), 24.0);

    let smpte = SchemaAdapter::new(Dialect::Smpte);
    let mut doc = smpte_document();
    assert_eq!(smpte.edit_rate(&asset, &doc).unwrap(), 24.0);

    for field in &mut doc.fields {
        if field.0 == "TimeCodeRate" {
            field.1 = "25".to_string();
        }
    }
    assert_eq!(smpte.edit_rate(&asset, &doc).unwrap(), 25.0);
}

/// Fades are only evaluated for SMPTE and only when both are present
#[test]
fn test_adapter_cueFades_shouldFollowDialectPolicy() {
    let cue = Cue {
        attrs: vec![
            ("FadeUpTime".to_string(), "00:00:00:125".to_string()),
            ("FadeDownTime".to_string(), "00:00:00:125".to_string()),
        ],
        ..Default::default()
    };

    let interop = SchemaAdapter::new(Dialect::Interop);
    assert_eq!(interop.cue_fades(&cue, 24.0).unwrap(), (None, None));

    let smpte = SchemaAdapter::new(Dialect::Smpte);
    assert_eq!(smpte.cue_fades(&cue, 24.0).unwrap(), (Some(12), Some(12)));

    let only_up = Cue {
        attrs: vec![("FadeUpTime".to_string(), "00:00:00:125".to_string())],
        ..Default::default()
    };
    assert_eq!(smpte.cue_fades(&only_up, 24.0).unwrap(), (None, None));
}
