/*!
 * Tests for language identity resolution
 */

use subcheck::language_utils::{LanguageIdentity, language_codes_match, lookup_language};

/// All ISO spellings of one language resolve to the same identity
#[test]
fn test_lookupLanguage_withAllIsoSpellings_shouldResolveOneIdentity() {
    let expected = LanguageIdentity { part2t: "deu".to_string(), name: "German".to_string() };

    assert_eq!(lookup_language("de").unwrap(), expected);
    assert_eq!(lookup_language("deu").unwrap(), expected);
    assert_eq!(lookup_language("ger").unwrap(), expected); // ISO 639-2/B
    assert_eq!(lookup_language("DE").unwrap(), expected);
    assert_eq!(lookup_language(" de ").unwrap(), expected);
}

/// RFC 5646 tags resolve through their primary subtag
#[test]
fn test_lookupLanguage_withRegionSubtags_shouldIgnoreRegion() {
    assert_eq!(lookup_language("fr-CA").unwrap().name, "French");
    assert_eq!(lookup_language("pt-BR").unwrap().part2t, "por");
}

/// Unknown codes do not resolve
#[test]
fn test_lookupLanguage_withUnknownCodes_shouldReturnNone() {
    assert!(lookup_language("xx").is_none());
    assert!(lookup_language("qqq").is_none());
    assert!(lookup_language("x").is_none());
    assert!(lookup_language("english").is_none());
}

/// Matching compares identities, never raw spellings
#[test]
fn test_languageCodesMatch_shouldCompareResolvedIdentities() {
    assert!(language_codes_match("fr", "fre"));
    assert!(language_codes_match("fra", "fr-FR"));
    assert!(!language_codes_match("fr", "en"));
    // Unresolvable codes match nothing, not even themselves
    assert!(!language_codes_match("xx", "xx"));
}
