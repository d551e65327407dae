use isolang::Language;
use serde::{Deserialize, Serialize};

/// Language identity resolution for subtitle conformance.
///
/// Playlists and subtitle documents may spell the same language as an
/// ISO 639-1 (2-letter) code, an ISO 639-2/T or /B (3-letter) code, or
/// an RFC 5646 tag with region subtags (`en-US`). Resolution normalizes
/// all of these to a single ISO 639-2/T identity so the language-match
/// rule compares languages, not spellings.
/// A resolved language: normalized code plus English display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageIdentity {
    /// ISO 639-2/T (3-letter) code
    pub part2t: String,
    /// English name, used in rule messages
    pub name: String,
}

/// ISO 639-2/B codes that differ from their 639-2/T equivalent
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"), // French
        "ger" => Some("deu"), // German
        "dut" => Some("nld"), // Dutch
        "gre" => Some("ell"), // Greek
        "chi" => Some("zho"), // Chinese
        "cze" => Some("ces"), // Czech
        "ice" => Some("isl"), // Icelandic
        "alb" => Some("sqi"), // Albanian
        "arm" => Some("hye"), // Armenian
        "baq" => Some("eus"), // Basque
        "bur" => Some("mya"), // Burmese
        "per" => Some("fas"), // Persian
        "geo" => Some("kat"), // Georgian
        "may" => Some("msa"), // Malay
        "mac" => Some("mkd"), // Macedonian
        "rum" => Some("ron"), // Romanian
        "slo" => Some("slk"), // Slovak
        "wel" => Some("cym"), // Welsh
        _ => None,
    }
}

/// Resolve a language code to a known identity.
///
/// Accepts ISO 639-1, ISO 639-2/T, ISO 639-2/B and RFC 5646 tags whose
/// primary subtag is one of those. Returns `None` for anything that
/// does not name a known language.
pub fn lookup_language(code: &str) -> Option<LanguageIdentity> {
    let normalized = code.trim().to_lowercase();
    // RFC 5646: only the primary subtag names the language
    let primary = normalized.split('-').next().unwrap_or(&normalized);

    let language = match primary.len() {
        2 => Language::from_639_1(primary),
        3 => Language::from_639_3(primary)
            .or_else(|| part2b_to_part2t(primary).and_then(Language::from_639_3)),
        _ => None,
    }?;

    Some(LanguageIdentity {
        part2t: language.to_639_3().to_string(),
        name: language.to_name().to_string(),
    })
}

/// Check whether two language codes resolve to the same identity.
/// Unresolvable codes never match anything.
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (lookup_language(code1), lookup_language(code2)) {
        (Some(first), Some(second)) => first.part2t == second.part2t,
        _ => false,
    }
}
