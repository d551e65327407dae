/*!
 * Metadata consistency rules: reel number, language, edit rate, uuid.
 *
 * Edit-rate and uuid matching only apply to SMPTE compositions; Interop
 * documents carry no independent declaration to compare against, so the
 * rules pass without evaluating anything there.
 */

use uuid::Uuid;

use crate::errors::{ResolutionError, RuleError};
use crate::language_utils::lookup_language;
use crate::schema::Dialect;

use super::{RuleContext, RuleResult};

/// A declared reel number must equal the 1-based position of the reel
/// that actually references the asset. Documents that declare none are
/// not checked.
pub fn check_reel_number(ctx: &RuleContext<'_>) -> RuleResult {
    let Some(declared) = ctx.adapter.reel_number(ctx.doc) else {
        return Ok(());
    };
    let declared: usize = declared.parse().map_err(|_| ResolutionError::InvalidField {
        field: "ReelNumber",
        value: declared.to_string(),
    })?;

    let actual = ctx
        .cpl
        .reel_position_for_asset(&ctx.asset.id)
        .ok_or(ResolutionError::MissingField("Reel position"))?;

    if declared != actual {
        return Err(RuleError::violation(format!(
            "Subtitle file indicates Reel {} but is actually used in Reel {}",
            declared, actual
        )));
    }
    Ok(())
}

/// The document language must resolve to a known identity, and when the
/// playlist also declares one, the two identities must be equal.
pub fn check_language(ctx: &RuleContext<'_>) -> RuleResult {
    let Some(doc_code) = ctx.adapter.language(ctx.doc) else {
        return Err(RuleError::violation("Subtitle document declares no language"));
    };
    let Some(doc_language) = lookup_language(doc_code) else {
        return Err(RuleError::violation(format!(
            "Subtitle language from document could not be resolved: {}",
            doc_code
        )));
    };

    let Some(cpl_code) = &ctx.asset.language else {
        return Ok(());
    };
    let Some(cpl_language) = lookup_language(cpl_code) else {
        return Err(RuleError::violation(format!(
            "Subtitle language from CPL could not be resolved: {}",
            cpl_code
        )));
    };

    if doc_language.part2t != cpl_language.part2t {
        return Err(RuleError::violation(format!(
            "Subtitle language mismatch, CPL claims {} but document {}",
            cpl_language.name, doc_language.name
        )));
    }
    Ok(())
}

/// SMPTE only: the document's TimeCodeRate must equal the playlist's
/// edit rate for the asset.
pub fn check_edit_rate(ctx: &RuleContext<'_>) -> RuleResult {
    if ctx.adapter.dialect() != Dialect::Smpte {
        return Ok(());
    }

    let document_rate = ctx.adapter.edit_rate(ctx.asset, ctx.doc)?;
    if document_rate != ctx.asset.edit_rate {
        return Err(RuleError::violation(format!(
            "Subtitle edit rate mismatch, document claims {} but CPL {}",
            document_rate, ctx.asset.edit_rate
        )));
    }
    Ok(())
}

/// SMPTE only: the document's uuid must equal the playlist asset id.
/// Ids are compared as UUIDs when both parse (tolerating `urn:uuid:`
/// prefixes and case), as case-insensitive strings otherwise.
pub fn check_uuid(ctx: &RuleContext<'_>) -> RuleResult {
    if ctx.adapter.dialect() != Dialect::Smpte {
        return Ok(());
    }

    let document_uuid = ctx
        .adapter
        .uuid(ctx.doc)
        .ok_or(ResolutionError::MissingField("Id"))?;

    if !ids_equal(document_uuid, &ctx.asset.id) {
        return Err(RuleError::violation(format!(
            "Subtitle UUID mismatch, document claims {} but CPL {}",
            document_uuid, ctx.asset.id
        )));
    }
    Ok(())
}

fn ids_equal(first: &str, second: &str) -> bool {
    let parse = |id: &str| Uuid::parse_str(id.trim().trim_start_matches("urn:uuid:")).ok();
    match (parse(first), parse(second)) {
        (Some(a), Some(b)) => a == b,
        _ => first.eq_ignore_ascii_case(second),
    }
}
