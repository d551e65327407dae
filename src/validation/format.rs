/*!
 * Container-format and XML-schema rules.
 */

use crate::collaborators::SchemaVerdict;
use crate::errors::{ResolutionError, RuleError};
use crate::schema::Dialect;

use super::{RuleContext, RuleResult};

/// Namespace key used when validating Interop documents
const INTEROP_NAMESPACE: &str = "interop_subtitle";

/// The asset's file extension must match the dialect's required
/// container: plain `.xml` for Interop, wrapped `.mxf` for SMPTE.
pub fn check_container_format(ctx: &RuleContext<'_>) -> RuleResult {
    let required = ctx.adapter.required_extension();
    let extension = std::path::Path::new(&ctx.asset.path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default();

    if extension != required {
        return Err(RuleError::violation(format!(
            "Wrong subtitle container for a {} composition: expected {}, got {}",
            ctx.adapter.dialect(),
            required,
            ctx.asset.path
        )));
    }
    Ok(())
}

/// The subtitle document must satisfy its XML schema. The verdict comes
/// from the external validator, keyed by namespace, label-set and
/// dialect; this rule only locates the document and surfaces the result.
pub fn check_schema(ctx: &RuleContext<'_>) -> RuleResult {
    let is_plain_xml = ctx.asset.path.ends_with(".xml");

    // Plain XML sits next to its siblings under its own file name;
    // unwrapped tracks are stored under the asset id.
    let path = if is_plain_xml {
        let file_name = std::path::Path::new(&ctx.asset.path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| ctx.asset.path.clone());
        ctx.folder.join(file_name)
    } else {
        ctx.folder.join(&ctx.asset.id)
    };

    let (namespace, label) = if is_plain_xml {
        (INTEROP_NAMESPACE.to_string(), Dialect::Interop.to_string())
    } else {
        let namespace = ctx
            .doc
            .namespace
            .clone()
            .ok_or(ResolutionError::MissingField("NamespaceName"))?;
        let label = ctx
            .doc
            .label
            .clone()
            .ok_or(ResolutionError::MissingField("LabelSetType"))?;
        (namespace, label)
    };

    if !ctx.probe.exists(&path) {
        return Err(RuleError::violation(format!(
            "Subtitle document not found: {}",
            path.display()
        )));
    }

    match ctx
        .schema_validator
        .validate(&path, &namespace, &label, ctx.adapter.dialect())?
    {
        SchemaVerdict::Ok => Ok(()),
        SchemaVerdict::Violation(message) => Err(RuleError::Violation(message)),
    }
}
