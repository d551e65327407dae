/*!
 * Mock collaborator implementations for testing.
 *
 * - `MockResolver` hands back a pre-built document, or fails
 * - `MockProbe` serves existence/size/type answers from maps
 * - `MockSchemaValidator` returns a fixed verdict
 * - `MockUnwrapper` pretends extraction by returning a fixed folder
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::document::{AssetDescriptor, SubtitleDocument};
use crate::errors::ResolutionError;
use crate::schema::Dialect;

use super::{
    ContainerUnwrapper, DocumentResolver, FileProbe, SchemaValidator, SchemaVerdict,
    UnwrappedFolder,
};

/// Resolver returning a canned document, or a canned failure
#[derive(Debug, Default)]
pub struct MockResolver {
    /// Document handed back for every asset
    pub document: SubtitleDocument,
    /// When set, resolution fails with this collaborator message
    pub fail_with: Option<String>,
}

impl MockResolver {
    /// Resolver that always yields the given document
    pub fn with_document(document: SubtitleDocument) -> Self {
        Self { document, fail_with: None }
    }

    /// Resolver that always fails
    pub fn failing(message: &str) -> Self {
        Self { document: SubtitleDocument::default(), fail_with: Some(message.to_string()) }
    }
}

impl DocumentResolver for MockResolver {
    fn resolve(
        &self,
        _asset: &AssetDescriptor,
        _folder: &Path,
        _dialect: Dialect,
    ) -> Result<SubtitleDocument, ResolutionError> {
        match &self.fail_with {
            Some(message) => Err(ResolutionError::Collaborator(message.clone())),
            None => Ok(self.document.clone()),
        }
    }
}

/// Probe answering from preconfigured per-file maps
#[derive(Debug, Default)]
pub struct MockProbe {
    /// File sizes keyed by file name (not full path)
    pub sizes: HashMap<String, u64>,
    /// Sniffed types keyed by file name
    pub types: HashMap<String, String>,
}

impl MockProbe {
    /// Register a file with its size and sniffed type
    pub fn with_file(mut self, name: &str, size: u64, file_type: &str) -> Self {
        self.sizes.insert(name.to_string(), size);
        self.types.insert(name.to_string(), file_type.to_string());
        self
    }

    fn key(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl FileProbe for MockProbe {
    fn exists(&self, path: &Path) -> bool {
        self.sizes.contains_key(&Self::key(path))
    }

    fn size(&self, path: &Path) -> Result<u64, ResolutionError> {
        self.sizes
            .get(&Self::key(path))
            .copied()
            .ok_or_else(|| ResolutionError::Collaborator(format!("no such file: {:?}", path)))
    }

    fn sniff(&self, path: &Path) -> Result<String, ResolutionError> {
        self.types
            .get(&Self::key(path))
            .cloned()
            .ok_or_else(|| ResolutionError::Collaborator(format!("no such file: {:?}", path)))
    }
}

/// Schema validator returning a fixed verdict for every document
#[derive(Debug)]
pub struct MockSchemaValidator {
    /// Verdict handed back on every call
    pub verdict: SchemaVerdict,
}

impl MockSchemaValidator {
    /// Validator that accepts everything
    pub fn accepting() -> Self {
        Self { verdict: SchemaVerdict::Ok }
    }

    /// Validator that rejects everything with the given message
    pub fn rejecting(message: &str) -> Self {
        Self { verdict: SchemaVerdict::Violation(message.to_string()) }
    }
}

impl SchemaValidator for MockSchemaValidator {
    fn validate(
        &self,
        _path: &Path,
        _namespace: &str,
        _label: &str,
        _dialect: Dialect,
    ) -> Result<SchemaVerdict, ResolutionError> {
        Ok(self.verdict.clone())
    }
}

/// Unwrapper that returns a fixed, non-temporary folder
#[derive(Debug)]
pub struct MockUnwrapper {
    /// Folder reported as the extraction result
    pub folder: PathBuf,
    /// When set, unwrapping fails with this collaborator message
    pub fail_with: Option<String>,
}

impl MockUnwrapper {
    /// Unwrapper yielding the given folder
    pub fn with_folder<P: Into<PathBuf>>(folder: P) -> Self {
        Self { folder: folder.into(), fail_with: None }
    }
}

impl ContainerUnwrapper for MockUnwrapper {
    fn unwrap_container(&self, _path: &Path) -> Result<UnwrappedFolder, ResolutionError> {
        match &self.fail_with {
            Some(message) => Err(ResolutionError::Collaborator(message.clone())),
            None => Ok(UnwrappedFolder::existing(&self.folder)),
        }
    }
}
