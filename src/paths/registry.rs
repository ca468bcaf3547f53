use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{PathsError, ReferenceConflict};
use super::item::{PathItemBuilder, PathItemObject};
use super::trie::PathTrie;
use crate::method::HttpMethod;
use crate::operation::Operation;
use crate::parameters::Parameter;

/// Rendered `paths` section: template to path item, in declaration order.
pub type PathsObject = IndexMap<String, PathItemObject>;

/// Arguments of a path declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiArgs {
    pub path: String,
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// `Some(vec![])` still counts as "parameters supplied".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

impl ApiArgs {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// One operation bound to a resource and an optional sub-path.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDeclaration {
    pub resource: String,
    pub path: Option<String>,
    pub method: HttpMethod,
    pub operation: Operation,
}

impl OperationDeclaration {
    pub fn new(resource: impl Into<String>, method: HttpMethod, operation: Operation) -> Self {
        Self {
            resource: resource.into(),
            path: None,
            method,
            operation,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Registry key this declaration targets.
    ///
    /// The sub-path is ignored when absent, empty or `/`; otherwise it must
    /// start with `/` and is appended to the resource. Neither part is
    /// normalized: `/a/` with `/b` targets `/a//b`.
    pub fn effective_path(&self) -> Result<String, PathsError> {
        ensure_leading_slash(&self.resource)?;
        match self.path.as_deref() {
            None | Some("") | Some("/") => Ok(self.resource.clone()),
            Some(sub_path) => {
                ensure_leading_slash(sub_path)?;
                Ok(format!("{}{}", self.resource, sub_path))
            }
        }
    }
}

fn ensure_leading_slash(path: &str) -> Result<(), PathsError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(PathsError::missing_slash(path))
    }
}

/// Owns every declared path item and arbitrates registration order.
///
/// Each call either commits completely or fails without touching the
/// registry; earlier successful declarations are never rolled back.
#[derive(Debug, Default)]
pub struct PathsBuilder {
    paths: PathsObject,
    item_builder: PathItemBuilder,
    trie: PathTrie,
}

impl PathsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a path template, optionally as a reference or with shared
    /// parameters.
    pub fn declare_path(&mut self, args: &ApiArgs) -> Result<&mut Self, PathsError> {
        let item = self.path_item(args).inspect_err(|err| {
            warn!(
                path = %args.path,
                kind = err.kind(),
                error = %err,
                "Path declaration rejected"
            );
        })?;

        debug!(
            path = %args.path,
            reference = item.is_reference(),
            "Path declared"
        );
        self.trie.insert(&args.path);
        self.paths.insert(args.path.clone(), item);
        Ok(self)
    }

    fn path_item(&mut self, args: &ApiArgs) -> Result<PathItemObject, PathsError> {
        ensure_leading_slash(&args.path)?;
        if self.paths.contains_key(&args.path) {
            return Err(PathsError::DuplicatePath {
                path: args.path.clone(),
            });
        }

        let builder = self.item_builder.reset();
        if let Some(parameters) = &args.parameters {
            if args.reference.is_some() {
                return Err(ReferenceConflict::ParametersWithReference {
                    path: args.path.clone(),
                }
                .into());
            }
            builder.with_parameters(parameters)?;
        }
        if let Some(reference) = &args.reference {
            builder.as_ref(reference)?;
        }
        Ok(builder.build())
    }

    /// Attach an operation to its effective path, creating the path item if
    /// needed.
    pub fn declare_operation(
        &mut self,
        declaration: OperationDeclaration,
    ) -> Result<&mut Self, PathsError> {
        let method = declaration.method;
        let (path, item) = self.operation_item(declaration).inspect_err(|err| {
            warn!(
                method = %method,
                kind = err.kind(),
                error = %err,
                "Operation declaration rejected"
            );
        })?;

        debug!(path = %path, method = %method, "Operation declared");
        self.trie.insert(&path);
        self.paths.insert(path, item);
        Ok(self)
    }

    fn operation_item(
        &mut self,
        declaration: OperationDeclaration,
    ) -> Result<(String, PathItemObject), PathsError> {
        let path = declaration.effective_path()?;
        self.trie.check(&path)?;

        let builder = self.item_builder.reset();
        if let Some(existing) = self.paths.get(&path) {
            if existing.is_reference() {
                return Err(ReferenceConflict::OperationForReferencedPath { path }.into());
            }
            if !existing.is_empty() {
                builder.merge(existing.clone())?;
            }
        }
        builder.with_operation(declaration.method, declaration.operation)?;
        Ok((path, builder.build()))
    }

    /// Render the accumulated paths, leaving out items with no content.
    ///
    /// Registry state is untouched, so this can be called repeatedly.
    pub fn build(&self) -> PathsObject {
        let paths: PathsObject = self
            .paths
            .iter()
            .filter(|(_, item)| !item.is_empty())
            .map(|(path, item)| (path.clone(), item.clone()))
            .collect();
        info!(
            declared_count = self.paths.len(),
            paths_count = paths.len(),
            "Paths built"
        );
        paths
    }

    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PathItemObject> {
        self.paths.get(path)
    }

    /// Number of declared templates, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn trie(&self) -> &PathTrie {
        &self.trie
    }

    /// Drop every declaration and the ambiguity index.
    pub fn reset(&mut self) -> &mut Self {
        self.paths.clear();
        self.item_builder.reset();
        self.trie.clear();
        self
    }
}
