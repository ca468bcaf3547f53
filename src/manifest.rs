//! Declarative manifest.
//!
//! A manifest lists resources and their operations in a file instead of
//! code. The parser is chosen by file extension: `.yaml`/`.yml` for YAML,
//! `.toml` for TOML, anything else for JSON.
//!
//! ```yaml
//! info:
//!   title: Pets
//!   version: 1.0.0
//! basePath: /api
//! apis:
//!   - path: /pets
//!     operations:
//!       - operationId: list_pets
//!         method: get
//!         responses:
//!           "200":
//!             model: Pet
//!             type: array
//! ```
//!
//! Status codes must be quoted in YAML so they stay strings.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::definition::Scheme;
use crate::info::Info;
use crate::operation::OperationArgs;
use crate::paths::ApiArgs;
use crate::registry::ApiRegistry;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub info: Option<Info>,
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub schemes: Vec<Scheme>,
    #[serde(default)]
    pub produces: Vec<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub definitions: IndexMap<String, Value>,
    #[serde(default)]
    pub apis: Vec<ApiManifest>,
}

/// One resource and the operations declared on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiManifest {
    #[serde(flatten)]
    pub api: ApiArgs,
    #[serde(default)]
    pub operations: Vec<OperationManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationManifest {
    pub operation_id: String,
    #[serde(flatten)]
    pub args: OperationArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => ManifestFormat::Yaml,
            Some("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Parse manifest text in the given format.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Manifest> {
    let manifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content).context("Invalid YAML manifest")?,
        ManifestFormat::Json => serde_json::from_str(content).context("Invalid JSON manifest")?,
        ManifestFormat::Toml => toml::from_str(content).context("Invalid TOML manifest")?,
    };
    Ok(manifest)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let manifest = parse_manifest(&content, ManifestFormat::from_path(path))
        .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
    info!(
        manifest = %path.display(),
        apis_count = manifest.apis.len(),
        "Manifest loaded"
    );
    Ok(manifest)
}

/// Apply every declaration of `manifest` to `registry`, in file order.
///
/// Stops at the first rejected declaration; earlier ones stay registered.
pub fn apply(manifest: &Manifest, registry: &mut ApiRegistry) -> Result<()> {
    if let Some(info) = &manifest.info {
        registry
            .info_mut()
            .with_info(info.clone())
            .context("Invalid info")?;
    }

    let document = registry.document_mut();
    if let Some(base_path) = &manifest.base_path {
        document.with_base_path(base_path).context("Invalid basePath")?;
    }
    document.with_schemes(manifest.schemes.iter().copied());
    document
        .with_produces(&manifest.produces)
        .context("Invalid produces")?;
    document
        .with_consumes(&manifest.consumes)
        .context("Invalid consumes")?;
    for (name, schema) in &manifest.definitions {
        document.with_definition(name.as_str(), schema.clone());
    }

    for api in &manifest.apis {
        let path = &api.api.path;
        let mut scope = registry
            .api(api.api.clone())
            .with_context(|| format!("Failed to declare path \"{path}\""))?;
        for operation in &api.operations {
            scope
                .operation(&operation.operation_id, operation.args.clone())
                .with_context(|| {
                    format!(
                        "Failed to declare operation \"{}\" on \"{path}\"",
                        operation.operation_id
                    )
                })?;
        }
    }
    Ok(())
}

/// Load a manifest file into a fresh registry.
pub fn registry_from_file(path: impl AsRef<Path>) -> Result<ApiRegistry> {
    let manifest = load_manifest(path)?;
    let mut registry = ApiRegistry::new();
    apply(&manifest, &mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::HttpMethod;
    use serde_json::json;

    const YAML: &str = r#"
info:
  title: Pets
  version: 1.0.0
basePath: /api
schemes: [https]
produces: [application/json]
apis:
  - path: /pets
    operations:
      - operationId: list_pets
        method: get
        responses:
          "200":
            model: Pet
            type: array
      - operationId: get_pet
        method: get
        path: /{id}
        parameters:
          path:
            id:
              type: string
        responses:
          "200":
            model: Pet
  - path: /legacy
    $ref: legacy.yaml
"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ManifestFormat::from_path(Path::new("a.yml")), ManifestFormat::Yaml);
        assert_eq!(ManifestFormat::from_path(Path::new("a.yaml")), ManifestFormat::Yaml);
        assert_eq!(ManifestFormat::from_path(Path::new("a.toml")), ManifestFormat::Toml);
        assert_eq!(ManifestFormat::from_path(Path::new("a.json")), ManifestFormat::Json);
        assert_eq!(ManifestFormat::from_path(Path::new("manifest")), ManifestFormat::Json);
    }

    #[test]
    fn test_parse_yaml() {
        let manifest = parse_manifest(YAML, ManifestFormat::Yaml).unwrap();
        assert_eq!(manifest.apis.len(), 2);
        assert_eq!(manifest.apis[0].operations[1].args.method, HttpMethod::Get);
        assert_eq!(manifest.apis[0].operations[1].args.path.as_deref(), Some("/{id}"));
        assert_eq!(manifest.apis[1].api.reference.as_deref(), Some("legacy.yaml"));
    }

    #[test]
    fn test_apply_builds_document() {
        let manifest = parse_manifest(YAML, ManifestFormat::Yaml).unwrap();
        let mut registry = ApiRegistry::new();
        apply(&manifest, &mut registry).unwrap();

        let value = serde_json::to_value(registry.document().unwrap()).unwrap();
        assert_eq!(value["basePath"], json!("/api"));
        assert_eq!(value["paths"]["/legacy"], json!({"$ref": "legacy.yaml"}));
        assert_eq!(
            value["paths"]["/pets"]["get"]["responses"]["200"]["schema"],
            json!({"type": "array", "items": {"$ref": "#/definitions/Pet"}})
        );
        assert_eq!(
            value["paths"]["/pets/{id}"]["get"]["parameters"][0]["required"],
            json!(true)
        );
    }

    #[test]
    fn test_parse_json_and_toml() {
        let json = r#"{"apis": [{"path": "/a", "operations": [{"operationId": "a", "method": "post"}]}]}"#;
        let manifest = parse_manifest(json, ManifestFormat::Json).unwrap();
        assert_eq!(manifest.apis[0].operations[0].args.method, HttpMethod::Post);

        let toml = r#"
[[apis]]
path = "/a"

[[apis.operations]]
operationId = "a"
method = "delete"
"#;
        let manifest = parse_manifest(toml, ManifestFormat::Toml).unwrap();
        assert_eq!(manifest.apis[0].api.path, "/a");
        assert_eq!(manifest.apis[0].operations[0].args.method, HttpMethod::Delete);
    }

    #[test]
    fn test_apply_stops_at_first_rejection() {
        let yaml = r#"
apis:
  - path: /a
  - path: b
  - path: /c
"#;
        let manifest = parse_manifest(yaml, ManifestFormat::Yaml).unwrap();
        let mut registry = ApiRegistry::new();
        let err = apply(&manifest, &mut registry).unwrap_err();

        assert!(format!("{err:#}").contains("Should be \"/b\""));
        assert!(registry.paths().contains_path("/a"));
        assert!(!registry.paths().contains_path("/c"));
    }

    #[test]
    fn test_invalid_yaml_reports_format() {
        let err = parse_manifest("apis: [", ManifestFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("Invalid YAML manifest"));
    }
}
