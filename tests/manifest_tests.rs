use openapi_paths::manifest::{apply, load_manifest, registry_from_file, Manifest};
use openapi_paths::registry::ApiRegistry;
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rendered(name: &str) -> Value {
    let registry = registry_from_file(fixture(name)).unwrap();
    serde_json::to_value(registry.document().unwrap()).unwrap()
}

#[test]
fn test_petstore_yaml_document() {
    let doc = rendered("petstore.yaml");

    assert_eq!(doc["swagger"], "2.0");
    assert_eq!(doc["basePath"], "/api/v1");
    assert_eq!(doc["schemes"], json!(["https"]));
    assert_eq!(doc["info"]["contact"]["email"], "pets@example.com");
    assert_eq!(doc["definitions"]["Pet"]["type"], "object");

    assert_eq!(
        doc["paths"]["/pets"],
        json!({
            "get": {
                "operationId": "list_pets",
                "tags": ["pets"],
                "parameters": [
                    {"name": "limit", "in": "query", "type": "integer", "description": "Page size"}
                ],
                "responses": {
                    "200": {
                        "description": "Success",
                        "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}}
                    }
                }
            },
            "post": {
                "operationId": "add_pet",
                "parameters": [
                    {
                        "name": "body",
                        "in": "body",
                        "required": true,
                        "schema": {"$ref": "#/definitions/Pet"}
                    }
                ],
                "responses": {"201": {"description": "Created"}}
            }
        })
    );
    assert_eq!(
        doc["paths"]["/pets/{id}"]["get"]["parameters"],
        json!([{"name": "id", "in": "path", "type": "string", "required": true}])
    );
    assert_eq!(
        doc["paths"]["/pets/{id}"]["get"]["responses"]["404"],
        json!({"description": "Not Found"})
    );
    assert_eq!(
        doc["paths"]["/owners/{ownerId}"]["parameters"],
        json!([{"name": "ownerId", "in": "path", "required": true, "type": "string"}])
    );
    assert_eq!(doc["paths"]["/legacy"], json!({"$ref": "legacy.yaml"}));
}

#[test]
fn test_all_formats_render_the_same_document() {
    let yaml = rendered("petstore.yaml");
    assert_eq!(rendered("petstore.json"), yaml);
    assert_eq!(rendered("petstore.toml"), yaml);
}

#[test]
fn test_paths_keep_declaration_order() {
    let registry = registry_from_file(fixture("petstore.json")).unwrap();
    let paths = registry.build_paths();
    assert_eq!(
        paths.keys().collect::<Vec<_>>(),
        ["/pets", "/pets/{id}", "/owners/{ownerId}", "/legacy"]
    );
}

#[test]
fn test_ambiguous_manifest_rejected() {
    let err = registry_from_file(fixture("ambiguous.yaml")).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("get_value"));
    assert!(message.contains(
        "Possible duplicate with resource = \"/path/extension\" sub-resource = \"/path/:value\""
    ));
}

#[test]
fn test_missing_file_names_path() {
    let err = load_manifest(fixture("does-not-exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.yaml"));
}

#[test]
fn test_unparseable_file_names_path() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"apis = [").unwrap();

    let err = load_manifest(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse manifest"));
    assert!(format!("{err:#}").contains("Invalid TOML manifest"));
}

#[test]
fn test_invalid_info_rejected() {
    let manifest: Manifest = serde_json::from_value(json!({
        "info": {"title": "t", "version": "1", "contact": {"url": "localhost"}}
    }))
    .unwrap();
    let err = apply(&manifest, &mut ApiRegistry::new()).unwrap_err();
    assert!(format!("{err:#}").contains("url has to be valid URI"));
}

#[test]
fn test_unknown_media_type_rejected() {
    let manifest: Manifest = serde_json::from_value(json!({
        "produces": ["application/badjson"]
    }))
    .unwrap();
    let err = apply(&manifest, &mut ApiRegistry::new()).unwrap_err();
    assert!(format!("{err:#}").contains("Unsupported MimeType \"application/badjson\""));
}

#[test]
fn test_manifest_without_info_cannot_render() {
    let manifest: Manifest = serde_json::from_value(json!({
        "apis": [{"path": "/a", "operations": [{"operationId": "a", "method": "get"}]}]
    }))
    .unwrap();
    let mut registry = ApiRegistry::new();
    apply(&manifest, &mut registry).unwrap();

    assert_eq!(registry.build_paths().len(), 1);
    assert!(registry.document().is_err());
}
