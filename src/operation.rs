//! Operation records and the operation metadata assembler.
//!
//! Application code describes an operation with [`OperationArgs`] (the
//! declarative shape, also what a manifest file deserializes into).
//! [`OperationBuilder`] turns those arguments into an [`Operation`] record
//! plus the routing facts (resource, sub-path, method) the paths registry
//! needs. The registry itself never looks inside an [`Operation`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::definition::{http_status_description, DataType};
use crate::format::{self, FormatError};
use crate::method::HttpMethod;
use crate::parameters::{Parameter, ParameterLocation};
use crate::paths::OperationDeclaration;
use crate::reference::ReferenceBuilder;

/// Rendered operation, keyed by method inside a path item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<IndexMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl Operation {
    /// Operation with only an (empty) responses map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses.insert(status.into(), response);
        self
    }
}

/// Rendered response entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, ResponseHeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "type")]
    pub header_type: String,
    pub description: String,
}

/// Declarative description of one parameter inside [`OperationParameters`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterArgs {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub param_type: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub deprecated: Option<bool>,
    #[serde(default)]
    pub allow_empty_value: Option<bool>,
    /// Definition name; rendered as a `$ref` schema
    #[serde(default)]
    pub model: Option<String>,
}

/// Operation parameters grouped by location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationParameters {
    #[serde(default)]
    pub path: IndexMap<String, ParameterArgs>,
    #[serde(default)]
    pub query: IndexMap<String, ParameterArgs>,
    /// Only meaningful for POST, PUT and PATCH
    #[serde(default)]
    pub body: Option<ParameterArgs>,
    #[serde(default)]
    pub form_data: IndexMap<String, ParameterArgs>,
}

/// Declarative description of one response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseArgs {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub headers: IndexMap<String, ResponseHeader>,
    #[serde(default, rename = "type")]
    pub data_type: Option<DataType>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Everything application code declares about one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationArgs {
    pub method: HttpMethod,
    /// Sub-path appended to the resource path
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub produces: Vec<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: OperationParameters,
    #[serde(default)]
    pub responses: IndexMap<String, ResponseArgs>,
    #[serde(default)]
    pub security: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub deprecated: Option<bool>,
}

impl OperationArgs {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            path: None,
            description: None,
            summary: None,
            produces: Vec::new(),
            consumes: Vec::new(),
            tags: Vec::new(),
            parameters: OperationParameters::default(),
            responses: IndexMap::new(),
            security: IndexMap::new(),
            deprecated: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_response(mut self, status: impl Into<String>, response: ResponseArgs) -> Self {
        self.responses.insert(status.into(), response);
        self
    }
}

/// Assembles an [`OperationDeclaration`] from [`OperationArgs`].
///
/// # Example
///
/// ```rust
/// use openapi_paths::method::HttpMethod;
/// use openapi_paths::operation::{OperationArgs, OperationBuilder, ResponseArgs};
///
/// let declaration = OperationBuilder::for_resource("/users")
///     .with_operation_id("list_users")
///     .with_arguments(OperationArgs::new(HttpMethod::Get).with_response("200", ResponseArgs::default()))
///     .build()
///     .unwrap();
///
/// assert_eq!(declaration.resource, "/users");
/// assert_eq!(declaration.operation.responses["200"].description.as_deref(), Some("Success"));
/// ```
#[derive(Debug, Clone)]
pub struct OperationBuilder {
    resource: String,
    operation_id: Option<String>,
    args: OperationArgs,
}

impl OperationBuilder {
    /// Start an operation on `resource`; defaults to `GET` with no responses.
    pub fn for_resource(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            operation_id: None,
            args: OperationArgs::new(HttpMethod::Get),
        }
    }

    #[must_use]
    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    #[must_use]
    pub fn with_arguments(mut self, args: OperationArgs) -> Self {
        self.args = args;
        self
    }

    /// Render the operation. Fails if a `produces`/`consumes` entry is not a
    /// supported media type.
    pub fn build(self) -> Result<OperationDeclaration, FormatError> {
        let OperationBuilder {
            resource,
            operation_id,
            args,
        } = self;

        let operation = Operation {
            operation_id,
            summary: args.summary,
            description: args.description,
            tags: args.tags,
            produces: media_types(&args.produces)?,
            consumes: media_types(&args.consumes)?,
            parameters: flatten_parameters(&args.parameters),
            responses: args
                .responses
                .into_iter()
                .map(|(status, response)| {
                    let rendered = render_response(&status, response);
                    (status, rendered)
                })
                .collect(),
            security: args
                .security
                .into_iter()
                .map(|(name, scopes)| IndexMap::from([(name, scopes)]))
                .collect(),
            deprecated: args.deprecated,
        };

        Ok(OperationDeclaration {
            resource,
            path: args.path,
            method: args.method,
            operation,
        })
    }
}

fn media_types(values: &[String]) -> Result<Vec<String>, FormatError> {
    values
        .iter()
        .map(|v| format::value_of(v).map(|m| m.to_string()))
        .collect()
}

fn model_schema(model: &str, is_array: bool) -> Value {
    let reference = json!({ "$ref": ReferenceBuilder::new().with_value(model).build() });
    if is_array {
        json!({ "type": "array", "items": reference })
    } else {
        reference
    }
}

fn render_parameter(name: &str, location: ParameterLocation, args: &ParameterArgs) -> Parameter {
    let mut parameter = Parameter::new(name, location);
    parameter.description = args.description.clone();
    parameter.required = args.required;
    parameter.format = args.format.clone();
    parameter.deprecated = args.deprecated;
    parameter.allow_empty_value = args.allow_empty_value;

    match (&args.model, location) {
        (Some(model), _) => {
            let is_array = args.param_type.as_deref() == Some("array");
            parameter.schema = Some(model_schema(model, is_array));
        }
        (None, ParameterLocation::Body) => {
            parameter.schema = args.param_type.as_ref().map(|t| json!({ "type": t }));
        }
        (None, _) => {
            parameter.param_type = args.param_type.clone();
        }
    }

    // Path parameters are always required.
    if location == ParameterLocation::Path {
        parameter.required = Some(true);
    }
    parameter
}

fn flatten_parameters(parameters: &OperationParameters) -> Vec<Parameter> {
    let mut out = Vec::new();
    for (name, args) in &parameters.path {
        out.push(render_parameter(name, ParameterLocation::Path, args));
    }
    for (name, args) in &parameters.query {
        out.push(render_parameter(name, ParameterLocation::Query, args));
    }
    if let Some(body) = &parameters.body {
        out.push(render_parameter("body", ParameterLocation::Body, body));
    }
    for (name, args) in &parameters.form_data {
        out.push(render_parameter(name, ParameterLocation::FormData, args));
    }
    out
}

fn render_response(status: &str, args: ResponseArgs) -> Response {
    let description = args.description.or_else(|| {
        status
            .parse::<u16>()
            .ok()
            .and_then(http_status_description)
            .map(str::to_string)
    });

    let schema = match (&args.model, args.data_type) {
        (Some(model), data_type) => Some(model_schema(model, data_type == Some(DataType::Array))),
        (None, Some(data_type)) => Some(data_type.schema()),
        (None, None) => None,
    };

    Response {
        description,
        schema,
        headers: args.headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_is_get_without_responses() {
        let decl = OperationBuilder::for_resource("/").build().unwrap();
        assert_eq!(decl.method, HttpMethod::Get);
        assert_eq!(
            serde_json::to_value(&decl.operation).unwrap(),
            json!({"responses": {}})
        );
    }

    #[test]
    fn test_response_model_becomes_reference() {
        let args = OperationArgs::new(HttpMethod::Get).with_response(
            "200",
            ResponseArgs {
                data_type: Some(DataType::Array),
                model: Some("pet".into()),
                ..Default::default()
            },
        );
        let decl = OperationBuilder::for_resource("/pets")
            .with_arguments(args)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&decl.operation.responses["200"]).unwrap(),
            json!({
                "description": "Success",
                "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}}
            })
        );
    }

    #[test]
    fn test_response_plain_type_schema() {
        let args = OperationArgs::new(HttpMethod::Get).with_response(
            "299",
            ResponseArgs {
                data_type: Some(DataType::Long),
                ..Default::default()
            },
        );
        let decl = OperationBuilder::for_resource("/count")
            .with_arguments(args)
            .build()
            .unwrap();
        let response = &decl.operation.responses["299"];
        assert_eq!(response.description, None);
        assert_eq!(
            response.schema,
            Some(json!({"type": "integer", "format": "int64"}))
        );
    }

    #[test]
    fn test_parameters_flattened_in_location_order() {
        let mut args = OperationArgs::new(HttpMethod::Put).with_path("/{id}");
        args.parameters.form_data.insert("avatar".into(), ParameterArgs::default());
        args.parameters.query.insert("dry_run".into(), ParameterArgs::default());
        args.parameters.path.insert(
            "id".into(),
            ParameterArgs {
                param_type: Some("string".into()),
                ..Default::default()
            },
        );
        args.parameters.body = Some(ParameterArgs {
            model: Some("user".into()),
            ..Default::default()
        });

        let decl = OperationBuilder::for_resource("/users")
            .with_arguments(args)
            .build()
            .unwrap();

        let rendered = serde_json::to_value(&decl.operation.parameters).unwrap();
        assert_eq!(
            rendered,
            json!([
                {"name": "id", "in": "path", "required": true, "type": "string"},
                {"name": "dry_run", "in": "query"},
                {"name": "body", "in": "body", "schema": {"$ref": "#/definitions/User"}},
                {"name": "avatar", "in": "formData"}
            ])
        );
        assert_eq!(decl.path.as_deref(), Some("/{id}"));
    }

    #[test]
    fn test_unsupported_produces_rejected() {
        let mut args = OperationArgs::new(HttpMethod::Get);
        args.produces = vec!["application/badjson".into()];
        let err = OperationBuilder::for_resource("/x")
            .with_arguments(args)
            .build()
            .unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedMimeType { .. }));
    }

    #[test]
    fn test_security_rendered_as_requirement_list() {
        let mut args = OperationArgs::new(HttpMethod::Delete);
        args.security.insert("basicAuth".into(), vec![]);
        let decl = OperationBuilder::for_resource("/x")
            .with_operation_id("remove")
            .with_arguments(args)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&decl.operation).unwrap(),
            json!({"operationId": "remove", "responses": {}, "security": [{"basicAuth": []}]})
        );
    }
}
