//! Constant tables shared by the operation and document assemblers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Primitive schema types.
pub const STRING: &str = "string";
pub const NUMBER: &str = "number";
pub const INTEGER: &str = "integer";
pub const BOOLEAN: &str = "boolean";
pub const ARRAY: &str = "array";
pub const OBJECT: &str = "object";
pub const FILE: &str = "file";

/// Schema formats.
pub const FLOAT: &str = "float";
pub const DOUBLE: &str = "double";
pub const INT_32: &str = "int32";
pub const INT_64: &str = "int64";
pub const BYTE: &str = "byte";
pub const BINARY: &str = "binary";
pub const DATE: &str = "date";
pub const DATE_TIME: &str = "date-time";
pub const PASSWORD: &str = "password";

/// Named data types and their `type`/`format` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    Integer,
    Long,
    Float,
    Double,
    String,
    Byte,
    Binary,
    Boolean,
    Date,
    DateTime,
    Password,
    Object,
    Array,
    File,
}

impl DataType {
    /// `(type, format)` as rendered in a schema.
    #[must_use]
    pub fn type_and_format(&self) -> (&'static str, Option<&'static str>) {
        match self {
            DataType::Integer => (INTEGER, Some(INT_32)),
            DataType::Long => (INTEGER, Some(INT_64)),
            DataType::Float => (NUMBER, Some(FLOAT)),
            DataType::Double => (NUMBER, Some(DOUBLE)),
            DataType::String => (STRING, None),
            DataType::Byte => (STRING, Some(BYTE)),
            DataType::Binary => (STRING, Some(BINARY)),
            DataType::Boolean => (BOOLEAN, None),
            DataType::Date => (STRING, Some(DATE)),
            DataType::DateTime => (STRING, Some(DATE_TIME)),
            DataType::Password => (STRING, Some(PASSWORD)),
            DataType::Object => (OBJECT, None),
            DataType::Array => (ARRAY, None),
            DataType::File => (FILE, None),
        }
    }

    /// Inline schema for this type, e.g. `{"type": "integer", "format": "int64"}`.
    #[must_use]
    pub fn schema(&self) -> Value {
        match self.type_and_format() {
            (ty, Some(format)) => json!({ "type": ty, "format": format }),
            (ty, None) => json!({ "type": ty }),
        }
    }
}

/// Default response description for a status code, if the code is well known.
#[must_use]
pub fn http_status_description(status: u16) -> Option<&'static str> {
    let description = match status {
        200 => "Success",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        406 => "Not Acceptable",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        503 => "Service Unavailable",
        _ => return None,
    };
    Some(description)
}

/// Transfer protocols listed in the document's `schemes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
    Ws,
    Wss,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Ws => "ws",
            Scheme::Wss => "wss",
        };
        write!(f, "{}", s)
    }
}

/// Security scheme types.
pub mod security {
    pub const BASIC_AUTHENTICATION: &str = "basic";
    pub const API_KEY: &str = "apiKey";
    pub const BEARER: &str = "Bearer";
    pub const OAUTH2: &str = "OAuth2";
    pub const OPENID: &str = "OpenID";

    pub const IN_HEADER: &str = "header";
    pub const IN_QUERY: &str = "query";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_is_int64() {
        assert_eq!(DataType::Long.schema(), json!({"type": "integer", "format": "int64"}));
    }

    #[test]
    fn test_string_has_no_format() {
        assert_eq!(DataType::String.schema(), json!({"type": "string"}));
    }

    #[test]
    fn test_data_type_wire_names() {
        let t: DataType = serde_json::from_value(json!("dateTime")).unwrap();
        assert_eq!(t, DataType::DateTime);
    }

    #[test]
    fn test_status_table() {
        assert_eq!(http_status_description(200), Some("Success"));
        assert_eq!(http_status_description(418), None);
    }
}
