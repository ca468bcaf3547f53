use serde::{Serialize, Serializer};
use std::fmt;

use super::{FormatError, Pattern};

/// Well-known MIME types accepted in `produces`/`consumes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    ApplicationAtomXml,
    ApplicationFormUrlencoded,
    ApplicationJson,
    ApplicationJsonUtf8,
    ApplicationOctetStream,
    ApplicationPdf,
    ApplicationProblemJson,
    ApplicationProblemJsonUtf8,
    ApplicationProblemXml,
    ApplicationRssXml,
    ApplicationStreamJson,
    ApplicationXhtmlXml,
    ApplicationXml,
    ApplicationZip,
    ImageGif,
    ImageJpeg,
    ImagePng,
    MultipartFormData,
    TextEventStream,
    TextHtml,
    TextMarkdown,
    TextPlain,
    TextXml,
}

impl MimeType {
    pub const ALL: [MimeType; 23] = [
        MimeType::ApplicationAtomXml,
        MimeType::ApplicationFormUrlencoded,
        MimeType::ApplicationJson,
        MimeType::ApplicationJsonUtf8,
        MimeType::ApplicationOctetStream,
        MimeType::ApplicationPdf,
        MimeType::ApplicationProblemJson,
        MimeType::ApplicationProblemJsonUtf8,
        MimeType::ApplicationProblemXml,
        MimeType::ApplicationRssXml,
        MimeType::ApplicationStreamJson,
        MimeType::ApplicationXhtmlXml,
        MimeType::ApplicationXml,
        MimeType::ApplicationZip,
        MimeType::ImageGif,
        MimeType::ImageJpeg,
        MimeType::ImagePng,
        MimeType::MultipartFormData,
        MimeType::TextEventStream,
        MimeType::TextHtml,
        MimeType::TextMarkdown,
        MimeType::TextPlain,
        MimeType::TextXml,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::ApplicationAtomXml => "application/atom+xml",
            MimeType::ApplicationFormUrlencoded => "application/x-www-form-urlencoded",
            MimeType::ApplicationJson => "application/json",
            MimeType::ApplicationJsonUtf8 => "application/json;charset=UTF-8",
            MimeType::ApplicationOctetStream => "application/octet-stream",
            MimeType::ApplicationPdf => "application/pdf",
            MimeType::ApplicationProblemJson => "application/problem+json",
            MimeType::ApplicationProblemJsonUtf8 => "application/problem+json;charset=UTF-8",
            MimeType::ApplicationProblemXml => "application/problem+xml",
            MimeType::ApplicationRssXml => "application/rss+xml",
            MimeType::ApplicationStreamJson => "application/stream+json",
            MimeType::ApplicationXhtmlXml => "application/xhtml+xml",
            MimeType::ApplicationXml => "application/xml",
            MimeType::ApplicationZip => "application/zip",
            MimeType::ImageGif => "image/gif",
            MimeType::ImageJpeg => "image/jpeg",
            MimeType::ImagePng => "image/png",
            MimeType::MultipartFormData => "multipart/form-data",
            MimeType::TextEventStream => "text/event-stream",
            MimeType::TextHtml => "text/html",
            MimeType::TextMarkdown => "text/markdown",
            MimeType::TextPlain => "text/plain",
            MimeType::TextXml => "text/xml",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved media type: either a table entry or a vendor type passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    Known(MimeType),
    Vendor(String),
}

impl MediaType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Known(mime) => mime.as_str(),
            MediaType::Vendor(value) => value.as_str(),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

fn not_empty(value: &str) -> Result<(), FormatError> {
    if value.is_empty() {
        return Err(FormatError::Empty {
            field: "type".to_string(),
        });
    }
    Ok(())
}

/// Resolve a media type string: vendor types pass through, anything else
/// must be in the [`MimeType`] table.
pub fn value_of(value: &str) -> Result<MediaType, FormatError> {
    if is_vendor_type(value)? {
        return Ok(MediaType::Vendor(value.to_string()));
    }
    to_mime_type(value).map(MediaType::Known)
}

/// `true` for `<registered type>/vnd.*`, ignoring any `;` parameters.
pub fn is_vendor_type(value: &str) -> Result<bool, FormatError> {
    not_empty(value)?;
    let without_charset = value.split(';').next().unwrap_or_default();
    if !Pattern::MimeType.matches(without_charset) {
        return Ok(false);
    }
    Ok(without_charset
        .split_once('/')
        .is_some_and(|(_, subtype)| subtype.starts_with("vnd.")))
}

/// Look `value` up in the [`MimeType`] table.
pub fn to_mime_type(value: &str) -> Result<MimeType, FormatError> {
    not_empty(value)?;
    if value == "*/*" {
        return Err(FormatError::WildcardMimeType);
    }
    MimeType::ALL
        .into_iter()
        .find(|m| m.as_str() == value)
        .ok_or_else(|| FormatError::UnsupportedMimeType {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_known_type() {
        assert_eq!(
            value_of("application/json").unwrap(),
            MediaType::Known(MimeType::ApplicationJson)
        );
    }

    #[test]
    fn test_value_of_unknown_non_vendor() {
        let err = value_of("application/badjson").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported MimeType \"application/badjson\"");
    }

    #[test]
    fn test_vendor_types_pass_through() {
        for t in ["application/vnd.github-issue.text+json", "image/vnd.djvu"] {
            assert_eq!(value_of(t).unwrap(), MediaType::Vendor(t.to_string()));
        }
    }

    #[test]
    fn test_fake_vendor_top_level_rejected() {
        assert!(!is_vendor_type("test/vnd.djvu").unwrap());
        assert!(matches!(
            value_of("test/vnd.djvu"),
            Err(FormatError::UnsupportedMimeType { .. })
        ));
    }

    #[test]
    fn test_not_vendor() {
        assert!(!is_vendor_type("image/image").unwrap());
    }

    #[test]
    fn test_wildcard_rejected() {
        assert_eq!(to_mime_type("*/*").unwrap_err(), FormatError::WildcardMimeType);
    }

    #[test]
    fn test_empty_rejected_everywhere() {
        assert!(matches!(value_of(""), Err(FormatError::Empty { .. })));
        assert!(matches!(to_mime_type(""), Err(FormatError::Empty { .. })));
        assert!(matches!(is_vendor_type(""), Err(FormatError::Empty { .. })));
    }

    #[test]
    fn test_charset_variant_is_in_table() {
        assert_eq!(
            to_mime_type("application/json;charset=UTF-8").unwrap(),
            MimeType::ApplicationJsonUtf8
        );
    }
}
