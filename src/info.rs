//! Document `info` section and its builder.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::{validate_optional, FormatError, Pattern};

/// Metadata about the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Errors raised by [`InfoObjectBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoError {
    /// `build` was called before `with_default_values`
    MissingDefaults,
    /// A contact or license field failed validation
    Format(FormatError),
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoError::MissingDefaults => write!(f, "Default info must be set"),
            InfoError::Format(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for InfoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InfoError::Format(err) => Some(err),
            InfoError::MissingDefaults => None,
        }
    }
}

impl From<FormatError> for InfoError {
    fn from(err: FormatError) -> Self {
        InfoError::Format(err)
    }
}

/// Builder for [`Info`].
///
/// Title and version are mandatory and must be supplied through
/// [`with_default_values`](Self::with_default_values) before [`build`](Self::build).
///
/// ```rust
/// use openapi_paths::info::{Contact, InfoObjectBuilder};
///
/// let info = InfoObjectBuilder::new()
///     .with_default_values("Pets", "1.0.0")
///     .with_contact(Contact {
///         email: Some("team@example.com".into()),
///         ..Contact::default()
///     })?
///     .build()?;
/// assert_eq!(info.title, "Pets");
/// # Ok::<(), openapi_paths::info::InfoError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InfoObjectBuilder {
    info: Info,
    defaults_set: bool,
}

impl InfoObjectBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_values(
        &mut self,
        title: impl Into<String>,
        version: impl Into<String>,
    ) -> &mut Self {
        self.info.title = title.into();
        self.info.version = version.into();
        self.defaults_set = true;
        self
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.info.description = Some(description.into());
        self
    }

    pub fn with_terms_of_service(&mut self, terms_of_service: impl Into<String>) -> &mut Self {
        self.info.terms_of_service = Some(terms_of_service.into());
        self
    }

    /// Set the contact. `url` and `email` are validated when present.
    pub fn with_contact(&mut self, contact: Contact) -> Result<&mut Self, InfoError> {
        validate_optional(contact.url.as_deref(), "url", Pattern::Uri)?;
        validate_optional(contact.email.as_deref(), "email", Pattern::Email)?;
        self.info.contact = Some(contact);
        Ok(self)
    }

    /// Set the license. `url` is validated when present.
    pub fn with_license(&mut self, license: License) -> Result<&mut Self, InfoError> {
        validate_optional(license.url.as_deref(), "url", Pattern::Uri)?;
        self.info.license = Some(license);
        Ok(self)
    }

    /// Feed every field of an existing `Info` through the builder checks.
    pub fn with_info(&mut self, info: Info) -> Result<&mut Self, InfoError> {
        let Info {
            title,
            version,
            description,
            terms_of_service,
            contact,
            license,
        } = info;
        self.with_default_values(title, version);
        if let Some(description) = description {
            self.with_description(description);
        }
        if let Some(terms) = terms_of_service {
            self.with_terms_of_service(terms);
        }
        if let Some(contact) = contact {
            self.with_contact(contact)?;
        }
        if let Some(license) = license {
            self.with_license(license)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn has_defaults(&self) -> bool {
        self.defaults_set
    }

    pub fn build(&self) -> Result<Info, InfoError> {
        if !self.defaults_set {
            return Err(InfoError::MissingDefaults);
        }
        Ok(self.info.clone())
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }
}
