//! The tenant (organization) a document belongs to.
//!
//! Markdown output leaves the wiki's own pages, so cross-reference links have to be absolute
//! URLs on the tenant's host.

use crate::error::DocError;
use url::Url;

/// Placeholder in a base URL template that is replaced by the tenant name.
pub const TENANT_NAME_PLACEHOLDER: &str = "{name}";

/// A wiki tenant and the base URL its pages are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    name: String,
    base_url: Url,
}

impl Tenant {
    pub fn new(name: impl Into<String>, base_url: Url) -> Self {
        Tenant {
            name: name.into(),
            base_url,
        }
    }

    /// Builds a tenant from a base URL template such as `https://{name}.folio.example`.
    pub fn from_template(name: impl Into<String>, template: &str) -> Result<Self, DocError> {
        let name = name.into();
        let url = template.replace(TENANT_NAME_PLACEHOLDER, &name);
        let base_url = Url::parse(&url).map_err(|e| DocError::InvalidTenantUrl {
            url,
            reason: e.to_string(),
        })?;
        Ok(Tenant { name, base_url })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a path on the tenant's host.
    pub fn url(&self, path: &str) -> String {
        match self.base_url.join(path) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.base_url, path.trim_start_matches('/')),
        }
    }
}
