//! Multi-style resource references.
//!
//! A [`MultiStyleExtension`] names several style resources at once, as a
//! space-separated key list, and produces the single style obtained by
//! resolving each key and merging the results in listed order. Later keys
//! override earlier ones on conflicting properties.
//!
//! Each key resolves in two tiers: the loader's ambient scopes first (first
//! scope that answers wins), then the requesting element's own resolution
//! context. Keys that resolve nowhere contribute nothing.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis_markup::prelude::*;
//! use trellis_style::prelude::*;
//!
//! let mut theme = ResourceDictionary::new();
//! theme.insert("Base", Style::new().with_setter("color", Color::RED));
//! theme.insert("Accent", Style::new().with_setter("font-weight", 700.0f64));
//!
//! let mut scopes = ScopeStack::new();
//! scopes.push(Arc::new(theme));
//!
//! let services = LoaderContext::new().with_ambient_scopes(&scopes);
//! let extension = MultiStyleExtension::with_keys("Base Accent");
//!
//! let style = extension.provide_value(&services).unwrap();
//! assert_eq!(style.get("color"), Some(&StyleValue::Color(Color::RED)));
//! assert_eq!(style.get("font-weight"), Some(&StyleValue::Number(700.0)));
//! ```

use trellis_style::{ScopeHandle, Style};

use crate::Result;
use crate::services::{LoadServices, MarkupExtension};

/// Split a raw key list on runs of the space character.
///
/// Consecutive, leading, and trailing separators yield no empty tokens.
fn split_resource_keys(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// A markup extension resolving multiple style resource keys into one merged
/// style.
///
/// The key list is derived eagerly whenever the configuration string is set;
/// resolution happens once, when the loader calls
/// [`provide_value`](MarkupExtension::provide_value).
#[derive(Debug, Clone, Default)]
pub struct MultiStyleExtension {
    resource_keys: Option<String>,
    keys: Vec<String>,
}

impl MultiStyleExtension {
    /// Create an extension with no keys configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extension from a space-separated key list.
    pub fn with_keys(raw: impl Into<String>) -> Self {
        let mut extension = Self::new();
        extension.set_resource_keys(raw);
        extension
    }

    /// The raw configuration string, if one was set.
    pub fn resource_keys(&self) -> Option<&str> {
        self.resource_keys.as_deref()
    }

    /// Set the configuration string, re-deriving the key list immediately.
    pub fn set_resource_keys(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.keys = split_resource_keys(&raw);
        self.resource_keys = Some(raw);
    }

    /// The derived keys, in listed order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn find_in_ambient_scopes(scopes: &[ScopeHandle], key: &str) -> Option<Style> {
        scopes.iter().find_map(|scope| scope.lookup(key))
    }

    fn find_in_element_scope(services: &dyn LoadServices, key: &str) -> Option<Style> {
        services.target()?.try_find_resource(key)
    }
}

impl MarkupExtension for MultiStyleExtension {
    type Output = Style;

    /// Resolve and merge the configured keys into one style.
    ///
    /// Keys resolve independently: the ambient scopes answer first, in
    /// enumeration order, and the requesting element's context answers only
    /// for keys no ambient scope satisfied. Each resolved style is merged
    /// onto the running result, so later keys override earlier ones.
    ///
    /// A missing capability shrinks the corresponding tier to nothing; an
    /// ambient enumeration error is the host's contract failure and
    /// propagates unchanged.
    fn provide_value(&self, services: &dyn LoadServices) -> Result<Style> {
        if self.keys.is_empty() {
            return Ok(Style::new());
        }

        let ambient = match services.ambient_scopes() {
            Some(scopes) => scopes.visible_scopes()?,
            None => {
                tracing::debug!("Host provides no ambient scope service");
                vec![]
            }
        };

        let mut result = Style::new();
        for key in &self.keys {
            let found = Self::find_in_ambient_scopes(&ambient, key)
                .or_else(|| Self::find_in_element_scope(services, key));

            match found {
                Some(style) => result.merge(&style),
                None => tracing::debug!("No style resource found for key '{}'", key),
            }
        }

        Ok(result)
    }
}
