//! Declarative UI loader integration for Trellis.
//!
//! This crate provides the pieces that sit between the description loader and
//! the style resource model, featuring:
//!
//! - **Element Tree**: Loaded elements with per-element resource dictionaries
//!   and ancestor-chain resource lookup
//! - **Load Services**: The capability bundle the loader hands each markup
//!   extension (ambient scope enumeration, requesting element)
//! - **Multi-Style References**: Resolve a space-separated style key list into
//!   one merged style
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis_markup::prelude::*;
//! use trellis_style::prelude::*;
//!
//! let mut tree = ElementTree::new();
//! let window = tree.create_root();
//! tree.resources_mut(window)
//!     .unwrap()
//!     .insert("Accent", Style::new().with_setter("color", Color::BLUE));
//!
//! let scopes = ScopeStack::new();
//! let services = LoaderContext::new()
//!     .with_ambient_scopes(&scopes)
//!     .with_target(&tree, window);
//!
//! let style = MultiStyleExtension::with_keys("Accent")
//!     .provide_value(&services)
//!     .unwrap();
//! assert_eq!(style.get("color"), Some(&StyleValue::Color(Color::BLUE)));
//! ```

pub mod multi_style;
pub mod services;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use multi_style::MultiStyleExtension;
pub use services::{AmbientScopes, LoadServices, LoaderContext, MarkupExtension, ScopeStack};
pub use tree::{ElementId, ElementRef, ElementTree, SharedElementTree};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::multi_style::MultiStyleExtension;
    pub use crate::services::{
        AmbientScopes, LoadServices, LoaderContext, MarkupExtension, ScopeStack,
    };
    pub use crate::tree::{ElementId, ElementRef, ElementTree, SharedElementTree};
}
