//! Style resources for Trellis.
//!
//! This crate provides the style data model consumed by the declarative UI
//! loader, featuring:
//!
//! - **Styles**: Ordered property setters plus conditional triggers
//! - **Merging**: Combine styles with later-wins precedence per property
//! - **Resource Dictionaries**: Named style registries with merged-dictionary
//!   chaining
//! - **Lookup Contract**: The [`StyleSource`] trait any registry implements
//!
//! # Example
//!
//! ```
//! use trellis_style::prelude::*;
//!
//! let mut dictionary = ResourceDictionary::new();
//! dictionary.insert(
//!     "Accent",
//!     Style::new().with_setter("color", Color::BLUE),
//! );
//!
//! let style = dictionary.lookup("Accent").unwrap();
//! assert_eq!(style.get("color"), Some(&StyleValue::Color(Color::BLUE)));
//! ```

pub mod dictionary;
pub mod style;
pub mod value;

mod error;

pub use dictionary::{ResourceDictionary, ScopeHandle, StyleSource};
pub use error::{Error, Result};
pub use style::{Setter, Style, Trigger};
pub use value::{Color, StyleValue};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::dictionary::{ResourceDictionary, ScopeHandle, StyleSource};
    pub use crate::style::{Setter, Style, Trigger};
    pub use crate::value::{Color, StyleValue};
}
