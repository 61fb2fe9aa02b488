//! Mergeable styles: setters, triggers, and the merge operation.
//!
//! A [`Style`] is a bundle of property [`Setter`]s plus conditional
//! [`Trigger`]s. Styles combine with [`Style::merge`], where the merged-in
//! style's entries take precedence on any overlapping property. This is the
//! operation resource resolution relies on when a use-site references several
//! style resources at once.
//!
//! # Example
//!
//! ```
//! use trellis_style::prelude::*;
//!
//! let mut base = Style::new()
//!     .with_setter("color", Color::BLACK)
//!     .with_setter("font-size", 14.0f32);
//!
//! let accent = Style::new().with_setter("color", Color::BLUE);
//!
//! base.merge(&accent);
//!
//! assert_eq!(base.get("color"), Some(&StyleValue::Color(Color::BLUE)));
//! assert_eq!(base.get("font-size"), Some(&StyleValue::Length(14.0)));
//! ```

use crate::value::StyleValue;

/// A single property assignment within a style.
#[derive(Debug, Clone, PartialEq)]
pub struct Setter {
    /// Target property name (e.g., "color", "font-size").
    pub property: String,
    /// The value to assign.
    pub value: StyleValue,
}

impl Setter {
    /// Create a setter for a property.
    pub fn new(property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A conditional group of setters, activated while a property holds a value.
///
/// Triggers are carried through merging untouched; activation is the widget
/// layer's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    /// The property whose value activates the trigger.
    pub property: String,
    /// The activating value.
    pub value: StyleValue,
    /// Setters applied while the trigger is active.
    pub setters: Vec<Setter>,
}

impl Trigger {
    /// Create a trigger with no setters.
    pub fn new(property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            setters: vec![],
        }
    }

    /// Add a setter to the trigger.
    pub fn with_setter(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.setters.push(Setter::new(property, value));
        self
    }
}

/// A named style resource: an ordered setter collection plus triggers.
///
/// Setter order is insertion order; setting a property that is already
/// present replaces its value in place. The empty style is the identity of
/// [`Style::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    setters: Vec<Setter>,
    triggers: Vec<Trigger>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value.
    ///
    /// Replaces the existing setter for `property` if one is present,
    /// otherwise appends a new one.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        let setter = Setter::new(property, value);
        match self.setters.iter_mut().find(|s| s.property == setter.property) {
            Some(existing) => existing.value = setter.value,
            None => self.setters.push(setter),
        }
    }

    /// Builder-style [`Style::set`].
    pub fn with_setter(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Add a trigger.
    pub fn add_trigger(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    /// Builder-style [`Style::add_trigger`].
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.add_trigger(trigger);
        self
    }

    /// Get the value set for a property, if any.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.setters
            .iter()
            .find(|s| s.property == property)
            .map(|s| &s.value)
    }

    /// Check whether a property is set.
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// The setters in application order.
    pub fn setters(&self) -> &[Setter] {
        &self.setters
    }

    /// The triggers in declaration order.
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Number of set properties.
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Check whether the style carries no setters and no triggers.
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty() && self.triggers.is_empty()
    }

    /// Merge another style into this one.
    ///
    /// `other`'s setters take precedence: a setter for a property already
    /// present here replaces the existing value, anything else is appended.
    /// `other`'s triggers are appended after the existing ones.
    pub fn merge(&mut self, other: &Style) {
        for setter in &other.setters {
            self.set(setter.property.clone(), setter.value.clone());
        }
        self.triggers.extend(other.triggers.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Color;

    #[test]
    fn set_replaces_in_place() {
        let mut style = Style::new()
            .with_setter("color", Color::RED)
            .with_setter("opacity", 0.5f64);

        style.set("color", Color::BLUE);

        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some(&StyleValue::Color(Color::BLUE)));
        // Replaced setter keeps its original position.
        assert_eq!(style.setters()[0].property, "color");
    }

    #[test]
    fn merge_overrides_conflicting_properties() {
        let mut base = Style::new()
            .with_setter("color", Color::BLACK)
            .with_setter("font-size", 14.0f32);

        let overlay = Style::new()
            .with_setter("color", Color::WHITE)
            .with_setter("opacity", 0.8f64);

        base.merge(&overlay);

        assert_eq!(base.get("color"), Some(&StyleValue::Color(Color::WHITE)));
        assert_eq!(base.get("font-size"), Some(&StyleValue::Length(14.0)));
        assert_eq!(base.get("opacity"), Some(&StyleValue::Number(0.8)));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut style = Style::new().with_setter("color", Color::RED);
        let before = style.clone();

        style.merge(&Style::new());
        assert_eq!(style, before);

        let mut empty = Style::new();
        empty.merge(&before);
        assert_eq!(empty, before);
    }

    #[test]
    fn merge_appends_triggers_in_operand_order() {
        let mut base = Style::new()
            .with_trigger(Trigger::new("hovered", true).with_setter("color", Color::BLUE));

        let overlay = Style::new()
            .with_trigger(Trigger::new("pressed", true).with_setter("color", Color::GREEN));

        base.merge(&overlay);

        assert_eq!(base.triggers().len(), 2);
        assert_eq!(base.triggers()[0].property, "hovered");
        assert_eq!(base.triggers()[1].property, "pressed");
    }

    #[test]
    fn empty_style_reports_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().with_setter("color", Color::RED).is_empty());
        assert!(!Style::new().with_trigger(Trigger::new("focused", true)).is_empty());
    }
}
