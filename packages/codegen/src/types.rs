//! Mapping from descriptor types and defaults to Dart tokens.

use crate::descriptor::{Attribute, AttributeType};
use crate::options::Variant;

/// Rendered in place of a missing default
pub const NULL_LITERAL: &str = "null";

/// Map a declared type to its Dart type token
pub fn map_type(declared_type: &AttributeType, variant: Variant) -> String {
    match declared_type {
        AttributeType::Text => "String".to_string(),
        AttributeType::Integer => "int".to_string(),
        AttributeType::Boolean if variant.maps_all_primitives() => "bool".to_string(),
        AttributeType::Float if variant.maps_all_primitives() => "double".to_string(),
        other => other.tag().to_string(),
    }
}

/// Render an attribute's default as a Dart literal.
///
/// Text is wrapped in single quotes as-is, without escaping. Any other
/// `True`/`False` literal is lowercased.
pub fn render_default(attribute: &Attribute) -> String {
    let Some(value) = &attribute.default else {
        return NULL_LITERAL.to_string();
    };

    if is_text(&attribute.declared_type) {
        return format!("'{}'", value);
    }

    match value.as_str() {
        "True" => "true".to_string(),
        "False" => "false".to_string(),
        _ => value.clone(),
    }
}

/// Types whose Dart token is `String`
fn is_text(declared_type: &AttributeType) -> bool {
    match declared_type {
        AttributeType::Text => true,
        AttributeType::Other(token) => token == "String",
        _ => false,
    }
}

/// A token ending in `?` is already nullable
pub fn is_nullable(type_token: &str) -> bool {
    type_token.ends_with('?')
}

/// An attribute with its Dart rendering resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    pub name: String,
    pub type_token: String,
    pub default_literal: String,
    pub nullable: bool,
}

impl ResolvedAttribute {
    pub fn resolve(attribute: &Attribute, variant: Variant) -> Self {
        let type_token = map_type(&attribute.declared_type, variant);
        Self {
            name: attribute.name.clone(),
            nullable: is_nullable(&type_token),
            default_literal: render_default(attribute),
            type_token,
        }
    }

    /// `getValue('name')`, asserted non-null unless the type is nullable
    pub fn read_expression(&self) -> String {
        let bang = if self.nullable { "" } else { "!" };
        format!("getValue('{}'){}", self.name, bang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_primitives_extended() {
        let v = Variant::Extended;
        assert_eq!(map_type(&AttributeType::Text, v), "String");
        assert_eq!(map_type(&AttributeType::Integer, v), "int");
        assert_eq!(map_type(&AttributeType::Boolean, v), "bool");
        assert_eq!(map_type(&AttributeType::Float, v), "double");
    }

    #[test]
    fn test_map_primitives_basic() {
        let v = Variant::Basic;
        assert_eq!(map_type(&AttributeType::Text, v), "String");
        assert_eq!(map_type(&AttributeType::Integer, v), "int");
        assert_eq!(map_type(&AttributeType::Float, v), "float");
    }

    #[test]
    fn test_map_passthrough() {
        let ty = AttributeType::Other("Map<String, int>?".to_string());
        assert_eq!(map_type(&ty, Variant::Extended), "Map<String, int>?");
        assert_eq!(map_type(&ty, Variant::Basic), "Map<String, int>?");
    }

    #[test]
    fn test_text_default_is_quoted_without_escaping() {
        let attr = Attribute::new("greeting", AttributeType::Text).with_default("hello");
        assert_eq!(render_default(&attr), "'hello'");

        let attr = Attribute::new("quote", AttributeType::Text).with_default("it's");
        assert_eq!(render_default(&attr), "'it's'");
    }

    #[test]
    fn test_boolean_default_is_lowercased() {
        let attr = Attribute::new("on", AttributeType::Boolean).with_default("True");
        assert_eq!(render_default(&attr), "true");

        let attr = Attribute::new("off", AttributeType::Boolean).with_default("False");
        assert_eq!(render_default(&attr), "false");

        let attr = Attribute::new("off", AttributeType::Boolean).with_default("false");
        assert_eq!(render_default(&attr), "false");
    }

    #[test]
    fn test_capitalized_boolean_lowercased_for_any_type() {
        let attr = Attribute::new("dark", AttributeType::Other("bool?".to_string()))
            .with_default("True");
        assert_eq!(render_default(&attr), "true");

        let attr = Attribute::new("flag", AttributeType::Integer).with_default("False");
        assert_eq!(render_default(&attr), "false");

        let attr = Attribute::new("label", AttributeType::Text).with_default("True");
        assert_eq!(render_default(&attr), "'True'");
    }

    #[test]
    fn test_string_token_default_is_quoted() {
        let attr = Attribute::new("title", AttributeType::Other("String".to_string()))
            .with_default("x");
        assert_eq!(map_type(&attr.declared_type, Variant::Extended), "String");
        assert_eq!(render_default(&attr), "'x'");

        let attr = Attribute::new("title", AttributeType::Other("String?".to_string()))
            .with_default("null");
        assert_eq!(render_default(&attr), "null");
    }

    #[test]
    fn test_missing_default_is_null_for_every_type() {
        for ty in [
            AttributeType::Text,
            AttributeType::Integer,
            AttributeType::Boolean,
            AttributeType::Float,
            AttributeType::Other("Color?".to_string()),
        ] {
            let attr = Attribute::new("value", ty);
            assert_eq!(render_default(&attr), NULL_LITERAL);
        }
    }

    #[test]
    fn test_other_defaults_unchanged() {
        let attr = Attribute::new("n", AttributeType::Integer).with_default("42");
        assert_eq!(render_default(&attr), "42");

        let attr = Attribute::new("c", AttributeType::Other("Color".to_string()))
            .with_default("Color.red");
        assert_eq!(render_default(&attr), "Color.red");
    }

    #[test]
    fn test_read_expression_nullability() {
        let count = ResolvedAttribute::resolve(
            &Attribute::new("count", AttributeType::Integer),
            Variant::Extended,
        );
        assert!(!count.nullable);
        assert_eq!(count.read_expression(), "getValue('count')!");

        let mode = ResolvedAttribute::resolve(
            &Attribute::new("mode", AttributeType::Other("SomeEnum?".to_string())),
            Variant::Extended,
        );
        assert!(mode.nullable);
        assert_eq!(mode.type_token, "SomeEnum?");
        assert_eq!(mode.read_expression(), "getValue('mode')");
    }
}
