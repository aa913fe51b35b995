use crate::check::diagnostic::Diagnostic;
use crate::descriptor::Entity;
use crate::registry::Registry;
use std::collections::HashSet;

/// Trait for implementing descriptor checks
pub trait CheckRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a single entity
    fn check_entity(&self, _entity: &Entity) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check relationships between entities
    fn check_registry(&self, _registry: &Registry) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Collection of rules run by the checker
pub struct RuleSet {
    rules: Vec<Box<dyn CheckRule>>,
}

impl RuleSet {
    /// Create a rule set with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(DuplicateEntityRule),
                Box::new(DuplicateAttributeRule),
                Box::new(InvalidIdentifierRule),
                Box::new(ReservedWordRule),
                Box::new(EmptyEntityRule),
            ],
        }
    }

    /// Create an empty rule set
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule
    pub fn add(&mut self, rule: Box<dyn CheckRule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn CheckRule>] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Two entities with the same name produce conflicting classes
pub struct DuplicateEntityRule;

impl CheckRule for DuplicateEntityRule {
    fn name(&self) -> &'static str {
        "duplicate-entity"
    }

    fn description(&self) -> &'static str {
        "Disallow registering two entities with the same name"
    }

    fn check_registry(&self, registry: &Registry) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut diagnostics = Vec::new();

        for entity in registry.entities() {
            if !seen.insert(entity.name.as_str()) && reported.insert(entity.name.as_str()) {
                diagnostics.push(Diagnostic::error(
                    self.name(),
                    format!("Entity '{}' is registered more than once", entity.name),
                    &entity.name,
                ));
            }
        }

        diagnostics
    }
}

/// Attribute names must be unique within an entity
pub struct DuplicateAttributeRule;

impl CheckRule for DuplicateAttributeRule {
    fn name(&self) -> &'static str {
        "duplicate-attribute"
    }

    fn description(&self) -> &'static str {
        "Disallow repeated attribute names within an entity"
    }

    fn check_entity(&self, entity: &Entity) -> Vec<Diagnostic> {
        entity
            .duplicate_attribute_names()
            .into_iter()
            .map(|name| {
                Diagnostic::error(
                    self.name(),
                    format!("Attribute '{}' is declared more than once", name),
                    &entity.name,
                )
                .on_attribute(name)
                .with_suggestion(format!("Rename or remove the repeated '{}'", name))
            })
            .collect()
    }
}

/// Names must be valid Dart identifiers
pub struct InvalidIdentifierRule;

impl CheckRule for InvalidIdentifierRule {
    fn name(&self) -> &'static str {
        "invalid-identifier"
    }

    fn description(&self) -> &'static str {
        "Require entity and attribute names to be valid Dart identifiers"
    }

    fn check_entity(&self, entity: &Entity) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if !is_identifier(&entity.name) {
            diagnostics.push(Diagnostic::error(
                self.name(),
                format!("Entity name '{}' is not a valid identifier", entity.name),
                &entity.name,
            ));
        }

        for attribute in &entity.attributes {
            if !is_identifier(&attribute.name) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("Attribute name '{}' is not a valid identifier", attribute.name),
                        &entity.name,
                    )
                    .on_attribute(&attribute.name),
                );
            }
        }

        diagnostics
    }
}

/// Attribute names that collide with Dart reserved words
pub struct ReservedWordRule;

const RESERVED_WORDS: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
];

impl CheckRule for ReservedWordRule {
    fn name(&self) -> &'static str {
        "reserved-word"
    }

    fn description(&self) -> &'static str {
        "Warn when an attribute is named after a Dart reserved word"
    }

    fn check_entity(&self, entity: &Entity) -> Vec<Diagnostic> {
        entity
            .attributes
            .iter()
            .filter(|a| RESERVED_WORDS.contains(&a.name.as_str()))
            .map(|a| {
                Diagnostic::warning(
                    self.name(),
                    format!("Attribute '{}' is a Dart reserved word", a.name),
                    &entity.name,
                )
                .on_attribute(&a.name)
                .with_suggestion(format!("Rename '{}', e.g. to '{}Value'", a.name, a.name))
            })
            .collect()
    }
}

/// Entities without attributes generate empty selector classes
pub struct EmptyEntityRule;

impl CheckRule for EmptyEntityRule {
    fn name(&self) -> &'static str {
        "empty-entity"
    }

    fn description(&self) -> &'static str {
        "Note entities that declare no attributes"
    }

    fn check_entity(&self, entity: &Entity) -> Vec<Diagnostic> {
        if entity.attributes.is_empty() {
            vec![Diagnostic::info(
                self.name(),
                format!("Entity '{}' has no attributes", entity.name),
                &entity.name,
            )]
        } else {
            Vec::new()
        }
    }
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
