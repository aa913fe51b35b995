//! Descriptor checks. Generation never depends on these; they surface
//! descriptors that would produce Dart code that does not compile.

mod diagnostic;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use rules::{
    CheckRule, DuplicateAttributeRule, DuplicateEntityRule, EmptyEntityRule,
    InvalidIdentifierRule, ReservedWordRule, RuleSet,
};

use crate::registry::Registry;

/// Options for configuring the checker
#[derive(Default)]
pub struct CheckOptions {
    /// Custom rule set (uses the built-in rules if None)
    pub rules: Option<RuleSet>,
}

/// Check every entity in a registry and return diagnostics in registry order
pub fn check_registry(registry: &Registry, options: CheckOptions) -> Vec<Diagnostic> {
    let rules = options.rules.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for rule in rules.rules() {
        diagnostics.extend(rule.check_registry(registry));
    }

    for entity in registry.entities() {
        for rule in rules.rules() {
            diagnostics.extend(rule.check_entity(entity));
        }
    }

    diagnostics
}
