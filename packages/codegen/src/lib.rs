//! # Trigger Codegen
//!
//! Generates Dart boilerplate for the reactive `Trigger` / `TriggerField`
//! pattern from plain entity descriptors.
//!
//! ## Features
//!
//! - **Value holders**: singleton `Trigger` subclasses whose getters and setters
//!   delegate to `getValue` / `setValue`
//! - **Field selectors**: fluent `TriggerField` builders that record attribute names
//! - **Batch setters**: `multiSet` with a staging builder applied via `setMultiValues`
//! - **Two variants**: the basic layout and the extended layout (default)
//! - **Descriptor checks**: duplicate names, invalid identifiers, reserved words
//!
//! ## Example
//!
//! ```rust
//! use trigger_codegen::{generate_unit, Attribute, AttributeType, Entity, GenerateOptions, Registry, UnitName};
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     Entity::new("Counter")
//!         .attribute(Attribute::new("count", AttributeType::Integer))
//!         .attribute(Attribute::new("label", AttributeType::Text).with_default("n/a")),
//! );
//!
//! let unit = UnitName::new("counter");
//! let source = generate_unit(&registry, &unit, &GenerateOptions::default());
//!
//! assert!(source.contains("part of 'counter.dart';"));
//! assert!(source.contains("int get count => getValue('count')!;"));
//! assert!(source.contains("label = 'n/a';"));
//! ```

pub mod check;
mod compiler;
mod context;
pub mod dart;
mod descriptor;
mod error;
mod options;
mod output;
mod printer;
mod registry;
pub mod types;

pub use check::{check_registry, CheckOptions, CheckRule, Diagnostic, DiagnosticLevel, RuleSet};
pub use compiler::{compile_entity, compile_unit, generate_entity, generate_unit};
pub use descriptor::{Attribute, AttributeType, Entity};
pub use error::{GenerateError, GenerateResult};
pub use options::{GenerateOptions, Variant};
pub use output::{write_unit, CommandFormatter, Formatter, NoopFormatter, UnitName};
pub use printer::print_declarations;
pub use registry::{Registry, DESCRIPTOR_SUFFIX};
