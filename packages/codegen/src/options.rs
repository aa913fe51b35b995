use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout of the generated Dart code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Lazily created singleton, `String`/`int` mapping only
    Basic,
    /// Eager singleton with `spawn`, `fields()`, `multiSet` and `bool`/`double` mapping
    #[default]
    Extended,
}

impl Variant {
    /// Whether `bool` and `float` tags map to Dart `bool` / `double`
    pub fn maps_all_primitives(self) -> bool {
        matches!(self, Variant::Extended)
    }

    /// Whether the `spawn` factory, `fields()` accessor and batch setter are emitted
    pub fn has_batch_setter(self) -> bool {
        matches!(self, Variant::Extended)
    }

    /// Whether the "do not modify" marker heads the generated unit
    pub fn has_header(self) -> bool {
        matches!(self, Variant::Extended)
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Variant::Basic),
            "extended" => Ok(Variant::Extended),
            other => Err(format!(
                "Unknown variant: {}. Use: basic or extended",
                other
            )),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Basic => write!(f, "basic"),
            Variant::Extended => write!(f, "extended"),
        }
    }
}

/// Options for unit generation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Which layout to generate
    pub variant: Variant,
    /// Extension of the Dart library the unit is a part of
    pub extension: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Extended,
            extension: "dart".to_string(),
        }
    }
}

impl GenerateOptions {
    /// Options for the basic layout
    pub fn basic() -> Self {
        Self {
            variant: Variant::Basic,
            ..Default::default()
        }
    }

    /// Options for the extended layout
    pub fn extended() -> Self {
        Self::default()
    }
}
