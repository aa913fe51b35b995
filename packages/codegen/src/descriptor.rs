use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Declared type of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Text,
    Integer,
    Boolean,
    Float,
    /// Any other type expression, kept verbatim (e.g. `SomeEnum?`, `List<int>`)
    Other(String),
}

impl AttributeType {
    /// Resolve a descriptor type tag. Unknown tags are never an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "str" | "string" | "String" | "text" => AttributeType::Text,
            "int" | "integer" => AttributeType::Integer,
            "bool" | "boolean" => AttributeType::Boolean,
            "float" | "double" => AttributeType::Float,
            other => AttributeType::Other(other.to_string()),
        }
    }

    /// Canonical tag, also used as the passthrough type token
    pub fn tag(&self) -> &str {
        match self {
            AttributeType::Text => "str",
            AttributeType::Integer => "int",
            AttributeType::Boolean => "bool",
            AttributeType::Float => "float",
            AttributeType::Other(name) => name,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for AttributeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for AttributeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(AttributeType::from_tag(&tag))
    }
}

/// One named, typed field of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,

    #[serde(rename = "type")]
    pub declared_type: AttributeType,

    /// Textual form of the default literal. `None` means the value must be
    /// set before it is first read.
    #[serde(
        default,
        deserialize_with = "deserialize_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, declared_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Accepts any JSON scalar and keeps its textual form
fn deserialize_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "default must be a string, number or boolean, found {}",
            other
        ))),
    }
}

/// A source-declared class to generate trigger code for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,

    /// Declaration order is preserved in the generated code
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Names that appear more than once, in first-repeat order
    pub fn duplicate_attribute_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for attribute in &self.attributes {
            let name = attribute.name.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}
