//! Read-only entity descriptor consumed from the host ORM
//!
//! Trilha never inspects the host framework's model directly; the host lowers
//! each audited entity into an [`EntityMetadata`] value once, at model-build
//! time, and everything here treats it as immutable input.

use serde::{Deserialize, Serialize};

/// Runtime type of an entity property, as declared by the host model.
///
/// Only a subset of these has an audit column mapping; the rest exist so that
/// an unmappable key column fails loudly at build time instead of producing a
/// corrupt schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeType {
    SmallInteger,
    Integer,
    BigInteger,
    Float,
    Double,
    Decimal,
    Text,
    DateTime,
    Boolean,
    Uuid,
    Binary,
    Json,
    /// A provider-specific type Trilha has no knowledge of.
    Custom(String),
}

impl RuntimeType {
    pub fn as_str(&self) -> &str {
        match self {
            RuntimeType::SmallInteger => "SmallInteger",
            RuntimeType::Integer => "Integer",
            RuntimeType::BigInteger => "BigInteger",
            RuntimeType::Float => "Float",
            RuntimeType::Double => "Double",
            RuntimeType::Decimal => "Decimal",
            RuntimeType::Text => "Text",
            RuntimeType::DateTime => "DateTime",
            RuntimeType::Boolean => "Boolean",
            RuntimeType::Uuid => "Uuid",
            RuntimeType::Binary => "Binary",
            RuntimeType::Json => "Json",
            RuntimeType::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single property of an audited entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub name: String,
    pub runtime_type: RuntimeType,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>, runtime_type: RuntimeType) -> Self {
        Self {
            name: name.into(),
            runtime_type,
        }
    }
}

/// Read-only descriptor of an audited entity's declared schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub table_name: String,
    pub properties: Vec<PropertyMetadata>,
    /// Property names forming the declared primary key, in declaration order.
    /// Zero or multiple entries mean the key cannot be inferred.
    pub primary_key: Vec<String>,
}

impl EntityMetadata {
    pub fn new(
        table_name: impl Into<String>,
        properties: Vec<PropertyMetadata>,
        primary_key: Vec<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            properties,
            primary_key,
        }
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// The single primary-key property, if the declared key consists of
    /// exactly one property that exists on the entity.
    pub fn simple_key(&self) -> Option<&PropertyMetadata> {
        match self.primary_key.as_slice() {
            [name] => self.property(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_entity() -> EntityMetadata {
        EntityMetadata::new(
            "Orders",
            vec![
                PropertyMetadata::new("Id", RuntimeType::Integer),
                PropertyMetadata::new("Reference", RuntimeType::Text),
                PropertyMetadata::new("PlacedAt", RuntimeType::DateTime),
            ],
            vec!["Id".to_string()],
        )
    }

    #[test]
    fn test_property_lookup() {
        let entity = order_entity();
        assert_eq!(
            entity.property("Reference").map(|p| &p.runtime_type),
            Some(&RuntimeType::Text)
        );
        assert!(entity.property("Missing").is_none());
    }

    #[test]
    fn test_simple_key() {
        let entity = order_entity();
        assert_eq!(entity.simple_key().map(|p| p.name.as_str()), Some("Id"));
    }

    #[test]
    fn test_composite_key_is_not_simple() {
        let mut entity = order_entity();
        entity.primary_key = vec!["Id".to_string(), "Reference".to_string()];
        assert!(entity.simple_key().is_none());

        entity.primary_key.clear();
        assert!(entity.simple_key().is_none());
    }

    #[test]
    fn test_simple_key_requires_existing_property() {
        let mut entity = order_entity();
        entity.primary_key = vec!["Ghost".to_string()];
        assert!(entity.simple_key().is_none());
    }

    #[test]
    fn test_runtime_type_display() {
        assert_eq!(RuntimeType::BigInteger.to_string(), "BigInteger");
        assert_eq!(
            RuntimeType::Custom("geography".to_string()).to_string(),
            "geography"
        );
    }
}
