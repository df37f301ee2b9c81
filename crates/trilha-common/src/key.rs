//! Key column resolution for audited entities

use crate::error::AuditError;
use crate::metadata::EntityMetadata;
use crate::model::AuditColumnType;
use crate::options::KeySelector;

/// Resolve the name and audit column type of the column that uniquely
/// identifies an audited row.
///
/// Without a selector the entity must declare a single-property primary key;
/// with one, the named property must exist on the entity. Both failures are
/// configuration errors raised at model-build time, never deferred to SQL
/// generation.
pub fn resolve_key(
    entity: &EntityMetadata,
    selector: Option<&KeySelector>,
) -> Result<(String, AuditColumnType), AuditError> {
    let property = match selector {
        Some(selector) => entity.property(selector.property()).ok_or_else(|| {
            AuditError::Configuration(format!(
                "key selector references '{}', which is not a property of entity '{}'",
                selector.property(),
                entity.table_name
            ))
        })?,
        None => entity.simple_key().ok_or_else(|| {
            AuditError::Configuration(format!(
                "entity '{}' must either have a single-column primary key or an explicit key selector",
                entity.table_name
            ))
        })?,
    };

    let column_type = AuditColumnType::from_runtime(&property.runtime_type)?;
    Ok((property.name.clone(), column_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{PropertyMetadata, RuntimeType};

    fn order_entity() -> EntityMetadata {
        EntityMetadata::new(
            "Orders",
            vec![
                PropertyMetadata::new("Id", RuntimeType::Integer),
                PropertyMetadata::new("Reference", RuntimeType::Text),
                PropertyMetadata::new("Payload", RuntimeType::Json),
            ],
            vec!["Id".to_string()],
        )
    }

    #[test]
    fn test_simple_key_inference() {
        let (name, column_type) = resolve_key(&order_entity(), None).unwrap();
        assert_eq!(name, "Id");
        assert_eq!(column_type, AuditColumnType::Numeric);
    }

    #[test]
    fn test_selector_overrides_inference() {
        let selector = KeySelector::parse("Reference").unwrap();
        let (name, column_type) = resolve_key(&order_entity(), Some(&selector)).unwrap();
        assert_eq!(name, "Reference");
        assert_eq!(column_type, AuditColumnType::Text);
    }

    #[test]
    fn test_composite_key_without_selector_fails() {
        let mut entity = order_entity();
        entity.primary_key = vec!["Id".to_string(), "Reference".to_string()];
        let err = resolve_key(&entity, None).unwrap_err();
        assert!(matches!(err, AuditError::Configuration(msg) if msg.contains("Orders")));
    }

    #[test]
    fn test_missing_key_without_selector_fails() {
        let mut entity = order_entity();
        entity.primary_key.clear();
        assert!(matches!(
            resolve_key(&entity, None),
            Err(AuditError::Configuration(_))
        ));
    }

    #[test]
    fn test_selector_naming_unknown_property_fails() {
        let selector = KeySelector::parse("Ghost").unwrap();
        let err = resolve_key(&order_entity(), Some(&selector)).unwrap_err();
        assert!(matches!(err, AuditError::Configuration(msg) if msg.contains("Ghost")));
    }

    #[test]
    fn test_unmappable_key_type_fails() {
        let selector = KeySelector::parse("Payload").unwrap();
        let err = resolve_key(&order_entity(), Some(&selector)).unwrap_err();
        assert!(matches!(err, AuditError::UnsupportedType(name) if name == "Json"));
    }
}
