//! Flat property schema describing one domain's fields.
//!
//! A schema is either discovered from an interface declaration or absent, in
//! which case the generators fall back to a fixed skeleton. Nested object
//! types are not modelled: every property lands in one [`TypeBucket`].

use std::collections::HashSet;
use std::fmt;

use crate::domain::{error::DomainError, naming::to_snake_case};

/// Name of the primary identifier property.
pub const IDENTIFIER: &str = "id";

/// Audit properties, in both spellings. Excluded from DTOs.
pub const AUDIT_PROPERTIES: [&str; 4] = ["createdAt", "updatedAt", "created_at", "updated_at"];

/// Audit column names as they appear in rows and SQL.
pub const AUDIT_COLUMNS: [&str; 2] = ["created_at", "updated_at"];

/// Boolean properties that default to `true` when a DTO omits them.
pub const ACTIVE_FLAGS: [&str; 4] = ["ativo", "active", "isActive", "enabled"];

/// SQL-relevant classification of a declared type.
///
/// Closed set. Resolution order: array flag, then the `number`, `boolean`
/// and `Date` markers by substring; everything else is [`TypeBucket::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeBucket {
    Numeric,
    Boolean,
    Timestamp,
    TextArray,
    Text,
}

impl TypeBucket {
    pub fn resolve(declared_type: &str, is_array: bool) -> Self {
        if is_array {
            Self::TextArray
        } else if declared_type.contains("number") {
            Self::Numeric
        } else if declared_type.contains("boolean") {
            Self::Boolean
        } else if declared_type.contains("Date") {
            Self::Timestamp
        } else {
            Self::Text
        }
    }

    /// Postgres column type.
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Numeric => "NUMERIC",
            Self::Boolean => "BOOLEAN",
            Self::Timestamp => "TIMESTAMPTZ",
            Self::TextArray => "TEXT[]",
            Self::Text => "TEXT",
        }
    }
}

impl fmt::Display for TypeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::TextArray => "text-array",
            Self::Text => "text",
        };
        f.write_str(s)
    }
}

/// `true` for `T[]`, `Array<T>` and `ReadonlyArray<T>` spellings.
pub fn is_array_type(declared_type: &str) -> bool {
    let t = declared_type.trim();
    t.ends_with("[]") || t.starts_with("Array<") || t.starts_with("ReadonlyArray<")
}

/// One interface member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: String,
    pub declared_type: String,
    pub is_optional: bool,
    pub is_array: bool,
}

impl PropertyInfo {
    /// Required property; array-ness is inferred from the type text.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let declared_type = declared_type.into();
        Self {
            name: name.into(),
            is_array: is_array_type(&declared_type),
            declared_type,
            is_optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn bucket(&self) -> TypeBucket {
        TypeBucket::resolve(&self.declared_type, self.is_array)
    }

    /// snake_case row key / SQL column.
    pub fn column_name(&self) -> String {
        to_snake_case(&self.name)
    }

    pub fn is_identifier(&self) -> bool {
        self.name == IDENTIFIER
    }

    pub fn is_audit(&self) -> bool {
        AUDIT_PROPERTIES.contains(&self.name.as_str())
    }

    pub fn is_active_flag(&self) -> bool {
        ACTIVE_FLAGS.contains(&self.name.as_str()) && self.bucket() == TypeBucket::Boolean
    }

    /// `false` when the type fell through to [`TypeBucket::Text`] without
    /// looking like text.
    pub fn has_known_type(&self) -> bool {
        if self.bucket() != TypeBucket::Text {
            return true;
        }
        let t = self.declared_type.trim();
        t.contains("string")
            || t.starts_with('"')
            || t.starts_with('\'')
            || t == "any"
            || t == "unknown"
    }
}

/// Ordered, validated sequence of properties.
///
/// Invariant: names are non-empty and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySchema {
    properties: Vec<PropertyInfo>,
}

impl PropertySchema {
    pub fn new(properties: Vec<PropertyInfo>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for p in &properties {
            if p.name.is_empty() {
                return Err(DomainError::EmptyPropertyName);
            }
            if !seen.insert(p.name.as_str()) {
                return Err(DomainError::DuplicateProperty {
                    name: p.name.clone(),
                });
            }
        }
        Ok(Self { properties })
    }

    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn has_identifier(&self) -> bool {
        self.get(IDENTIFIER).is_some()
    }

    /// `true` if any property maps to the given snake_case column.
    pub fn has_column(&self, column: &str) -> bool {
        self.properties.iter().any(|p| p.column_name() == column)
    }

    /// Properties accepted in a write payload.
    pub fn dto_properties(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties
            .iter()
            .filter(|p| !p.is_identifier() && !p.is_audit())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_markers() {
        assert_eq!(PropertyInfo::new("preco", "number").bucket(), TypeBucket::Numeric);
        assert_eq!(PropertyInfo::new("ativo", "boolean").bucket(), TypeBucket::Boolean);
        assert_eq!(PropertyInfo::new("nascimento", "Date").bucket(), TypeBucket::Timestamp);
        assert_eq!(PropertyInfo::new("tags", "string[]").bucket(), TypeBucket::TextArray);
        assert_eq!(PropertyInfo::new("nome", "string").bucket(), TypeBucket::Text);
        assert_eq!(PropertyInfo::new("meta", "Record<string, X>").bucket(), TypeBucket::Text);
    }

    #[test]
    fn array_flag_wins_over_element_marker() {
        let p = PropertyInfo::new("notas", "number[]");
        assert!(p.is_array);
        assert_eq!(p.bucket(), TypeBucket::TextArray);
        assert_eq!(p.bucket().sql_type(), "TEXT[]");
    }

    #[test]
    fn generic_array_spellings_detected() {
        assert!(is_array_type("Array<string>"));
        assert!(is_array_type("ReadonlyArray<number>"));
        assert!(is_array_type(" Date[] "));
        assert!(!is_array_type("string"));
    }

    #[test]
    fn unknown_types_are_flagged() {
        assert!(PropertyInfo::new("nome", "string").has_known_type());
        assert!(PropertyInfo::new("status", "'a' | 'b'").has_known_type());
        assert!(!PropertyInfo::new("endereco", "Endereco").has_known_type());
    }

    #[test]
    fn active_flag_requires_boolean() {
        assert!(PropertyInfo::new("ativo", "boolean").is_active_flag());
        assert!(!PropertyInfo::new("ativo", "string").is_active_flag());
        assert!(!PropertyInfo::new("visible", "boolean").is_active_flag());
    }

    #[test]
    fn schema_rejects_duplicates() {
        let err = PropertySchema::new(vec![
            PropertyInfo::new("nome", "string"),
            PropertyInfo::new("nome", "string"),
        ])
        .unwrap_err();
        assert_eq!(err, DomainError::DuplicateProperty { name: "nome".into() });
    }

    #[test]
    fn schema_rejects_empty_name() {
        assert_eq!(
            PropertySchema::new(vec![PropertyInfo::new("", "string")]).unwrap_err(),
            DomainError::EmptyPropertyName
        );
    }

    #[test]
    fn dto_properties_skip_identifier_and_audit() {
        let schema = PropertySchema::new(vec![
            PropertyInfo::new("id", "string"),
            PropertyInfo::new("nome", "string"),
            PropertyInfo::new("createdAt", "Date"),
            PropertyInfo::new("updated_at", "string"),
        ])
        .unwrap();
        let names: Vec<_> = schema.dto_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["nome"]);
        assert!(schema.has_column("created_at"));
        assert!(schema.has_column("updated_at"));
    }
}
