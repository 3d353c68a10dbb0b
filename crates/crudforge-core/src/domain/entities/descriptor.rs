use std::fmt;

use crate::domain::{
    error::DomainError,
    naming::{to_camel_case, to_pascal_case, to_snake_case},
};

/// The three casings of one entity name, computed once.
///
/// Every generated identifier, file name, table name and route path is
/// derived from this value, so all artifacts of a module agree on naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainDescriptor {
    pascal: String,
    camel: String,
    snake: String,
}

impl DomainDescriptor {
    /// Validate and normalise a user-supplied entity name.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        validate_entity_name(input)?;
        Ok(Self {
            pascal: to_pascal_case(input),
            camel: to_camel_case(input),
            snake: to_snake_case(input),
        })
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn camel(&self) -> &str {
        &self.camel
    }

    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// Physical table name: `<prefix><snake>`.
    pub fn table_name(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.snake)
    }

    /// Collection route segment. Naive `s` pluralisation.
    pub fn route_segment(&self) -> String {
        format!("{}s", self.camel)
    }

    /// Exported route-map symbol, e.g. `produtoRoutes`.
    pub fn routes_symbol(&self) -> String {
        format!("{}Routes", self.camel)
    }

    /// Interface names searched for during discovery, in priority order.
    pub fn interface_candidates(&self) -> [String; 2] {
        [self.pascal.clone(), format!("I{}", self.pascal)]
    }
}

impl fmt::Display for DomainDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal)
    }
}

fn validate_entity_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidEntityName {
        name: name.into(),
        reason: reason.into(),
    };

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if !trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid("name must start with a letter"));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')))
    {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }
    Ok(())
}
