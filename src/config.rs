//! Field → chain configuration.
//!
//! Built once, then handed to [`watch`](crate::watch). Nothing in here runs
//! middleware; the builder only records what should run where.

use std::collections::HashMap;

use crate::chain::Chain;
use crate::error::ConfigError;

/// Which chain guards which field.
///
/// Registration order is kept: [`watch`](crate::watch) processes fields in
/// the order they were added. Each [`Configuration::field`] call returns
/// `self` so registrations chain naturally.
///
/// ```rust
/// use fieldgate::{Chain, Configuration, validators};
///
/// let config = Configuration::new()
///     .field("name",  Chain::new().then(validators::is_string()).then(validators::trim()))
///     .field("motto", Chain::new().optional().then(validators::is_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    fields: Vec<(String, Chain)>,
    index: HashMap<String, usize>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `chain` for `field`.
    ///
    /// Problems such as an empty chain or a repeated field are reported by
    /// [`watch`](crate::watch), not here.
    pub fn field(mut self, field: impl Into<String>, chain: Chain) -> Self {
        let field = field.into();
        self.index.entry(field.clone()).or_insert(self.fields.len());
        self.fields.push((field, chain));
        self
    }

    /// The chain guarding `field`, if any.
    pub fn chain(&self, field: &str) -> Option<&Chain> {
        let &position = self.index.get(field)?;
        Some(&self.fields[position].1)
    }

    pub fn contains(&self, field: &str) -> bool { self.index.contains_key(field) }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// Configured fields with their chains, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Chain)> {
        self.fields.iter().map(|(field, chain)| (field.as_str(), chain))
    }

    /// Checks that every chain has at least one step and that no field is
    /// registered twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (position, (field, chain)) in self.fields.iter().enumerate() {
            if self.index.get(field) != Some(&position) {
                return Err(ConfigError::DuplicateField(field.clone()));
            }
            if chain.is_empty() {
                return Err(ConfigError::EmptyChain(field.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators;

    #[test]
    fn keeps_registration_order() {
        let config = Configuration::new()
            .field("zeta", Chain::new().then(validators::trim()))
            .field("alpha", Chain::new().then(validators::trim()));
        let order: Vec<_> = config.iter().map(|(field, _)| field).collect();
        assert_eq!(order, ["zeta", "alpha"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_chain_is_rejected() {
        let config = Configuration::new().field("name", Chain::new().optional());
        assert_eq!(config.validate(), Err(ConfigError::EmptyChain("name".into())));
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let config = Configuration::new()
            .field("name", Chain::new().then(validators::trim()))
            .field("name", Chain::new().then(validators::is_string()));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateField("name".into())));
    }

    #[test]
    fn lookup_by_field() {
        let config = Configuration::new().field("name", Chain::new().optional().then(validators::trim()));
        assert!(config.chain("name").is_some_and(Chain::is_optional));
        assert!(config.chain("other").is_none());
        assert!(!config.contains("other"));
    }
}
