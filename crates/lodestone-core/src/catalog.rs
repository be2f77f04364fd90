//! Field registration and one-time name resolution.

use indexmap::IndexMap;

use crate::error::ConfigError;
use crate::id::FieldId;

/// Registry mapping field names to IDs and component counts.
///
/// Names are resolved to [`FieldId`]s once, at startup; kernels and
/// steps carry the resolved IDs and never touch strings on the hot
/// path. Registration order is iteration order.
#[derive(Clone, Debug, Default)]
pub struct FieldCatalog {
    entries: IndexMap<String, usize>,
}

impl FieldCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field by name with a fixed component count.
    ///
    /// Returns the assigned ID, or [`ConfigError::DuplicateField`] if the
    /// name is already taken.
    pub fn register(&mut self, name: &str, ncomp: usize) -> Result<FieldId, ConfigError> {
        if self.entries.contains_key(name) {
            return Err(ConfigError::DuplicateField { name: name.into() });
        }
        let id = FieldId(self.entries.len() as u32);
        self.entries.insert(name.into(), ncomp);
        Ok(id)
    }

    /// Resolve a name to its ID.
    pub fn resolve(&self, name: &str) -> Result<FieldId, ConfigError> {
        self.entries
            .get_index_of(name)
            .map(|i| FieldId(i as u32))
            .ok_or_else(|| ConfigError::UnknownField { name: name.into() })
    }

    /// The component count registered for a field.
    pub fn ncomp(&self, id: FieldId) -> Option<usize> {
        self.entries.get_index(id.0 as usize).map(|(_, &n)| n)
    }

    /// The name registered for a field.
    pub fn name(&self, id: FieldId) -> Option<&str> {
        self.entries
            .get_index(id.0 as usize)
            .map(|(name, _)| name.as_str())
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, name, ncomp)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str, usize)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (name, &ncomp))| (FieldId(i as u32), name.as_str(), ncomp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ids_are_sequential_in_registration_order() {
        let mut cat = FieldCatalog::new();
        let b_u = cat.register("cons.B", 3).unwrap();
        let b_p = cat.register("prims.B", 3).unwrap();
        assert_eq!(b_u, FieldId(0));
        assert_eq!(b_p, FieldId(1));
        assert_eq!(cat.resolve("prims.B").unwrap(), b_p);
        assert_eq!(cat.ncomp(b_u), Some(3));
        assert_eq!(cat.name(b_p), Some("prims.B"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut cat = FieldCatalog::new();
        cat.register("divB", 1).unwrap();
        let err = cat.register("divB", 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateField {
                name: "divB".into()
            }
        );
    }

    #[test]
    fn unknown_lookup_is_rejected() {
        let cat = FieldCatalog::new();
        let err = cat.resolve("fflag").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownField {
                name: "fflag".into()
            }
        );
    }

    proptest! {
        /// resolve() inverts register() for any set of distinct names.
        #[test]
        fn resolve_inverts_register(names in proptest::collection::hash_set("[a-z.]{1,12}", 1..8)) {
            let mut cat = FieldCatalog::new();
            let mut ids = Vec::new();
            for name in &names {
                ids.push((name.clone(), cat.register(name, 1).unwrap()));
            }
            for (name, id) in ids {
                prop_assert_eq!(cat.resolve(&name).unwrap(), id);
            }
        }
    }
}
