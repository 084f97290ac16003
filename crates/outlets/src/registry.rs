use crate::controller::Controller;
use crate::error::OutletError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::Arc;
use tracing::trace;

/// Property suffix for singular outlet declarations.
pub const OUTLET_SUFFIX: &str = "Outlet";
/// Property suffix for plural outlet declarations.
pub const OUTLETS_SUFFIX: &str = "Outlets";

/// A thread-safe registry of outlet declarations.
///
/// Manages per-controller-type outlet key lists indexed by the [`TypeId`] of
/// the concrete controller. Each list is created empty on the first
/// registration targeting that exact type, preserves first-insertion order,
/// and never holds the same key twice. The host connection layer reads the
/// lists back through [`outlets`] / [`outlets_of`] after controller setup.
///
/// [`outlets`]: OutletRegistry::outlets
/// [`outlets_of`]: OutletRegistry::outlets_of
#[derive(Debug, Clone, Default)]
pub struct OutletRegistry {
    entries: Arc<RwLock<FxHashMap<TypeId, Vec<String>>>>,
}

impl OutletRegistry {
    /// Creates a new, empty `OutletRegistry`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a singular outlet declaration for the controller's concrete type.
    ///
    /// The registered key is `property` with the trailing `"Outlet"` removed.
    ///
    /// # Errors
    /// Returns [`OutletError::NamingConvention`] if `property` does not end
    /// with `"Outlet"`. The registry is left untouched on failure.
    ///
    /// # Examples
    /// ```rust
    /// use wirehub_outlets::{Controller, OutletRegistry};
    ///
    /// #[derive(Debug)]
    /// struct SearchController;
    ///
    /// impl Controller for SearchController {
    ///     fn as_any(&self) -> &dyn std::any::Any {
    ///         self
    ///     }
    /// }
    ///
    /// # fn main() -> Result<(), wirehub_outlets::OutletError> {
    /// let registry = OutletRegistry::new();
    /// registry.register_outlet(&SearchController, "resultsOutlet")?;
    /// assert_eq!(registry.outlets(&SearchController), ["results"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn register_outlet(
        &self,
        controller: &dyn Controller,
        property: &str,
    ) -> Result<(), OutletError> {
        let key = strip_suffix(property, OUTLET_SUFFIX)?;
        self.add_outlet(controller, key);
        Ok(())
    }

    /// Registers a plural outlet declaration for the controller's concrete type.
    ///
    /// The registered key is `property` with the trailing `"Outlets"` removed.
    ///
    /// # Errors
    /// Returns [`OutletError::NamingConvention`] if `property` does not end
    /// with `"Outlets"`. The registry is left untouched on failure.
    ///
    /// # Examples
    /// ```rust
    /// use wirehub_outlets::{Controller, OutletRegistry};
    ///
    /// #[derive(Debug)]
    /// struct ListController;
    ///
    /// impl Controller for ListController {
    ///     fn as_any(&self) -> &dyn std::any::Any {
    ///         self
    ///     }
    /// }
    ///
    /// # fn main() -> Result<(), wirehub_outlets::OutletError> {
    /// let registry = OutletRegistry::new();
    /// registry.register_outlets(&ListController, "itemOutlets")?;
    /// assert_eq!(registry.outlets(&ListController), ["item"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn register_outlets(
        &self,
        controller: &dyn Controller,
        property: &str,
    ) -> Result<(), OutletError> {
        let key = strip_suffix(property, OUTLETS_SUFFIX)?;
        self.add_outlet(controller, key);
        Ok(())
    }

    /// Appends `key` to the concrete type's outlet list, skipping duplicates.
    ///
    /// The list is created on the first registration for that exact type.
    /// Lists of distinct controller types are independent; re-adding a key
    /// that is already present leaves the list unchanged. Membership is a
    /// linear scan, the lists stay small.
    pub fn add_outlet(&self, controller: &dyn Controller, key: impl Into<String>) {
        let key = key.into();
        let id = controller.as_any().type_id();

        let mut entries = self.entries.write();
        let keys = entries.entry(id).or_insert_with(|| {
            trace!(controller = controller.name(), "Initializing outlet list");
            Vec::new()
        });

        if keys.iter().any(|existing| *existing == key) {
            trace!(controller = controller.name(), key = %key, "Outlet key already registered");
            return;
        }

        trace!(controller = controller.name(), key = %key, "Outlet key registered");
        keys.push(key);
    }

    /// Returns the registered outlet keys for the controller's concrete type,
    /// in registration order. Empty if nothing was registered for that type.
    #[must_use]
    pub fn outlets(&self, controller: &dyn Controller) -> Vec<String> {
        self.keys_for(controller.as_any().type_id())
    }

    /// Typed variant of [`Self::outlets`] for callers without an instance at hand.
    #[must_use]
    pub fn outlets_of<C: Controller>(&self) -> Vec<String> {
        self.keys_for(TypeId::of::<C>())
    }

    /// Returns `true` if `key` is registered for the controller's concrete type.
    #[must_use]
    pub fn contains(&self, controller: &dyn Controller, key: &str) -> bool {
        let id = controller.as_any().type_id();
        self.entries.read().get(&id).is_some_and(|keys| keys.iter().any(|k| k == key))
    }

    /// Drops every per-type outlet list.
    ///
    /// Returns the number of controller types that had one.
    #[must_use]
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    fn keys_for(&self, id: TypeId) -> Vec<String> {
        self.entries.read().get(&id).cloned().unwrap_or_default()
    }
}

/// Validates the suffix convention and returns the stripped key.
///
/// A property name equal to exactly the suffix strips to the empty key, which
/// is accepted and registered as `""`.
fn strip_suffix<'a>(property: &'a str, suffix: &'static str) -> Result<&'a str, OutletError> {
    property.strip_suffix(suffix).ok_or_else(|| OutletError::NamingConvention {
        property: property.to_owned(),
        suffix: suffix.into(),
        context: None,
    })
}
