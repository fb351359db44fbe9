//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain and persistence.
//! Implementations live in qbank-store.

use crate::Collection;

/// Trait for loading and persisting whole collections
///
/// Collections are read in full and written back in full; there is no
/// partial update.
pub trait CollectionStore {
    /// Error type for store operations
    type Error;

    /// Names of every collection, sorted
    fn list_collections(&self) -> Result<Vec<String>, Self::Error>;

    /// Load a collection by name
    fn load_collection(&self, name: &str) -> Result<Collection, Self::Error>;

    /// Persist a collection under its own name
    fn save_collection(&self, collection: &Collection) -> Result<(), Self::Error>;

    /// Load, transform and persist a collection as one unit
    ///
    /// The default implementation offers no isolation from concurrent
    /// writers; stores that can lock should override it.
    fn update_collection<R, F>(&self, name: &str, apply: F) -> Result<R, Self::Error>
    where
        F: FnOnce(&mut Collection) -> R,
    {
        let mut collection = self.load_collection(name)?;
        let result = apply(&mut collection);
        self.save_collection(&collection)?;
        Ok(result)
    }
}
