//! Service layer applying user actions to stored worksheets.
//!
//! `JournalService` wraps a [`WorksheetStore`]. The action methods live in
//! `crate::actions`, one module per workflow stage, as `impl JournalService`.

use jyn_core::entities::Worksheet;
use jyn_core::enums::Language;
use jyn_core::errors::CoreError;
use tracing::debug;

use crate::error::StoreError;
use crate::store::WorksheetStore;

/// Applies actions to worksheets.
///
/// Every mutating action follows this protocol:
/// 1. Load the worksheet (unknown id is `MissingRecord`)
/// 2. Apply the change through the core model
/// 3. Save the whole record with `upsert`, which stamps `updatedAt`
/// 4. Return the navigation state recomputed from the saved record
///
/// A failed change saves nothing.
pub struct JournalService<S> {
    store: S,
    language: Language,
}

impl<S: WorksheetStore> JournalService<S> {
    /// Create a service. `language` selects the Yes/No labels written by
    /// yes/no answers.
    #[must_use]
    pub const fn new(store: S, language: Language) -> Self {
        Self { store, language }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub(crate) const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Load a worksheet by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(MissingRecord)` for an unknown id, or the
    /// store's read error.
    pub fn load(&self, id: &str) -> Result<Worksheet, StoreError> {
        self.store
            .get(id)?
            .ok_or_else(|| StoreError::missing_worksheet(id))
    }

    /// Load, apply `change`, and save.
    pub(crate) fn mutate<T>(
        &mut self,
        id: &str,
        action: &str,
        change: impl FnOnce(&mut Worksheet) -> Result<T, CoreError>,
    ) -> Result<(Worksheet, T), StoreError> {
        let mut worksheet = self.load(id)?;
        let output = change(&mut worksheet)?;
        let stored = self.store.upsert(worksheet)?;
        debug!("Saved worksheet {id} after {action}");
        Ok((stored, output))
    }
}
