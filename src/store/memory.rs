use std::sync::Mutex;

use crate::models::menu::{MenuItem, NewMenu};
use crate::store::{MenuStore, StoreError};

/// In-memory store keeping items in creation order. Backs the HTTP tests
/// and embedded use; the production binary runs on [`super::DieselMenuStore`].
#[derive(Default)]
pub struct MemoryMenuStore {
    items: Mutex<Vec<MenuItem>>,
}

impl MemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<MenuItem>>, StoreError> {
        self.items
            .lock()
            .map_err(|_| StoreError::Backend(anyhow::anyhow!("store mutex poisoned")))
    }
}

impl MenuStore for MemoryMenuStore {
    fn create(&self, entry: NewMenu) -> Result<MenuItem, StoreError> {
        let item = super::build_item(entry)?;
        let mut items = self.lock()?;
        items.push(item.clone());
        Ok(item)
    }

    fn get(&self, menu_id: i64) -> Result<MenuItem, StoreError> {
        let items = self.lock()?;
        items
            .iter()
            .find(|item| item.id == menu_id)
            .cloned()
            .ok_or(StoreError::NotFound(menu_id))
    }

    fn list_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        let items = self.lock()?;
        Ok(items.clone())
    }
}
