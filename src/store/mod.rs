mod memory;
mod pg;

pub use memory::MemoryMenuStore;
pub use pg::{DbPool, DieselMenuStore, init_pool};

use bigdecimal::BigDecimal;
use chrono::Utc;
use thiserror::Error;
use validator::Validate;

use crate::models::menu::{MenuItem, NewMenu};
use crate::utils::common::generate_id;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("menu item {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Backend(anyhow::Error),
}

/// Persistence contract for menu items. Constructed once at startup and
/// handed to the HTTP layer as a shared reference, never reached through
/// global state.
pub trait MenuStore: Send + Sync {
    /// Persists a new item, assigning its id and stamping `created` and
    /// `updated` with the same instant.
    fn create(&self, entry: NewMenu) -> Result<MenuItem, StoreError>;

    fn get(&self, menu_id: i64) -> Result<MenuItem, StoreError>;

    /// All items in creation order; stable within a single snapshot.
    fn list_all(&self) -> Result<Vec<MenuItem>, StoreError>;
}

/// Validates an entry and turns it into a row ready to persist.
fn build_item(entry: NewMenu) -> Result<MenuItem, StoreError> {
    if let Err(e) = entry.validate() {
        let mut messages = Vec::new();
        for (field, errors) in e.field_errors().iter() {
            for err in errors.iter() {
                if let Some(msg) = err.message.as_ref() {
                    messages.push(format!("{}: {}", field, msg));
                }
            }
        }
        return Err(StoreError::Validation(messages.join(", ")));
    }

    let price: BigDecimal = entry
        .price
        .trim()
        .parse()
        .map_err(|_| StoreError::Validation(format!("Invalid price: {}", entry.price)))?;
    if price < BigDecimal::from(0) {
        return Err(StoreError::Validation(
            "Price must not be negative".to_string(),
        ));
    }

    let now = Utc::now().naive_utc();
    Ok(MenuItem {
        id: generate_id(),
        nm: entry.name,
        price,
        dt_created: now,
        dt_updated: now,
    })
}
