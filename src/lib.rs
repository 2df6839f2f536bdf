//! Menu backend - a small REST service exposing a priced menu catalog.
//!
//! Read surface only: list all items and fetch one by id. Items are
//! created through the [`store::MenuStore`] contract.

pub mod models;
pub mod routes;
pub mod schema;
pub mod store;
pub mod utils;

use std::sync::Arc;

use poem::{Endpoint, EndpointExt};

use crate::store::MenuStore;

/// Builds the HTTP application around an explicitly constructed store.
pub fn create_app(store: Arc<dyn MenuStore>) -> impl Endpoint {
    routes::menu::menu_routes().data(store)
}
