use std::sync::Arc;

use poem::{
    IntoResponse, Route, get, handler,
    http::StatusCode,
    web::{Data, Json, Path},
};

use crate::store::{MenuStore, StoreError};
use crate::utils::common::{self, validate_id};

fn store_error_response(err: StoreError) -> poem::Error {
    match err {
        StoreError::NotFound(_) => common::error_message(StatusCode::NOT_FOUND, "Not Found"),
        StoreError::Validation(msg) => common::error_message(StatusCode::BAD_REQUEST, &msg),
        StoreError::Backend(e) => {
            tracing::error!(error = %e, "store backend failure");
            common::error_message(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

#[handler]
pub fn menu_list(store: Data<&Arc<dyn MenuStore>>) -> poem::Result<impl IntoResponse> {
    let items = store.list_all().map_err(store_error_response)?;
    Ok(Json(items))
}

#[handler]
pub fn get_menu_id(
    store: Data<&Arc<dyn MenuStore>>,
    Path(menu_id): Path<i64>,
) -> poem::Result<impl IntoResponse> {
    validate_id(menu_id)?;

    let item = store.get(menu_id).map_err(store_error_response)?;
    Ok(Json(item))
}

pub fn menu_routes() -> Route {
    // Registered with and without the trailing slash; clients use both.
    Route::new()
        .at("/menu", get(menu_list))
        .at("/menu/", get(menu_list))
        .at("/menu/:id", get(get_menu_id))
        .at("/menu/:id/", get(get_menu_id))
}
