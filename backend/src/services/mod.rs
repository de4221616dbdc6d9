pub mod error;
pub mod plantilla;

use crate::store::{PersonaStore, StoreError};
use actix_web::middleware::DefaultHeaders;
use actix_web::web;
use error::ApiError;

/// Headers that let any origin call the API.
pub fn cors() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Headers",
            "Origin, X-Requested-With, Content-Type, Accept",
        ))
}

/// Runs a store operation on the blocking thread pool.
pub(crate) async fn con_store<T, F>(store: &web::Data<PersonaStore>, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&PersonaStore) -> Result<T, StoreError> + Send + 'static,
{
    let store = store.get_ref().clone();
    Ok(web::block(move || op(&store)).await??)
}
