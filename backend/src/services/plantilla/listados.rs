//! Listing routes. All of them answer `{data: [Persona]}`.

use crate::services::con_store;
use crate::services::error::ApiError;
use crate::store::PersonaStore;
use actix_web::{web, HttpResponse};
use common::model::envelope::Envelope;
use common::model::persona::Persona;
use common::render::filtros;
use common::requests::BusquedaNombre;

fn envelope(data: Vec<Persona>) -> HttpResponse {
    HttpResponse::Ok().json(Envelope { data })
}

async fn todas(store: &web::Data<PersonaStore>) -> Result<Vec<Persona>, ApiError> {
    con_store(store, |s| s.list()).await
}

async fn ordenadas(store: &web::Data<PersonaStore>) -> Result<Vec<Persona>, ApiError> {
    let mut personas = todas(store).await?;
    filtros::ordena_por_nombre(&mut personas);
    Ok(personas)
}

pub(crate) async fn lista_nombres(
    store: web::Data<PersonaStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(envelope(todas(&store).await?))
}

pub(crate) async fn lista_nombres_alfabeticos(
    store: web::Data<PersonaStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(envelope(ordenadas(&store).await?))
}

pub(crate) async fn lista_datos(store: web::Data<PersonaStore>) -> Result<HttpResponse, ApiError> {
    Ok(envelope(todas(&store).await?))
}

pub(crate) async fn lista_datos_ordenados(
    store: web::Data<PersonaStore>,
) -> Result<HttpResponse, ApiError> {
    Ok(envelope(ordenadas(&store).await?))
}

/// `?nombre=` keeps the records whose name contains the text; no text lists everything.
pub(crate) async fn lista_por_nombre(
    store: web::Data<PersonaStore>,
    busqueda: web::Query<BusquedaNombre>,
) -> Result<HttpResponse, ApiError> {
    let personas = todas(&store).await?;
    let data = match busqueda.into_inner().nombre {
        Some(texto) if !texto.trim().is_empty() => {
            filtros::filtra(personas, |p| filtros::contiene_nombre(p, texto.trim()))
        }
        _ => personas,
    };
    Ok(envelope(data))
}

/// Connectivity check: the whole collection, as stored.
pub(crate) async fn test_db(store: web::Data<PersonaStore>) -> Result<HttpResponse, ApiError> {
    Ok(envelope(todas(&store).await?))
}
