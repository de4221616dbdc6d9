//! Single-record routes: lookup by id or name and renaming.

use crate::services::con_store;
use crate::services::error::ApiError;
use crate::store::PersonaStore;
use actix_web::{web, HttpResponse};
use common::requests::SetNombreRequest;
use std::collections::HashMap;

pub(crate) async fn get_por_id(
    store: web::Data<PersonaStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let persona = con_store(&store, move |s| s.get(&id)).await?;
    Ok(HttpResponse::Ok().json(persona))
}

pub(crate) async fn get_por_nombre(
    store: web::Data<PersonaStore>,
    nombre: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let nombre = nombre.into_inner();
    let persona = con_store(&store, move |s| s.find_by_nombre(&nombre)).await?;
    Ok(HttpResponse::Ok().json(persona))
}

/// Renames a record. See [`parse_set_nombre`] for the accepted bodies.
pub(crate) async fn set_nombre(
    store: web::Data<PersonaStore>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let peticion = parse_set_nombre(&body).map_err(ApiError::Body)?;
    log::info!("setNombre {} -> {}", peticion.id_persona, peticion.nombre_persona);
    let persona = con_store(&store, move |s| {
        s.set_nombre(&peticion.id_persona, &peticion.nombre_persona)
    })
    .await?;
    Ok(HttpResponse::Ok().json(persona))
}

/// Accepts the payload either as a JSON object or as a form body.
///
/// HTML forms posting the payload send it as a single form key holding the
/// whole JSON document with an empty value.
pub(crate) fn parse_set_nombre(body: &[u8]) -> Result<SetNombreRequest, String> {
    if let Ok(peticion) = serde_json::from_slice::<SetNombreRequest>(body) {
        return Ok(peticion);
    }

    let texto = std::str::from_utf8(body).map_err(|e| e.to_string())?;
    let form = web::Query::<HashMap<String, String>>::from_query(texto)
        .map_err(|e| e.to_string())?
        .into_inner();

    let mut campos = form.into_iter();
    match (campos.next(), campos.next()) {
        (Some((clave, valor)), None) if valor.is_empty() => {
            serde_json::from_str(&clave).map_err(|e| e.to_string())
        }
        _ => Err("expected {id_persona, nombre_persona}".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_body() {
        let peticion =
            parse_set_nombre(br#"{"id_persona":"1","nombre_persona":"Ana"}"#).unwrap();
        assert_eq!(peticion.id_persona, "1");
        assert_eq!(peticion.nombre_persona, "Ana");
    }

    #[test]
    fn parses_form_body_with_json_key() {
        let peticion =
            parse_set_nombre(br#"{"id_persona":"1","nombre_persona":"Ana%20Mar%C3%ADa"}="#)
                .unwrap();
        assert_eq!(peticion.nombre_persona, "Ana María");
    }

    #[test]
    fn rejects_other_bodies() {
        assert!(parse_set_nombre(b"").is_err());
        assert!(parse_set_nombre(b"id_persona=1&nombre_persona=Ana").is_err());
        assert!(parse_set_nombre(br#"{"id_persona":"1"}"#).is_err());
    }
}
