//! # Plantilla Service Module
//!
//! Routes of the person microservice, all mounted under a configurable base path
//! (`/plantilla` by default).
//!
//! ## Sub-modules:
//! - `info`: fixed informational messages (`/`, `/acercade`, and the placeholder
//!   routes `/listadatosesp`, `/listapersonaunica`, `/modificar`, `/anadir`, `/borrar`).
//! - `listados`: listings wrapped in `{data: [...]}`, plain or sorted by name,
//!   plus the name search and the database connectivity check.
//! - `personas`: lookup of one record by id or by name, and renaming.

mod info;
mod listados;
mod personas;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// Configures and returns the Actix `Scope` for the person API.
///
/// # Registered Routes:
///
/// *   **`GET /`**, **`GET /acercade`**: service identification messages.
/// *   **`GET /listanombres`**, **`GET /listadatos`**: every record in store order.
/// *   **`GET /listanombresalfabeticos`**, **`GET /listadatosordenados`**: every record
///     sorted by name, ignoring case.
/// *   **`GET /listapornombre?nombre=`**: records whose name contains the text.
/// *   **`GET /getPorId/{id}`**, **`GET /getPorNombre/{nombre}`**: one record.
/// *   **`POST /setNombre`**: renames a record and returns it.
/// *   **`GET /test_db`**: whole collection, to check the database is reachable.
///
/// Store failures answer `500 {error}`.
pub fn configure_routes(base: &str) -> Scope {
    scope(base)
        .route("/", get().to(info::home))
        .route("/acercade", get().to(info::acerca_de))
        .route("/listanombres", get().to(listados::lista_nombres))
        .route(
            "/listanombresalfabeticos",
            get().to(listados::lista_nombres_alfabeticos),
        )
        .route("/listadatos", get().to(listados::lista_datos))
        .route(
            "/listadatosordenados",
            get().to(listados::lista_datos_ordenados),
        )
        .route("/listapornombre", get().to(listados::lista_por_nombre))
        .route("/getPorId/{id}", get().to(personas::get_por_id))
        .route("/getPorNombre/{nombre}", get().to(personas::get_por_nombre))
        .route("/setNombre", post().to(personas::set_nombre))
        .route("/listadatosesp", get().to(info::lista_datos_esp))
        .route("/listapersonaunica", get().to(info::lista_persona_unica))
        .route("/modificar", get().to(info::modificar))
        .route("/anadir", get().to(info::anadir))
        .route("/borrar", get().to(info::borrar))
        .route("/test_db", get().to(listados::test_db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cors;
    use crate::store::{personas_iniciales, PersonaStore};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use common::model::envelope::{DatosDescargados, Envelope, ErrorBody, Mensaje};
    use common::model::persona::Persona;
    use tempfile::TempDir;

    const BASE: &str = "/plantilla";

    fn store() -> (TempDir, PersonaStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PersonaStore::new(dir.path().join("plantilla.sqlite"));
        store.init(true).unwrap();
        (dir, store)
    }

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store))
                    .wrap(cors())
                    .service(configure_routes(BASE)),
            )
            .await
        };
    }

    fn nombres(envelope: &Envelope) -> Vec<String> {
        envelope.data.iter().map(|p| p.nombre().to_string()).collect()
    }

    #[actix_web::test]
    async fn home_returns_json_message_with_cors() {
        let (_dir, store) = store();
        let app = app!(store);
        let req = test::TestRequest::get().uri("/plantilla/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert!(headers
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("json"));
        assert_eq!(
            headers.get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        let body: Mensaje = test::read_body_json(resp).await;
        assert_eq!(body.mensaje, "Microservicio MS Plantilla: home");
    }

    #[actix_web::test]
    async fn acerca_de_has_author_fields() {
        let (_dir, store) = store();
        let app = app!(store);
        let req = test::TestRequest::get().uri("/plantilla/acercade").to_request();
        let body: DatosDescargados = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.mensaje, "Microservicio MS Plantilla: acerca de");
        assert_eq!(body.autor, info::AUTOR);
        assert_eq!(body.email, info::EMAIL);
        assert_eq!(body.fecha, info::FECHA);
    }

    #[actix_web::test]
    async fn placeholder_routes_answer_messages() {
        let (_dir, store) = store();
        let app = app!(store);
        for (ruta, texto) in [
            ("/plantilla/modificar", "modificar"),
            ("/plantilla/anadir", "anadir"),
            ("/plantilla/borrar", "borrar"),
            ("/plantilla/listadatosesp", "listadatos esp"),
            ("/plantilla/listapersonaunica", "listapersonaunica"),
        ] {
            let req = test::TestRequest::get().uri(ruta).to_request();
            let body: Mensaje = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body.mensaje, format!("Microservicio MS Plantilla: {}", texto));
        }
    }

    #[actix_web::test]
    async fn listings_return_the_ten_records() {
        let (_dir, store) = store();
        let app = app!(store);
        for ruta in [
            "/plantilla/listanombres",
            "/plantilla/listadatos",
            "/plantilla/test_db",
        ] {
            let req = test::TestRequest::get().uri(ruta).to_request();
            let body: Envelope = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body.data.len(), 10, "{ruta}");
        }
    }

    #[actix_web::test]
    async fn alphabetical_listings_sort_the_same_names() {
        let (_dir, store) = store();
        let app = app!(store);

        let req = test::TestRequest::get().uri("/plantilla/listanombres").to_request();
        let todas: Envelope = test::call_and_read_body_json(&app, req).await;
        let mut esperados = nombres(&todas);
        esperados.sort_by_key(|n| n.to_uppercase());

        for ruta in [
            "/plantilla/listanombresalfabeticos",
            "/plantilla/listadatosordenados",
        ] {
            let req = test::TestRequest::get().uri(ruta).to_request();
            let ordenadas: Envelope = test::call_and_read_body_json(&app, req).await;
            assert_eq!(nombres(&ordenadas), esperados, "{ruta}");
        }
    }

    #[actix_web::test]
    async fn name_search_filters_listing() {
        let (_dir, store) = store();
        let app = app!(store);
        let req = test::TestRequest::get()
            .uri("/plantilla/listapornombre?nombre=soto")
            .to_request();
        let body: Envelope = test::call_and_read_body_json(&app, req).await;
        assert_eq!(nombres(&body), ["Carlos Soto Torres"]);

        let req = test::TestRequest::get()
            .uri("/plantilla/listapornombre")
            .to_request();
        let body: Envelope = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.len(), 10);
    }

    #[actix_web::test]
    async fn test_db_lists_seeded_person_first() {
        let (_dir, store) = store();
        let app = app!(store);
        let req = test::TestRequest::get().uri("/plantilla/test_db").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["data"]["Nombre"], "Carlos Soto Torres");
    }

    #[actix_web::test]
    async fn get_por_id_returns_seeded_record() {
        let (_dir, store) = store();
        let app = app!(store);
        let id = personas_iniciales()[0].id().to_string();
        let req = test::TestRequest::get()
            .uri(&format!("/plantilla/getPorId/{}", id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["Nombre"], "Carlos Soto Torres");
        assert_eq!(body["ref"]["@ref"]["id"], id.as_str());
    }

    #[actix_web::test]
    async fn unknown_id_is_a_server_error() {
        let (_dir, store) = store();
        let app = app!(store);
        let req = test::TestRequest::get()
            .uri("/plantilla/getPorId/123")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(body.error.contains("123"));
    }

    #[actix_web::test]
    async fn get_por_nombre_decodes_path() {
        let (_dir, store) = store();
        let app = app!(store);
        let req = test::TestRequest::get()
            .uri("/plantilla/getPorNombre/mar%C3%ADa%20l%C3%B3pez%20garc%C3%ADa")
            .to_request();
        let persona: Persona = test::call_and_read_body_json(&app, req).await;
        assert_eq!(persona.nombre(), "María López García");
    }

    #[actix_web::test]
    async fn set_nombre_updates_and_persists() {
        let (_dir, store) = store();
        let app = app!(store);
        let id = personas_iniciales()[2].id().to_string();

        let req = test::TestRequest::post()
            .uri("/plantilla/setNombre")
            .set_json(serde_json::json!({"id_persona": id, "nombre_persona": "Javier Ruiz"}))
            .to_request();
        let persona: Persona = test::call_and_read_body_json(&app, req).await;
        assert_eq!(persona.nombre(), "Javier Ruiz");

        let req = test::TestRequest::get()
            .uri(&format!("/plantilla/getPorId/{}", id))
            .to_request();
        let persona: Persona = test::call_and_read_body_json(&app, req).await;
        assert_eq!(persona.nombre(), "Javier Ruiz");
    }

    #[actix_web::test]
    async fn set_nombre_rejects_bad_body() {
        let (_dir, store) = store();
        let app = app!(store);
        let req = test::TestRequest::post()
            .uri("/plantilla/setNombre")
            .set_payload("nombre=sin-id&otro=1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
