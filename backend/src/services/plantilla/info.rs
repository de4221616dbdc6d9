//! Informational routes: fixed messages that let a client check the service is up.

use actix_web::HttpResponse;
use common::model::envelope::{DatosDescargados, Mensaje};

pub const AUTOR: &str = "Carlos Soto Torres";
pub const EMAIL: &str = "cst00015@red.ujaen.es";
pub const FECHA: &str = "abril, 2023";

fn mensaje(texto: &str) -> HttpResponse {
    HttpResponse::Ok().json(Mensaje {
        mensaje: format!("Microservicio MS Plantilla: {}", texto),
    })
}

pub(crate) async fn home() -> HttpResponse {
    mensaje("home")
}

pub(crate) async fn acerca_de() -> HttpResponse {
    HttpResponse::Ok().json(DatosDescargados {
        mensaje: "Microservicio MS Plantilla: acerca de".to_string(),
        autor: AUTOR.to_string(),
        email: EMAIL.to_string(),
        fecha: FECHA.to_string(),
    })
}

pub(crate) async fn lista_datos_esp() -> HttpResponse {
    mensaje("listadatos esp")
}

pub(crate) async fn lista_persona_unica() -> HttpResponse {
    mensaje("listapersonaunica")
}

pub(crate) async fn modificar() -> HttpResponse {
    mensaje("modificar")
}

pub(crate) async fn anadir() -> HttpResponse {
    mensaje("anadir")
}

pub(crate) async fn borrar() -> HttpResponse {
    mensaje("borrar")
}
