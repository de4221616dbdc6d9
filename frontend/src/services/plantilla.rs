//! HTTP client for the person microservice.
//!
//! Every call issues exactly one request and reports its outcome as a
//! [`Descarga`]. Failures are logged to the browser console and returned as
//! `Descarga::Fallo`; nothing is retried.

use common::model::descarga::Descarga;
use common::model::envelope::{carga_informativa, Envelope};
use common::model::persona::Persona;
use common::requests::SetNombreRequest;
use gloo_console::{error, warn};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Address of the API gateway, empty for same-origin deployments.
pub const API_GATEWAY: &str = match option_env!("PLANTILLA_API_GATEWAY") {
    Some(url) => url,
    None => "",
};

/// Route prefix of the person API on the gateway.
pub const RUTA_BASE: &str = "/plantilla";

#[derive(Debug, Clone, PartialEq)]
pub struct PlantillaClient {
    base_url: String,
}

impl Default for PlantillaClient {
    fn default() -> Self {
        Self::new(format!("{}{}", API_GATEWAY, RUTA_BASE))
    }
}

impl PlantillaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, ruta: &str) -> String {
        format!("{}{}", self.base_url, ruta)
    }

    /// Downloads an informational route and returns its JSON body untouched.
    ///
    /// Transport errors and non-OK statuses are failures. An OK answer whose body
    /// is empty or not JSON is `Descarga::Vacio`, so the caller shows the sentinel.
    pub async fn descargar_ruta(&self, ruta: &str) -> Descarga<Value> {
        let url = self.url(ruta);
        let response = match Request::get(&url).send().await {
            Ok(response) => response,
            Err(err) => return fallo(&url, err.to_string()),
        };
        if !response.ok() {
            return estado_no_valido(&url, response).await;
        }
        match response.text().await {
            Ok(cuerpo) => match carga_informativa(&cuerpo) {
                Some(valor) => Descarga::Datos(valor),
                None => {
                    warn!(format!("Respuesta de {} sin datos válidos", url));
                    Descarga::Vacio
                }
            },
            Err(err) => fallo(&url, err.to_string()),
        }
    }

    /// Downloads the full list of records.
    pub async fn recupera(&self) -> Descarga<Vec<Persona>> {
        match self
            .get_json::<Envelope>("/listanombres")
            .await
            .map(|envelope| envelope.data)
        {
            Descarga::Datos(data) => Descarga::desde_lista(data),
            otra => otra,
        }
    }

    pub async fn recupera_una_persona(&self, id: &str) -> Descarga<Persona> {
        self.get_json(&format!("/getPorId/{}", codifica(id))).await
    }

    pub async fn recupera_por_nombre(&self, nombre: &str) -> Descarga<Persona> {
        self.get_json(&format!("/getPorNombre/{}", codifica(nombre)))
            .await
    }

    pub async fn set_nombre(&self, id: &str, nombre: &str) -> Descarga<Persona> {
        let url = self.url("/setNombre");
        let peticion = SetNombreRequest {
            id_persona: id.to_string(),
            nombre_persona: nombre.to_string(),
        };
        let request = match Request::post(&url).json(&peticion) {
            Ok(request) => request,
            Err(err) => return fallo(&url, err.to_string()),
        };
        match request.send().await {
            Ok(response) => decodifica(&url, response).await,
            Err(err) => fallo(&url, err.to_string()),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, ruta: &str) -> Descarga<T> {
        let url = self.url(ruta);
        match Request::get(&url).send().await {
            Ok(response) => decodifica(&url, response).await,
            Err(err) => fallo(&url, err.to_string()),
        }
    }
}

async fn decodifica<T: DeserializeOwned>(url: &str, response: Response) -> Descarga<T> {
    if !response.ok() {
        return estado_no_valido(url, response).await;
    }
    match response.json::<T>().await {
        Ok(valor) => Descarga::Datos(valor),
        Err(err) => fallo(url, err.to_string()),
    }
}

async fn estado_no_valido<T>(url: &str, response: Response) -> Descarga<T> {
    let detalle = response.text().await.unwrap_or_default();
    fallo(url, format!("HTTP {} {}", response.status(), detalle))
}

fn fallo<T>(url: &str, razon: String) -> Descarga<T> {
    error!(format!("Error accediendo a {}: {}", url, razon));
    Descarga::Fallo(razon)
}

/// Percent-encodes one path segment.
fn codifica(segmento: &str) -> String {
    String::from(js_sys::encode_uri_component(segmento))
}
