//! Top-level JSON bodies exchanged between the API and the client.

use crate::model::persona::Persona;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message shown when a downloaded informational payload is missing or malformed.
pub const MENSAJE_NO_VALIDO: &str = "Datos Descargados No válidos";

/// `{data: [...]}` returned by every listing route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Vec<Persona>,
}

/// `{mensaje}` returned by the informational routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mensaje {
    pub mensaje: String,
}

/// `{error}` returned with a 500 status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Informational payload as the client displays it.
///
/// The "acerca de" route fills every field; the other informational routes only
/// carry `mensaje`. Payloads that do not have the expected fields are replaced by
/// [`DatosDescargados::nulos`], so the display code never deals with absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatosDescargados {
    pub mensaje: String,
    #[serde(default)]
    pub autor: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub fecha: String,
}

impl DatosDescargados {
    /// The sentinel used in place of invalid downloads.
    pub fn nulos() -> Self {
        Self {
            mensaje: MENSAJE_NO_VALIDO.to_string(),
            autor: String::new(),
            email: String::new(),
            fecha: String::new(),
        }
    }

    /// Normalizes a payload that must contain `mensaje`.
    pub fn con_mensaje(valor: Option<&Value>) -> Self {
        match valor.and_then(|v| campo(v, "mensaje")) {
            Some(mensaje) => Self {
                mensaje,
                autor: String::new(),
                email: String::new(),
                fecha: String::new(),
            },
            None => Self::nulos(),
        }
    }

    /// Normalizes a payload that must contain `mensaje`, `autor`, `email` and `fecha`.
    pub fn con_autoria(valor: Option<&Value>) -> Self {
        let Some(valor) = valor else {
            return Self::nulos();
        };
        match (
            campo(valor, "mensaje"),
            campo(valor, "autor"),
            campo(valor, "email"),
            campo(valor, "fecha"),
        ) {
            (Some(mensaje), Some(autor), Some(email), Some(fecha)) => Self {
                mensaje,
                autor,
                email,
                fecha,
            },
            _ => Self::nulos(),
        }
    }
}

/// Parses the body of an informational route that answered with an OK status.
///
/// An empty or non-JSON body yields `None`, which [`DatosDescargados::con_mensaje`]
/// and [`DatosDescargados::con_autoria`] turn into the sentinel.
pub fn carga_informativa(cuerpo: &str) -> Option<Value> {
    serde_json::from_str(cuerpo).ok()
}

/// String form of `valor[nombre]`; `None` when `valor` is not an object or lacks the field.
fn campo(valor: &Value, nombre: &str) -> Option<String> {
    match valor.as_object()?.get(nombre)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        otro => Some(otro.to_string()),
    }
}
