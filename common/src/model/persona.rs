//! Person records as they travel over the wire.
//!
//! The JSON shape mirrors a document-database instance: a reference object
//! carrying the identifier, an optional timestamp, and the `data` payload with
//! capitalised Spanish field names (`Nombre`, `Date`, `Direccion`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single person/record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(rename = "ref")]
    pub referencia: Referencia,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    pub data: DatosPersona,
}

/// `{"@ref": {"id": "..."}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referencia {
    #[serde(rename = "@ref")]
    pub inner: RefId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefId {
    pub id: String,
}

/// Field payload of a record. Everything except the name is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatosPersona {
    #[serde(rename = "Nombre", default)]
    pub nombre: String,
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<Fecha>,
    #[serde(rename = "Direccion", default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<Direccion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anio_participacion: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_participaciones: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_categorias: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_participantes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pistas: Option<u32>,
}

/// Calendar date split in day, month (1-based) and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fecha {
    #[serde(rename = "Date")]
    pub dia: u32,
    #[serde(rename = "Mes")]
    pub mes: u32,
    #[serde(rename = "Año")]
    pub anio: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Direccion {
    #[serde(rename = "Direccion", default)]
    pub calle: String,
    #[serde(rename = "Localidad", default)]
    pub localidad: String,
    #[serde(rename = "Provincia", default)]
    pub provincia: String,
    #[serde(rename = "Pais", default)]
    pub pais: String,
}

impl Persona {
    pub fn nueva(id: impl Into<String>, data: DatosPersona) -> Self {
        Self {
            referencia: Referencia {
                inner: RefId { id: id.into() },
            },
            ts: None,
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.referencia.inner.id
    }

    pub fn nombre(&self) -> &str {
        &self.data.nombre
    }
}

impl Fecha {
    /// Builds the calendar date, or `None` when day/month/year do not form one.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.anio, self.mes, self.dia)
    }
}

/// `D/M/Y`, without zero padding.
impl fmt::Display for Fecha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.dia, self.mes, self.anio)
    }
}

/// `Direccion,Localidad,Provincia,Pais`
impl fmt::Display for Direccion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.calle, self.localidad, self.provincia, self.pais
        )
    }
}
