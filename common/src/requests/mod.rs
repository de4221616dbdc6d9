use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request payload for the rename endpoint (`POST /setNombre`).
/// Identifies the person by id and carries the new display name.
pub struct SetNombreRequest {
    pub id_persona: String,
    pub nombre_persona: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Query string of the name search listing (`GET /listapornombre?nombre=...`).
pub struct BusquedaNombre {
    pub nombre: Option<String>,
}
