//! # Person store
//!
//! SQLite-backed collection of [`Persona`] documents. Each row keeps the
//! identifier, the last-modification timestamp and the `data` payload as JSON,
//! so the API returns exactly the document shape the client expects. Rows are
//! listed in insertion order.
//!
//! A connection is opened per operation; handlers call into the store from
//! `web::block`, never from the async runtime directly.

mod seed;

use chrono::Utc;
use common::model::persona::{DatosPersona, Persona};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use seed::personas_iniciales;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored document is not valid: {0}")]
    Documento(#[from] serde_json::Error),
    #[error("instance not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone)]
pub struct PersonaStore {
    path: PathBuf,
}

impl PersonaStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the table if needed and, when `seed` is set, loads the sample
    /// collection into an empty table.
    pub fn init(&self, seed: bool) -> Result<usize, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS personas (
                id TEXT PRIMARY KEY,
                ts INTEGER NOT NULL,
                data TEXT NOT NULL
            )",
            [],
        )?;

        let existentes: i64 =
            conn.query_row("SELECT COUNT(*) FROM personas", [], |row| row.get(0))?;
        if !seed || existentes > 0 {
            return Ok(existentes as usize);
        }

        let iniciales = personas_iniciales();
        let ts = Utc::now().timestamp_micros();
        for persona in &iniciales {
            conn.execute(
                "INSERT INTO personas (id, ts, data) VALUES (?1, ?2, ?3)",
                params![persona.id(), ts, serde_json::to_string(&persona.data)?],
            )?;
        }
        Ok(iniciales.len())
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> Result<Vec<Persona>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, ts, data FROM personas ORDER BY rowid")?;
        let filas = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        filas
            .into_iter()
            .map(|(id, ts, data)| documento(id, ts, &data))
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Persona, StoreError> {
        let conn = self.connect()?;
        let fila = conn
            .query_row(
                "SELECT ts, data FROM personas WHERE id = ?1",
                params![id],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match fila {
            Some((ts, data)) => documento(id.to_string(), ts, &data),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// First record, in list order, whose name equals `nombre` ignoring case.
    pub fn find_by_nombre(&self, nombre: &str) -> Result<Persona, StoreError> {
        let buscado = nombre.trim().to_uppercase();
        self.list()?
            .into_iter()
            .find(|p| p.data.nombre.to_uppercase() == buscado)
            .ok_or_else(|| StoreError::NotFound(nombre.to_string()))
    }

    /// Replaces the display name of a record and returns the updated document.
    pub fn set_nombre(&self, id: &str, nombre: &str) -> Result<Persona, StoreError> {
        let mut persona = self.get(id)?;
        persona.data.nombre = nombre.to_string();
        let ts = Utc::now().timestamp_micros();

        let conn = self.connect()?;
        conn.execute(
            "UPDATE personas SET data = ?1, ts = ?2 WHERE id = ?3",
            params![serde_json::to_string(&persona.data)?, ts, id],
        )?;
        persona.ts = Some(ts);
        Ok(persona)
    }
}

fn documento(id: String, ts: i64, data: &str) -> Result<Persona, StoreError> {
    let datos: DatosPersona = serde_json::from_str(data)?;
    let mut persona = Persona::nueva(id, datos);
    persona.ts = Some(ts);
    Ok(persona)
}
