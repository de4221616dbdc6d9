use crate::model::persona::Persona;

/// Position inside an already-downloaded, ordered list of records.
///
/// Navigating never goes back to the network: the list the user is looking at
/// is the one the cursor walks. Moving past either end leaves the cursor where
/// it is and returns `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    personas: Vec<Persona>,
    posicion: usize,
}

impl Cursor {
    /// Places the cursor on the record with identifier `id`; `None` if it is not in the list.
    pub fn en(personas: Vec<Persona>, id: &str) -> Option<Self> {
        let posicion = personas.iter().position(|p| p.id() == id)?;
        Some(Self { personas, posicion })
    }

    pub fn actual(&self) -> &Persona {
        &self.personas[self.posicion]
    }

    pub fn siguiente(&mut self) -> Option<&Persona> {
        if self.posicion + 1 >= self.personas.len() {
            return None;
        }
        self.posicion += 1;
        Some(self.actual())
    }

    pub fn anterior(&mut self) -> Option<&Persona> {
        if self.posicion == 0 {
            return None;
        }
        self.posicion -= 1;
        Some(self.actual())
    }

    /// Moves one step in `sentido`.
    pub fn avanza(&mut self, sentido: Sentido) -> Option<&Persona> {
        match sentido {
            Sentido::Siguiente => self.siguiente(),
            Sentido::Anterior => self.anterior(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentido {
    Siguiente,
    Anterior,
}

/// Result of looking for the neighbour of a record inside one list.
#[derive(Debug, Clone, PartialEq)]
pub enum Vecina {
    Encontrada(Persona),
    /// The record is the first (or last) one; there is nothing to move to.
    EnBorde,
    /// The record is not in this list. The caller should retry on the full collection.
    Ausente,
}

/// Neighbour of `id` in `personas`.
pub fn vecina(personas: Vec<Persona>, id: &str, sentido: Sentido) -> Vecina {
    let Some(mut cursor) = Cursor::en(personas, id) else {
        return Vecina::Ausente;
    };
    match cursor.avanza(sentido) {
        Some(persona) => Vecina::Encontrada(persona.clone()),
        None => Vecina::EnBorde,
    }
}
