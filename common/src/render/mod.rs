//! Rendering pipeline for downloaded records.
//!
//! A download is turned into markup in two steps: the [`Vista`] chosen by the
//! user prepares the list (filter and/or sort), then the matching
//! [`template::TablaPlantilla`] expands one row per record between its header
//! and footer. The caller hands the resulting markup to the display region.
//!
//! - `template`: placeholder substitution and the two table shapes.
//! - `filtros`: sort and filter predicates.
//! - `cursor`: next/previous navigation over a rendered list.
//! - `informativo`: markup for the message-only routes.

pub mod cursor;
pub mod filtros;
pub mod informativo;
pub mod template;

use crate::model::persona::Persona;
use chrono::NaiveDate;
use template::{TABLA_COMPLETA, TABLA_NOMBRES, TablaPlantilla};

/// `header + rows + footer` for `personas` in their current order.
pub fn render(personas: &[Persona], plantilla: &TablaPlantilla) -> String {
    plantilla.render(personas)
}

/// One-row full table, used for a single looked-up or navigated record.
pub fn imprime_una(persona: &Persona) -> String {
    TABLA_COMPLETA.render(std::slice::from_ref(persona))
}

/// How a downloaded list is prepared and which table shape displays it.
#[derive(Debug, Clone, PartialEq)]
pub enum Vista {
    Nombres,
    NombresOrdenados,
    Todos,
    TodosOrdenados,
    SoloNombre(String),
    SoloParticipaciones(u32),
    SoloFecha(NaiveDate),
    SoloProvincia(String),
    SoloPais(String),
}

impl Vista {
    pub fn titulo(&self) -> &'static str {
        match self {
            Vista::Nombres => "Plantilla Lista Nombres",
            Vista::NombresOrdenados => "Plantilla Lista Nombres Alfabéticos",
            Vista::Todos => "Plantilla Lista Datos",
            Vista::TodosOrdenados => "Plantilla Lista Datos Ordenados",
            Vista::SoloNombre(_) => "Plantilla Búsqueda por Nombre",
            Vista::SoloParticipaciones(_) => "Plantilla Búsqueda por Participaciones",
            Vista::SoloFecha(_) => "Plantilla Búsqueda por Fecha",
            Vista::SoloProvincia(_) => "Plantilla Búsqueda por Provincia",
            Vista::SoloPais(_) => "Plantilla Búsqueda por País",
        }
    }

    pub fn plantilla(&self) -> &'static TablaPlantilla {
        match self {
            Vista::Nombres | Vista::NombresOrdenados => &TABLA_NOMBRES,
            _ => &TABLA_COMPLETA,
        }
    }

    /// Applies this view's filter and/or sort.
    pub fn prepara(&self, mut personas: Vec<Persona>) -> Vec<Persona> {
        match self {
            Vista::Nombres | Vista::Todos => personas,
            Vista::NombresOrdenados | Vista::TodosOrdenados => {
                filtros::ordena_por_nombre(&mut personas);
                personas
            }
            Vista::SoloNombre(texto) => {
                filtros::filtra(personas, |p| filtros::contiene_nombre(p, texto))
            }
            Vista::SoloParticipaciones(maximo) => {
                filtros::filtra(personas, |p| filtros::participaciones_hasta(p, *maximo))
            }
            Vista::SoloFecha(referencia) => {
                filtros::filtra(personas, |p| filtros::anterior_a(p, *referencia))
            }
            Vista::SoloProvincia(provincia) => {
                filtros::filtra(personas, |p| filtros::en_provincia(p, provincia))
            }
            Vista::SoloPais(pais) => filtros::filtra(personas, |p| filtros::en_pais(p, pais)),
        }
    }

    /// Prepares and renders `personas`, returning the list as displayed with its markup.
    pub fn imprime(&self, personas: Vec<Persona>) -> (Vec<Persona>, String) {
        let mostradas = self.prepara(personas);
        let html = render(&mostradas, self.plantilla());
        (mostradas, html)
    }
}

/// Search criteria offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterio {
    Nombre,
    NombreExacto,
    Participaciones,
    Fecha,
    Provincia,
    Pais,
}

impl Criterio {
    pub const TODOS: [Criterio; 6] = [
        Criterio::Nombre,
        Criterio::NombreExacto,
        Criterio::Participaciones,
        Criterio::Fecha,
        Criterio::Provincia,
        Criterio::Pais,
    ];

    pub fn clave(&self) -> &'static str {
        match self {
            Criterio::Nombre => "nombre",
            Criterio::NombreExacto => "nombre-exacto",
            Criterio::Participaciones => "participaciones",
            Criterio::Fecha => "fecha",
            Criterio::Provincia => "provincia",
            Criterio::Pais => "pais",
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Criterio::Nombre => "Nombre contiene",
            Criterio::NombreExacto => "Nombre exacto",
            Criterio::Participaciones => "Participaciones hasta",
            Criterio::Fecha => "Fecha anterior a (AAAA-MM-DD)",
            Criterio::Provincia => "Provincia",
            Criterio::Pais => "País",
        }
    }

    pub fn desde_clave(clave: &str) -> Option<Self> {
        Self::TODOS.into_iter().find(|c| c.clave() == clave)
    }

    /// Builds the list view for a search.
    ///
    /// `NombreExacto` is a single-record lookup, not a list view, and yields an error here.
    pub fn vista(&self, texto: &str) -> Result<Vista, String> {
        let texto = texto.trim();
        if texto.is_empty() {
            return Err("Introduce un valor de búsqueda".to_string());
        }
        match self {
            Criterio::Nombre => Ok(Vista::SoloNombre(texto.to_string())),
            Criterio::Participaciones => texto
                .parse::<u32>()
                .map(Vista::SoloParticipaciones)
                .map_err(|_| format!("'{}' no es un número de participaciones", texto)),
            Criterio::Fecha => NaiveDate::parse_from_str(texto, "%Y-%m-%d")
                .map(Vista::SoloFecha)
                .map_err(|_| format!("'{}' no es una fecha AAAA-MM-DD", texto)),
            Criterio::Provincia => Ok(Vista::SoloProvincia(texto.to_string())),
            Criterio::Pais => Ok(Vista::SoloPais(texto.to_string())),
            Criterio::NombreExacto => Err("La búsqueda exacta no genera un listado".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::persona::DatosPersona;
    use template::contiene_tags;

    fn persona(id: &str, nombre: &str, participaciones: u32) -> Persona {
        Persona::nueva(
            id,
            DatosPersona {
                nombre: nombre.to_string(),
                num_participaciones: Some(participaciones),
                ..Default::default()
            },
        )
    }

    fn lista() -> Vec<Persona> {
        vec![
            persona("1", "Zoe", 1),
            persona("2", "adrián", 7),
            persona("3", "Marta", 2),
        ]
    }

    #[test]
    fn sorted_name_view_uses_name_table() {
        let (mostradas, html) = Vista::NombresOrdenados.imprime(lista());
        let ids: Vec<_> = mostradas.iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
        assert!(html.starts_with(TABLA_NOMBRES.cabecera));
        assert!(!contiene_tags(&html));
        let adrian = html.find("adrián").unwrap();
        let zoe = html.find("Zoe").unwrap();
        assert!(adrian < zoe);
    }

    #[test]
    fn unsorted_view_keeps_download_order() {
        let (mostradas, html) = Vista::Todos.imprime(lista());
        assert_eq!(mostradas, lista());
        assert!(html.starts_with(TABLA_COMPLETA.cabecera));
    }

    #[test]
    fn filter_view_renders_only_matches() {
        let (mostradas, html) = Vista::SoloParticipaciones(2).imprime(lista());
        assert_eq!(mostradas.len(), 2);
        assert!(!html.contains("adrián"));
    }

    #[test]
    fn single_record_table() {
        let html = imprime_una(&persona("9", "Nadia", 0));
        assert_eq!(html.matches("<tr ").count(), 1);
        assert!(html.contains("<td>Nadia</td>"));
    }

    #[test]
    fn criteria_parse_their_input() {
        assert_eq!(
            Criterio::Participaciones.vista(" 3 "),
            Ok(Vista::SoloParticipaciones(3))
        );
        assert!(Criterio::Participaciones.vista("tres").is_err());
        assert_eq!(
            Criterio::Fecha.vista("2001-02-03"),
            Ok(Vista::SoloFecha(NaiveDate::from_ymd_opt(2001, 2, 3).unwrap()))
        );
        assert!(Criterio::Fecha.vista("03/02/2001").is_err());
        assert!(Criterio::Nombre.vista("   ").is_err());
        assert!(Criterio::NombreExacto.vista("Ana").is_err());
    }

    #[test]
    fn criteria_round_trip_through_keys() {
        for criterio in Criterio::TODOS {
            assert_eq!(Criterio::desde_clave(criterio.clave()), Some(criterio));
        }
        assert_eq!(Criterio::desde_clave("otro"), None);
    }
}
