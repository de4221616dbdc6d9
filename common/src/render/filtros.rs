//! Sorting and filtering applied to a downloaded list before it is rendered.
//!
//! Filters keep the relative order of the records they retain.

use crate::model::persona::Persona;
use chrono::NaiveDate;

/// Stable sort on the uppercased name; equal names keep their original order.
pub fn ordena_por_nombre(personas: &mut [Persona]) {
    personas.sort_by_cached_key(|p| p.data.nombre.to_uppercase());
}

pub fn contiene_nombre(persona: &Persona, texto: &str) -> bool {
    persona
        .data
        .nombre
        .to_uppercase()
        .contains(&texto.to_uppercase())
}

/// `num_participaciones <= maximo`. Records without the counter never match.
pub fn participaciones_hasta(persona: &Persona, maximo: u32) -> bool {
    persona
        .data
        .num_participaciones
        .is_some_and(|n| n <= maximo)
}

/// Composed date strictly before `referencia`. Records without a valid date never match.
pub fn anterior_a(persona: &Persona, referencia: NaiveDate) -> bool {
    persona
        .data
        .fecha
        .and_then(|f| f.to_naive())
        .is_some_and(|fecha| fecha < referencia)
}

pub fn en_provincia(persona: &Persona, provincia: &str) -> bool {
    persona
        .data
        .direccion
        .as_ref()
        .is_some_and(|d| d.provincia.to_uppercase() == provincia.to_uppercase())
}

pub fn en_pais(persona: &Persona, pais: &str) -> bool {
    persona
        .data
        .direccion
        .as_ref()
        .is_some_and(|d| d.pais.to_uppercase() == pais.to_uppercase())
}

/// Keeps the records matching `predicado`.
pub fn filtra(personas: Vec<Persona>, predicado: impl Fn(&Persona) -> bool) -> Vec<Persona> {
    personas.into_iter().filter(|p| predicado(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::persona::{DatosPersona, Direccion, Fecha};

    fn persona(id: &str, nombre: &str) -> Persona {
        Persona::nueva(
            id,
            DatosPersona {
                nombre: nombre.to_string(),
                ..Default::default()
            },
        )
    }

    fn con_participaciones(id: &str, n: Option<u32>) -> Persona {
        let mut p = persona(id, id);
        p.data.num_participaciones = n;
        p
    }

    fn con_fecha(id: &str, dia: u32, mes: u32, anio: i32) -> Persona {
        let mut p = persona(id, id);
        p.data.fecha = Some(Fecha { dia, mes, anio });
        p
    }

    fn ids(personas: &[Persona]) -> Vec<&str> {
        personas.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn sort_ignores_case() {
        let mut lista = vec![
            persona("1", "beatriz"),
            persona("2", "Alberto"),
            persona("3", "Carmen"),
        ];
        ordena_por_nombre(&mut lista);
        assert_eq!(ids(&lista), ["2", "1", "3"]);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let mut lista = vec![
            persona("1", "Eva"),
            persona("2", "ana"),
            persona("3", "EVA"),
            persona("4", "Ana"),
        ];
        ordena_por_nombre(&mut lista);
        assert_eq!(ids(&lista), ["2", "4", "1", "3"]);

        let ordenada = lista.clone();
        ordena_por_nombre(&mut lista);
        assert_eq!(lista, ordenada);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let lista = vec![
            persona("1", "Carlos Soto Torres"),
            persona("2", "María Soto"),
            persona("3", "Luis Pérez"),
        ];
        let encontrados = filtra(lista, |p| contiene_nombre(p, "sOTo"));
        assert_eq!(ids(&encontrados), ["1", "2"]);
    }

    #[test]
    fn threshold_filter_partitions_the_input() {
        let lista = vec![
            con_participaciones("a", Some(1)),
            con_participaciones("b", Some(5)),
            con_participaciones("c", Some(3)),
            con_participaciones("d", None),
            con_participaciones("e", Some(4)),
        ];
        let (dentro, fuera): (Vec<_>, Vec<_>) =
            lista.iter().cloned().partition(|p| participaciones_hasta(p, 3));
        assert_eq!(ids(&dentro), ["a", "c"]);
        assert_eq!(ids(&fuera), ["b", "d", "e"]);
        assert_eq!(dentro.len() + fuera.len(), lista.len());
        assert_eq!(filtra(lista, |p| participaciones_hasta(p, 3)), dentro);
    }

    #[test]
    fn date_filter_is_strict() {
        let referencia = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let lista = vec![
            con_fecha("antes", 14, 6, 2000),
            con_fecha("mismo dia", 15, 6, 2000),
            con_fecha("despues", 1, 1, 2001),
            con_fecha("invalida", 30, 2, 1990),
            persona("sin fecha", "x"),
        ];
        let encontrados = filtra(lista, |p| anterior_a(p, referencia));
        assert_eq!(ids(&encontrados), ["antes"]);
    }

    #[test]
    fn address_filters_compare_whole_field() {
        let mut jaen = persona("1", "uno");
        jaen.data.direccion = Some(Direccion {
            provincia: "Jaén".to_string(),
            pais: "España".to_string(),
            ..Default::default()
        });
        let mut oporto = persona("2", "dos");
        oporto.data.direccion = Some(Direccion {
            provincia: "Oporto".to_string(),
            pais: "Portugal".to_string(),
            ..Default::default()
        });
        let lista = vec![jaen, oporto, persona("3", "tres")];

        assert_eq!(ids(&filtra(lista.clone(), |p| en_provincia(p, "JAÉN"))), ["1"]);
        assert!(filtra(lista.clone(), |p| en_provincia(p, "Ja")).is_empty());
        assert_eq!(ids(&filtra(lista, |p| en_pais(p, "portugal"))), ["2"]);
    }
}
