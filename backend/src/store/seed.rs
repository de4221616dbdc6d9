use common::model::persona::{DatosPersona, Direccion, Fecha, Persona};

struct Semilla {
    id: &'static str,
    nombre: &'static str,
    nacimiento: (u32, u32, i32),
    direccion: (&'static str, &'static str, &'static str, &'static str),
    anio_participacion: u32,
    contadores: [u32; 4],
}

// contadores: participaciones, categorias, participantes, pistas
const SEMILLAS: [Semilla; 10] = [
    Semilla {
        id: "359186592567411405",
        nombre: "Carlos Soto Torres",
        nacimiento: (12, 3, 1999),
        direccion: ("Calle Virgen de la Capilla 4", "Jaén", "Jaén", "España"),
        anio_participacion: 2015,
        contadores: [6, 2, 48, 1],
    },
    Semilla {
        id: "359186654201495757",
        nombre: "María López García",
        nacimiento: (27, 8, 2001),
        direccion: ("Gran Vía de Colón 12", "Granada", "Granada", "España"),
        anio_participacion: 2017,
        contadores: [3, 1, 30, 1],
    },
    Semilla {
        id: "359186704568942797",
        nombre: "Javier Ruiz Moreno",
        nacimiento: (5, 1, 1997),
        direccion: ("Calle de Alcalá 101", "Madrid", "Madrid", "España"),
        anio_participacion: 2012,
        contadores: [9, 3, 64, 2],
    },
    Semilla {
        id: "359186741376057549",
        nombre: "Lucía Fernández Gil",
        nacimiento: (19, 11, 2003),
        direccion: ("Carrer de Mallorca 250", "Barcelona", "Barcelona", "España"),
        anio_participacion: 2019,
        contadores: [2, 1, 25, 1],
    },
    Semilla {
        id: "359186779580924109",
        nombre: "Andrés Navarro Díaz",
        nacimiento: (2, 6, 1995),
        direccion: ("Paseo de la Estación 30", "Linares", "Jaén", "España"),
        anio_participacion: 2010,
        contadores: [11, 4, 72, 2],
    },
    Semilla {
        id: "359186815443271885",
        nombre: "Elena Castro Romero",
        nacimiento: (14, 2, 2000),
        direccion: ("Rua Augusta 45", "Lisboa", "Lisboa", "Portugal"),
        anio_participacion: 2016,
        contadores: [5, 2, 40, 1],
    },
    Semilla {
        id: "359186851016212685",
        nombre: "Pablo Ortega Serrano",
        nacimiento: (30, 9, 1998),
        direccion: ("Avenida de la Constitución 8", "Sevilla", "Sevilla", "España"),
        anio_participacion: 2014,
        contadores: [7, 3, 55, 2],
    },
    Semilla {
        id: "359186888513290445",
        nombre: "Sofía Delgado Ramos",
        nacimiento: (8, 4, 2004),
        direccion: ("Calle Larios 3", "Málaga", "Málaga", "España"),
        anio_participacion: 2020,
        contadores: [1, 1, 18, 1],
    },
    Semilla {
        id: "359186925076087501",
        nombre: "Diego Molina Vega",
        nacimiento: (21, 12, 1996),
        direccion: ("Calle Cruz Conde 17", "Córdoba", "Córdoba", "España"),
        anio_participacion: 2011,
        contadores: [10, 4, 70, 3],
    },
    Semilla {
        id: "359186960512712909",
        nombre: "Irene Herrera Núñez",
        nacimiento: (16, 7, 2002),
        direccion: ("Rua de Santa Catarina 90", "Oporto", "Oporto", "Portugal"),
        anio_participacion: 2018,
        contadores: [4, 2, 36, 1],
    },
];

/// Sample collection loaded into an empty database.
pub fn personas_iniciales() -> Vec<Persona> {
    SEMILLAS
        .iter()
        .map(|s| {
            let (dia, mes, anio) = s.nacimiento;
            let (calle, localidad, provincia, pais) = s.direccion;
            let [participaciones, categorias, participantes, pistas] = s.contadores;
            Persona::nueva(
                s.id,
                DatosPersona {
                    nombre: s.nombre.to_string(),
                    fecha: Some(Fecha { dia, mes, anio }),
                    direccion: Some(Direccion {
                        calle: calle.to_string(),
                        localidad: localidad.to_string(),
                        provincia: provincia.to_string(),
                        pais: pais.to_string(),
                    }),
                    anio_participacion: Some(s.anio_participacion),
                    num_participaciones: Some(participaciones),
                    num_categorias: Some(categorias),
                    num_participantes: Some(participantes),
                    num_pistas: Some(pistas),
                },
            )
        })
        .collect()
}
