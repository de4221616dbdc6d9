use common::model::descarga::Descarga;
use common::model::persona::Persona;
use common::render::cursor::Sentido;
use common::render::{Criterio, Vista};

#[derive(Clone)]
pub enum Msg {
    Home,
    AcercaDe,
    Informativa {
        ruta: &'static str,
        titulo: &'static str,
    },
    Listar(Vista),
    SetCriterio(Criterio),
    SetBusqueda(String),
    Buscar,
    Mostrar(String),
    Siguiente(String),
    Anterior(String),
    SetNuevoNombre(String),
    GuardarNombre,
    Actualizar {
        peticion: u64,
        titulo: String,
        contenido: String,
    },
    ListaDescargada {
        peticion: u64,
        vista: Vista,
        descarga: Descarga<Vec<Persona>>,
    },
    PersonaDescargada {
        peticion: u64,
        descarga: Descarga<Persona>,
    },
    /// Full collection downloaded to navigate from a record that is not in the list on screen.
    ColeccionNavegacion {
        peticion: u64,
        id: String,
        sentido: Sentido,
        descarga: Descarga<Vec<Persona>>,
    },
    NombreGuardado {
        peticion: u64,
        descarga: Descarga<Persona>,
    },
}
