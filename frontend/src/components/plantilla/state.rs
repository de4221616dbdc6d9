//! Component state for the person browser.
//!
//! The component owns the display region (`titulo` + `contenido`), which is
//! always replaced as a whole, and the list currently on screen so that the
//! next/previous actions can walk it without downloading it again.

use common::model::persona::Persona;
use common::render::cursor::{vecina, Sentido, Vecina};
use common::render::{imprime_una, Criterio};

use crate::services::plantilla::PlantillaClient;

pub struct PlantillaComponent {
    /// Client used for every download.
    pub client: PlantillaClient,

    /// Title of the display region.
    pub titulo: String,

    /// Markup of the display region.
    pub contenido: String,

    /// Records of the last rendered list, in display order.
    pub mostradas: Vec<Persona>,

    /// Record shown on its own, if any. Enables the rename form.
    pub seleccionada: Option<Persona>,

    pub criterio: Criterio,
    pub busqueda: String,
    pub nuevo_nombre: String,

    /// Sequence number of the latest request. Answers to older requests are dropped.
    pub peticion: u64,

    /// Guard to run the first-render download only once.
    pub loaded: bool,
}

impl PlantillaComponent {
    pub fn new(client: PlantillaClient) -> Self {
        Self {
            client,
            titulo: "Plantilla".to_string(),
            contenido: String::new(),
            mostradas: Vec::new(),
            seleccionada: None,
            criterio: Criterio::Nombre,
            busqueda: String::new(),
            nuevo_nombre: String::new(),
            peticion: 0,
            loaded: false,
        }
    }

    /// Starts a new request and returns its sequence number.
    pub fn nueva_peticion(&mut self) -> u64 {
        self.peticion += 1;
        self.peticion
    }

    pub fn vigente(&self, peticion: u64) -> bool {
        peticion == self.peticion
    }

    /// Replaces the display region.
    pub fn actualizar(&mut self, titulo: impl Into<String>, contenido: String) {
        self.titulo = titulo.into();
        self.contenido = contenido;
    }

    /// Shows one record on its own and enables the rename form for it.
    pub fn muestra_persona(&mut self, persona: Persona) {
        self.nuevo_nombre = persona.nombre().to_string();
        self.actualizar("Plantilla Persona", imprime_una(&persona));
        self.seleccionada = Some(persona);
    }

    /// Shows the neighbour of `id` inside `personas`, if there is one.
    ///
    /// Showing it starts a new request number, so a download still in flight
    /// cannot overwrite the record navigated to.
    pub fn navega_en(&mut self, personas: Vec<Persona>, id: &str, sentido: Sentido) -> Vecina {
        let resultado = vecina(personas, id, sentido);
        if let Vecina::Encontrada(persona) = &resultado {
            self.nueva_peticion();
            self.muestra_persona(persona.clone());
        }
        resultado
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::persona::DatosPersona;

    fn persona(id: &str, nombre: &str) -> Persona {
        Persona::nueva(
            id,
            DatosPersona {
                nombre: nombre.to_string(),
                ..Default::default()
            },
        )
    }

    fn coleccion() -> Vec<Persona> {
        vec![
            persona("1", "Carlos Soto Torres"),
            persona("2", "María López García"),
            persona("3", "Javier Ruiz Moreno"),
        ]
    }

    fn componente() -> PlantillaComponent {
        PlantillaComponent::new(PlantillaClient::new("http://localhost:8002/plantilla"))
    }

    #[test]
    fn only_the_latest_request_is_current() {
        let mut componente = componente();
        let primera = componente.nueva_peticion();
        let segunda = componente.nueva_peticion();
        assert!(!componente.vigente(primera));
        assert!(componente.vigente(segunda));
    }

    #[test]
    fn navigation_shows_neighbour_and_invalidates_pending_requests() {
        let mut componente = componente();
        componente.mostradas = coleccion();
        let pendiente = componente.nueva_peticion();

        let resultado = componente.navega_en(componente.mostradas.clone(), "1", Sentido::Siguiente);

        assert!(matches!(resultado, Vecina::Encontrada(ref p) if p.id() == "2"));
        assert_eq!(componente.seleccionada.as_ref().map(|p| p.id()), Some("2"));
        assert_eq!(componente.nuevo_nombre, "María López García");
        assert_eq!(componente.titulo, "Plantilla Persona");
        assert!(componente.contenido.contains("María López García"));
        assert!(!componente.vigente(pendiente));
    }

    #[test]
    fn navigation_at_the_edge_keeps_the_view() {
        let mut componente = componente();
        componente.mostradas = coleccion();
        componente.muestra_persona(coleccion()[0].clone());
        let contenido = componente.contenido.clone();
        let peticion = componente.peticion;

        let resultado = componente.navega_en(componente.mostradas.clone(), "1", Sentido::Anterior);

        assert_eq!(resultado, Vecina::EnBorde);
        assert_eq!(componente.contenido, contenido);
        assert_eq!(componente.seleccionada.as_ref().map(|p| p.id()), Some("1"));
        assert!(componente.vigente(peticion));
    }

    #[test]
    fn record_found_by_exact_name_navigates_on_the_full_collection() {
        let mut componente = componente();
        componente.muestra_persona(coleccion()[0].clone());

        let resultado = componente.navega_en(componente.mostradas.clone(), "1", Sentido::Siguiente);
        assert_eq!(resultado, Vecina::Ausente);
        assert_eq!(componente.seleccionada.as_ref().map(|p| p.id()), Some("1"));

        let resultado = componente.navega_en(coleccion(), "1", Sentido::Siguiente);
        assert!(matches!(resultado, Vecina::Encontrada(_)));
        assert_eq!(componente.seleccionada.as_ref().map(|p| p.id()), Some("2"));
    }
}
