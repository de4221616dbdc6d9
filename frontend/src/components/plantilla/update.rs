//! Update function for the person browser component.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the state
//! and returns whether the view must re-render.
//!
//! User actions start one download each through `spawn_local`; the download
//! comes back as a message tagged with the sequence number it was started
//! with. Only the answer to the latest request may replace the region.

use common::model::descarga::Descarga;
use common::model::envelope::DatosDescargados;
use common::render::cursor::{Sentido, Vecina};
use common::render::{informativo, Criterio};
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{aviso_error, aviso_vacio, show_toast};
use super::messages::Msg;
use super::state::PlantillaComponent;

pub fn update(component: &mut PlantillaComponent, ctx: &Context<PlantillaComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Home => {
            descarga_informativa(component, ctx, "/", "Plantilla Home", false);
            false
        }
        Msg::AcercaDe => {
            descarga_informativa(component, ctx, "/acercade", "Plantilla Acerca de", true);
            false
        }
        Msg::Informativa { ruta, titulo } => {
            descarga_informativa(component, ctx, ruta, titulo, false);
            false
        }
        Msg::Listar(vista) => {
            let peticion = component.nueva_peticion();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let descarga = client.recupera().await;
                link.send_message(Msg::ListaDescargada {
                    peticion,
                    vista,
                    descarga,
                });
            });
            false
        }
        Msg::SetCriterio(criterio) => {
            component.criterio = criterio;
            true
        }
        Msg::SetBusqueda(texto) => {
            component.busqueda = texto;
            false
        }
        Msg::Buscar => {
            if component.criterio == Criterio::NombreExacto {
                let nombre = component.busqueda.trim().to_string();
                if nombre.is_empty() {
                    show_toast("Introduce un valor de búsqueda");
                    return false;
                }
                let peticion = component.nueva_peticion();
                let client = component.client.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let descarga = client.recupera_por_nombre(&nombre).await;
                    link.send_message(Msg::PersonaDescargada { peticion, descarga });
                });
                return false;
            }
            match component.criterio.vista(&component.busqueda) {
                Ok(vista) => ctx.link().send_message(Msg::Listar(vista)),
                Err(aviso) => show_toast(&aviso),
            }
            false
        }
        Msg::Mostrar(id) => {
            let peticion = component.nueva_peticion();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let descarga = client.recupera_una_persona(&id).await;
                link.send_message(Msg::PersonaDescargada { peticion, descarga });
            });
            false
        }
        Msg::Siguiente(id) => navega(component, ctx, id, Sentido::Siguiente),
        Msg::Anterior(id) => navega(component, ctx, id, Sentido::Anterior),
        Msg::SetNuevoNombre(nombre) => {
            component.nuevo_nombre = nombre;
            false
        }
        Msg::GuardarNombre => {
            let Some(persona) = &component.seleccionada else {
                show_toast("No hay ninguna persona seleccionada");
                return false;
            };
            let nombre = component.nuevo_nombre.trim().to_string();
            if nombre.is_empty() {
                show_toast("El nombre no puede estar vacío");
                return false;
            }
            let id = persona.id().to_string();
            let peticion = component.nueva_peticion();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let descarga = client.set_nombre(&id, &nombre).await;
                link.send_message(Msg::NombreGuardado { peticion, descarga });
            });
            false
        }
        Msg::Actualizar {
            peticion,
            titulo,
            contenido,
        } => {
            if !component.vigente(peticion) {
                return false;
            }
            component.seleccionada = None;
            component.actualizar(titulo, contenido);
            true
        }
        Msg::ListaDescargada {
            peticion,
            vista,
            descarga,
        } => {
            if !component.vigente(peticion) {
                log!(format!("Descartada respuesta de la petición {}", peticion));
                return false;
            }
            component.seleccionada = None;
            match descarga {
                Descarga::Datos(personas) => {
                    let (mostradas, html) = vista.imprime(personas);
                    component.mostradas = mostradas;
                    component.actualizar(vista.titulo(), html);
                }
                Descarga::Vacio => {
                    component.mostradas.clear();
                    component.actualizar(vista.titulo(), aviso_vacio());
                }
                Descarga::Fallo(razon) => {
                    component.actualizar(vista.titulo(), aviso_error(&razon));
                }
            }
            true
        }
        Msg::PersonaDescargada { peticion, descarga } => {
            if !component.vigente(peticion) {
                return false;
            }
            match descarga {
                Descarga::Datos(persona) => component.muestra_persona(persona),
                Descarga::Vacio => {
                    component.seleccionada = None;
                    component.actualizar("Plantilla Persona", aviso_vacio());
                }
                Descarga::Fallo(razon) => {
                    component.seleccionada = None;
                    component.actualizar("Plantilla Persona", aviso_error(&razon));
                }
            }
            true
        }
        Msg::ColeccionNavegacion {
            peticion,
            id,
            sentido,
            descarga,
        } => {
            if !component.vigente(peticion) {
                return false;
            }
            match descarga {
                Descarga::Datos(personas) => match component.navega_en(personas, &id, sentido) {
                    Vecina::Encontrada(_) => true,
                    Vecina::EnBorde => {
                        aviso_borde(sentido);
                        false
                    }
                    Vecina::Ausente => {
                        show_toast("La persona ya no está en la colección");
                        false
                    }
                },
                Descarga::Vacio => {
                    show_toast("La colección está vacía");
                    false
                }
                Descarga::Fallo(razon) => {
                    show_toast(&format!("Error al descargar la colección: {}", razon));
                    false
                }
            }
        }
        Msg::NombreGuardado { peticion, descarga } => {
            if !component.vigente(peticion) {
                return false;
            }
            match descarga {
                Descarga::Datos(persona) => {
                    if let Some(mostrada) = component
                        .mostradas
                        .iter_mut()
                        .find(|p| p.id() == persona.id())
                    {
                        *mostrada = persona.clone();
                    }
                    component.muestra_persona(persona);
                    show_toast("Nombre guardado correctamente.");
                }
                Descarga::Vacio => {}
                Descarga::Fallo(razon) => {
                    show_toast(&format!("Error al guardar el nombre: {}", razon));
                }
            }
            true
        }
    }
}

/// Downloads an informational route and replaces the region with its message.
///
/// `con_autoria` selects the "acerca de" layout, which needs author, e-mail and date.
/// Only transport errors and non-OK statuses show the error notice; a missing or
/// malformed payload shows the sentinel message.
fn descarga_informativa(
    component: &mut PlantillaComponent,
    ctx: &Context<PlantillaComponent>,
    ruta: &'static str,
    titulo: &'static str,
    con_autoria: bool,
) {
    let peticion = component.nueva_peticion();
    let client = component.client.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let contenido = match client.descargar_ruta(ruta).await {
            Descarga::Fallo(razon) => aviso_error(&razon),
            descarga => {
                let valor = descarga.datos();
                if con_autoria {
                    informativo::acerca_de(&DatosDescargados::con_autoria(valor.as_ref()))
                } else {
                    informativo::mensaje(&DatosDescargados::con_mensaje(valor.as_ref()))
                }
            }
        };
        link.send_message(Msg::Actualizar {
            peticion,
            titulo: titulo.to_string(),
            contenido,
        });
    });
}

/// Shows the neighbour of `id` in the list on screen. When the record is not
/// part of that list (exact-name lookup, filtered listing) the full collection
/// is downloaded and walked instead.
fn navega(
    component: &mut PlantillaComponent,
    ctx: &Context<PlantillaComponent>,
    id: String,
    sentido: Sentido,
) -> bool {
    let mostradas = component.mostradas.clone();
    match component.navega_en(mostradas, &id, sentido) {
        Vecina::Encontrada(_) => true,
        Vecina::EnBorde => {
            aviso_borde(sentido);
            false
        }
        Vecina::Ausente => {
            let peticion = component.nueva_peticion();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let descarga = client.recupera().await;
                link.send_message(Msg::ColeccionNavegacion {
                    peticion,
                    id,
                    sentido,
                    descarga,
                });
            });
            false
        }
    }
}

fn aviso_borde(sentido: Sentido) {
    match sentido {
        Sentido::Siguiente => show_toast("No hay una persona siguiente"),
        Sentido::Anterior => show_toast("No hay una persona anterior"),
    }
}
