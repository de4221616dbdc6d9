//! View rendering for the person browser component.
//!
//! Layout: a navigation bar with one button per listing or informational
//! route, a search form, the display region (title + server-independent
//! markup built in `common::render`) and, when a single record is shown, a
//! form to rename it.

use common::render::{Criterio, Vista};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::accion_en;
use super::messages::Msg;
use super::state::PlantillaComponent;

/// Informational routes: path, button label and region title.
const INFORMATIVAS: &[(&str, &str, &str)] = &[
    ("/listadatosesp", "Datos específicos", "Plantilla Datos Específicos"),
    ("/listapersonaunica", "Persona única", "Plantilla Persona Única"),
    ("/anadir", "Añadir", "Plantilla Añadir"),
    ("/modificar", "Modificar", "Plantilla Modificar"),
    ("/borrar", "Borrar", "Plantilla Borrar"),
];

pub fn view(component: &PlantillaComponent, ctx: &Context<PlantillaComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="plantilla-root">
            { build_nav(link) }
            { build_busqueda(component, link) }
            <article class="plantilla-article">
                <h2 class="plantilla-titulo">{ component.titulo.clone() }</h2>
                <div class="plantilla-contenido" onclick={link.batch_callback(|e: MouseEvent| accion_en(&e))}>
                    { Html::from_html_unchecked(AttrValue::from(component.contenido.clone())) }
                </div>
            </article>
            { build_renombrar(component, link) }
        </div>
    }
}

fn build_nav(link: &Scope<PlantillaComponent>) -> Html {
    html! {
        <nav class="plantilla-nav">
            { nav_button("Home", link.callback(|_| Msg::Home)) }
            { nav_button("Acerca de", link.callback(|_| Msg::AcercaDe)) }
            { nav_button("Listar nombres", link.callback(|_| Msg::Listar(Vista::Nombres))) }
            { nav_button("Nombres alfabéticos", link.callback(|_| Msg::Listar(Vista::NombresOrdenados))) }
            { nav_button("Listar datos", link.callback(|_| Msg::Listar(Vista::Todos))) }
            { nav_button("Datos ordenados", link.callback(|_| Msg::Listar(Vista::TodosOrdenados))) }
            {
                for INFORMATIVAS.iter().map(|&(ruta, etiqueta, titulo)| {
                    nav_button(etiqueta, link.callback(move |_| Msg::Informativa { ruta, titulo }))
                })
            }
        </nav>
    }
}

fn nav_button(label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="nav-btn" onclick={on_click}>{ label.to_string() }</button>
    }
}

fn build_busqueda(component: &PlantillaComponent, link: &Scope<PlantillaComponent>) -> Html {
    let placeholder = match component.criterio {
        Criterio::Participaciones => "Número máximo",
        Criterio::Fecha => "AAAA-MM-DD",
        _ => "Texto a buscar",
    };

    html! {
        <form class="plantilla-busqueda" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Buscar
        })}>
            <select onchange={link.batch_callback(|e: Event| {
                let clave = e.target_unchecked_into::<HtmlSelectElement>().value();
                Criterio::desde_clave(&clave).map(Msg::SetCriterio)
            })}>
                {
                    for Criterio::TODOS.iter().map(|criterio| html! {
                        <option value={criterio.clave()} selected={*criterio == component.criterio}>
                            { criterio.etiqueta() }
                        </option>
                    })
                }
            </select>
            <input
                type="text"
                placeholder={placeholder}
                value={component.busqueda.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetBusqueda(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button type="submit">{ "Buscar" }</button>
        </form>
    }
}

fn build_renombrar(component: &PlantillaComponent, link: &Scope<PlantillaComponent>) -> Html {
    if component.seleccionada.is_none() {
        return html! {};
    }

    html! {
        <form class="plantilla-renombrar" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::GuardarNombre
        })}>
            <label>{ "Nuevo nombre" }</label>
            <input
                type="text"
                value={component.nuevo_nombre.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetNuevoNombre(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <button type="submit">{ "Guardar" }</button>
        </form>
    }
}
