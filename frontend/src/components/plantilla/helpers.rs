//! Utility functions for the person browser component.
//!
//! - **User Feedback**: temporary "toast" notifications for notices that must
//!   not replace the display region (navigation at the ends of the list,
//!   invalid search input, saved changes).
//! - **Row actions**: the rendered tables are plain markup, so their buttons
//!   carry `data-accion`/`data-id` attributes and a single click handler on the
//!   region turns them into messages.
//! - **Error notices**: markup shown in the region when a download fails.

use common::render::template::escape_html;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::messages::Msg;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Message for a click on a row button inside the display region, if any.
pub fn accion_en(event: &MouseEvent) -> Option<Msg> {
    let objetivo: Element = event.target_dyn_into::<Element>()?;
    let boton = objetivo.closest("[data-accion]").ok().flatten()?;
    let id = boton.get_attribute("data-id")?;
    match boton.get_attribute("data-accion")?.as_str() {
        "mostrar" => Some(Msg::Mostrar(id)),
        "siguiente" => Some(Msg::Siguiente(id)),
        "anterior" => Some(Msg::Anterior(id)),
        _ => None,
    }
}

/// Region markup for a failed download.
pub fn aviso_error(razon: &str) -> String {
    format!(
        r#"<p class="error">No se han podido acceder al API Gateway: {}</p>"#,
        escape_html(razon)
    )
}

/// Region markup for a download that returned no records.
pub fn aviso_vacio() -> String {
    r#"<p class="aviso">No hay personas que mostrar.</p>"#.to_string()
}
