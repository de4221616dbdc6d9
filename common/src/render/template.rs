//! Placeholder substitution for the HTML table templates.
//!
//! A template row contains tokens of the form `### NOMBRE ###`. Each template owns
//! a table mapping token names to field accessors. Expansion is one regex pass
//! over the row: every token found is looked up in the table and replaced by the
//! HTML-escaped field value. Because the pass never re-reads its own output, a
//! field whose value happens to look like a token is written out literally.
//! Tokens missing from the table are left as they are.

use crate::model::persona::Persona;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Produces the text substituted for one token.
pub type Accesor = fn(&Persona) -> String;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"### ([^#]+?) ###").expect("placeholder pattern is valid"));

/// Header, per-record row and footer of one table shape, plus its token table.
#[derive(Debug, Clone, Copy)]
pub struct TablaPlantilla {
    pub cabecera: &'static str,
    pub cuerpo: &'static str,
    pub pie: &'static str,
    pub tags: &'static [(&'static str, Accesor)],
}

impl TablaPlantilla {
    /// Expands the row template for one record.
    pub fn actualiza(&self, persona: &Persona) -> String {
        sustituye_tags(self.cuerpo, self.tags, persona)
    }

    /// Header, one expanded row per record in the given order, footer.
    pub fn render(&self, personas: &[Persona]) -> String {
        let mut msj = String::from(self.cabecera);
        for persona in personas {
            msj.push_str(&self.actualiza(persona));
        }
        msj.push_str(self.pie);
        msj
    }
}

/// Replaces every known token of `plantilla` with the value produced by its accessor.
pub fn sustituye_tags(plantilla: &str, tags: &[(&str, Accesor)], persona: &Persona) -> String {
    PLACEHOLDER
        .replace_all(plantilla, |caps: &Captures<'_>| {
            let nombre = &caps[1];
            match tags.iter().find(|(tag, _)| *tag == nombre) {
                Some((_, accesor)) => escape_html(&accesor(persona)),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Escapes `&`, `<`, `>`, `"` and `'` so field values cannot inject markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `true` if `texto` still holds something shaped like a token.
pub fn contiene_tags(texto: &str) -> bool {
    PLACEHOLDER.is_match(texto)
}

fn opcional(valor: Option<u32>) -> String {
    valor.map(|v| v.to_string()).unwrap_or_default()
}

/// Tokens of the full record table.
pub const TAGS_COMPLETOS: &[(&str, Accesor)] = &[
    ("ID", |p| p.id().to_string()),
    ("NOMBRE", |p| p.data.nombre.clone()),
    ("DATE", |p| {
        p.data.fecha.map(|f| f.to_string()).unwrap_or_default()
    }),
    ("DIRECCION", |p| {
        p.data
            .direccion
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default()
    }),
    ("AÑO PARTICIPACION", |p| opcional(p.data.anio_participacion)),
    ("NUM PARTICIPACIONES", |p| opcional(p.data.num_participaciones)),
    ("NUM CATEGORIAS", |p| opcional(p.data.num_categorias)),
    ("NUM PARTICIPANTES", |p| opcional(p.data.num_participantes)),
    ("NUM PISTAS", |p| opcional(p.data.num_pistas)),
];

/// Tokens of the name-only table.
pub const TAGS_NOMBRE: &[(&str, Accesor)] = &[
    ("ID", |p| p.id().to_string()),
    ("NOMBRE", |p| p.data.nombre.clone()),
];

pub const TABLA_COMPLETA: TablaPlantilla = TablaPlantilla {
    cabecera: r####"<table width="100%" class="listado-personas">
    <thead>
        <th width="10%">Id</th>
        <th width="20%">Nombre</th>
        <th width="10%">Fecha</th>
        <th width="20%">Dirección</th>
        <th width="5%">Año participación</th>
        <th width="5%">Num participaciones</th>
        <th width="5%">Num categorías</th>
        <th width="5%">Num participantes</th>
        <th width="5%">Num pistas</th>
        <th width="15%">Acciones</th>
    </thead>
    <tbody>
"####,
    cuerpo: r####"
    <tr title="### ID ###">
        <td>### ID ###</td>
        <td>### NOMBRE ###</td>
        <td>### DATE ###</td>
        <td>### DIRECCION ###</td>
        <td>### AÑO PARTICIPACION ###</td>
        <td>### NUM PARTICIPACIONES ###</td>
        <td>### NUM CATEGORIAS ###</td>
        <td>### NUM PARTICIPANTES ###</td>
        <td>### NUM PISTAS ###</td>
        <td>
            <div>
                <button type="button" class="opcion-secundaria mostrar" data-accion="mostrar" data-id="### ID ###">Mostrar</button>
                <button type="button" class="opcion-secundaria mostrar" data-accion="anterior" data-id="### ID ###">Anterior</button>
                <button type="button" class="opcion-secundaria mostrar" data-accion="siguiente" data-id="### ID ###">Siguiente</button>
            </div>
        </td>
    </tr>
"####,
    pie: r####"    </tbody>
</table>
"####,
    tags: TAGS_COMPLETOS,
};

pub const TABLA_NOMBRES: TablaPlantilla = TablaPlantilla {
    cabecera: r####"<table width="100%" class="listado-personas">
    <thead>
        <th width="10%">Id</th>
        <th width="20%">Nombre</th>
        <th width="15%">Acciones</th>
    </thead>
    <tbody>
"####,
    cuerpo: r####"
    <tr title="### ID ###">
        <td>### ID ###</td>
        <td>### NOMBRE ###</td>
        <td>
            <div>
                <button type="button" class="opcion-secundaria mostrar" data-accion="mostrar" data-id="### ID ###">Mostrar</button>
            </div>
        </td>
    </tr>
"####,
    pie: r####"    </tbody>
</table>
"####,
    tags: TAGS_NOMBRE,
};
