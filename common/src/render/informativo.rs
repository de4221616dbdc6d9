use crate::model::envelope::DatosDescargados;
use crate::render::template::escape_html;

/// Body of the region for routes that only carry a message.
pub fn mensaje(datos: &DatosDescargados) -> String {
    escape_html(&datos.mensaje)
}

/// Body of the region for the "acerca de" route.
pub fn acerca_de(datos: &DatosDescargados) -> String {
    format!(
        r#"<div>
    <p>{}</p>
    <ul>
        <li><b>Autor/a</b>: {}</li>
        <li><b>E-mail</b>: {}</li>
        <li><b>Fecha</b>: {}</li>
    </ul>
</div>
"#,
        escape_html(&datos.mensaje),
        escape_html(&datos.autor),
        escape_html(&datos.email),
        escape_html(&datos.fecha)
    )
}
