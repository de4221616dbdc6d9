//! Defines the properties for the `PlantillaComponent`.

use yew::prelude::*;

/// Properties for the `PlantillaComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct PlantillaProps {
    /// Base URL of the person API, e.g. `http://localhost:8002/plantilla`.
    ///
    /// When `None` (the default) the client talks to `API_GATEWAY` + `/plantilla`,
    /// which is the same origin that served the page unless overridden at build time.
    #[prop_or_default]
    pub base_url: Option<String>,
}
