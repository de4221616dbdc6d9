//! Person browser: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `PlantillaProps`, `PlantillaComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, download the home message of the service.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PlantillaProps;
pub use state::PlantillaComponent;

use crate::services::plantilla::PlantillaClient;

impl Component for PlantillaComponent {
    type Message = Msg;
    type Properties = PlantillaProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = match &ctx.props().base_url {
            Some(base_url) => PlantillaClient::new(base_url.clone()),
            None => PlantillaClient::default(),
        };
        PlantillaComponent::new(client)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Home);
        }
    }
}
