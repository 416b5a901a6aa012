pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod api;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    home::Home,
    crate_opening::CrateOpening,
    wheel::Wheel,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/crates/:guid")] CrateOpening { guid: String },
    #[at("/wheel")] Wheel,
    #[not_found]
    #[at("/404")] NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::CrateOpening { guid } => html! { <CrateOpening crate_guid={guid} /> },
        Route::Wheel => html! { <Wheel /> },
        Route::NotFound => html! { <Home /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
