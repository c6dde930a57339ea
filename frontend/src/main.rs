use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod models {
    pub mod carousel;
    pub mod contact_form;
    pub mod portfolio;
}
mod utils {
    pub mod dom;
    pub mod timer;
    pub mod visibility;
}
mod components {
    pub mod common;
    pub mod contact;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod portfolio;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => {
            log::debug!("Unknown route, rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting {} frontend", content::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
