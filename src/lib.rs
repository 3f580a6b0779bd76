use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod charts;
pub mod observe;
pub mod settings;

use charts::theme::ThemePreset;
use components::portfolio::PortfolioPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering portfolio page (midnight)");
            html! { <PortfolioPage preset={ThemePreset::Midnight} /> }
        }
        Route::Classic => {
            log::trace!("Rendering portfolio page (ember)");
            html! { <PortfolioPage preset={ThemePreset::Ember} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <main class="not-found"><h1>{"404 Not Found"}</h1></main> }
        }
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

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Portfolio Frontend Starting ===");
    log::debug!("Application settings: {:?}", settings);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
