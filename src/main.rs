use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod events_list;
    pub mod hot_topics;
    pub mod research_feed;
    pub mod stats;
    pub mod visibility;
}
mod pages {
    pub mod about;
    pub mod events;
    pub mod home;
    pub mod research;
}

use pages::{about::About, events::Events, home::Home, research::Research};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/research")]
    Research,
    #[at("/events")]
    Events,
    #[at("/about")]
    About,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Research => {
            info!("Rendering Research page");
            html! { <Research /> }
        }
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="top-nav-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    {"Meridian Institute"}
                </Link<Route>>
                <div class="nav-links">
                    <Link<Route> to={Route::Research} classes="nav-link">{"Research"}</Link<Route>>
                    <Link<Route> to={Route::Events} classes="nav-link">{"Events"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(11, 17, 32, 0.9);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(94, 168, 255, 0.1);
                }
                .top-nav-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1.2rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.2rem;
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    gap: 1.8rem;
                }
                .nav-link {
                    color: #94a3b8;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
