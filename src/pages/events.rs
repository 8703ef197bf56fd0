use yew::prelude::*;

use crate::components::events_list::EventsList;

#[function_component(Events)]
pub fn events() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="events-page">
            <section class="events-hero">
                <h1>{"Events"}</h1>
                <p>{"Convenings, briefings and public lectures hosted by the institute and its regional offices."}</p>
            </section>
            <EventsList />
            <style>
                {r#"
                .events-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #0b1120;
                }
                .events-hero {
                    text-align: center;
                    padding: 6rem 2rem 2rem;
                }
                .events-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .events-hero p {
                    color: #94a3b8;
                    font-size: 1.1rem;
                    max-width: 600px;
                    margin: 0 auto;
                }
                "#}
            </style>
        </div>
    }
}
