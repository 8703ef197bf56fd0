use yew::prelude::*;

use crate::components::research_feed::ResearchFeed;

#[function_component(Research)]
pub fn research() -> Html {
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
        <div class="research-page">
            <section class="research-hero">
                <h1>{"Research"}</h1>
                <p>{"Reports, briefs and commentary from Meridian Institute fellows and visiting scholars."}</p>
            </section>
            <ResearchFeed />
            <style>
                {r#"
                .research-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #0b1120;
                }
                .research-hero {
                    text-align: center;
                    padding: 6rem 2rem 2rem;
                }
                .research-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .research-hero p {
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
