use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
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
        <div class="about-page">
            <section class="about-hero">
                <h1>{"About the Meridian Institute"}</h1>
                <p>{"Founded to close the gap between rigorous research and practical policy, the institute brings together economists, scientists and regional specialists under one roof."}</p>
            </section>
            <section class="about-body">
                <h2>{"Our mission"}</h2>
                <p>{"We produce independent, non-partisan analysis on the questions that will define this century: how societies decarbonize, how health systems withstand shocks, how trade adapts to a fragmenting world, and how new technologies are governed. Our work is grounded in field research across six regional offices and shared openly with the public."}</p>
                <h2>{"How we work"}</h2>
                <p>{"Every program pairs resident fellows with practitioners from the region it studies. Findings are published as reports, short briefs and data explainers, and carried into practice through convenings with governments, multilateral bodies and civil society partners."}</p>
                <h2>{"Independence"}</h2>
                <p>{"The institute accepts no funding contingent on findings. Donors are disclosed annually, and all publications carry the names of their authors alone."}</p>
            </section>
            <style>
                {r#"
                .about-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #0b1120;
                }
                .about-hero {
                    text-align: center;
                    padding: 6rem 2rem 2rem;
                }
                .about-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .about-hero p {
                    color: #94a3b8;
                    font-size: 1.1rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .about-body {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 3rem 2rem 6rem;
                }
                .about-body h2 {
                    font-size: 1.8rem;
                    margin: 2.5rem 0 1rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .about-body p {
                    color: #94a3b8;
                    line-height: 1.7;
                }
                "#}
            </style>
        </div>
    }
}
