use yew::prelude::*;
use yew_router::components::Link;

use crate::components::events_list::EventsList;
use crate::components::hot_topics::HotTopics;
use crate::components::research_feed::ResearchFeed;
use crate::components::stats::{Statistic, StatsBand};
use crate::Route;

const FOCUS_TOPICS: [(&str, &str); 6] = [
    ("Climate & Energy", "Decarbonization pathways, energy security and just transitions."),
    ("Global Health", "Pandemic preparedness, health systems and equitable access."),
    ("Trade & Economics", "Supply chains, industrial policy and monetary cooperation."),
    ("Peace & Security", "Conflict prevention, arms control and regional stability."),
    ("Migration", "Mobility, displacement and labour market integration."),
    ("Technology Governance", "AI policy, digital rights and cross-border data flows."),
];

const REGIONS: [&str; 5] = [
    "Africa",
    "Asia-Pacific",
    "Europe",
    "The Americas",
    "Middle East & North Africa",
];

const PARTNERS: [&str; 4] = [
    "Hale School of Public Affairs",
    "Open Data Futures Foundation",
    "Cities for Climate Network",
    "Global Health Policy Lab",
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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

    let stats = vec![
        Statistic {
            value: 50,
            suffix: Some(AttrValue::from("+")),
            label: AttrValue::from("Active research programs"),
        },
        Statistic {
            value: 20,
            suffix: Some(AttrValue::from("+")),
            label: AttrValue::from("Countries engaged"),
        },
        Statistic {
            value: 6,
            suffix: None,
            label: AttrValue::from("Regional offices"),
        },
    ];

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Evidence for the decisions that shape our century"}</h1>
                <p>{"The Meridian Institute is an independent, non-partisan policy research organization working with governments, civil society and industry across six regions."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Research} classes="hero-cta">
                        {"Explore our research"}
                    </Link<Route>>
                    <Link<Route> to={Route::About} classes="hero-cta secondary">
                        {"About the institute"}
                    </Link<Route>>
                </div>
            </section>

            <StatsBand {stats} />

            <HotTopics />

            <ResearchFeed />

            <EventsList limit={3} />

            <section class="focus-areas">
                <h2>{"What we work on"}</h2>
                <div class="focus-grid">
                    {
                        FOCUS_TOPICS.iter().map(|(name, blurb)| html! {
                            <div key={*name} class="focus-card">
                                <h3>{*name}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <h2>{"Where we work"}</h2>
                <div class="region-row">
                    {
                        REGIONS.iter().map(|region| html! {
                            <span key={*region} class="region-chip">{*region}</span>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="partners">
                <h2>{"Working alongside"}</h2>
                <div class="partner-row">
                    {
                        PARTNERS.iter().map(|partner| html! {
                            <span key={*partner} class="partner-name">{*partner}</span>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #0b1120;
                }
                .hero {
                    text-align: center;
                    padding: 7rem 2rem 5rem;
                    max-width: 860px;
                    margin: 0 auto;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero p {
                    font-size: 1.2rem;
                    color: #94a3b8;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .hero-cta {
                    padding: 0.9rem 1.8rem;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                    transition: all 0.3s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                }
                .hero-cta.secondary {
                    background: transparent;
                    border: 1px solid rgba(94, 168, 255, 0.4);
                }
                .focus-areas {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .focus-areas h2 {
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .focus-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 3.5rem;
                }
                .focus-card {
                    padding: 1.5rem;
                    background: rgba(15, 23, 42, 0.85);
                    border: 1px solid rgba(94, 168, 255, 0.1);
                    border-radius: 12px;
                }
                .focus-card h3 {
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .focus-card p {
                    color: #94a3b8;
                    font-size: 0.95rem;
                }
                .region-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.8rem;
                }
                .region-chip {
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(94, 168, 255, 0.3);
                    color: #cbd5e1;
                }
                .partners {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                }
                .partners h2 {
                    color: #64748b;
                    font-size: 1rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }
                .partner-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2.5rem;
                }
                .partner-name {
                    color: #94a3b8;
                    font-size: 1.1rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.3rem;
                    }
                    .hero-actions {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
