use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

#[derive(Deserialize, Clone, PartialEq)]
struct HotTopic {
    id: u32,
    label: String,
    desc: String,
    href: String,
}

#[function_component(HotTopics)]
pub fn hot_topics() -> Html {
    let topics = use_state(Vec::<HotTopic>::new);

    {
        let topics = topics.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match Request::get(&format!("{}/api/hot-topics", config::get_api_url()))
                        .send()
                        .await
                    {
                        Ok(response) => match response.json::<Vec<HotTopic>>().await {
                            Ok(list) => topics.set(list),
                            Err(e) => log::warn!("Failed to parse hot topics: {}", e),
                        },
                        Err(e) => log::warn!("Failed to fetch hot topics: {}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section class="hot-topics">
            <h2>{"Hot Topics"}</h2>
            <div class="hot-topics-grid">
                {
                    topics.iter().map(|topic| html! {
                        <a key={topic.id} class="hot-topic-card" href={topic.href.clone()}>
                            <h3>{&topic.label}</h3>
                            <p>{&topic.desc}</p>
                        </a>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .hot-topics {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .hot-topics h2 {
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hot-topics-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .hot-topic-card {
                    display: block;
                    padding: 1.5rem;
                    background: rgba(15, 23, 42, 0.85);
                    border: 1px solid rgba(94, 168, 255, 0.1);
                    border-radius: 12px;
                    text-decoration: none;
                    color: inherit;
                    transition: all 0.3s ease;
                }
                .hot-topic-card:hover {
                    border-color: rgba(94, 168, 255, 0.3);
                    transform: translateY(-4px);
                }
                .hot-topic-card h3 {
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .hot-topic-card p {
                    color: #94a3b8;
                    font-size: 0.95rem;
                }
                "#}
            </style>
        </section>
    }
}
