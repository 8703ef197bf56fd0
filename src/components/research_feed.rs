use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

const ITEMS_PER_PAGE: usize = 3;

#[derive(Deserialize, Clone, PartialEq)]
struct ResearchItem {
    id: u32,
    #[serde(rename = "type")]
    kind: String,
    title: String,
    subtitle: Option<String>,
    author: String,
    date: String,
    #[serde(rename = "imageUrl")]
    image_url: String,
    excerpt: String,
    body: String,
}

fn page_count(items: usize, per_page: usize) -> usize {
    if items == 0 {
        0
    } else {
        (items + per_page - 1) / per_page
    }
}

#[function_component(ResearchFeed)]
pub fn research_feed() -> Html {
    let items = use_state(Vec::<ResearchItem>::new);
    let page = use_state(|| 0usize);
    let expanded = use_state(|| None::<u32>);

    {
        let items = items.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match Request::get(&format!("{}/api/research", config::get_api_url()))
                        .send()
                        .await
                    {
                        Ok(response) => match response.json::<Vec<ResearchItem>>().await {
                            Ok(list) => items.set(list),
                            Err(e) => log::warn!("Failed to parse research items: {}", e),
                        },
                        Err(e) => log::warn!("Failed to fetch research items: {}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    let pages = page_count(items.len(), ITEMS_PER_PAGE);
    let current = (*page).min(pages.saturating_sub(1));

    let prev = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set(page.saturating_sub(1));
        })
    };
    let next = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if *page + 1 < pages {
                page.set(*page + 1);
            }
        })
    };

    let visible_items = items
        .iter()
        .skip(current * ITEMS_PER_PAGE)
        .take(ITEMS_PER_PAGE);

    html! {
        <section class="research-feed">
            <div class="research-feed-header">
                <h2>{"Latest Research"}</h2>
                if pages > 1 {
                    <div class="research-feed-controls">
                        <button onclick={prev} disabled={current == 0}>{"‹"}</button>
                        <button onclick={next} disabled={current + 1 >= pages}>{"›"}</button>
                    </div>
                }
            </div>
            <div class="research-grid">
                {
                    visible_items.map(|item| {
                        let is_open = *expanded == Some(item.id);
                        let toggle = {
                            let expanded = expanded.clone();
                            let id = item.id;
                            Callback::from(move |_: MouseEvent| {
                                expanded.set(if *expanded == Some(id) { None } else { Some(id) });
                            })
                        };
                        html! {
                            <article key={item.id} class="research-card">
                                <img src={item.image_url.clone()} alt={item.title.clone()} loading="lazy" />
                                <span class="research-kind">{&item.kind}</span>
                                <h3>{&item.title}</h3>
                                if let Some(subtitle) = &item.subtitle {
                                    <h4>{subtitle}</h4>
                                }
                                <p class="research-byline">{format!("{} · {}", item.author, item.date)}</p>
                                <p class="research-excerpt">{&item.excerpt}</p>
                                if is_open {
                                    <p class="research-body">{&item.body}</p>
                                }
                                <button class="research-read-more" onclick={toggle}>
                                    { if is_open { "Show less" } else { "Read more" } }
                                </button>
                            </article>
                        }
                    }).collect::<Html>()
                }
            </div>
            if pages > 1 {
                <div class="research-dots">
                    {
                        (0..pages).map(|i| {
                            let page = page.clone();
                            let go = Callback::from(move |_: MouseEvent| page.set(i));
                            html! {
                                <button
                                    key={i}
                                    class={classes!("research-dot", (i == current).then_some("active"))}
                                    onclick={go}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            }
            <style>
                {r#"
                .research-feed {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .research-feed-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }
                .research-feed-header h2 {
                    font-size: 2.2rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .research-feed-controls button {
                    width: 40px;
                    height: 40px;
                    margin-left: 0.5rem;
                    border-radius: 50%;
                    border: 1px solid rgba(94, 168, 255, 0.3);
                    background: transparent;
                    color: #fff;
                    font-size: 1.3rem;
                    cursor: pointer;
                }
                .research-feed-controls button:disabled {
                    opacity: 0.3;
                    cursor: default;
                }
                .research-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .research-card {
                    background: rgba(15, 23, 42, 0.85);
                    border: 1px solid rgba(94, 168, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                    padding-bottom: 1.5rem;
                    transition: all 0.3s ease;
                }
                .research-card:hover {
                    border-color: rgba(94, 168, 255, 0.3);
                }
                .research-card img {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                    display: block;
                    margin-bottom: 1rem;
                }
                .research-kind {
                    display: inline-block;
                    margin: 0 1.5rem 0.5rem;
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(94, 168, 255, 0.15);
                    color: #5EA8FF;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .research-card h3 {
                    color: #fff;
                    padding: 0 1.5rem;
                    margin-bottom: 0.3rem;
                }
                .research-card h4 {
                    color: #cbd5e1;
                    font-weight: 400;
                    padding: 0 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .research-byline {
                    color: #64748b;
                    font-size: 0.85rem;
                    padding: 0 1.5rem;
                    margin-bottom: 0.8rem;
                }
                .research-excerpt, .research-body {
                    color: #94a3b8;
                    padding: 0 1.5rem;
                    margin-bottom: 0.8rem;
                }
                .research-read-more {
                    margin: 0 1.5rem;
                    background: none;
                    border: none;
                    color: #5EA8FF;
                    cursor: pointer;
                    padding: 0;
                    font-size: 0.95rem;
                }
                .research-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                    margin-top: 2rem;
                }
                .research-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(148, 163, 184, 0.4);
                    cursor: pointer;
                }
                .research-dot.active {
                    background: #5EA8FF;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 3), 0);
        assert_eq!(page_count(1, 3), 1);
        assert_eq!(page_count(3, 3), 1);
        assert_eq!(page_count(4, 3), 2);
        assert_eq!(page_count(9, 3), 3);
        assert_eq!(page_count(10, 3), 4);
    }

    #[test]
    fn research_items_accept_wire_field_names() {
        let json = r#"{
            "id": 7,
            "type": "report",
            "title": "Energy transitions in the Sahel",
            "subtitle": null,
            "author": "A. Diallo",
            "date": "2026-05-11",
            "imageUrl": "/assets/sahel.webp",
            "excerpt": "Short version.",
            "body": "Long version."
        }"#;
        let item: ResearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, "report");
        assert_eq!(item.image_url, "/assets/sahel.webp");
        assert!(item.subtitle.is_none());
    }
}
