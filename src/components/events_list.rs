use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

#[derive(Deserialize, Clone, PartialEq)]
struct EventItem {
    id: u32,
    title: String,
    date: String,
    location: String,
    format: String,
}

/// "2026-09-14" -> "September 14, 2026"; anything unparseable is shown raw.
fn display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct EventsListProps {
    /// Show at most this many events (home page preview).
    #[prop_or_default]
    pub limit: Option<usize>,
}

#[function_component(EventsList)]
pub fn events_list(props: &EventsListProps) -> Html {
    let events = use_state(Vec::<EventItem>::new);

    {
        let events = events.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match Request::get(&format!("{}/api/events", config::get_api_url()))
                        .send()
                        .await
                    {
                        Ok(response) => match response.json::<Vec<EventItem>>().await {
                            Ok(list) => events.set(list),
                            Err(e) => log::warn!("Failed to parse events: {}", e),
                        },
                        Err(e) => log::warn!("Failed to fetch events: {}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    let shown = match props.limit {
        Some(limit) => &events[..events.len().min(limit)],
        None => &events[..],
    };

    html! {
        <section class="events-list">
            <h2>{"Upcoming Events"}</h2>
            <div class="events-rows">
                {
                    shown.iter().map(|event| html! {
                        <div key={event.id} class="event-row">
                            <span class="event-date">{display_date(&event.date)}</span>
                            <div class="event-main">
                                <h3>{&event.title}</h3>
                                <p>{&event.location}</p>
                            </div>
                            <span class="event-format">{&event.format}</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .events-list {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .events-list h2 {
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .event-row {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 1.2rem 1.5rem;
                    margin-bottom: 1rem;
                    background: rgba(15, 23, 42, 0.85);
                    border: 1px solid rgba(94, 168, 255, 0.1);
                    border-radius: 12px;
                    transition: all 0.3s ease;
                }
                .event-row:hover {
                    border-color: rgba(94, 168, 255, 0.3);
                }
                .event-date {
                    min-width: 150px;
                    color: #5EA8FF;
                    font-size: 0.95rem;
                }
                .event-main {
                    flex: 1;
                }
                .event-main h3 {
                    color: #fff;
                    margin-bottom: 0.2rem;
                }
                .event-main p {
                    color: #94a3b8;
                    font-size: 0.9rem;
                }
                .event-format {
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(94, 168, 255, 0.15);
                    color: #5EA8FF;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                @media (max-width: 768px) {
                    .event-row {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
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
    fn dates_render_long_form() {
        assert_eq!(display_date("2026-09-14"), "September 14, 2026");
        assert_eq!(display_date("2026-01-02"), "January 2, 2026");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(display_date("Fall 2026"), "Fall 2026");
    }
}
