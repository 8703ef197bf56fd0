use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::visibility::use_in_view;

/// Gap between neighbouring cards' activation, giving the cascade look.
pub const STAGGER_STEP_MS: u32 = 90;
/// How long one count-up run takes.
pub const COUNT_DURATION_MS: f64 = 900.0;
/// Fraction of the band that has to be on screen before the cascade starts.
const VIEW_THRESHOLD: f64 = 0.35;

#[derive(Clone, PartialEq)]
pub struct Statistic {
    pub value: u32,
    pub suffix: Option<AttrValue>,
    pub label: AttrValue,
}

/// Per-card lifecycle. Only Waiting and Counting have scheduled callbacks
/// behind them; Idle and Settled are at rest.
#[derive(Clone, Copy, PartialEq, Debug)]
enum CountPhase {
    Idle,
    Waiting,
    Counting,
    Settled,
}

impl CountPhase {
    /// Phase after the group's visibility signal changes. Losing visibility
    /// drops every phase straight back to Idle so the cascade can replay.
    fn on_visibility(self, visible: bool) -> Self {
        match (visible, self) {
            (false, _) => CountPhase::Idle,
            (true, CountPhase::Idle) => CountPhase::Waiting,
            (true, other) => other,
        }
    }

    /// Value to show when no animation frame is driving the number.
    /// Counting returns None: the tween owns the display then.
    fn resting_display(self, target: u32) -> Option<u32> {
        match self {
            CountPhase::Idle | CountPhase::Waiting => Some(0),
            CountPhase::Settled => Some(target),
            CountPhase::Counting => None,
        }
    }
}

fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Displayed value `elapsed_ms` into a run towards `target`.
/// Progress is clamped to [0, 1], so the run lands on `target` exactly and
/// floating-point overshoot past the duration cannot exceed it.
pub fn counted_value(elapsed_ms: f64, duration_ms: f64, target: u32) -> u32 {
    let p = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (ease_out_cubic(p) * f64::from(target)).round() as u32
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
    pub label: AttrValue,
    pub index: usize,
    pub visible: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let phase = use_state(|| CountPhase::Idle);
    let shown = use_state(|| 0u32);

    // Stagger: visibility gained arms a one-shot timer, visibility lost
    // cancels it (dropped in cleanup) and snaps everything back to zero.
    {
        let phase = phase.clone();
        let shown = shown.clone();
        let phase_now = *phase;
        let index = props.index;
        use_effect_with_deps(
            move |visible| {
                let next = phase_now.on_visibility(*visible);
                phase.set(next);

                let mut pending = None;
                match next {
                    CountPhase::Waiting => {
                        let phase = phase.clone();
                        pending = Some(Timeout::new(stagger_delay_ms(index), move || {
                            phase.set(CountPhase::Counting);
                        }));
                    }
                    CountPhase::Idle => shown.set(0),
                    _ => {}
                }

                move || drop(pending)
            },
            props.visible,
        );
    }

    // Count-up: while Counting, a self-rescheduling animation-frame chain
    // tweens the number; the pending frame is cancelled whenever the phase
    // moves on, the target changes, or the card unmounts.
    {
        let phase = phase.clone();
        let shown = shown.clone();
        let deps = (*phase, props.value);
        use_effect_with_deps(
            move |(phase_now, target)| {
                let target = *target;
                let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                let frame_id = Rc::new(Cell::new(None::<i32>));

                if *phase_now == CountPhase::Counting {
                    let started = Cell::new(None::<f64>);
                    let frame_inner = frame.clone();
                    let frame_id_inner = frame_id.clone();
                    *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                        let began = match started.get() {
                            Some(t) => t,
                            None => {
                                started.set(Some(timestamp));
                                timestamp
                            }
                        };
                        let elapsed = timestamp - began;
                        shown.set(counted_value(elapsed, COUNT_DURATION_MS, target));

                        if elapsed < COUNT_DURATION_MS {
                            if let Some(callback) = frame_inner.borrow().as_ref() {
                                frame_id_inner.set(request_frame(callback));
                            }
                        } else {
                            phase.set(CountPhase::Settled);
                        }
                    }));

                    if let Some(callback) = frame.borrow().as_ref() {
                        frame_id.set(request_frame(callback));
                    }
                }

                move || {
                    if let Some(id) = frame_id.get() {
                        cancel_frame(id);
                    }
                    // Drop the closure; it holds an Rc back to its own cell.
                    frame.borrow_mut().take();
                }
            },
            deps,
        );
    }

    // A card that is not visible shows 0 in the same render that the
    // visibility prop drops, before any effect runs.
    let display = if !props.visible {
        0
    } else {
        (*phase).resting_display(props.value).unwrap_or(*shown)
    };

    let number = match props.suffix.as_ref() {
        Some(suffix) => format!("{}{}", display, suffix),
        None => display.to_string(),
    };

    let engaged =
        props.visible && matches!(*phase, CountPhase::Counting | CountPhase::Settled);

    html! {
        <div class={classes!("stat-card", engaged.then_some("live"))}>
            <span class="stat-number">{number}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window()
        .and_then(|window| window.request_animation_frame(callback.as_ref().unchecked_ref()).ok())
}

fn cancel_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(id);
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsBandProps {
    pub stats: Vec<Statistic>,
}

/// The band owns the observed node; every card reads the one shared
/// visibility signal and runs its own timer and frame chain.
#[function_component(StatsBand)]
pub fn stats_band(props: &StatsBandProps) -> Html {
    let band = use_node_ref();
    let visible = use_in_view(band.clone(), VIEW_THRESHOLD);

    html! {
        <section ref={band} class="stats-band">
            <div class="stats-band-inner">
                {
                    props.stats.iter().enumerate().map(|(index, stat)| html! {
                        <StatCard
                            key={index}
                            value={stat.value}
                            suffix={stat.suffix.clone()}
                            label={stat.label.clone()}
                            {index}
                            {visible}
                        />
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .stats-band {
                    padding: 4rem 2rem;
                    background: rgba(15, 23, 42, 0.85);
                    border-top: 1px solid rgba(94, 168, 255, 0.1);
                    border-bottom: 1px solid rgba(94, 168, 255, 0.1);
                }
                .stats-band-inner {
                    max-width: 900px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-around;
                    gap: 2rem;
                }
                .stat-card {
                    text-align: center;
                    opacity: 0;
                    transform: translateY(14px);
                    transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                }
                .stat-card.live {
                    opacity: 1;
                    transform: translateY(0);
                }
                .stat-number {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #fff, #5EA8FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .stat-label {
                    display: block;
                    margin-top: 0.5rem;
                    color: #94a3b8;
                    font-size: 1rem;
                }
                @media (max-width: 768px) {
                    .stats-band-inner {
                        flex-direction: column;
                        gap: 2.5rem;
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
    fn run_lands_exactly_on_target() {
        assert_eq!(counted_value(COUNT_DURATION_MS, COUNT_DURATION_MS, 50), 50);
        assert_eq!(counted_value(COUNT_DURATION_MS + 0.1, COUNT_DURATION_MS, 20), 20);
        assert_eq!(counted_value(5000.0, COUNT_DURATION_MS, 6), 6);
    }

    #[test]
    fn run_starts_at_zero() {
        assert_eq!(counted_value(0.0, COUNT_DURATION_MS, 50), 0);
        assert_eq!(counted_value(-16.0, COUNT_DURATION_MS, 50), 0);
    }

    #[test]
    fn zero_target_never_moves() {
        for elapsed in [0.0, 100.0, 450.0, 900.0, 2000.0] {
            assert_eq!(counted_value(elapsed, COUNT_DURATION_MS, 0), 0);
        }
    }

    #[test]
    fn displayed_value_is_monotonic() {
        let mut last = 0;
        let mut elapsed = 0.0;
        while elapsed <= COUNT_DURATION_MS {
            let value = counted_value(elapsed, COUNT_DURATION_MS, 50);
            assert!(value >= last, "value regressed at {}ms", elapsed);
            assert!(value <= 50);
            last = value;
            elapsed += 7.0;
        }
        assert_eq!(last, 50);
    }

    #[test]
    fn ease_out_cubic_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Decelerating: the first half covers most of the distance.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn stagger_grows_by_step_per_card() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 90);
        assert_eq!(stagger_delay_ms(2), 180);
    }

    #[test]
    fn visibility_loss_resets_every_phase() {
        for phase in [
            CountPhase::Idle,
            CountPhase::Waiting,
            CountPhase::Counting,
            CountPhase::Settled,
        ] {
            assert_eq!(phase.on_visibility(false), CountPhase::Idle);
        }
    }

    #[test]
    fn visibility_gain_only_arms_idle_cards() {
        assert_eq!(CountPhase::Idle.on_visibility(true), CountPhase::Waiting);
        assert_eq!(CountPhase::Waiting.on_visibility(true), CountPhase::Waiting);
        assert_eq!(CountPhase::Counting.on_visibility(true), CountPhase::Counting);
        assert_eq!(CountPhase::Settled.on_visibility(true), CountPhase::Settled);
    }

    #[test]
    fn resting_display_matches_phase_contract() {
        assert_eq!(CountPhase::Idle.resting_display(50), Some(0));
        assert_eq!(CountPhase::Waiting.resting_display(50), Some(0));
        assert_eq!(CountPhase::Counting.resting_display(50), None);
        assert_eq!(CountPhase::Settled.resting_display(50), Some(50));
    }

    #[test]
    fn replay_starts_from_scratch() {
        // A reset run has no memory: the same elapsed times give the same
        // values a second time around.
        let first: Vec<u32> = (0..10)
            .map(|i| counted_value(f64::from(i) * 100.0, COUNT_DURATION_MS, 50))
            .collect();
        let second: Vec<u32> = (0..10)
            .map(|i| counted_value(f64::from(i) * 100.0, COUNT_DURATION_MS, 50))
            .collect();
        assert_eq!(first, second);
    }
}
