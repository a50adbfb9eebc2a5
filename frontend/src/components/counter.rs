use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use yew::prelude::*;

use crate::components::reveal::use_seen_once;
use crate::config;
use crate::motion::{Spring, SpringConfig};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum CountDirection {
    #[default]
    Up,
    #[allow(dead_code)]
    Down,
}

impl CountDirection {
    /// `(start, end)` of the animation for a counter showing `value`.
    pub fn endpoints(self, value: f64) -> (f64, f64) {
        match self {
            CountDirection::Up => (0.0, value),
            CountDirection::Down => (value, 0.0),
        }
    }
}

pub fn counter_label(value: f64, decimals: usize, suffix: &str) -> String {
    format!("{:.*}{}", decimals, value, suffix)
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub value: f64,
    #[prop_or_default]
    pub direction: CountDirection,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub decimals: usize,
}

/// Number that springs from its start value to its end value the first time
/// it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let (start, end) = props.direction.endpoints(props.value);
    let node = use_node_ref();
    let shown = use_seen_once(node.clone());
    let current = use_state(|| start);

    // Drive the spring once visible.
    {
        let current = current.clone();
        use_effect_with_deps(
            move |visible| {
                let frames: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *visible {
                    let mut spring = Spring::new(start, end, SpringConfig::default());
                    debug!("Counter animating {} -> {}", spring.position(), spring.target());
                    let dt = f64::from(config::COUNTER_FRAME_MS) / 1000.0;
                    let handle = frames.clone();
                    let interval = Interval::new(config::COUNTER_FRAME_MS, move || {
                        current.set(spring.step(dt));
                        if spring.is_settled() {
                            // The interval cannot be dropped from inside its own callback.
                            if let Some(interval) = handle.borrow_mut().take() {
                                Timeout::new(0, move || drop(interval)).forget();
                            }
                        }
                    });
                    *frames.borrow_mut() = Some(interval);
                }
                move || {
                    frames.borrow_mut().take();
                }
            },
            shown,
        );
    }

    html! {
        <span ref={node} class="counter">
            { counter_label(*current, props.decimals, &props.suffix) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_stat_cards() {
        assert_eq!(counter_label(98.0, 0, "%"), "98%");
        assert_eq!(counter_label(5.4, 1, "k"), "5.4k");
        assert_eq!(counter_label(15.0, 0, " Years"), "15 Years");
    }

    #[test]
    fn labels_round_mid_animation() {
        assert_eq!(counter_label(42.6, 0, "%"), "43%");
        assert_eq!(counter_label(2.04, 1, "k"), "2.0k");
    }

    #[test]
    fn direction_picks_endpoints() {
        assert_eq!(CountDirection::Up.endpoints(15.0), (0.0, 15.0));
        assert_eq!(CountDirection::Down.endpoints(15.0), (15.0, 0.0));
        assert_eq!(CountDirection::default(), CountDirection::Up);
    }
}
