use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::config;
use crate::countdown::{pad2, Countdown, Phase, SystemClock, TICK_INTERVAL_MS};
use crate::ticker::{BrowserScheduler, Ticker};

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    /// `None` when the configured start could not be resolved.
    pub target: Option<DateTime<Utc>>,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let countdown = use_state_eq(|| Countdown::new(props.target));

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |target| {
                let mut current = Countdown::new(*target);
                countdown.set(current);
                log::debug!("Countdown mounted, target {:?}", target);

                let ticker = Ticker::start(&BrowserScheduler, TICK_INTERVAL_MS, move || {
                    if current.tick_with(&SystemClock) {
                        countdown.set(current);
                    }
                });

                move || {
                    log::debug!("Countdown unmounted");
                    drop(ticker);
                }
            },
            props.target,
        );
    }

    let animation = &config::site().animation;
    let blocks = countdown.time_left().blocks();
    let last = blocks.len() - 1;

    html! {
        <div class="countdown">
            <div class="countdown-glow"></div>
            <div class={classes!("countdown-panel", (countdown.phase() == Phase::Started).then(|| "started"))}>
                <h3 class="countdown-heading">{countdown.heading()}</h3>
                <div class="countdown-grid">
                    { for blocks.iter().enumerate().map(|(index, (label, value))| html! {
                        <div class="countdown-block rise" key={*label} style={animation.stagger_style(index)}>
                            <div class="countdown-window">
                                // keyed on the value so each change replays the entrance
                                <div class="countdown-face rise" key={value.to_string()}>
                                    <span class="countdown-value">{pad2(*value)}</span>
                                    <span class="countdown-label">{*label}</span>
                                </div>
                            </div>
                            {
                                if index < last {
                                    html! {
                                        <div class="countdown-dots">
                                            <span></span>
                                            <span></span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
