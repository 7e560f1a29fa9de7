use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use yew::prelude::*;

use crate::animation::count_up::CountUp;
use crate::components::icons::{Icon, IconView};
use crate::config::{COUNT_UP_DURATION_MS, FRAME_INTERVAL_MS};

/// Counts from 0 to `target` over `duration_ms`. The frame timer belongs to
/// the calling component: it stops on the last frame or when the component
/// unmounts, whichever comes first.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32) -> u32 {
    let count = use_state_eq(|| 0u32);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |&(target, duration_ms)| {
                count.set(0);
                let mut counter = CountUp::new(target, duration_ms);
                debug!("counting up to {} over {} frames", target, counter.total_frames());
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                let interval = {
                    let handle = handle.clone();
                    Interval::new(FRAME_INTERVAL_MS, move || {
                        if counter.tick().is_some() {
                            count.set(counter.value());
                            if counter.is_finished() {
                                // Can't drop the interval from inside its own tick.
                                let handle = handle.clone();
                                Timeout::new(0, move || {
                                    handle.borrow_mut().take();
                                })
                                .forget();
                            }
                        }
                    })
                };
                *handle.borrow_mut() = Some(interval);

                move || {
                    handle.borrow_mut().take();
                }
            },
            (target, duration_ms),
        );
    }

    *count
}

#[derive(Properties, PartialEq)]
pub struct AnimatedStatProps {
    pub value: u32,
    pub label: AttrValue,
    pub icon: Icon,
    #[prop_or(COUNT_UP_DURATION_MS)]
    pub duration_ms: u32,
}

#[function_component(AnimatedStat)]
pub fn animated_stat(props: &AnimatedStatProps) -> Html {
    let count = use_count_up(props.value, props.duration_ms);

    html! {
        <div class="stat-card">
            <div class="stat-value font-heading">{ format!("{}+", count) }</div>
            <div class="stat-label">
                <IconView icon={props.icon} size={32} class={classes!("text-orange-soft")} />
                <p>{ props.label.clone() }</p>
            </div>
        </div>
    }
}
