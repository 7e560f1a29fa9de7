use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{window, Document, Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::animation::smooth_scroll::{
    anchor_target, parse_px, section_offset, AnchorTarget, ScrollTween,
};
use crate::config::{FRAME_INTERVAL_MS, SMOOTH_SCROLL_DURATION_MS};

/// At most one tween runs at a time; starting a new one drops the old timer.
#[derive(Default)]
struct TweenSlot {
    interval: Option<Interval>,
    generation: u64,
}

fn clicked_anchor_href(event: &MouseEvent) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a[href^='#']").ok()??;
    anchor.get_attribute("href")
}

fn offset_chain(element: &HtmlElement) -> Vec<i32> {
    let mut chain = Vec::new();
    let mut current = Some(element.clone());
    while let Some(node) = current {
        chain.push(node.offset_top());
        current = node
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    chain
}

fn destination(document: &Document, target: &AnchorTarget) -> Option<f64> {
    match target {
        AnchorTarget::Top => Some(0.0),
        AnchorTarget::Section(id) => {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            // `scroll_to` ignores scroll-margin, so apply it by hand.
            let scroll_margin = window()?
                .get_computed_style(&element)
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value("scroll-margin-top").ok())
                .map(|value| parse_px(&value))
                .unwrap_or(0.0);
            Some(section_offset(offset_chain(&element), scroll_margin))
        }
    }
}

fn start_tween(slot: &Rc<RefCell<TweenSlot>>, to: f64) {
    let Some(win) = window() else { return };
    let from = win.scroll_y().unwrap_or(0.0);
    let tween = ScrollTween::new(from, to, SMOOTH_SCROLL_DURATION_MS);
    let started = Date::now();

    let generation = {
        let mut slot = slot.borrow_mut();
        slot.generation += 1;
        slot.interval.take();
        slot.generation
    };

    let interval = {
        let slot = slot.clone();
        Interval::new(FRAME_INTERVAL_MS, move || {
            let elapsed = Date::now() - started;
            win.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
            if tween.is_done(elapsed) {
                let slot = slot.clone();
                Timeout::new(0, move || {
                    let mut slot = slot.borrow_mut();
                    if slot.generation == generation {
                        slot.interval.take();
                    }
                })
                .forget();
            }
        })
    };

    slot.borrow_mut().interval = Some(interval);
}

/// Animates in-page anchor jumps (`href="#pricing"`, `href="#"`). Installs one
/// document-level click listener for the lifetime of the calling component.
#[hook]
pub fn use_smooth_anchor_scroll() {
    use_effect_with_deps(
        move |_| {
            let slot: Rc<RefCell<TweenSlot>> = Rc::default();

            let listener = window().and_then(|win| win.document()).map(|document| {
                let on_click = {
                    let slot = slot.clone();
                    let document = document.clone();
                    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                        let Some(href) = clicked_anchor_href(&event) else { return };
                        let Some(target) = anchor_target(&href) else { return };
                        if let Some(to) = destination(&document, &target) {
                            event.prevent_default();
                            debug!("smooth scrolling to {} ({}px)", href, to);
                            start_tween(&slot, to);
                        }
                    })
                };
                let _ = document
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                (document, on_click)
            });

            move || {
                if let Some((document, on_click)) = listener {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        on_click.as_ref().unchecked_ref(),
                    );
                }
                slot.borrow_mut().interval.take();
            }
        },
        (),
    );
}
