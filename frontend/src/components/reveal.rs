use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::reveal::{RevealLatch, RevealOptions, Transition};

/// Live `IntersectionObserver` registration. Dropping it disconnects the
/// observer and releases the JS callback.
struct RevealWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch_once(
    element: &Element,
    options: &RevealOptions,
    on_reveal: impl Fn() + 'static,
) -> Result<RevealWatch, JsValue> {
    let latch = Rc::new(Cell::new(RevealLatch::default()));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });

            let mut state = latch.get();
            if state.observe(intersecting) == Transition::Revealed {
                latch.set(state);
                observer.disconnect();
                on_reveal();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(RevealWatch {
        observer,
        _callback: callback,
    })
}

/// Returns `true` once the referenced element has been on screen, and stays
/// `true` for the lifetime of the component.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let on_reveal = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    match watch_once(&element, &options, on_reveal) {
                        Ok(watch) => Some(watch),
                        Err(err) => {
                            warn!("intersection observer unavailable, showing content: {:?}", err);
                            revealed.set(true);
                            None
                        }
                    }
                });

                move || drop(watch)
            },
            node,
        );
    }

    *revealed
}

/// Wraps a page section in a one-shot fade and slide-up.
#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::section());

    html! {
        <div ref={node} class={classes!("animated-section", revealed.then_some("is-visible"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum RevealMotion {
    #[default]
    Up,
    Left,
    Right,
    Fade,
}

impl RevealMotion {
    pub fn class(self) -> &'static str {
        match self {
            RevealMotion::Up => "reveal-up",
            RevealMotion::Left => "reveal-left",
            RevealMotion::Right => "reveal-right",
            RevealMotion::Fade => "reveal-fade",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub motion: RevealMotion,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Element-level entrance used inside sections (list items, portraits).
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());
    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div
            ref={node}
            style={style}
            class={classes!(
                "reveal",
                props.motion.class(),
                revealed.then_some("is-visible"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motions_map_to_distinct_classes() {
        assert_eq!(RevealMotion::default().class(), "reveal-up");
        assert_ne!(RevealMotion::Left.class(), RevealMotion::Right.class());
        assert_eq!(RevealMotion::Fade.class(), "reveal-fade");
    }
}
