use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::particles::BackgroundElements;
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::config::HERO_WORD_INTERVAL_MS;
use crate::content::HERO_WORDS;

use super::{about, features};

/// Index of the highlighted word in the rotating headline.
#[derive(Debug, Default, PartialEq)]
struct WordCycle {
    index: usize,
}

impl Reducible for WordCycle {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self {
            index: (self.index + 1) % HERO_WORDS.len(),
        })
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let cycle = use_reducer(WordCycle::default);

    {
        let cycle = cycle.dispatcher();
        use_interval(move || cycle.dispatch(()), HERO_WORD_INTERVAL_MS);
    }

    html! {
        <section class="hero">
            <BackgroundElements />
            <div class="hero-inner container">
                <div class="hero-copy animate-slide-in-up">
                    <div class="hero-pill">{"Professional Video Editing Service"}</div>
                    <h1 class="hero-title font-heading glitch" data-text="Craft Your Cinematic Masterpiece">
                        {"Craft Your Cinematic "}
                        <span class="word-slot">
                            { for HERO_WORDS.iter().enumerate().map(|(index, word)| html! {
                                <span class={classes!("rotating-word", (index == cycle.index).then_some("is-active"))}>
                                    {*word}
                                </span>
                            }) }
                        </span>
                    </h1>
                    <p class="hero-subtitle">
                        {"From raw footage to breathtaking final cuts. We bring your vision to life with professional editing, color grading, and sound design."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={format!("#{}", features::ID)}>
                            <Button size={ButtonSize::Lg}>{"Get Started Now"}</Button>
                        </a>
                        <a href={format!("#{}", about::ID)}>
                            <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline}>
                                <IconView icon={Icon::Film} size={20} class={classes!("btn-leading-icon")} />
                                {"View Our Work"}
                            </Button>
                        </a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        width: 100%;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 10;
                    }
                    .hero-copy {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero-pill {
                        display: inline-block;
                        border-radius: 9999px;
                        background: rgba(23, 23, 23, 0.5);
                        border: 1px solid #404040;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        color: #f97316;
                        margin-bottom: 1rem;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        line-height: 1.15;
                        color: #fff;
                    }
                    .word-slot {
                        position: relative;
                        display: inline-block;
                        height: 1.2em;
                        width: 14ch;
                        overflow: hidden;
                        vertical-align: bottom;
                    }
                    .rotating-word {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        color: #f97316;
                        opacity: 0;
                        transform: translateY(100%);
                        transition: all 0.5s ease-in-out;
                    }
                    .rotating-word.is-active {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .hero-subtitle {
                        margin: 1.5rem auto 0;
                        max-width: 42rem;
                        font-size: 1.25rem;
                        color: #d4d4d4;
                    }
                    .hero-cta-group {
                        margin-top: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                    }
                    @media (min-width: 640px) {
                        .hero-cta-group { flex-direction: row; }
                    }
                    .btn-leading-icon {
                        margin-right: 0.5rem;
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
    fn word_cycle_wraps_around() {
        let mut cycle = Rc::new(WordCycle::default());
        let mut seen = Vec::new();
        for _ in 0..HERO_WORDS.len() + 1 {
            seen.push(cycle.index);
            cycle = cycle.reduce(());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }
}
