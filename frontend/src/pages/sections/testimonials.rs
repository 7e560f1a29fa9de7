use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealMotion};
use crate::content::{Testimonial, TESTIMONIALS};

pub const ID: &str = "testimonials";

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <figure class="testimonial-card">
            <blockquote>{ format!("“{}”", testimonial.quote) }</blockquote>
            <figcaption>
                <span class="testimonial-avatar">{testimonial.initials}</span>
                <span class="testimonial-name">{testimonial.name}</span>
            </figcaption>
        </figure>
    }
}

/// One scrolling column. The list is rendered twice so the loop has no seam;
/// the second copy is hidden from assistive tech.
fn marquee_column(items: &[Testimonial], direction: &'static str) -> Html {
    html! {
        <div class="marquee-column">
            <div class={classes!("marquee-track", direction)}>
                <div class="marquee-group">
                    { for items.iter().map(testimonial_card) }
                </div>
                <div class="marquee-group" aria-hidden="true">
                    { for items.iter().map(testimonial_card) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let (first, second) = TESTIMONIALS.split_at(TESTIMONIALS.len() / 2);

    html! {
        <section id={ID} class="page-section">
            <div class="container">
                <div class="section-header">
                    <Reveal motion={RevealMotion::Up}>
                        <h2 class="section-title font-heading">{"What Our Clients Say"}</h2>
                    </Reveal>
                    <Reveal motion={RevealMotion::Up} delay_ms={100}>
                        <p class="section-subtitle">
                            {"Real words from creators and brands we’ve edited for."}
                        </p>
                    </Reveal>
                </div>
                <div class="marquee">
                    { marquee_column(first, "marquee-up") }
                    { marquee_column(second, "marquee-down") }
                </div>
            </div>
            <style>
                {r#"
                    .marquee {
                        display: grid;
                        gap: 1.5rem;
                        height: 36rem;
                        margin-top: 3.5rem;
                        overflow: hidden;
                        mask-image: linear-gradient(to bottom, transparent, #000 15%, #000 85%, transparent);
                        -webkit-mask-image: linear-gradient(to bottom, transparent, #000 15%, #000 85%, transparent);
                    }
                    @media (min-width: 768px) {
                        .marquee { grid-template-columns: repeat(2, 1fr); }
                    }
                    .marquee-column { overflow: hidden; }
                    .marquee-track {
                        display: flex;
                        flex-direction: column;
                    }
                    .marquee-track:hover { animation-play-state: paused; }
                    .marquee-up { animation: marquee-up 30s linear infinite; }
                    .marquee-down { animation: marquee-down 30s linear infinite; }
                    .marquee-group {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding-bottom: 1.5rem;
                    }
                    @keyframes marquee-up {
                        from { transform: translateY(0); }
                        to { transform: translateY(-50%); }
                    }
                    @keyframes marquee-down {
                        from { transform: translateY(-50%); }
                        to { transform: translateY(0); }
                    }
                    .testimonial-card {
                        margin: 0;
                        background: rgba(23, 23, 23, 0.6);
                        border: 1px solid #262626;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                    }
                    .testimonial-card blockquote {
                        margin: 0;
                        color: #d4d4d4;
                        line-height: 1.6;
                    }
                    .testimonial-card figcaption {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 1rem;
                    }
                    .testimonial-avatar {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #f97316, #06b6d4);
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }
                    .testimonial-name {
                        color: #fff;
                        font-weight: 600;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .marquee-up, .marquee-down { animation: none; }
                    }
                "#}
            </style>
        </section>
    }
}
