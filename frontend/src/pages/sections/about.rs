use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{Reveal, RevealMotion};
use crate::components::ui::{Badge, Button, ButtonSize};
use crate::content::{Person, ABOUT_IMAGE, FOUNDERS};

use super::contact;

pub const ID: &str = "about";

const HIGHLIGHTS: &[(Icon, &str)] = &[
    (Icon::CheckCircle, "Fast turnarounds without compromising quality."),
    (Icon::Globe, "Clients worldwide, remote collaboration friendly."),
    (Icon::Zap, "Motion graphics, VFX and bespoke visuals."),
];

fn person_block(person: &Person, index: usize) -> Html {
    // Portraits alternate sides; the copy side slides in from its own edge.
    let portrait_first = index % 2 == 0;
    let (copy_motion, photo_motion) = if portrait_first {
        (RevealMotion::Right, RevealMotion::Left)
    } else {
        (RevealMotion::Left, RevealMotion::Right)
    };

    let portrait = html! {
        <Reveal motion={photo_motion} delay_ms={300} class={classes!("portrait-wrap")}>
            <div class="portrait">
                <div class="portrait-glow"></div>
                <img src={person.photo} alt={person.photo_alt} width="400" height="400" loading="lazy" />
            </div>
        </Reveal>
    };

    let copy = html! {
        <Reveal motion={copy_motion} delay_ms={400}>
            <Badge text={person.badge} />
            <h3 class="person-name font-heading gradient-text">{person.name}</h3>
            { for person.paragraphs.iter().enumerate().map(|(i, paragraph)| html! {
                <Reveal motion={RevealMotion::Fade} delay_ms={500 + 100 * i as u32}>
                    <p class={if i == 0 { "person-lead" } else { "person-text" }}>{*paragraph}</p>
                </Reveal>
            }) }
        </Reveal>
    };

    html! {
        <Reveal delay_ms={200} class={classes!("about-grid", "person-grid")}>
            if portrait_first {
                {portrait}
                {copy}
            } else {
                {copy}
                {portrait}
            }
        </Reveal>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={ID} class="about-section section-gradient">
            <div class="container">
                <Reveal class={classes!("about-grid")}>
                    <Reveal motion={RevealMotion::Left} delay_ms={200}>
                        <Badge text="Who We Are" />
                        <h2 class="section-title font-heading gradient-text">{"About Visualise.Co"}</h2>
                        <p class="about-lead">
                            {"We craft cinematic stories from raw footage, blending sharp editing, color grading and motion design to help your content stand out. Our team focuses on clarity, emotion and impact while respecting your brand voice."}
                        </p>
                        <ul class="highlight-list">
                            { for HIGHLIGHTS.iter().enumerate().map(|(i, (icon, text))| html! {
                                <li>
                                    <Reveal motion={RevealMotion::Left} delay_ms={300 + 100 * i as u32} class={classes!("highlight")}>
                                        <IconView icon={*icon} size={18} class={classes!("text-orange")} />
                                        <span>{*text}</span>
                                    </Reveal>
                                </li>
                            }) }
                        </ul>
                        <Reveal motion={RevealMotion::Fade} delay_ms={600} class={classes!("about-cta")}>
                            <a href={format!("#{}", contact::ID)}>
                                <Button size={ButtonSize::Lg}>
                                    {"Work With Us"}
                                    <span class="nudge-arrow">{"→"}</span>
                                </Button>
                            </a>
                        </Reveal>
                    </Reveal>
                    <Reveal motion={RevealMotion::Right} delay_ms={300} class={classes!("about-image")}>
                        <img src={ABOUT_IMAGE} alt="About Visualise.Co" width="1200" height="800" />
                    </Reveal>
                </Reveal>

                { for FOUNDERS.iter().enumerate().map(|(index, person)| person_block(person, index)) }
            </div>
            <style>
                {r#"
                    .about-section {
                        padding: 4rem 0;
                        color: #fff;
                    }
                    .about-grid {
                        display: grid;
                        gap: 2.5rem;
                        align-items: center;
                        margin-bottom: 4rem;
                    }
                    @media (min-width: 768px) {
                        .about-section { padding: 5rem 0; }
                        .about-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .about-lead, .person-lead {
                        margin-top: 1rem;
                        color: #d4d4d4;
                        font-size: 1.125rem;
                        line-height: 1.7;
                    }
                    .person-text {
                        margin-top: 0.75rem;
                        color: #a3a3a3;
                        line-height: 1.7;
                    }
                    .highlight-list {
                        list-style: none;
                        margin-top: 1.5rem;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .highlight {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        color: #d4d4d4;
                    }
                    .highlight:hover { color: #fff; }
                    .about-cta { margin-top: 1.5rem; }
                    .nudge-arrow {
                        display: inline-block;
                        margin-left: 0.5rem;
                        animation: nudge 1.5s ease-in-out infinite;
                    }
                    @keyframes nudge {
                        0%, 100% { transform: translateX(0); }
                        50% { transform: translateX(5px); }
                    }
                    .about-image img, .portrait img {
                        width: 100%;
                        height: auto;
                        display: block;
                    }
                    .about-image {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid #262626;
                        box-shadow: 0 25px 50px rgba(249, 115, 22, 0.1);
                    }
                    .person-name {
                        font-size: 2rem;
                        font-weight: 700;
                    }
                    .portrait {
                        position: relative;
                        max-width: 24rem;
                        margin: 0 auto;
                        aspect-ratio: 1;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid #262626;
                        background: #171717;
                        transition: box-shadow 0.5s;
                    }
                    .portrait:hover { box-shadow: 0 25px 50px rgba(249, 115, 22, 0.3); }
                    .portrait img { height: 100%; object-fit: cover; }
                    .portrait-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(234, 88, 12, 0.2), rgba(251, 146, 60, 0.05));
                        background-size: 200% 200%;
                        opacity: 0;
                        transition: opacity 0.5s;
                        animation: glow-pan 10s linear infinite alternate;
                    }
                    .portrait:hover .portrait-glow { opacity: 1; }
                    @keyframes glow-pan {
                        from { background-position: 0% 0%; }
                        to { background-position: 100% 100%; }
                    }
                "#}
            </style>
        </section>
    }
}
