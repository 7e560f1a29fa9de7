use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::animation::particles::{hero_field, page_field, seeded_rng, Particle};
use crate::components::icons::{Icon, IconView};
use crate::config::{HERO_PARTICLES, PAGE_PARTICLES};

fn mount_seed(salt: u64) -> u64 {
    (Date::now() as u64) ^ salt
}

fn render_particles(particles: &[Particle], class: &'static str) -> Html {
    particles
        .iter()
        .map(|particle| {
            html! { <div class={class} style={particle.style()}></div> }
        })
        .collect::<Html>()
}

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    // Generated once per mount; re-renders keep the same layout.
    let particles =
        use_state(|| hero_field(&mut seeded_rng(mount_seed(0x9e37_79b9)), HERO_PARTICLES));

    html! {
        <div class="particle-layer" aria-hidden="true">
            { render_particles(&particles, "hero-particle") }
            <div class="orb orb-orange"></div>
            <div class="orb orb-cyan"></div>
            <div class="orb orb-soft"></div>
        </div>
    }
}

/// Faint editing tools drifting behind the hero copy.
#[function_component(BackgroundElements)]
pub fn background_elements() -> Html {
    html! {
        <div class="background-elements" aria-hidden="true">
            <ParticleBackground />
            <div class="bg-tool bg-tool-pen"><IconView icon={Icon::PenTool} size={200} /></div>
            <div class="bg-tool bg-tool-scissors"><IconView icon={Icon::Scissors} size={250} /></div>
            <div class="bg-tool bg-tool-edit"><IconView icon={Icon::Edit} size={300} /></div>
            <svg class="bg-tool bg-tool-stroke" width="300" height="200" viewBox="0 0 100 100" fill="none">
                <path d="M10 50 Q 30 30, 50 50 T 90 50" stroke="currentColor" stroke-width="2" fill="none" />
                <path d="M10 60 Q 30 40, 50 60 T 90 60" stroke="currentColor" stroke-width="2" fill="none" />
            </svg>
        </div>
    }
}

#[function_component(PageParticles)]
pub fn page_particles() -> Html {
    let particles =
        use_state(|| page_field(&mut seeded_rng(mount_seed(0x85eb_ca6b)), PAGE_PARTICLES));

    html! {
        <div class="page-particles" aria-hidden="true">
            { render_particles(&particles, "page-particle") }
        </div>
    }
}
