use yew::prelude::*;

use crate::animation::reveal::RevealOptions;
use crate::components::count_up::AnimatedStat;
use crate::components::reveal::use_reveal;
use crate::content::STATS;

pub const ID: &str = "experience";

#[function_component(Experience)]
pub fn experience() -> Html {
    let node = use_node_ref();
    // Counters mount (and start counting) only once the section is on screen.
    let revealed = use_reveal(node.clone(), RevealOptions::default());

    html! {
        <section ref={node} id={ID} class="page-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title font-heading">{"Our Achievements"}</h2>
                    <p class="section-subtitle">
                        {"We have a track record of delivering exceptional results for a diverse range of clients."}
                    </p>
                </div>
                <div class="stat-grid">
                    if revealed {
                        { for STATS.iter().map(|stat| html! {
                            <AnimatedStat value={stat.value} label={stat.label} icon={stat.icon} />
                        }) }
                    }
                </div>
                <div class="working-hours">
                    <h3 class="font-heading">{"Working Hours"}</h3>
                    <p>{"Monday - Friday: 9:00 AM - 6:00 PM (IST)"}</p>
                    <p class="working-hours-note">{"Available for rush projects on weekends by appointment."}</p>
                </div>
            </div>
            <style>
                {r#"
                    .stat-grid {
                        max-width: 72rem;
                        min-height: 8rem;
                        margin: 3rem auto 0;
                        display: grid;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .stat-grid { grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    }
                    .stat-card {
                        background: rgba(23, 23, 23, 0.5);
                        border: 1px solid #262626;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.5rem;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #a3a3a3;
                    }
                    .stat-label p { margin: 0; }
                    .working-hours {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    .working-hours h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .working-hours p {
                        color: #d4d4d4;
                        margin-top: 0.5rem;
                    }
                    .working-hours .working-hours-note {
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                "#}
            </style>
        </section>
    }
}
