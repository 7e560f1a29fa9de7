use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealMotion};
use crate::content::CLIENTS;

pub const ID: &str = "clients";

#[function_component(Clients)]
pub fn clients() -> Html {
    html! {
        <section id={ID} class="page-section section-gradient">
            <div class="container">
                <div class="section-header">
                    <Reveal motion={RevealMotion::Up}>
                        <h2 class="section-title font-heading">{"Trusted By The Best"}</h2>
                    </Reveal>
                    <Reveal motion={RevealMotion::Up} delay_ms={100}>
                        <p class="section-subtitle">
                            {"We’ve had the privilege of working with a diverse range of creators and brands."}
                        </p>
                    </Reveal>
                </div>
                <div class="client-grid">
                    { for CLIENTS.iter().map(|client| html! {
                        <a
                            href={client.instagram}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="client-card"
                        >
                            <span class="client-name">{client.name}</span>
                            <span class="client-description">{client.description}</span>
                            <span class="client-link">{"View Profile →"}</span>
                        </a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .client-grid {
                        display: grid;
                        gap: 2rem;
                        margin-top: 3.5rem;
                    }
                    @media (min-width: 640px) {
                        .client-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .client-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .client-card {
                        background: rgba(23, 23, 23, 0.5);
                        backdrop-filter: blur(12px);
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        border: 1px solid #262626;
                        text-decoration: none;
                        transition: all 0.3s;
                    }
                    .client-card:hover {
                        transform: scale(1.05);
                        background: rgba(249, 115, 22, 0.1);
                        border-color: rgba(249, 115, 22, 0.5);
                        box-shadow: 0 10px 30px rgba(249, 115, 22, 0.2);
                    }
                    .client-card:active { transform: scale(0.97); }
                    .client-name {
                        font-weight: 600;
                        font-size: 1.125rem;
                        color: #fff;
                    }
                    .client-description {
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                    }
                    .client-link {
                        margin-top: 1rem;
                        color: #fb923c;
                        font-size: 0.875rem;
                        font-weight: 500;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .client-card:hover .client-link { opacity: 1; }
                "#}
            </style>
        </section>
    }
}
