use yew::prelude::*;

use crate::components::icons::IconView;
use crate::content::FEATURES;

/// Fragment the navbar and footer links point at.
pub const ID: &str = "features";

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id={ID} class="page-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title font-heading">{"What We Offer"}</h2>
                    <p class="section-subtitle">
                        {"Our comprehensive suite of editing services ensures your final product is polished, professional, and powerful."}
                    </p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">
                                <IconView icon={feature.icon} size={32} class={classes!("text-orange")} />
                            </div>
                            <div>
                                <h3 class="font-heading">{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .feature-grid {
                        max-width: 64rem;
                        margin: 3rem auto 0;
                        display: grid;
                        gap: 2rem;
                    }
                    @media (min-width: 640px) {
                        .feature-grid { grid-template-columns: 1fr 1fr; gap: 3rem; }
                    }
                    .feature-card {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        border-left: 4px solid transparent;
                        transition: all 0.3s;
                    }
                    .feature-card:hover {
                        background-color: rgba(22, 163, 74, 0.1);
                        border-left-color: #f97316;
                    }
                    .feature-icon {
                        background: #171717;
                        padding: 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid #262626;
                        display: flex;
                    }
                    .feature-card h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        margin: 0 0 0.25rem;
                    }
                    .feature-card p {
                        font-size: 0.875rem;
                        color: #a3a3a3;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}
