use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
};
use crate::content::{Plan, PLANS};

use super::contact;

pub const ID: &str = "pricing";

fn plan_card(plan: &Plan) -> Html {
    let variant = if plan.popular {
        ButtonVariant::Default
    } else {
        ButtonVariant::Secondary
    };

    html! {
        <Card class={classes!("plan-card", plan.popular.then_some("plan-popular"))}>
            if plan.popular {
                <div class="popular-banner">{"Most Popular"}</div>
            }
            <CardHeader>
                <CardTitle>{plan.title}</CardTitle>
                <CardDescription>{plan.description}</CardDescription>
            </CardHeader>
            <CardContent class={classes!("plan-body")}>
                <div class="plan-price">
                    <span class="font-heading">{plan.price}</span>
                    if let Some(per) = plan.per {
                        <span class="plan-per">{per}</span>
                    }
                </div>
                <ul class="plan-features">
                    { for plan.features.iter().map(|feature| html! {
                        <li>
                            <IconView icon={Icon::CheckCircle} size={16} class={classes!("text-green")} />
                            {*feature}
                        </li>
                    }) }
                </ul>
            </CardContent>
            <CardFooter>
                <a href={format!("#{}", contact::ID)} class="full-width">
                    <Button class={classes!("full-width")} variant={variant}>{"Contact Us"}</Button>
                </a>
            </CardFooter>
        </Card>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id={ID} class="page-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title font-heading">{"Simple, Transparent Pricing"}</h2>
                    <p class="section-subtitle">
                        {"Choose a plan that fits your needs. No hidden fees, just great results."}
                    </p>
                </div>
                <div class="plan-grid">
                    { for PLANS.iter().map(plan_card) }
                </div>
            </div>
            <style>
                {r#"
                    .plan-grid {
                        max-width: 64rem;
                        margin: 3rem auto 0;
                        display: grid;
                        gap: 2rem;
                        align-items: stretch;
                    }
                    @media (min-width: 768px) {
                        .plan-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .plan-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .plan-card {
                        display: flex;
                        flex-direction: column;
                    }
                    .plan-card:hover {
                        transform: scale(1.05);
                        border-color: rgba(249, 115, 22, 0.5);
                        box-shadow: 0 10px 30px rgba(249, 115, 22, 0.2);
                    }
                    .plan-popular {
                        border-color: rgba(249, 115, 22, 0.5);
                        box-shadow: 0 0 0 2px rgba(249, 115, 22, 0.5);
                    }
                    .popular-banner {
                        background: #ea580c;
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        text-align: center;
                        padding: 0.25rem 0;
                        border-radius: 0.75rem 0.75rem 0 0;
                    }
                    .plan-body { flex-grow: 1; }
                    .plan-price { margin-bottom: 1.5rem; }
                    .plan-price .font-heading {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .plan-per { color: #a3a3a3; }
                    .plan-features {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .plan-features li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                "#}
            </style>
        </section>
    }
}
