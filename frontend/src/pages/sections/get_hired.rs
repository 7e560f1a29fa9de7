use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{Reveal, RevealMotion};
use crate::content::HIRING_FORM_URL;

pub const ID: &str = "get-hired";

#[function_component(GetHired)]
pub fn get_hired() -> Html {
    html! {
        <section id={ID} class="page-section">
            <div class="container">
                <Reveal motion={RevealMotion::Up} class={classes!("hire-card")}>
                    <IconView icon={Icon::Scissors} size={40} class={classes!("text-orange")} />
                    <h2 class="section-title font-heading">{"Be a Part of Us"}</h2>
                    <p class="section-subtitle">
                        {"Are you a talented video editor? Join our team and work on exciting projects with clients from around the world."}
                    </p>
                    <a
                        href={HIRING_FORM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-default btn-lg"
                    >
                        {"Click Here"}
                    </a>
                </Reveal>
            </div>
            <style>
                {r#"
                    .hire-card {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 3rem 2rem;
                        text-align: center;
                        border-radius: 1rem;
                        border: 1px solid rgba(249, 115, 22, 0.3);
                        background: linear-gradient(135deg, rgba(249, 115, 22, 0.08), rgba(6, 182, 212, 0.08));
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .hire-card a { text-decoration: none; }
                "#}
            </style>
        </section>
    }
}
