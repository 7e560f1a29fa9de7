use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{BRAND, FOOTER_LINKS, SOCIALS, WHATSAPP_URL};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-cta">
                    <h2 class="font-heading">{"Ready to Start Your Next Project?"}</h2>
                    <p>{"Let’s turn your raw footage into something unforgettable."}</p>
                    <a
                        href={WHATSAPP_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-default btn-lg"
                    >
                        {"Let’s Talk"}
                    </a>
                </div>
                <div class="footer-bar">
                    <a href="#" class="footer-brand font-heading">
                        <IconView icon={Icon::Film} size={24} class={classes!("text-orange")} />
                        <span>{BRAND}</span>
                    </a>
                    <nav class="footer-links">
                        { for FOOTER_LINKS.iter().map(|link| html! {
                            <a href={link.href}>{link.label}</a>
                        }) }
                    </nav>
                    <div class="footer-socials">
                        { for SOCIALS.iter().map(|social| html! {
                            <a
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={social.label}
                            >
                                <IconView icon={social.icon} size={20} />
                            </a>
                        }) }
                    </div>
                </div>
                <p class="footer-copy">
                    { format!("© {} {}. All Rights Reserved.", year, BRAND) }
                </p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        z-index: 1;
                        border-top: 1px solid #262626;
                        padding: 4rem 0 2rem;
                        background: rgba(10, 10, 10, 0.8);
                    }
                    .footer-cta {
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .footer-cta h2 {
                        font-size: 2rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .footer-cta p {
                        color: #a3a3a3;
                        margin: 0;
                    }
                    .footer-cta a { text-decoration: none; }
                    .footer-bar {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                        padding-top: 2rem;
                        border-top: 1px solid #262626;
                    }
                    @media (min-width: 768px) {
                        .footer-bar {
                            flex-direction: row;
                            justify-content: space-between;
                        }
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.25rem;
                        text-decoration: none;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-links a,
                    .footer-socials a {
                        color: #a3a3a3;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-links a:hover,
                    .footer-socials a:hover { color: #f97316; }
                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-copy {
                        text-align: center;
                        color: #737373;
                        font-size: 0.875rem;
                        margin-top: 2rem;
                    }
                "#}
            </style>
        </footer>
    }
}
