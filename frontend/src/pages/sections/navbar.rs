use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{BRAND, NAV_LINKS};

#[function_component(AnimatedLogo)]
fn animated_logo() -> Html {
    html! {
        <div class="animated-logo" aria-hidden="true">
            <svg width="28" height="28" viewBox="0 0 24 24" fill="none">
                <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="1.5" />
                <path
                    d="M7 12.5C8.5 9 10 8 12 8c2 0 3.5 1 5 4.5"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation itself is handled by the smooth scroll listener.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content container">
                <a href="#" class="nav-logo">
                    <AnimatedLogo />
                    <span class="font-heading">{BRAND}</span>
                </a>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link">{link.label}</a>
                    }) }
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} size={24} />
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    <div class="container mobile-menu-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.href} class="mobile-nav-link" onclick={close_menu.clone()}>
                                {link.label}
                            </a>
                        }) }
                    </div>
                </div>
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid #262626;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.25rem;
                        text-decoration: none;
                    }
                    .animated-logo {
                        color: #f97316;
                        display: flex;
                        animation: logo-wobble 4s ease-in-out infinite;
                    }
                    @keyframes logo-wobble {
                        0%, 100% { transform: rotate(0deg) scale(1); }
                        33% { transform: rotate(10deg) scale(1.06); }
                        66% { transform: rotate(-10deg) scale(1.06); }
                    }
                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link, .mobile-nav-link {
                        color: #d4d4d4;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover, .mobile-nav-link:hover {
                        color: #f97316;
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(16px);
                    }
                    .mobile-menu-links {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                    }
                    .mobile-nav-link {
                        font-size: 1.125rem;
                    }
                    @media (min-width: 768px) {
                        .nav-links { display: flex; }
                        .burger-menu, .mobile-menu { display: none; }
                    }
                "#}
            </style>
        </nav>
    }
}
