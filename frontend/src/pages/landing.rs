use yew::prelude::*;

use crate::components::cursor::GlassCursor;
use crate::components::particles::PageParticles;
use crate::components::reveal::AnimatedSection;
use crate::pages::sections::{
    about::About, clients::Clients, contact::Contact, experience::Experience, features::Features,
    footer::Footer, get_hired::GetHired, hero::Hero, navbar::Navbar, pricing::Pricing,
    testimonials::Testimonials,
};

/// The whole single page: hero up top, then every section fading in as it
/// scrolls into view.
#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing">
            <GlassCursor />
            <Navbar />
            <main>
                <PageParticles />
                <Hero />
                <AnimatedSection><About /></AnimatedSection>
                <AnimatedSection><Features /></AnimatedSection>
                <AnimatedSection><Pricing /></AnimatedSection>
                <AnimatedSection><Experience /></AnimatedSection>
                <AnimatedSection><Clients /></AnimatedSection>
                <AnimatedSection><Testimonials /></AnimatedSection>
                <AnimatedSection><Contact /></AnimatedSection>
                <AnimatedSection><GetHired /></AnimatedSection>
            </main>
            <Footer />
            <style>
                {r#"
                    @import url('https://fonts.googleapis.com/css2?family=Exo+2:wght@400;600;700;800&family=Inter:wght@400;500;600&display=swap');

                    html { scroll-behavior: auto; }
                    body {
                        margin: 0;
                        background: #0a0a0a;
                        color: #fafafa;
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                        overflow-x: hidden;
                        -webkit-font-smoothing: antialiased;
                    }
                    .landing {
                        position: relative;
                        min-height: 100vh;
                    }
                    main { position: relative; }
                    .font-heading { font-family: 'Exo 2', sans-serif; }
                    .container {
                        width: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        box-sizing: border-box;
                    }
                    @media (min-width: 768px) {
                        .container { padding: 0 1.5rem; }
                    }
                    section[id] { scroll-margin-top: 4rem; }
                    .page-section {
                        position: relative;
                        z-index: 1;
                        padding: 5rem 0;
                    }
                    @media (min-width: 768px) {
                        .page-section { padding: 8rem 0; }
                    }
                    .section-gradient {
                        background: linear-gradient(180deg, transparent, rgba(23, 23, 23, 0.6), transparent);
                    }
                    .section-header {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .section-title { font-size: 3rem; }
                    }
                    .section-subtitle {
                        color: #a3a3a3;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        margin: 1rem 0 0;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, #f97316, #fb923c, #22d3ee);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .text-orange { color: #f97316; }
                    .text-orange-soft { color: #fb923c; }
                    .text-green { color: #4ade80; }
                    .full-width { width: 100%; }

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        border: 1px solid transparent;
                        border-radius: 0.5rem;
                        font: inherit;
                        font-weight: 600;
                        cursor: pointer;
                        white-space: nowrap;
                        transition: all 0.2s;
                    }
                    .btn:disabled {
                        opacity: 0.5;
                        pointer-events: none;
                    }
                    .btn:active { transform: scale(0.97); }
                    .btn-default {
                        background: #f97316;
                        color: #fff;
                    }
                    .btn-default:hover {
                        background: #ea580c;
                        box-shadow: 0 10px 25px rgba(249, 115, 22, 0.35);
                    }
                    .btn-outline {
                        background: transparent;
                        border-color: #404040;
                        color: #fafafa;
                    }
                    .btn-outline:hover { border-color: #f97316; color: #f97316; }
                    .btn-secondary { background: #262626; color: #fafafa; }
                    .btn-secondary:hover { background: #404040; }
                    .btn-md { height: 2.5rem; padding: 0 1rem; }
                    .btn-lg { height: 2.75rem; padding: 0 2rem; font-size: 1rem; }

                    .card {
                        background: rgba(23, 23, 23, 0.6);
                        border: 1px solid #262626;
                        border-radius: 0.75rem;
                        color: #fafafa;
                    }
                    .card-header { padding: 1.5rem 1.5rem 0; }
                    .card-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .card-description {
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                    }
                    .card-content { padding: 1.5rem; }
                    .card-footer { padding: 0 1.5rem 1.5rem; }
                    .badge {
                        display: inline-flex;
                        align-items: center;
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        background: rgba(249, 115, 22, 0.15);
                        color: #fb923c;
                        border: 1px solid rgba(249, 115, 22, 0.3);
                    }

                    .animated-section {
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .animated-section.is-visible {
                        opacity: 1;
                        transform: none;
                    }
                    .reveal {
                        opacity: 0;
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal-up { transform: translateY(20px); }
                    .reveal-left { transform: translateX(-50px); }
                    .reveal-right { transform: translateX(50px); }
                    .reveal.is-visible {
                        opacity: 1;
                        transform: none;
                    }

                    .page-particles,
                    .particle-layer,
                    .background-elements {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .page-particles { position: fixed; z-index: 0; }
                    .hero-particle,
                    .page-particle {
                        position: absolute;
                        border-radius: 9999px;
                        opacity: 0;
                        animation-name: particle-drift;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    .hero-particle { background: #fff; }
                    @keyframes particle-drift {
                        0% { opacity: 0; transform: translate(0, 0); }
                        25% { opacity: var(--p-opacity); }
                        50% { transform: translate(var(--dx1), var(--dy1)); }
                        75% { opacity: var(--p-opacity); }
                        100% { opacity: 0; transform: translate(var(--dx2), var(--dy2)); }
                    }
                    .orb {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(80px);
                        animation: orb-pulse 8s ease-in-out infinite;
                    }
                    .orb-orange {
                        width: 24rem;
                        height: 24rem;
                        top: 10%;
                        left: -5%;
                        background: rgba(249, 115, 22, 0.2);
                    }
                    .orb-cyan {
                        width: 20rem;
                        height: 20rem;
                        bottom: 5%;
                        right: -5%;
                        background: rgba(6, 182, 212, 0.15);
                        animation-delay: 2s;
                    }
                    .orb-soft {
                        width: 16rem;
                        height: 16rem;
                        top: 40%;
                        left: 45%;
                        background: rgba(251, 146, 60, 0.1);
                        animation-delay: 4s;
                    }
                    @keyframes orb-pulse {
                        0%, 100% { transform: scale(1); opacity: 0.6; }
                        50% { transform: scale(1.15); opacity: 1; }
                    }
                    .bg-tool {
                        position: absolute;
                        color: rgba(255, 255, 255, 0.04);
                        animation: tool-float 12s ease-in-out infinite;
                    }
                    .bg-tool-pen { top: 12%; right: 8%; }
                    .bg-tool-scissors { bottom: 10%; left: 5%; animation-delay: 3s; }
                    .bg-tool-edit { top: 35%; left: 30%; animation-delay: 6s; }
                    .bg-tool-stroke { bottom: 20%; right: 20%; color: rgba(249, 115, 22, 0.12); }
                    @keyframes tool-float {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(-20px) rotate(5deg); }
                    }

                    .glass-cursor {
                        position: fixed;
                        width: 2rem;
                        height: 2rem;
                        margin: -1rem 0 0 -1rem;
                        border-radius: 9999px;
                        pointer-events: none;
                        z-index: 9999;
                        background: rgba(255, 255, 255, 0.08);
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        backdrop-filter: blur(4px);
                        transition: left 0.08s ease-out, top 0.08s ease-out;
                    }
                    @media (hover: none) {
                        .glass-cursor { display: none; }
                    }

                    .glitch { position: relative; }
                    .glitch:hover { animation: glitch-skew 0.4s steps(2) 2; }
                    @keyframes glitch-skew {
                        0% { transform: skew(0deg); text-shadow: 2px 0 #22d3ee, -2px 0 #f97316; }
                        50% { transform: skew(-2deg); text-shadow: -2px 0 #22d3ee, 2px 0 #f97316; }
                        100% { transform: skew(0deg); text-shadow: none; }
                    }
                    .animate-slide-in-up { animation: slide-in-up 0.8s ease-out both; }
                    @keyframes slide-in-up {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: none; }
                    }

                    @media (prefers-reduced-motion: reduce) {
                        .animated-section,
                        .reveal {
                            opacity: 1;
                            transform: none;
                            transition: none;
                        }
                        .hero-particle,
                        .page-particle,
                        .orb,
                        .bg-tool { animation: none; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::smooth_scroll::{anchor_target, AnchorTarget};
    use crate::content::{FOOTER_LINKS, NAV_LINKS};
    use crate::pages::sections::{
        about, clients, contact, experience, features, get_hired, pricing, testimonials,
    };

    /// `id` of every section `Landing` renders, in page order.
    const SECTION_IDS: [&str; 8] = [
        about::ID,
        features::ID,
        pricing::ID,
        experience::ID,
        clients::ID,
        testimonials::ID,
        contact::ID,
        get_hired::ID,
    ];

    #[test]
    fn every_nav_anchor_lands_on_a_rendered_section() {
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS) {
            match anchor_target(link.href) {
                Some(AnchorTarget::Section(id)) => assert!(
                    SECTION_IDS.contains(&id.as_str()),
                    "{} points at a missing section",
                    link.href
                ),
                other => panic!("{} is not an in-page anchor: {:?}", link.href, other),
            }
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids = SECTION_IDS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTION_IDS.len());
    }
}
