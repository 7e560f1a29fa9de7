use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::{Reveal, RevealMotion};
use crate::components::ui::{Button, ButtonSize};
use crate::config;
use crate::contact::draft::ContactField;
use crate::contact::relay::{submit, GlooRelay};
use crate::contact::submission::{ContactFlow, SubmissionStatus};
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, SOCIALS};

pub const ID: &str = "contact";

fn status_class(status: &SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Succeeded => "form-status text-green",
        SubmissionStatus::Failed(_) | SubmissionStatus::Invalid(_) => "form-status form-status-error",
        SubmissionStatus::Idle | SubmissionStatus::Sending => "form-status",
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // The flow sits in a RefCell so the in-flight check and the switch to
    // Sending happen in the same synchronous step as the click.
    let flow = use_mut_ref(ContactFlow::default);
    let trigger = use_force_update();

    let on_input = {
        let flow = flow.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = ContactField::from_key(&input.name()) {
                flow.borrow_mut().set_field(field, input.value());
                trigger.force_update();
            }
        })
    };

    let on_message = {
        let flow = flow.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            flow.borrow_mut().set_field(ContactField::Message, input.value());
            trigger.force_update();
        })
    };

    let on_submit = {
        let flow = flow.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if flow.borrow().is_sending() {
                debug!("contact form already sending");
                return;
            }
            let flow = flow.clone();
            let trigger = trigger.clone();
            spawn_local(async move {
                let relay = GlooRelay::new(config::get_form_endpoint());
                submit(&flow, &relay, move || trigger.force_update()).await;
            });
        })
    };

    let snapshot = flow.borrow().clone();
    let sending = snapshot.is_sending();
    let draft = snapshot.draft();

    html! {
        <section id={ID} class="page-section section-gradient">
            <div class="container">
                <div class="section-header">
                    <Reveal motion={RevealMotion::Up}>
                        <h2 class="section-title font-heading">{"Get In Touch"}</h2>
                    </Reveal>
                    <Reveal motion={RevealMotion::Up} delay_ms={100}>
                        <p class="section-subtitle">
                            {"Have a project in mind? Let’s create something amazing together."}
                        </p>
                    </Reveal>
                </div>
                <div class="contact-grid">
                    <Reveal motion={RevealMotion::Left} class={classes!("contact-form-wrap")}>
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="form-row">
                                <input
                                    type="text"
                                    name={ContactField::Name.key()}
                                    placeholder="Your Name"
                                    autocomplete="name"
                                    required=true
                                    value={draft.name.clone()}
                                    oninput={on_input.clone()}
                                />
                                <input
                                    type="email"
                                    name={ContactField::Email.key()}
                                    placeholder="Your Email"
                                    autocomplete="email"
                                    required=true
                                    value={draft.email.clone()}
                                    oninput={on_input.clone()}
                                />
                            </div>
                            <input
                                type="tel"
                                name={ContactField::Number.key()}
                                placeholder="Your Phone Number"
                                autocomplete="tel"
                                required=true
                                value={draft.number.clone()}
                                oninput={on_input}
                            />
                            <textarea
                                name={ContactField::Message.key()}
                                placeholder="Your Message"
                                rows="5"
                                required=true
                                value={draft.message.clone()}
                                oninput={on_message}
                            />
                            <Button kind="submit" size={ButtonSize::Lg} class={classes!("full-width")} disabled={sending}>
                                { if sending { "Sending..." } else { "Send Message" } }
                            </Button>
                            if let Some(message) = snapshot.status().message() {
                                <p class={status_class(snapshot.status())} role="status">{message}</p>
                            }
                        </form>
                    </Reveal>
                    <Reveal motion={RevealMotion::Right} delay_ms={200} class={classes!("contact-info")}>
                        <h3 class="font-heading">{"Contact Information"}</h3>
                        <a class="contact-line" href={format!("mailto:{}", CONTACT_EMAIL)}>
                            <IconView icon={Icon::Mail} size={20} class={classes!("text-orange")} />
                            <span>{CONTACT_EMAIL}</span>
                        </a>
                        <a class="contact-line" href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))}>
                            <IconView icon={Icon::Phone} size={20} class={classes!("text-orange")} />
                            <span>{CONTACT_PHONE}</span>
                        </a>
                        <div class="contact-socials">
                            { for SOCIALS.iter().map(|social| html! {
                                <a
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.label}
                                    class="social-link"
                                >
                                    <IconView icon={social.icon} size={22} />
                                </a>
                            }) }
                        </div>
                    </Reveal>
                </div>
            </div>
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        gap: 3rem;
                        margin-top: 3.5rem;
                        max-width: 64rem;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    @media (min-width: 1024px) {
                        .contact-grid { grid-template-columns: 3fr 2fr; }
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .form-row {
                        display: grid;
                        gap: 1rem;
                    }
                    @media (min-width: 640px) {
                        .form-row { grid-template-columns: 1fr 1fr; }
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(23, 23, 23, 0.7);
                        border: 1px solid #404040;
                        border-radius: 0.5rem;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        font: inherit;
                        transition: border-color 0.2s, box-shadow 0.2s;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #f97316;
                        box-shadow: 0 0 0 2px rgba(249, 115, 22, 0.3);
                    }
                    .contact-form textarea { resize: vertical; }
                    .form-status {
                        text-align: center;
                        color: #a3a3a3;
                        margin: 0;
                    }
                    .form-status-error { color: #f87171; }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .contact-info h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }
                    .contact-line {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #d4d4d4;
                        text-decoration: none;
                        margin-bottom: 1rem;
                    }
                    .contact-line:hover { color: #fff; }
                    .contact-socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link {
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        background: #171717;
                        border: 1px solid #262626;
                        color: #d4d4d4;
                        transition: all 0.3s;
                    }
                    .social-link:hover {
                        color: #fff;
                        border-color: #f97316;
                        background: rgba(249, 115, 22, 0.15);
                        transform: translateY(-2px);
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::submission::SubmitError;

    #[test]
    fn failures_and_success_are_styled_apart() {
        assert!(status_class(&SubmissionStatus::Succeeded).contains("text-green"));
        assert!(status_class(&SubmissionStatus::Failed(SubmitError::Transport(
            "offline".into()
        )))
        .contains("form-status-error"));
        assert_eq!(status_class(&SubmissionStatus::Sending), "form-status");
    }
}
