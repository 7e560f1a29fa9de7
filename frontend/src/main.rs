use log::info;
use yew::prelude::*;

mod config;
mod content;
mod animation {
    pub mod count_up;
    pub mod particles;
    pub mod reveal;
    pub mod smooth_scroll;
}
mod contact {
    pub mod draft;
    pub mod relay;
    pub mod submission;
}
mod components {
    pub mod count_up;
    pub mod cursor;
    pub mod icons;
    pub mod particles;
    pub mod reveal;
    pub mod smooth_scroll;
    pub mod ui;
}
mod pages {
    pub mod landing;
    pub mod sections {
        pub mod about;
        pub mod clients;
        pub mod contact;
        pub mod experience;
        pub mod features;
        pub mod footer;
        pub mod get_hired;
        pub mod hero;
        pub mod navbar;
        pub mod pricing;
        pub mod testimonials;
    }
}

use components::smooth_scroll::use_smooth_anchor_scroll;
use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    // In-page anchor links glide instead of jumping.
    use_smooth_anchor_scroll();

    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // A second init only happens on hot reload; the first logger stays.
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
