use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Translucent circle that trails the pointer. The `mousemove` listener lives
/// exactly as long as this component.
#[function_component(GlassCursor)]
pub fn glass_cursor() -> Html {
    let position = use_state_eq(|| (-100, -100));

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set((e.client_x(), e.client_y()));
        });
    }

    let (x, y) = *position;
    html! {
        <div class="glass-cursor" style={format!("left: {}px; top: {}px;", x, y)}></div>
    }
}
