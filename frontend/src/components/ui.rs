use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.kind.clone()}
            class={classes!("btn", props.variant.class(), props.size.class(), props.class.clone())}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card-header", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardProps) -> Html {
    html! {
        <h3 class={classes!("card-title", "font-heading", props.class.clone())}>
            { for props.children.iter() }
        </h3>
    }
}

#[function_component(CardDescription)]
pub fn card_description(props: &CardProps) -> Html {
    html! {
        <p class={classes!("card-description", props.class.clone())}>
            { for props.children.iter() }
        </p>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card-content", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardFooter)]
pub fn card_footer(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card-footer", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

/// Small pill label above section headings ("Who We Are", "Testimonials").
#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub class: Classes,
    pub text: AttrValue,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <div class={classes!("badge", props.class.clone())}>{ props.text.clone() }</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_its_own_class() {
        let variants = [
            ButtonVariant::Default,
            ButtonVariant::Outline,
            ButtonVariant::Secondary,
        ];
        let mut classes: Vec<&str> = variants.iter().map(|v| v.class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), variants.len());
        assert_eq!(ButtonSize::default().class(), "btn-md");
        assert_ne!(ButtonSize::Lg.class(), ButtonSize::Default.class());
    }
}
