use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Video,
    Film,
    Zap,
    CheckCircle,
    Globe,
    Briefcase,
    Award,
    Menu,
    Close,
    Mail,
    Phone,
    PenTool,
    Scissors,
    Edit,
    WhatsApp,
    Instagram,
    Telegram,
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        r: f32,
    },
}

const PHONE_PATH: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::Video => &[
                Path("m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5"),
                Rect { x: 2.0, y: 6.0, w: 14.0, h: 12.0, r: 2.0 },
            ],
            Icon::Film => &[
                Rect { x: 3.0, y: 3.0, w: 18.0, h: 18.0, r: 2.0 },
                Path("M7 3v18M3 7.5h4M3 12h18M3 16.5h4M17 3v18M17 7.5h4M17 16.5h4"),
            ],
            Icon::Zap => &[Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
            Icon::CheckCircle => &[
                Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
                Path("m9 11 3 3L22 4"),
            ],
            Icon::Globe => &[
                Circle(12.0, 12.0, 10.0),
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            Icon::Briefcase => &[
                Rect { x: 2.0, y: 7.0, w: 20.0, h: 14.0, r: 2.0 },
                Path("M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
            ],
            Icon::Award => &[
                Circle(12.0, 8.0, 6.0),
                Path("M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"),
            ],
            Icon::Menu => &[Path("M4 6h16M4 12h16M4 18h16")],
            Icon::Close => &[Path("M18 6 6 18M6 6l12 12")],
            Icon::Mail => &[
                Rect { x: 2.0, y: 4.0, w: 20.0, h: 16.0, r: 2.0 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Phone => &[Path(PHONE_PATH)],
            Icon::PenTool => &[
                Path("M15.707 21.293a1 1 0 0 1-1.414 0l-1.586-1.586a1 1 0 0 1 0-1.414l5.586-5.586a1 1 0 0 1 1.414 0l1.586 1.586a1 1 0 0 1 0 1.414z"),
                Path("m18 13-1.375-6.874a1 1 0 0 0-.746-.776L3.235 2.028a1 1 0 0 0-1.207 1.207L5.35 15.879a1 1 0 0 0 .776.746L13 18"),
                Path("m2.3 2.3 7.286 7.286"),
                Circle(11.0, 11.0, 2.0),
            ],
            Icon::Scissors => &[
                Circle(6.0, 6.0, 3.0),
                Circle(6.0, 18.0, 3.0),
                Path("M20 4 8.12 15.88M14.47 14.48 20 20M8.12 8.12 12 12"),
            ],
            Icon::Edit => &[
                Path("M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"),
                Path("M18.375 2.625a1 1 0 0 1 3 3l-9.013 9.014a2 2 0 0 1-.853.505l-2.873.84a.5.5 0 0 1-.62-.62l.84-2.873a2 2 0 0 1 .506-.852z"),
            ],
            Icon::WhatsApp => &[
                Path(PHONE_PATH),
                Path("M19.07 4.93a10 10 0 1 1-14.14 0 10 10 0 0 1 14.14 0z"),
            ],
            Icon::Instagram => &[
                Rect { x: 2.0, y: 2.0, w: 20.0, h: 20.0, r: 5.0 },
                Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Path("M17.5 6.5h.01"),
            ],
            Icon::Telegram => &[Path("M22 2 11 13 2 9l20-7zM11 13l11 9-11-9z")],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={classes!("icon", props.class.clone())}
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(|shape| match shape {
                Shape::Path(d) => html! { <path d={*d} /> },
                Shape::Circle(cx, cy, r) => html! {
                    <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
                },
                Shape::Rect { x, y, w, h, r } => html! {
                    <rect
                        x={x.to_string()}
                        y={y.to_string()}
                        width={w.to_string()}
                        height={h.to_string()}
                        rx={r.to_string()}
                        ry={r.to_string()}
                    />
                },
            }) }
        </svg>
    }
}
