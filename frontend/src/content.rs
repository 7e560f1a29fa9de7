//! Copy and tables rendered by the landing page sections.

use crate::components::icons::Icon;

pub const BRAND: &str = "Visualise.Co";
pub const CONTACT_EMAIL: &str = "covisualise@gmail.com";
pub const CONTACT_PHONE: &str = "+91 9598822384";
pub const WHATSAPP_URL: &str = "https://wa.me/+919598822384";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/visualise._co?igsh=azZzbXVrdWMxemJm";
pub const TELEGRAM_URL: &str = "https://t.me/Visualiseco";
/// Served from `assets/images` (Trunk `copy-dir`).
pub const ABOUT_IMAGE: &str = "/images/about-hero.svg";
pub const HIRING_FORM_URL: &str = "https://forms.gle/UbHGmjNL887QSCaD9";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#pricing", label: "Pricing" },
    NavLink { href: "#experience", label: "Experience" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#pricing", label: "Pricing" },
    NavLink { href: "#experience", label: "Experience" },
];

pub const HERO_WORDS: &[&str] = &["Masterpiece", "Video Editing", "Graphics"];

pub struct Social {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social { icon: Icon::WhatsApp, href: WHATSAPP_URL, label: "WhatsApp" },
    Social { icon: Icon::Instagram, href: INSTAGRAM_URL, label: "Instagram" },
    Social { icon: Icon::Telegram, href: TELEGRAM_URL, label: "Telegram" },
];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Video,
        title: "4K & 8K Editing",
        description: "We handle high-resolution footage to deliver stunningly crisp and detailed videos.",
    },
    Feature {
        icon: Icon::Film,
        title: "Cinematic Color Grading",
        description: "We set the mood and tone of your video with professional color correction and grading.",
    },
    Feature {
        icon: Icon::Globe,
        title: "Web Development",
        description: "Custom websites and landing pages to showcase your videos and brand online.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Motion Graphics & VFX",
        description: "Engage your audience with custom motion graphics, titles, and subtle visual effects.",
    },
];

pub struct Plan {
    pub title: &'static str,
    pub price: &'static str,
    /// `None` for quote-based plans, which show no per-project suffix.
    pub per: Option<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        title: "Starter",
        price: "₹5,000",
        per: Some("/project"),
        description: "For short personal projects and social media content.",
        features: &["Up to 2 min video", "2-day turnaround", "2 rounds of revisions", "1080p Export", "5 Videos"],
        popular: false,
    },
    Plan {
        title: "Pro",
        price: "₹15,000",
        per: Some("/project"),
        description: "Perfect for creators, businesses, and short films.",
        features: &[
            "Up to 15 min video",
            "4-day turnaround",
            "3 rounds of revisions",
            "4K Export",
            "Color Grading",
            "5 Videos",
        ],
        popular: true,
    },
    Plan {
        title: "Enterprise",
        price: "Custom",
        per: None,
        description: "For feature films, documentaries, and large-scale projects.",
        features: &["Unlimited length", "Dedicated editor", "Unlimited revisions", "8K+ Export", "Advanced VFX"],
        popular: false,
    },
];

pub struct Stat {
    pub icon: Icon,
    pub value: u32,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: Icon::Globe, value: 150, label: "Clients Worldwide" },
    Stat { icon: Icon::Briefcase, value: 2000, label: "Projects Completed" },
    Stat { icon: Icon::Award, value: 3, label: "Years of Experience" },
];

pub struct Client {
    pub name: &'static str,
    pub description: &'static str,
    pub instagram: &'static str,
}

pub const CLIENTS: &[Client] = &[
    Client {
        name: "Crypto Millionaire Rohit",
        description: "Leading crypto influencer & investor.",
        instagram: "https://www.instagram.com/crypto_millionaire_rohit?igsh=ZmJhNjF6eHA1eGsx",
    },
    Client {
        name: "Crypto Asad",
        description: "Blockchain educator & analytics expert.",
        instagram: "https://www.instagram.com/crypto.asad?igsh=MXJndjAwZzMzNGhkMg==",
    },
    Client {
        name: "Learn With Haripriyaa",
        description: "Empowering learners with engaging educational content.",
        instagram: "https://www.instagram.com/learnwithharipriyaa?igsh=a2lwbnJya2E1YzMy",
    },
    Client {
        name: "GoZero Official",
        description: "Pioneers in electric vehicle innovation.",
        instagram: "https://www.instagram.com/gozero_official?igsh=MWlwcjIwM3docnVkMw==",
    },
    Client {
        name: "Cryptovelps",
        description: "Delivering valuable crypto market insights.",
        instagram: "https://www.instagram.com/cryptovelps?igsh=MWdmbnByOThxeWZ0Mw==",
    },
    Client {
        name: "Nerd With A Bindi",
        description: "Unique digital creator and storyteller.",
        instagram: "https://www.instagram.com/nerdwithabindi?igsh=MXZzcWQ5Y3ptcTg5NA==",
    },
    Client {
        name: "Startup Decoding",
        description: "Demystifying the startup ecosystem.",
        instagram: "https://www.instagram.com/startup.decoding?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
    },
    Client {
        name: "Adore Skin Clinic",
        description: "Advanced skincare and wellness experts.",
        instagram: "https://www.instagram.com/adoreskinclinic?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
    },
    Client {
        name: "Zoomer Health",
        description: "Innovative health and wellness solutions.",
        instagram: "https://www.instagram.com/zoomerhealth?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
    },
    Client {
        name: "Indian Stories",
        description: "Celebrating Indian culture and stories.",
        instagram: "https://www.instagram.com/indianstories.in?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
    },
    Client {
        name: "The Unconventional Ca",
        description: "Creative finance and business content.",
        instagram: "https://www.instagram.com/the_unconventional_ca?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub initials: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Crypto Millionaire Rohit",
        initials: "CR",
        quote: "They brought my crypto documentary to life with stunning edits and cinematic transitions. The visuals kept my audience hooked till the end!",
    },
    Testimonial {
        name: "Crypto Asad",
        initials: "CA",
        quote: "From raw blockchain event footage to a professional highlight reel, they nailed the timing, effects, and storytelling perfectly.",
    },
    Testimonial {
        name: "Learn With Haripriyaa",
        initials: "LH",
        quote: "My educational videos got a complete facelift! Clean cuts, engaging motion graphics, and perfect pacing for my learners.",
    },
    Testimonial {
        name: "GoZero Official",
        initials: "GO",
        quote: "They made our EV launch video look like a high-budget ad. Crisp visuals, smooth animations, and top-notch editing!",
    },
    Testimonial {
        name: "Cryptovelps",
        initials: "CV",
        quote: "The market analysis explainer videos looked incredibly sleek after their edits: sharp infographics and seamless transitions.",
    },
    Testimonial {
        name: "Nerd With A Bindi",
        initials: "NB",
        quote: "Loved how they matched the editing style to my quirky, creative brand. The final cut felt 100% ‘me’.",
    },
];

pub struct Person {
    pub badge: &'static str,
    pub name: &'static str,
    pub photo: &'static str,
    pub photo_alt: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const FOUNDERS: &[Person] = &[
    Person {
        badge: "Meet the Founder",
        name: "Ankur Yadav",
        photo: "/images/ankur.svg",
        photo_alt: "Ankur Yadav - Founder",
        paragraphs: &[
            "Ankur Yadav is a passionate video editor and motion designer with over three years of hands-on experience transforming raw footage into compelling visual stories. Starting his journey editing reels for emerging creators, he quickly developed a reputation for cinematic color grading, razor-sharp cuts and innovative motion graphics.",
            "Driven by a love for storytelling and technology, Ankur founded Visualise.Co to bridge the gap between ambitious creators and world-class post-production. When he's not behind the timeline, you'll find him exploring new editing techniques, mentoring aspiring editors, or gaming late into the night.",
        ],
    },
    Person {
        badge: "Meet the Co-Founder",
        name: "Ankit Yadav",
        photo: "/images/ankit.svg",
        photo_alt: "Ankit Yadav - Co-Founder",
        paragraphs: &[
            "I am Ankit Yadav, a graduate in Economics (Honours) from the University of Delhi. Throughout my academic journey, I developed a strong understanding of how real-world challenges influence both personal development and professional growth. This experience taught me that success is shaped by a balance of opportunities and constraints, and that sustained effort and adaptability are essential in every field.",
            "Recognizing the increasing competitiveness of today's professional landscape, I proactively focused on acquiring practical skills beyond academics. Guided by this approach, my brother Ankur (Founder) and I co-founded a creative editing agency. Through this entrepreneurial venture, I gained hands-on experience in content creation, client management, and digital collaboration while contributing to the delivery of quality, value-driven creative solutions.",
            "I firmly believe in learning through application and consistently upgrading my skill set. I am driven by curiosity and a passion for exploring new ideas, technologies, and growth opportunities. With a strong academic foundation complemented by entrepreneurial exposure, I aspire to create meaningful impact through continuous learning, innovation, and professional excellence.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|plan| plan.popular).count(), 1);
        assert!(PLANS.iter().filter(|plan| plan.per.is_none()).all(|plan| plan.price == "Custom"));
    }

    #[test]
    fn testimonials_split_into_two_marquee_columns() {
        assert_eq!(TESTIMONIALS.len() % 2, 0);
        assert!(TESTIMONIALS.iter().all(|t| t.initials.len() == 2));
    }

    #[test]
    fn every_image_path_ships_with_the_site() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let images = FOUNDERS
            .iter()
            .map(|person| person.photo)
            .chain([ABOUT_IMAGE]);
        for path in images {
            let relative = path.strip_prefix('/').unwrap_or(path);
            assert!(assets.join(relative).is_file(), "{} is missing from assets/", path);
        }
    }
}
