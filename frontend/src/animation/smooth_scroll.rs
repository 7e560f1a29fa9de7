//! Eased window scrolling for in-page anchors.

/// Exponential ease-out; overshoots 1 slightly near the end, hence the clamp.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Scroll offset to apply `elapsed_ms` after the tween started.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms <= 0.0 {
            return self.from;
        }
        if self.is_done(elapsed_ms) {
            return self.to;
        }
        let t = elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * ease_out_expo(t)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    Top,
    Section(String),
}

/// Classifies an `href`. Only same-page fragments are handled; everything
/// else (mailto:, external links) is left to the browser.
pub fn anchor_target(href: &str) -> Option<AnchorTarget> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        Some(AnchorTarget::Top)
    } else {
        Some(AnchorTarget::Section(fragment.to_string()))
    }
}

/// Window offset that brings a section into view. `offset_chain` holds the
/// `offsetTop` of the element and of each offset parent up to the body.
/// These are layout positions, so a pending entrance transform on an ancestor
/// does not skew them. `scroll_margin` is the element's computed
/// `scroll-margin-top`, which keeps the heading clear of the fixed navbar.
pub fn section_offset(offset_chain: impl IntoIterator<Item = i32>, scroll_margin: f64) -> f64 {
    let top: f64 = offset_chain.into_iter().map(f64::from).sum();
    (top - scroll_margin).max(0.0)
}

/// Reads a computed CSS length such as `"64px"`. Anything unparseable is 0.
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|number| number.trim().parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_clamped_and_monotone() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_out_expo(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(samples.iter().all(|v| *v <= 1.0));
    }

    #[test]
    fn tween_starts_at_origin_and_lands_on_target() {
        let tween = ScrollTween::new(120.0, 2400.0, 1200.0);
        assert_eq!(tween.position_at(0.0), 120.0);
        assert_eq!(tween.position_at(1200.0), 2400.0);
        assert_eq!(tween.position_at(5000.0), 2400.0);
        assert!(tween.is_done(1200.0));
        assert!(!tween.is_done(1199.0));

        let mid = tween.position_at(600.0);
        assert!(mid > 120.0 && mid < 2400.0);
    }

    #[test]
    fn tween_scrolls_upwards_too() {
        let tween = ScrollTween::new(3000.0, 0.0, 1200.0);
        let positions: Vec<f64> = (0..=12).map(|i| tween.position_at(i as f64 * 100.0)).collect();
        assert!(positions.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(positions.last(), Some(&0.0));
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let tween = ScrollTween::new(0.0, 500.0, 0.0);
        assert!(tween.is_done(0.0));
        assert_eq!(tween.position_at(1.0), 500.0);
    }

    #[test]
    fn classifies_anchor_hrefs() {
        assert_eq!(anchor_target("#"), Some(AnchorTarget::Top));
        assert_eq!(
            anchor_target("#pricing"),
            Some(AnchorTarget::Section("pricing".to_string()))
        );
        assert_eq!(anchor_target("mailto:covisualise@gmail.com"), None);
        assert_eq!(anchor_target("https://t.me/Visualiseco"), None);
    }

    #[test]
    fn section_offset_sums_layout_chain_and_clears_navbar() {
        // section inside main inside body
        assert_eq!(section_offset([120, 3480, 0], 64.0), 3536.0);
        assert_eq!(section_offset([3600], 0.0), 3600.0);
    }

    #[test]
    fn section_offset_never_goes_above_the_page() {
        assert_eq!(section_offset([30], 64.0), 0.0);
        assert_eq!(section_offset(std::iter::empty(), 64.0), 0.0);
    }

    #[test]
    fn parses_computed_pixel_lengths() {
        assert_eq!(parse_px("64px"), 64.0);
        assert_eq!(parse_px(" 12.5px "), 12.5);
        assert_eq!(parse_px("0px"), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}
