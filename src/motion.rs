//! Declarative enter animations.
//!
//! A [`Reveal`] describes where an element starts (its hidden transform) and
//! how long it takes to settle. Rendering turns it into two inline styles and
//! flips between them once the element scrolls into view; the browser does
//! the tweening through CSS transitions.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Out,
    InOut,
    /// Slight overshoot, close to a spring.
    Spring,
}

impl Ease {
    fn as_css(self) -> &'static str {
        match self {
            Self::Out => "ease-out",
            Self::InOut => "ease-in-out",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Starting pose of a hidden element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_y: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Pose {
    fn transform(&self) -> String {
        let mut out = String::new();
        if self.x != 0.0 || self.y != 0.0 {
            let _ = write!(out, "translate({}px, {}px)", self.x, self.y);
        }
        if self.scale != 1.0 {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "scale({})", self.scale);
        }
        if self.scale_y != 1.0 {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "scaleY({})", self.scale_y);
        }
        if out.is_empty() {
            out.push_str("none");
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub from: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: Ease,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            from: Pose::default(),
            duration_ms: 600,
            delay_ms: 0,
            ease: Ease::Out,
        }
    }
}

impl Reveal {
    pub fn fade() -> Self {
        Self::default()
    }

    /// Rises `distance` px into place.
    pub fn fade_up(distance: f64) -> Self {
        Self {
            from: Pose {
                y: distance,
                ..Pose::default()
            },
            ..Self::default()
        }
    }

    /// Slides in horizontally; negative `distance` comes from the left.
    pub fn slide(distance: f64) -> Self {
        Self {
            from: Pose {
                x: distance,
                ..Pose::default()
            },
            ..Self::default()
        }
    }

    pub fn grow(scale: f64) -> Self {
        Self {
            from: Pose {
                scale,
                ..Pose::default()
            },
            ..Self::default()
        }
    }

    /// Draws a vertical line downwards from its top edge.
    pub fn draw_down() -> Self {
        Self {
            from: Pose {
                opacity: 1.0,
                scale_y: 0.0,
                ..Pose::default()
            },
            ease: Ease::InOut,
            ..Self::default()
        }
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Adds `step_ms` of delay per position in a list.
    pub fn stagger(mut self, index: usize, step_ms: u32) -> Self {
        self.delay_ms += step_ms * index as u32;
        self
    }

    fn transition(&self) -> String {
        let ease = self.ease.as_css();
        format!(
            "transition: opacity {d}ms {ease} {w}ms, transform {d}ms {ease} {w}ms;",
            d = self.duration_ms,
            w = self.delay_ms,
        )
    }

    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: {}; transform: {}; {}",
            self.from.opacity,
            self.from.transform(),
            self.transition()
        )
    }

    pub fn visible_style(&self) -> String {
        format!("opacity: 1; transform: none; {}", self.transition())
    }

    pub fn style(&self, visible: bool) -> String {
        if visible {
            self.visible_style()
        } else {
            self.hidden_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_up_styles() {
        let r = Reveal::fade_up(30.0).delay(100);
        assert_eq!(
            r.hidden_style(),
            "opacity: 0; transform: translate(0px, 30px); \
             transition: opacity 600ms ease-out 100ms, transform 600ms ease-out 100ms;"
        );
        assert!(r.visible_style().starts_with("opacity: 1; transform: none;"));
        assert_eq!(r.style(true), r.visible_style());
    }

    #[test]
    fn test_stagger() {
        let r = Reveal::grow(0.8).duration(400).stagger(3, 50).stagger(1, 100);
        assert_eq!(r.delay_ms, 250);
        assert!(r.hidden_style().contains("scale(0.8)"));
        assert!(r.hidden_style().contains("400ms ease-out 250ms"));
    }

    #[test]
    fn test_draw_down_keeps_opacity() {
        let r = Reveal::draw_down().duration(1200);
        assert!(r.hidden_style().starts_with("opacity: 1; transform: scaleY(0);"));
        assert!(r.hidden_style().contains("ease-in-out"));
    }

    #[test]
    fn test_plain_fade() {
        let r = Reveal::fade().ease(Ease::Spring);
        assert!(r.hidden_style().starts_with("opacity: 0; transform: none;"));
        assert!(r.hidden_style().contains("cubic-bezier"));
    }
}
