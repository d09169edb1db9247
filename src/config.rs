//! Literal UI constants for the resume page, gathered in one place.
//!
//! `SiteConfig::default()` reproduces the live site. With the `serde` feature
//! every struct here can be overlaid from JSON (missing fields keep their
//! defaults).

use crate::error::SiteError;

/// Job titles cycled by the hero typing banner.
pub const PHRASES: &[&str] = &[
    "AI Trainer",
    "Data Analytics Expert",
    "Power BI Specialist",
    "Excel Master",
    "Microsoft Copilot Certified",
    "Technology Educator",
];

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SiteConfig {
    pub phrases: Vec<String>,
    pub typing: TypingTimings,
    pub scroll: ScrollThresholds,
    pub reveal: RevealSettings,
    pub counter_duration_ms: u32,
    pub selectors: Selectors,
    pub avatar: AvatarStyle,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phrases: PHRASES.iter().map(|p| p.to_string()).collect(),
            typing: TypingTimings::default(),
            scroll: ScrollThresholds::default(),
            reveal: RevealSettings::default(),
            counter_duration_ms: 2000,
            selectors: Selectors::default(),
            avatar: AvatarStyle::default(),
        }
    }
}

impl SiteConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let cfg: SiteConfig =
            serde_json::from_str(json).map_err(|e| SiteError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.phrases.is_empty() || self.phrases.iter().any(|p| p.is_empty()) {
            return Err(SiteError::Config("phrases must be non-empty strings".into()));
        }
        for (name, t) in [
            ("reveal.threshold", self.reveal.threshold),
            ("reveal.meter_threshold", self.reveal.meter_threshold),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(SiteError::Config(format!("{name} must be within 0..=1, got {t}")));
            }
        }
        if self.counter_duration_ms == 0 {
            return Err(SiteError::Config("counter_duration_ms must be positive".into()));
        }
        let t = &self.typing;
        if t.type_ms == 0 || t.delete_ms == 0 {
            return Err(SiteError::Config("typing intervals must be positive".into()));
        }
        Ok(())
    }
}

/// Delays (ms) driving the typing banner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TypingTimings {
    pub start_ms: u32,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_phrase_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self { start_ms: 1000, type_ms: 100, delete_ms: 50, hold_ms: 2000, next_phrase_ms: 500 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ScrollThresholds {
    /// Navbar gains `scrolled` past this offset.
    pub navbar_scrolled_px: f64,
    /// Back-to-top button shows past this offset.
    pub back_to_top_px: f64,
    /// Sections count as current this many px before their top edge.
    pub section_lead_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self { navbar_scrolled_px: 100.0, back_to_top_px: 500.0, section_lead_px: 100.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RevealSettings {
    pub threshold: f64,
    pub stagger_ms: u32,
    /// Threshold shared by skill bars and counters.
    pub meter_threshold: f64,
    pub skill_bar_delay_ms: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self { threshold: 0.1, stagger_ms: 100, meter_threshold: 0.5, skill_bar_delay_ms: 200 }
    }
}

/// The selector contract with the page markup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Selectors {
    pub navbar_id: String,
    pub nav_toggle_id: String,
    pub nav_menu_id: String,
    pub nav_link: String,
    pub sections: String,
    pub typing_id: String,
    pub reveal: String,
    pub skill_bar: String,
    pub counter: String,
    pub back_to_top_id: String,
    pub anchors: String,
    pub avatar_id: String,
    pub buttons: String,
    pub particles: String,
    pub cards: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".into(),
            nav_toggle_id: "navToggle".into(),
            nav_menu_id: "navLinks".into(),
            nav_link: ".nav-link".into(),
            sections: "section[id], header[id]".into(),
            typing_id: "typingText".into(),
            reveal: ".animate-on-scroll".into(),
            skill_bar: ".skill-progress".into(),
            counter: ".stat-number".into(),
            back_to_top_id: "backToTop".into(),
            anchors: "a[href^=\"#\"]".into(),
            avatar_id: "profileImg".into(),
            buttons: ".btn".into(),
            particles: ".particle".into(),
            cards: ".domain-card, .skill-card, .edu-card".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AvatarStyle {
    pub display_name: String,
    pub size_px: u32,
    pub gradient_from: String,
    pub gradient_to: String,
    pub text_color: String,
    pub font: String,
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            display_name: "Ramajee Prasad".into(),
            size_px: 280,
            gradient_from: "#1e3a5f".into(),
            gradient_to: "#3b82f6".into(),
            text_color: "#ffffff".into(),
            font: "bold 80px Poppins, sans-serif".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SiteConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.phrases.len(), PHRASES.len());
        assert_eq!(cfg.phrases[0], "AI Trainer");
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        let mut cfg = SiteConfig::default();
        cfg.reveal.meter_threshold = 1.5;
        assert!(matches!(cfg.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn validate_rejects_empty_phrase() {
        let mut cfg = SiteConfig::default();
        cfg.phrases.push(String::new());
        assert!(cfg.validate().is_err());
        cfg.phrases.clear();
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overlay_keeps_defaults_for_missing_fields() {
        let cfg = SiteConfig::from_json(r#"{"phrases":["Rustacean"],"typing":{"hold_ms":900}}"#)
            .unwrap();
        assert_eq!(cfg.phrases, vec!["Rustacean".to_string()]);
        assert_eq!(cfg.typing.hold_ms, 900);
        assert_eq!(cfg.typing.type_ms, 100);
        assert_eq!(cfg.selectors.navbar_id, "navbar");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overlay_rejects_unknown_fields() {
        assert!(SiteConfig::from_json(r#"{"colour":"red"}"#).is_err());
    }
}
