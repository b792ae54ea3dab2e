//! Contrast-aware theming.
//!
//! The UI renders from a single resolved [`Palette`] of eight display
//! variables (background, text, button colors, panel and code colors).
//! A palette comes from one of two sources:
//!
//! - a named theme ([`ThemeName::Dark`] / [`ThemeName::Light`]), or
//! - a user-chosen background color, from which the remaining seven
//!   variables are derived by luminance ([`contrast_palette`]).
//!
//! The custom color is layered on top of the named theme as an explicit
//! override map owned by [`ThemeManager`]; clearing the custom color
//! empties the map and the named theme shows through again.

use ratatui::style::Color;
use rustc_hash::FxHashMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::prefs::{Prefs, PrefsStore};

/// A named theme. Unknown persisted names deserialize as `Dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }

    /// The other one of the two named themes.
    pub fn flipped(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }
}

impl Serialize for ThemeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThemeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Tolerant: a stale or hand-edited prefs file must not abort startup
        let name = String::deserialize(deserializer)?;
        Ok(match name.as_str() {
            "light" => ThemeName::Light,
            _ => ThemeName::Dark,
        })
    }
}

/// The eight display variables the theme layer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVar {
    Bg,
    Text,
    ButtonBg,
    ButtonHoverBg,
    ButtonText,
    PanelBg,
    CodeBg,
    CodeText,
}

impl StyleVar {
    pub const ALL: [StyleVar; 8] = [
        StyleVar::Bg,
        StyleVar::Text,
        StyleVar::ButtonBg,
        StyleVar::ButtonHoverBg,
        StyleVar::ButtonText,
        StyleVar::PanelBg,
        StyleVar::CodeBg,
        StyleVar::CodeText,
    ];
}

/// A fully resolved set of display colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub button_bg: Color,
    pub button_hover_bg: Color,
    pub button_text: Color,
    pub panel_bg: Color,
    pub code_bg: Color,
    pub code_text: Color,
}

pub const DARK_PALETTE: Palette = Palette {
    bg: Color::Rgb(18, 18, 18),
    text: Color::Rgb(255, 255, 255),
    button_bg: Color::Rgb(34, 34, 34),
    button_hover_bg: Color::Rgb(68, 68, 68),
    button_text: Color::Rgb(255, 255, 255),
    panel_bg: Color::Rgb(38, 38, 38),
    code_bg: Color::Rgb(30, 30, 30),
    code_text: Color::Rgb(0, 255, 136),
};

pub const LIGHT_PALETTE: Palette = Palette {
    bg: Color::Rgb(245, 245, 245),
    text: Color::Rgb(0, 0, 0),
    button_bg: Color::Rgb(221, 221, 221),
    button_hover_bg: Color::Rgb(204, 204, 204),
    button_text: Color::Rgb(0, 0, 0),
    panel_bg: Color::Rgb(242, 242, 242),
    code_bg: Color::Rgb(247, 247, 247),
    code_text: Color::Rgb(0, 51, 0),
};

/// The seven variables derived from a custom background color
/// (everything in [`Palette`] except the background itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPalette {
    pub text: Color,
    pub button_bg: Color,
    pub button_hover_bg: Color,
    pub button_text: Color,
    pub panel_bg: Color,
    pub code_bg: Color,
    pub code_text: Color,
}

/// Contrast set for a light background: dark text, light controls.
pub const LIGHT_BG_CONTRAST: ContrastPalette = ContrastPalette {
    text: Color::Rgb(0, 0, 0),
    button_bg: Color::Rgb(221, 221, 221),
    button_hover_bg: Color::Rgb(204, 204, 204),
    button_text: Color::Rgb(0, 0, 0),
    panel_bg: Color::Rgb(242, 242, 242),
    code_bg: Color::Rgb(247, 247, 247),
    code_text: Color::Rgb(0, 51, 0),
};

/// Contrast set for a dark background: light text, dark controls.
pub const DARK_BG_CONTRAST: ContrastPalette = ContrastPalette {
    text: Color::Rgb(255, 255, 255),
    button_bg: Color::Rgb(34, 34, 34),
    button_hover_bg: Color::Rgb(68, 68, 68),
    button_text: Color::Rgb(255, 255, 255),
    panel_bg: Color::Rgb(38, 38, 38),
    code_bg: Color::Rgb(30, 30, 30),
    code_text: Color::Rgb(0, 255, 136),
};

/// Parse a `#rrggbb` string into a terminal color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.starts_with('#') {
        return None;
    }
    // Checked slicing: too-short input and byte ranges that split a
    // multibyte character both yield None instead of panicking
    let r = u8::from_str_radix(hex.get(1..3)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(3..5)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(5..7)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Weighted brightness of a `#rrggbb` color, in `[0, 1]`.
///
/// Malformed or absent input yields 0.0, which downstream treats as a
/// dark background.
pub fn luminance_from_hex(hex: &str) -> f32 {
    let Some(Color::Rgb(r, g, b)) = parse_hex_color(hex) else {
        return 0.0;
    };
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Derive the seven contrast variables for a custom background color.
///
/// Pure: the same input always maps to the same fixed set. Luminance
/// strictly above 0.5 selects the light-background set; everything else
/// (including malformed input) the dark-background set.
pub fn contrast_palette(hex: &str) -> ContrastPalette {
    if luminance_from_hex(hex) > 0.5 {
        LIGHT_BG_CONTRAST
    } else {
        DARK_BG_CONTRAST
    }
}

/// Owns the active theme choice, the optional custom background color,
/// and the override-variable map, and keeps all three in sync with the
/// preference store.
pub struct ThemeManager {
    active: ThemeName,
    custom_bg: Option<String>,
    overrides: FxHashMap<StyleVar, Color>,
    store: PrefsStore,
}

impl ThemeManager {
    /// Build the manager from loaded preferences and synthesize one
    /// application of the overrides so rendering matches the stored
    /// state without any user interaction.
    pub fn from_prefs(prefs: Prefs, store: PrefsStore) -> Self {
        let mut mgr = ThemeManager {
            active: prefs.theme,
            custom_bg: prefs.custom_bg,
            overrides: FxHashMap::default(),
            store,
        };
        mgr.reconcile_overrides();
        mgr
    }

    pub fn active(&self) -> ThemeName {
        self.active
    }

    pub fn custom_bg(&self) -> Option<&str> {
        self.custom_bg.as_deref()
    }

    pub fn overrides(&self) -> &FxHashMap<StyleVar, Color> {
        &self.overrides
    }

    /// Set the active theme name, persist it, and reconcile the
    /// custom-color override layer.
    pub fn apply_theme(&mut self, name: ThemeName) {
        self.active = name;
        self.persist();
        self.reconcile_overrides();
    }

    /// Persist a new custom background color and reapply the derived
    /// contrast variables. Does not change the stored theme name.
    pub fn set_custom_color(&mut self, hex: String) {
        self.custom_bg = Some(hex);
        self.persist();
        self.reconcile_overrides();
    }

    /// Toggle the theme.
    ///
    /// Asymmetric: with a custom color active, toggling escapes it
    /// (deletes the color, forces dark). Otherwise it flips between
    /// the two named themes.
    pub fn toggle(&mut self) {
        if self.custom_bg.is_some() {
            self.custom_bg = None;
            self.apply_theme(ThemeName::Dark);
        } else {
            self.apply_theme(self.active.flipped());
        }
    }

    /// The palette the UI should render from: the named theme's colors
    /// with any custom-color overrides applied on top.
    pub fn resolved(&self) -> Palette {
        let named = match self.active {
            ThemeName::Dark => DARK_PALETTE,
            ThemeName::Light => LIGHT_PALETTE,
        };
        let get = |var: StyleVar, fallback: Color| -> Color {
            self.overrides.get(&var).copied().unwrap_or(fallback)
        };
        Palette {
            bg: get(StyleVar::Bg, named.bg),
            text: get(StyleVar::Text, named.text),
            button_bg: get(StyleVar::ButtonBg, named.button_bg),
            button_hover_bg: get(StyleVar::ButtonHoverBg, named.button_hover_bg),
            button_text: get(StyleVar::ButtonText, named.button_text),
            panel_bg: get(StyleVar::PanelBg, named.panel_bg),
            code_bg: get(StyleVar::CodeBg, named.code_bg),
            code_text: get(StyleVar::CodeText, named.code_text),
        }
    }

    /// Rebuild the override map from the custom color, or clear it so
    /// the named theme takes effect unobstructed.
    fn reconcile_overrides(&mut self) {
        self.overrides.clear();
        if let Some(hex) = &self.custom_bg {
            // Malformed colors degrade to luminance 0: black bg, dark set
            let bg = parse_hex_color(hex).unwrap_or(Color::Rgb(0, 0, 0));
            let c = contrast_palette(hex);
            for var in StyleVar::ALL {
                let color = match var {
                    StyleVar::Bg => bg,
                    StyleVar::Text => c.text,
                    StyleVar::ButtonBg => c.button_bg,
                    StyleVar::ButtonHoverBg => c.button_hover_bg,
                    StyleVar::ButtonText => c.button_text,
                    StyleVar::PanelBg => c.panel_bg,
                    StyleVar::CodeBg => c.code_bg,
                    StyleVar::CodeText => c.code_text,
                };
                self.overrides.insert(var, color);
            }
        }
    }

    /// Write the current choice to the preference store. A save failure
    /// is logged and otherwise ignored; theming keeps working in-memory.
    fn persist(&self) {
        let prefs = Prefs {
            theme: self.active,
            custom_bg: self.custom_bg.clone(),
        };
        if let Err(e) = self.store.save(&prefs) {
            tracing::warn!("failed to save preferences: {e:#}");
        }
    }
}
