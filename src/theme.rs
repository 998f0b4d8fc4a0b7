use crate::config::Config;
use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub const FALLBACK_THEME: &str = "classic";

#[derive(Debug, Clone, Copy)]
pub struct UiPalette {
    pub base_fg: Color,
    pub base_bg: Option<Color>,
    pub accent: Color,
    pub muted: Color,
    pub overlap_bg: Color,
    pub overlap_fg: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

pub struct ThemeManager {
    themes: BTreeMap<String, UiPalette>,
    theme_names: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PaletteFile {
    base_fg: Option<String>,
    base_bg: Option<String>,
    accent: Option<String>,
    muted: Option<String>,
    overlap_bg: Option<String>,
    overlap_fg: Option<String>,
    error: Option<String>,
    success: Option<String>,
    border: Option<String>,
}

impl ThemeManager {
    pub fn load(config: &Config) -> Result<Self> {
        let mut themes = BTreeMap::new();
        for (name, palette) in builtin_palettes() {
            themes.insert(name.to_string(), palette);
        }

        if let Some(dir) = resolve_theme_dir(config) {
            if dir.exists() {
                for entry in fs::read_dir(&dir)
                    .with_context(|| format!("Failed to read {}", dir.display()))?
                {
                    let path = entry?.path();
                    if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                        continue;
                    }
                    let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                        continue;
                    };
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    let file: PaletteFile = toml::from_str(&raw)
                        .with_context(|| format!("Failed to parse {}", path.display()))?;
                    themes.insert(name.to_string(), file.into_palette());
                }
            }
        }

        let theme_names: Vec<String> = themes.keys().cloned().collect();

        Ok(Self {
            themes,
            theme_names,
        })
    }

    pub fn theme_names(&self) -> &[String] {
        &self.theme_names
    }

    pub fn get(&self, name: &str) -> UiPalette {
        self.themes
            .get(name)
            .copied()
            .unwrap_or_else(|| self.fallback_palette())
    }

    pub fn fallback_name(&self) -> &str {
        if self.themes.contains_key(FALLBACK_THEME) {
            FALLBACK_THEME
        } else {
            self.theme_names
                .first()
                .map(|s| s.as_str())
                .unwrap_or(FALLBACK_THEME)
        }
    }

    fn fallback_palette(&self) -> UiPalette {
        self.themes
            .get(self.fallback_name())
            .copied()
            .unwrap_or_else(classic_palette)
    }
}

impl PaletteFile {
    fn into_palette(self) -> UiPalette {
        let base = classic_palette();
        UiPalette {
            base_fg: color_or(self.base_fg.as_deref(), base.base_fg),
            base_bg: match self.base_bg.as_deref() {
                Some(s) => parse_color(s),
                None => base.base_bg,
            },
            accent: color_or(self.accent.as_deref(), base.accent),
            muted: color_or(self.muted.as_deref(), base.muted),
            overlap_bg: color_or(self.overlap_bg.as_deref(), base.overlap_bg),
            overlap_fg: color_or(self.overlap_fg.as_deref(), base.overlap_fg),
            error: color_or(self.error.as_deref(), base.error),
            success: color_or(self.success.as_deref(), base.success),
            border: color_or(self.border.as_deref(), base.border),
        }
    }
}

pub fn resolve_theme_dir(config: &Config) -> Option<PathBuf> {
    if let Some(dir) = &config.theme_dir {
        return Some(dir.clone());
    }
    default_theme_dir()
}

fn default_theme_dir() -> Option<PathBuf> {
    let base = dirs::config_dir()?;
    Some(base.join("chainword").join("themes"))
}

pub fn builtin_palettes() -> Vec<(&'static str, UiPalette)> {
    vec![
        ("classic", classic_palette()),
        ("paper", paper_palette()),
        ("ocean", ocean_palette()),
        ("mono", mono_palette()),
    ]
}

fn classic_palette() -> UiPalette {
    UiPalette {
        base_fg: Color::Reset,
        base_bg: None,
        accent: Color::Blue,
        muted: Color::DarkGray,
        overlap_bg: Color::Green,
        overlap_fg: Color::Black,
        error: Color::Red,
        success: Color::Green,
        border: Color::DarkGray,
    }
}

fn paper_palette() -> UiPalette {
    UiPalette {
        base_fg: Color::Rgb(30, 30, 30),
        base_bg: Some(Color::Rgb(250, 250, 248)),
        accent: Color::Rgb(37, 99, 235),
        muted: Color::Rgb(130, 130, 130),
        overlap_bg: Color::Rgb(34, 197, 94),
        overlap_fg: Color::Rgb(255, 255, 255),
        error: Color::Rgb(220, 38, 38),
        success: Color::Rgb(22, 163, 74),
        border: Color::Rgb(190, 190, 185),
    }
}

fn ocean_palette() -> UiPalette {
    UiPalette {
        base_fg: Color::Rgb(192, 197, 206),
        base_bg: Some(Color::Rgb(43, 48, 59)),
        accent: Color::Rgb(143, 188, 187),
        muted: Color::Rgb(101, 115, 126),
        overlap_bg: Color::Rgb(163, 190, 140),
        overlap_fg: Color::Rgb(43, 48, 59),
        error: Color::Rgb(191, 97, 106),
        success: Color::Rgb(163, 190, 140),
        border: Color::Rgb(101, 115, 126),
    }
}

fn mono_palette() -> UiPalette {
    UiPalette {
        base_fg: Color::White,
        base_bg: Some(Color::Black),
        accent: Color::White,
        muted: Color::DarkGray,
        overlap_bg: Color::White,
        overlap_fg: Color::Black,
        error: Color::Gray,
        success: Color::White,
        border: Color::Gray,
    }
}

fn color_or(value: Option<&str>, fallback: Color) -> Color {
    value.and_then(parse_color).unwrap_or(fallback)
}

pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match value.to_lowercase().as_str() {
        "none" | "default" | "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

pub fn color_name(color: Color) -> String {
    match color {
        Color::Reset => "none".to_string(),
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::Gray => "gray".to_string(),
        Color::DarkGray => "darkgray".to_string(),
        Color::LightRed => "lightred".to_string(),
        Color::LightGreen => "lightgreen".to_string(),
        Color::LightYellow => "lightyellow".to_string(),
        Color::LightBlue => "lightblue".to_string(),
        Color::LightMagenta => "lightmagenta".to_string(),
        Color::LightCyan => "lightcyan".to_string(),
        Color::White => "white".to_string(),
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        other => format!("{other:?}").to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_color, PaletteFile};
    use ratatui::style::Color;

    #[test]
    fn parse_color_handles_names_and_hex() {
        assert_eq!(parse_color("green"), Some(Color::Green));
        assert_eq!(parse_color("DarkGray"), Some(Color::DarkGray));
        assert_eq!(parse_color("#2563eb"), Some(Color::Rgb(0x25, 0x63, 0xeb)));
        assert_eq!(parse_color("#25"), None);
        assert_eq!(parse_color("blurple"), None);
    }

    #[test]
    fn parse_color_rejects_non_ascii_hex() {
        // Six bytes but two chars; must not slice mid-character.
        assert_eq!(parse_color("#€€"), None);
        assert_eq!(parse_color("#ééé"), None);
        assert_eq!(parse_color("#25g3eb"), None);
    }

    #[test]
    fn palette_file_falls_back_to_classic_values() {
        let file: PaletteFile = toml::from_str("accent = \"cyan\"").expect("valid palette");
        let palette = file.into_palette();
        assert_eq!(palette.accent, Color::Cyan);
        assert_eq!(palette.overlap_bg, Color::Green);
    }
}
