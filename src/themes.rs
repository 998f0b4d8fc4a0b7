use crate::config::Config;
use crate::theme::{builtin_palettes, color_name, resolve_theme_dir, UiPalette};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn install_builtin_themes(cfg: &Config) -> Result<(PathBuf, usize)> {
    let target_dir = resolve_theme_dir(cfg).context("No theme directory configured")?;
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let mut written = 0usize;
    for (name, palette) in builtin_palettes() {
        let dest = target_dir.join(format!("{name}.toml"));
        fs::write(&dest, palette_toml(&palette))
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        written += 1;
    }

    Ok((target_dir, written))
}

fn palette_toml(palette: &UiPalette) -> String {
    let mut out = String::new();
    let mut field = |key: &str, value: String| {
        out.push_str(&format!("{key} = \"{value}\"\n"));
    };
    field("base_fg", color_name(palette.base_fg));
    field(
        "base_bg",
        palette
            .base_bg
            .map(color_name)
            .unwrap_or_else(|| "none".to_string()),
    );
    field("accent", color_name(palette.accent));
    field("muted", color_name(palette.muted));
    field("overlap_bg", color_name(palette.overlap_bg));
    field("overlap_fg", color_name(palette.overlap_fg));
    field("error", color_name(palette.error));
    field("success", color_name(palette.success));
    field("border", color_name(palette.border));
    out
}
