use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;

pub const DEFAULT_THEME_ID: &str = "classic";

const DEFAULT_BIRD: &str = "characters/bird1_sprite.png";
const DEFAULT_OBSTACLE: &str = "pipe-top.png";
const DEFAULT_GROUND: &str = "ground.png";

/// Built-in themes: id, display name, description, background colour.
const BUILTIN: [(&str, &str, &str, &str); 3] = [
    (
        "classic",
        "Classic",
        "The original Flappy Bird experience.",
        "#87CEEB",
    ),
    ("forest", "Forest", "A peaceful forest environment.", "#2E7D32"),
    ("sunset", "Sunset", "A beautiful sunset adventure.", "#FF9800"),
];

/// Asset references for one theme. Paths are relative to the theme directory
/// (or the shared asset root for the defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeAssets {
    /// Sprite sheet, or individual animation frames in order.
    pub bird: Vec<String>,
    pub obstacles: Vec<String>,
    /// `#RRGGBB`
    pub background: String,
    pub ground: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub assets: ThemeAssets,
}

impl ThemeDescriptor {
    fn builtin(id: &str, name: &str, description: &str, background: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            assets: ThemeAssets {
                bird: vec![DEFAULT_BIRD.to_string()],
                obstacles: vec![DEFAULT_OBSTACLE.to_string()],
                background: background.to_string(),
                ground: vec![DEFAULT_GROUND.to_string()],
            },
        }
    }

    /// Background colour as RGB, if the descriptor holds a valid hex colour.
    pub fn background_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.assets.background)
    }
}

/// `description.json` inside a theme directory. Both fields are optional.
#[derive(Debug, Default, Deserialize)]
struct Description {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<ThemeDescriptor>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeCatalog {
    pub fn builtin() -> Self {
        let themes = BUILTIN
            .iter()
            .map(|&(id, name, description, bg)| ThemeDescriptor::builtin(id, name, description, bg))
            .collect();
        Self { themes }
    }

    /// Built-in themes overlaid with whatever `<dir>/<id>/` provides.
    ///
    /// Never fails: problems with a theme directory are logged and that theme
    /// keeps its built-in values.
    pub fn load(dir: &Path) -> Self {
        let mut catalog = Self::builtin();
        for theme in catalog.themes.iter_mut() {
            let theme_dir = dir.join(&theme.id);
            if let Err(e) = overlay_theme(theme, &theme_dir) {
                warn!("theme '{}': {:#}; using defaults", theme.id, e);
            }
        }
        catalog
    }

    pub fn themes(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    pub fn get(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// The requested theme, or the default one when `id` is unknown.
    pub fn get_or_default(&self, id: &str) -> &ThemeDescriptor {
        match self.get(id) {
            Some(theme) => theme,
            None => {
                warn!("unknown theme '{}', falling back to '{}'", id, DEFAULT_THEME_ID);
                self.default_theme()
            }
        }
    }

    pub fn default_theme(&self) -> &ThemeDescriptor {
        self.get(DEFAULT_THEME_ID).unwrap_or(&self.themes[0])
    }
}

fn overlay_theme(theme: &mut ThemeDescriptor, dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        debug!("no theme directory at {}", dir.display());
        return Ok(());
    }

    if let Some(desc) = read_description(&dir.join("description.json"))? {
        if let Some(name) = desc.name.filter(|n| !n.trim().is_empty()) {
            theme.name = name;
        }
        if let Some(description) = desc.description.filter(|d| !d.trim().is_empty()) {
            theme.description = description;
        }
    }

    let files = list_files(dir)?;
    let sprites: Vec<String> = matching(&files, |f| {
        f.starts_with("bird") && f.contains("sprite") && f.ends_with(".png")
    });
    let bird = if sprites.is_empty() {
        matching(&files, |f| {
            f.strip_prefix("bird")
                .map_or(false, |rest| rest.starts_with(|c: char| c.is_ascii_digit()))
                && f.ends_with(".png")
        })
    } else {
        sprites
    };
    let obstacles = matching(&files, |f| f == "pipe.png");
    let ground = matching(&files, |f| f.starts_with("ground") && f.ends_with(".png"));

    if !bird.is_empty() {
        theme.assets.bird = bird;
    }
    if !obstacles.is_empty() {
        theme.assets.obstacles = obstacles;
    }
    if !ground.is_empty() {
        theme.assets.ground = ground;
    }
    Ok(())
}

/// `Ok(None)` when the file does not exist.
fn read_description(path: &Path) -> Result<Option<Description>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", path.display()));
        }
    };
    let desc = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(desc))
}

fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

fn matching(files: &[String], pred: impl Fn(&str) -> bool) -> Vec<String> {
    files.iter().filter(|f| pred(f.as_str())).cloned().collect()
}

/// Parse `#RRGGBB` (leading `#` optional).
///
/// # Examples
///
/// ```
/// use tui_flappy_theme::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#87CEEB"), Some((0x87, 0xCE, 0xEB)));
/// assert_eq!(parse_hex_color("2e7d32"), Some((0x2E, 0x7D, 0x32)));
/// assert_eq!(parse_hex_color("#FFF"), None);
/// ```
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(test_id: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tui-flappy-theme-{}-{}",
            test_id,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_builtin_themes() {
        let catalog = ThemeCatalog::builtin();
        let ids: Vec<&str> = catalog.themes().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["classic", "forest", "sunset"]);
        assert_eq!(
            catalog.get("forest").unwrap().background_rgb(),
            Some((0x2E, 0x7D, 0x32))
        );
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let catalog = ThemeCatalog::builtin();
        assert!(catalog.get("space").is_none());
        assert_eq!(catalog.get_or_default("space").id, DEFAULT_THEME_ID);
        assert_eq!(catalog.get_or_default("SUNSET").id, "sunset");
    }

    #[test]
    fn test_missing_dir_keeps_builtin() {
        let dir = scratch_dir("missing");
        let loaded = ThemeCatalog::load(&dir.join("nope"));
        assert_eq!(loaded, ThemeCatalog::builtin());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_description_overrides_text() {
        let dir = scratch_dir("desc");
        fs::create_dir_all(dir.join("forest")).unwrap();
        fs::write(
            dir.join("forest/description.json"),
            r#"{"name": "Deep Woods"}"#,
        )
        .unwrap();

        let catalog = ThemeCatalog::load(&dir);
        let forest = catalog.get("forest").unwrap();
        assert_eq!(forest.name, "Deep Woods");
        assert_eq!(forest.description, "A peaceful forest environment.");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_description_falls_back() {
        let dir = scratch_dir("bad");
        fs::create_dir_all(dir.join("sunset")).unwrap();
        fs::write(dir.join("sunset/description.json"), "{not json").unwrap();

        let catalog = ThemeCatalog::load(&dir);
        assert_eq!(catalog.get("sunset").unwrap().name, "Sunset");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_asset_discovery_prefers_sprite_sheet() {
        let dir = scratch_dir("assets");
        let classic = dir.join("classic");
        fs::create_dir_all(&classic).unwrap();
        for name in ["bird1.png", "bird2.png", "pipe.png", "ground_a.png"] {
            fs::write(classic.join(name), b"").unwrap();
        }

        let catalog = ThemeCatalog::load(&dir);
        let assets = &catalog.get("classic").unwrap().assets;
        assert_eq!(assets.bird, ["bird1.png", "bird2.png"]);
        assert_eq!(assets.obstacles, ["pipe.png"]);
        assert_eq!(assets.ground, ["ground_a.png"]);

        fs::write(classic.join("bird_sprite.png"), b"").unwrap();
        let catalog = ThemeCatalog::load(&dir);
        assert_eq!(
            catalog.get("classic").unwrap().assets.bird,
            ["bird_sprite.png"]
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#ff980"), None);
    }
}
