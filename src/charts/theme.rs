use web_sys::window;

/// The two live page variants, as one coordinator with two palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    /// Dark blue palette of the current page.
    #[default]
    Midnight,
    /// Warm light palette of the classic page.
    Ember,
}

/// Colors shared by the three charts of one page variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub accent: String,
    pub accent_alt: String,
    pub text: String,
    pub muted: String,
    pub grid: String,
    pub bar_fill: String,
    pub area_fill: String,
    pub donut_segments: [String; 5],
}

impl ThemePreset {
    fn default_accent(&self) -> &'static str {
        match self {
            ThemePreset::Midnight => "#2563eb",
            ThemePreset::Ember => "#bd5d38",
        }
    }

    fn default_accent_alt(&self) -> &'static str {
        match self {
            ThemePreset::Midnight => "#0ea5e9",
            ThemePreset::Ember => "#343a40",
        }
    }
}

impl ChartTheme {
    /// Hardcoded palette for a preset, no DOM access.
    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Midnight => Self {
                accent: "#2563eb".to_string(),
                accent_alt: "#0ea5e9".to_string(),
                text: "#e2e8f0".to_string(),
                muted: "#94a3b8".to_string(),
                grid: "rgba(148, 163, 184, 0.15)".to_string(),
                bar_fill: "rgba(37, 99, 235, 0.65)".to_string(),
                area_fill: "rgba(14, 165, 233, 0.15)".to_string(),
                donut_segments: [
                    "rgba(37, 99, 235, 0.8)".to_string(),
                    "rgba(14, 165, 233, 0.8)".to_string(),
                    "rgba(226, 232, 240, 0.5)".to_string(),
                    "rgba(37, 99, 235, 0.35)".to_string(),
                    "rgba(148, 163, 184, 0.4)".to_string(),
                ],
            },
            ThemePreset::Ember => Self {
                accent: "#bd5d38".to_string(),
                accent_alt: "#343a40".to_string(),
                text: "#343a40".to_string(),
                muted: "#6c757d".to_string(),
                grid: "rgba(0, 0, 0, 0.05)".to_string(),
                bar_fill: "rgba(189, 93, 56, 0.65)".to_string(),
                area_fill: "rgba(189, 93, 56, 0.15)".to_string(),
                donut_segments: [
                    "rgba(189, 93, 56, 0.75)".to_string(),
                    "rgba(52, 58, 64, 0.8)".to_string(),
                    "rgba(108, 117, 125, 0.75)".to_string(),
                    "rgba(189, 93, 56, 0.4)".to_string(),
                    "rgba(52, 58, 64, 0.35)".to_string(),
                ],
            },
        }
    }

    /// Palette for a preset with the page's `--accent` / `--accent-2` CSS
    /// custom properties applied on top. Missing or empty tokens keep the
    /// preset defaults.
    pub fn from_document(preset: ThemePreset) -> Self {
        let mut theme = Self::preset(preset);

        let Some(accent_tokens) = read_accent_tokens() else {
            log::debug!("color tokens unavailable, using {:?} defaults", preset);
            return theme;
        };

        if let Some(accent) = accent_tokens.0 {
            theme.accent = accent;
        }
        if let Some(accent_alt) = accent_tokens.1 {
            theme.accent_alt = accent_alt;
        }
        theme
    }
}

fn read_accent_tokens() -> Option<(Option<String>, Option<String>)> {
    let window = window()?;
    let root = window.document()?.document_element()?;
    let styles = window.get_computed_style(&root).ok()??;

    let read = |token: &str| {
        styles
            .get_property_value(token)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    Some((read("--accent"), read("--accent-2")))
}
