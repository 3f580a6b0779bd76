use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// URL of the charting library script, fetched on first visibility
    pub chart_cdn_url: String,

    /// Pre-trigger margin for the charts section observer
    pub charts_root_margin: String,

    /// Visible fraction required before a reveal target animates in
    pub reveal_threshold: f64,

    /// How long the copy button shows "Copied" before reverting (ms)
    pub copied_reset_ms: u32,

    /// User prefers reduced motion; entrance transitions and chart
    /// animation are suppressed, charts still render
    pub reduced_motion: bool,

    /// Viewport is phone-sized; chart animation is suppressed
    pub small_viewport: bool,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            chart_cdn_url: "https://cdn.plot.ly/plotly-latest.min.js".to_string(),
            charts_root_margin: "0px 0px -15% 0px".to_string(),
            reveal_threshold: 0.2,
            copied_reset_ms: 1500,
            reduced_motion: false,
            small_viewport: false,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        settings.reduced_motion = media_query_matches("(prefers-reduced-motion: reduce)");
        settings.small_viewport = media_query_matches("(max-width: 575.98px)");

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Read overrides from localStorage
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(log_level)) = storage.get_item("portfolio_log_level") {
                    if let Some(level) = parse_log_level(&log_level) {
                        settings.log_level = level;
                    }
                }

                if let Ok(Some(cdn_url)) = storage.get_item("portfolio_chart_cdn") {
                    if !cdn_url.trim().is_empty() {
                        settings.chart_cdn_url = cdn_url;
                    }
                }

                if let Ok(Some(reduced)) = storage.get_item("portfolio_reduced_motion") {
                    settings.reduced_motion = reduced.to_lowercase() == "true";
                }

                if let Ok(Some(reset_ms)) = storage.get_item("portfolio_copied_reset_ms") {
                    if let Ok(ms) = reset_ms.parse::<u32>() {
                        settings.copied_reset_ms = ms;
                    }
                }
            }
        }

        settings
    }

    /// Chart entrance animation is allowed only with motion enabled and a
    /// viewport large enough for it to read well.
    pub fn chart_animation_allowed(&self) -> bool {
        !self.reduced_motion && !self.small_viewport
    }
}

/// Parse a stored log level name, `None` when unrecognized.
pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Platform media query, consulted once at startup.
fn media_query_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(Level::Debug));
        assert_eq!(parse_log_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_log_level("Trace"), Some(Level::Trace));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.log_level, Level::Info);
        assert_eq!(settings.charts_root_margin, "0px 0px -15% 0px");
        assert_eq!(settings.reveal_threshold, 0.2);
        assert!(!settings.reduced_motion);
        assert!(!settings.small_viewport);
    }

    #[test]
    fn test_chart_animation_gating() {
        let mut settings = AppSettings::default();
        assert!(settings.chart_animation_allowed());

        settings.reduced_motion = true;
        assert!(!settings.chart_animation_allowed());

        settings.reduced_motion = false;
        settings.small_viewport = true;
        assert!(!settings.chart_animation_allowed());
    }
}
