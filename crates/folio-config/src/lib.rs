//! Configuration and content loading for folio.
//!
//! Settings come from built-in defaults, an optional TOML file in the
//! platform config directory, and `FOLIO_`-prefixed environment variables
//! (nested keys separated by `__`, e.g. `FOLIO_TILT__MAX_ANGLE_DEG`).
//! Portfolio content is either the embedded default or a user TOML file
//! of the same shape, validated into a [`folio_core::Portfolio`].

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use folio_core::{CoreError, Portfolio, PortfolioContent, TiltConfig};

/// Portfolio rendered when no content file is configured.
pub const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.toml");

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to parse portfolio content from {origin}: {source}")]
    Content {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid portfolio content: {0}")]
    Portfolio(#[from] CoreError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Portfolio TOML to render instead of the built-in content.
    pub content: Option<PathBuf>,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub tilt: TiltConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiConfig {
    /// Interval between `Tick` events (backdrop animation), in ms.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Interval between frames, in ms.
    #[serde(default = "default_render_rate_ms")]
    pub render_rate_ms: u64,

    /// Disable eased motion everywhere.
    #[serde(default)]
    pub reduced_motion: bool,

    /// Draw the spinning globe behind the About screen.
    #[serde(default = "default_backdrop")]
    pub backdrop: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            render_rate_ms: default_render_rate_ms(),
            reduced_motion: false,
            backdrop: default_backdrop(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}
fn default_render_rate_ms() -> u64 {
    33
}
fn default_backdrop() -> bool {
    true
}

impl Config {
    /// Reject values that would stall the event loop or keep the tilt
    /// springs from settling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation {
                field: "ui.tick_rate_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.ui.render_rate_ms == 0 {
            return Err(ConfigError::Validation {
                field: "ui.render_rate_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(self.tilt.max_angle_deg.is_finite() && self.tilt.max_angle_deg >= 0.0) {
            return Err(ConfigError::Validation {
                field: "tilt.max_angle_deg".into(),
                reason: format!("expected a non-negative angle, got {}", self.tilt.max_angle_deg),
            });
        }

        // A spring with negative stiffness or damping never settles back to flat
        let spring = &self.tilt.spring;
        for (field, value, allow_zero) in [
            ("tilt.stiffness", spring.stiffness, false),
            ("tilt.damping", spring.damping, true),
            ("tilt.mass", spring.mass, false),
        ] {
            let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
            if !(value.is_finite() && in_range) {
                let bound = if allow_zero { "non-negative" } else { "positive" };
                return Err(ConfigError::Validation {
                    field: field.into(),
                    reason: format!("expected a finite {bound} number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Tilt settings with the global reduced-motion switch applied.
    pub fn effective_tilt(&self) -> TiltConfig {
        TiltConfig {
            reduced_motion: self.tilt.reduced_motion || self.ui.reduced_motion,
            ..self.tilt
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "folio", "folio").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("folio");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` (missing file is fine) + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FOLIO_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Content loading ─────────────────────────────────────────────────

/// Parse portfolio TOML. `origin` names the source in error messages.
pub fn parse_content(raw: &str, origin: &str) -> Result<PortfolioContent, ConfigError> {
    toml::from_str(raw).map_err(|source| ConfigError::Content {
        origin: origin.to_owned(),
        source,
    })
}

/// Build the portfolio named by `config.content`, or the built-in one.
pub fn load_portfolio(config: &Config) -> Result<Portfolio, ConfigError> {
    let content = match &config.content {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "loading portfolio content");
            parse_content(&raw, &path.display().to_string())?
        }
        None => parse_content(BUILTIN_CONTENT, "built-in content")?,
    };

    Ok(Portfolio::from_content(content)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use figment::Jail;
    use folio_core::{CertificateId, CrossFilterController};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn builtin_content_is_valid() {
        let portfolio = load_portfolio(&Config::default()).unwrap();
        assert_eq!(portfolio.profile().name, "Kumaraguru P");
        assert_eq!(portfolio.skills().categories().len(), 4);
        assert_eq!(portfolio.skills().len(), 5);
        assert_eq!(portfolio.certificates().len(), 5);
        assert_eq!(portfolio.projects().len(), 2);
        assert_eq!(portfolio.journey().len(), 6);
    }

    #[test]
    fn builtin_certificates_filter_as_authored() {
        let portfolio = Arc::new(load_portfolio(&Config::default()).unwrap());
        let mut filter = CrossFilterController::new(portfolio);

        let mut names = |id: &str| -> Vec<String> {
            filter.select_certificate(&CertificateId::new(id));
            filter.visible_skills().map(|s| s.name.clone()).collect()
        };

        // "javascript" contains "java"
        assert_eq!(names("java-programming"), ["HTML", "Java"]);
        assert_eq!(names("responsive-web-design"), ["HTML", "React"]);
        assert_eq!(names("git-essentials"), ["Git/GitHub"]);
        assert!(names("blockchain-basics").is_empty());
    }

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = load_config_from(Path::new("missing.toml")).expect("defaults load");
            assert_eq!(config, Config::default());
            assert_eq!(config.ui.tick_rate_ms, 250);
            assert!((config.tilt.max_angle_deg - 15.0).abs() < f64::EPSILON);
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "folio.toml",
                r#"
                content = "mine.toml"

                [ui]
                render_rate_ms = 16

                [tilt]
                max_angle_deg = 10.0
                stiffness = 300.0
                "#,
            )?;
            jail.set_env("FOLIO_UI__RENDER_RATE_MS", "50");

            let config = load_config_from(Path::new("folio.toml")).expect("config loads");
            assert_eq!(config.content, Some(PathBuf::from("mine.toml")));
            assert_eq!(config.ui.render_rate_ms, 50);
            assert_eq!(config.ui.tick_rate_ms, 250);
            assert!((config.tilt.max_angle_deg - 10.0).abs() < f64::EPSILON);
            assert!((config.tilt.spring.stiffness - 300.0).abs() < f64::EPSILON);
            assert!((config.tilt.spring.damping - 10.0).abs() < f64::EPSILON);
            Ok(())
        });
    }

    #[test]
    fn zero_render_rate_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("FOLIO_UI__RENDER_RATE_MS", "0");
            let err = load_config_from(Path::new("missing.toml")).unwrap_err();
            assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "ui.render_rate_ms"));
            Ok(())
        });
    }

    #[test]
    fn unstable_spring_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r"
                [tilt]
                stiffness = -100.0
                damping = -5.0
                ",
            )?;
            let err = load_config_from(Path::new("config.toml")).unwrap_err();
            assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "tilt.stiffness"));
            Ok(())
        });
    }

    #[test]
    fn spring_bounds() {
        let mut config = Config::default();
        config.tilt.spring.damping = 0.0;
        assert!(config.validate().is_ok());

        config.tilt.spring.damping = -5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "tilt.damping"
        ));

        config.tilt.spring.damping = 10.0;
        config.tilt.spring.mass = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "tilt.mass"
        ));

        config.tilt.spring.mass = 1.0;
        config.tilt.spring.stiffness = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "tilt.stiffness"
        ));
    }

    #[test]
    fn reduced_motion_propagates_to_tilt() {
        let mut config = Config::default();
        assert!(!config.effective_tilt().reduced_motion);
        config.ui.reduced_motion = true;
        assert!(config.effective_tilt().reduced_motion);
    }

    #[test]
    fn content_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [profile]
            name = "Someone Else"

            [[certificates]]
            id = "only"
            title = "Only Cert"
            tags = ["rust"]
            "#
        )
        .unwrap();

        let config = Config {
            content: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let portfolio = load_portfolio(&config).unwrap();
        assert_eq!(portfolio.profile().name, "Someone Else");
        assert_eq!(portfolio.certificates().len(), 1);
        assert!(portfolio.skills().is_empty());
    }

    #[test]
    fn invalid_content_reports_core_error() {
        let raw = r#"
            [[categories]]
            id = "x"
            title = "X"
            [[categories.skills]]
            name = "Overclocked"
            level = 150
        "#;
        let content = parse_content(raw, "inline").unwrap();
        let err = Portfolio::from_content(content).unwrap_err();
        assert!(matches!(err, CoreError::LevelOutOfRange { level: 150, .. }));
    }

    #[test]
    fn malformed_content_names_its_origin() {
        let err = parse_content("[[projects]]\nid = \"one\"", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn missing_content_file_is_io_error() {
        let config = Config {
            content: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Config::default()
        };
        assert!(matches!(
            load_portfolio(&config),
            Err(ConfigError::Io { .. })
        ));
    }
}
