use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::Level;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_SITE: &str = include_str!("../site.json");

const START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event start {value:?} is not a YYYY-MM-DDTHH:MM:SS date-time")]
    InvalidStart {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
    #[error("event start {0} does not map to a single instant in its timezone")]
    NonexistentLocalTime(String),
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(EMBEDDED_SITE) {
    Ok(site) => site,
    Err(e) => {
        log::error!("Falling back to default site config: {}", e);
        SiteConfig::default()
    }
});

pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub event: EventConfig,
    pub animation: AnimationConfig,
    pub rules: Vec<String>,
    pub conduct: ConductConfig,
    pub links: Vec<LinkItem>,
    pub sponsor_tiers: Vec<SponsorTierConfig>,
    pub team: Vec<TeamMember>,
    pub about: Vec<String>,
    pub shapes: Vec<ShapeConfig>,
    pub footer: String,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventConfig {
    /// Recurring event name, without the edition year.
    pub series: String,
    pub name: String,
    pub dates: String,
    pub venue: String,
    pub venue_map_url: String,
    pub register_url: String,
    /// Local wall-clock start, interpreted in `timezone`.
    pub start: String,
    pub timezone: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            series: "FOSS Hack".to_string(),
            name: "FOSS Hack".to_string(),
            dates: String::new(),
            venue: String::new(),
            venue_map_url: String::new(),
            register_url: String::new(),
            start: String::new(),
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

impl EventConfig {
    pub fn target_instant(&self) -> Result<DateTime<Utc>, ConfigError> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| ConfigError::UnknownTimezone(self.timezone.clone()))?;
        let naive = NaiveDateTime::parse_from_str(self.start.trim(), START_FORMAT).map_err(
            |source| ConfigError::InvalidStart {
                value: self.start.clone(),
                source,
            },
        )?;
        let local = tz
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| ConfigError::NonexistentLocalTime(self.start.clone()))?;
        Ok(local.with_timezone(&Utc))
    }

    /// Target for the countdown, or `None` when it cannot be resolved.
    pub fn countdown_target(&self) -> Option<DateTime<Utc>> {
        match self.target_instant() {
            Ok(target) => Some(target),
            Err(e) => {
                log::warn!("Countdown left unscheduled: {}", e);
                None
            }
        }
    }
}

/// Visibility thresholds and entrance timings, in fractions and seconds.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub section_threshold: f64,
    pub title_threshold: f64,
    pub shapes_threshold: f64,
    pub stagger_step: f64,
    pub item_duration: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            section_threshold: 0.2,
            title_threshold: 0.5,
            shapes_threshold: 0.1,
            stagger_step: 0.1,
            item_duration: 0.8,
        }
    }
}

impl AnimationConfig {
    pub fn stagger_delay(&self, index: usize) -> f64 {
        index as f64 * self.stagger_step
    }

    pub fn stagger_style(&self, index: usize) -> String {
        format!(
            "animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.stagger_delay(index),
            self.item_duration
        )
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConductConfig {
    pub intro: String,
    pub items: Vec<String>,
    pub report_phone: String,
    pub report_email: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkItem {
    pub title: String,
    pub desc: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sponsor {
    pub name: String,
    pub logo: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SponsorTierConfig {
    pub title: String,
    /// CSS background for the tier panel.
    pub tint: String,
    pub sponsors: Vec<Sponsor>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShapeConfig {
    pub color: String,
    pub size: u32,
    pub left: String,
    pub top: String,
    pub delay: f64,
}
