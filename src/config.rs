//! Tunable scoring rubric and suggestion thresholds.
//!
//! The defaults reproduce the fixed heuristic the dashboards have always
//! used. A TOML file can override any of them, and environment variables
//! prefixed with `CONTENT_QUALITY__` override the file.

use config::{Config, ConfigError as SourceError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::model::{ContentType, FaqCategory};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "CONTENT_QUALITY";

/// One weighted sub-score: `min(measure * points / per, weight)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScoreConfig {
    /// Maximum points this sub-score can contribute
    pub weight: f64,
    /// Points awarded per `per` units of the measure
    pub points: f64,
    /// Units of the measure that earn `points`
    pub per: f64,
}

impl SubScoreConfig {
    /// Create a sub-score rule.
    pub const fn new(weight: f64, points: f64, per: f64) -> Self {
        Self {
            weight,
            points,
            per,
        }
    }

    /// Points earned for a measure, saturating at `weight`.
    pub fn apply(&self, measure: f64) -> f64 {
        (measure * self.points / self.per).min(self.weight).max(0.0)
    }

    fn validate(&self, name: &str) -> Result<(), EngineConfigError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(EngineConfigError::Invalid(format!(
                "scoring.{name}.weight must be a non-negative number"
            )));
        }
        if !self.points.is_finite() || self.points < 0.0 {
            return Err(EngineConfigError::Invalid(format!(
                "scoring.{name}.points must be a non-negative number"
            )));
        }
        if !self.per.is_finite() || self.per <= 0.0 {
            return Err(EngineConfigError::Invalid(format!(
                "scoring.{name}.per must be greater than zero"
            )));
        }
        Ok(())
    }
}

fn default_faq_volume() -> SubScoreConfig {
    SubScoreConfig::new(40.0, 8.0, 1.0)
}

fn default_content_breadth() -> SubScoreConfig {
    SubScoreConfig::new(30.0, 6.0, 1.0)
}

fn default_content_depth() -> SubScoreConfig {
    SubScoreConfig::new(20.0, 1.0, 50.0)
}

fn default_faq_engagement() -> SubScoreConfig {
    SubScoreConfig::new(10.0, 1.0, 1.0)
}

/// Weights of the four sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per FAQ
    #[serde(default = "default_faq_volume")]
    pub faq_volume: SubScoreConfig,
    /// Points per distinct canonical content type
    #[serde(default = "default_content_breadth")]
    pub content_breadth: SubScoreConfig,
    /// Points per average section length
    #[serde(default = "default_content_depth")]
    pub content_depth: SubScoreConfig,
    /// Points per helpful vote
    #[serde(default = "default_faq_engagement")]
    pub faq_engagement: SubScoreConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            faq_volume: default_faq_volume(),
            content_breadth: default_content_breadth(),
            content_depth: default_content_depth(),
            faq_engagement: default_faq_engagement(),
        }
    }
}

impl ScoringConfig {
    /// Sum of all sub-score weights.
    pub fn total_weight(&self) -> f64 {
        self.faq_volume.weight
            + self.content_breadth.weight
            + self.content_depth.weight
            + self.faq_engagement.weight
    }
}

fn default_required_content_types() -> Vec<ContentType> {
    ContentType::CANONICAL.to_vec()
}

fn default_required_faq_categories() -> Vec<FaqCategory> {
    vec![
        FaqCategory::Safety,
        FaqCategory::Pricing,
        FaqCategory::Results,
        FaqCategory::Comparisons,
    ]
}

fn default_faq_count_target() -> usize {
    8
}

fn default_min_average_content_length() -> f64 {
    500.0
}

fn default_target_score_delta() -> u8 {
    25
}

/// Thresholds for the gap analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Content types every service should cover, in reporting order
    #[serde(default = "default_required_content_types")]
    pub required_content_types: Vec<ContentType>,
    /// FAQ categories every service should cover, in reporting order
    #[serde(default = "default_required_faq_categories")]
    pub required_faq_categories: Vec<FaqCategory>,
    /// Suggest more FAQs while the count is below this
    #[serde(default = "default_faq_count_target")]
    pub faq_count_target: usize,
    /// Suggest deeper content while the average section is shorter than this
    #[serde(default = "default_min_average_content_length")]
    pub min_average_content_length: f64,
    /// Points added to the current score to get the target score
    #[serde(default = "default_target_score_delta")]
    pub target_score_delta: u8,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            required_content_types: default_required_content_types(),
            required_faq_categories: default_required_faq_categories(),
            faq_count_target: default_faq_count_target(),
            min_average_content_length: default_min_average_content_length(),
            target_score_delta: default_target_score_delta(),
        }
    }
}

/// Errors that can occur when loading engine configuration.
#[derive(Debug, Error)]
pub enum EngineConfigError {
    /// The configuration file was not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// The configuration path is not valid UTF-8.
    #[error("invalid configuration path: {0}")]
    InvalidPath(String),

    /// The configuration sources could not be read or merged.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] SourceError),

    /// An inline TOML document could not be parsed.
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// Environment variables use the format
    /// `CONTENT_QUALITY__<SECTION>__<KEY>`, for example
    /// `CONTENT_QUALITY__SUGGESTIONS__FAQ_COUNT_TARGET=10`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or
    /// holds values that fail [`EngineConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use content_quality::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("quality/content-quality.toml")?;
    /// # Ok::<(), content_quality::config::EngineConfigError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineConfigError> {
        let path = path.as_ref();

        let path_str = path
            .to_str()
            .ok_or_else(|| EngineConfigError::InvalidPath(format!("{:?}", path)))?;

        if !path.exists() {
            return Err(EngineConfigError::FileNotFound(path_str.to_string()));
        }

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .add_source(Self::environment())
            .build()?;

        let engine_config: EngineConfig = config.try_deserialize()?;
        engine_config.validate()?;

        tracing::debug!(path = %path_str, "loaded engine configuration");
        Ok(engine_config)
    }

    /// Build configuration from defaults plus environment overrides only.
    pub fn from_env() -> Result<Self, EngineConfigError> {
        let config = Config::builder().add_source(Self::environment()).build()?;
        let engine_config: EngineConfig = config.try_deserialize()?;
        engine_config.validate()?;
        Ok(engine_config)
    }

    /// Parse configuration from an inline TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, EngineConfigError> {
        let engine_config: EngineConfig = toml::from_str(source)?;
        engine_config.validate()?;
        Ok(engine_config)
    }

    /// Check that every sub-score rule is usable.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        self.scoring.faq_volume.validate("faq_volume")?;
        self.scoring.content_breadth.validate("content_breadth")?;
        self.scoring.content_depth.validate("content_depth")?;
        self.scoring.faq_engagement.validate("faq_engagement")?;

        let min_len = self.suggestions.min_average_content_length;
        if !min_len.is_finite() || min_len < 0.0 {
            return Err(EngineConfigError::Invalid(
                "suggestions.min_average_content_length must be a non-negative number"
                    .to_string(),
            ));
        }
        Ok(())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }
}
