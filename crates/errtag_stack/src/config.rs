//! Capture configuration.
//!
//! Configuration is loaded from TOML with the following precedence (later
//! sources override earlier ones):
//! 1. Bundled defaults (include_str! from errtag.toml)
//! 2. User config in the home directory (~/.config/errtag/errtag.toml)
//! 3. User config in the current directory (./errtag.toml)

use config::{Config, File, FileFormat};
use errtag_error::{ConfigError, ConfigErrorKind, ErrtagResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default capture depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../errtag.toml");

/// Stack capture settings.
///
/// # Example
///
/// ```toml
/// [stack]
/// max_depth = 32
/// trim_internal = true
/// capture = true
/// ```
///
/// ```
/// use errtag_stack::StackConfig;
///
/// let config = StackConfig::builder().max_depth(16).build();
/// assert_eq!(*config.max_depth(), 16);
/// assert!(*config.trim_internal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// Maximum number of stack entries recorded per capture.
    max_depth: usize,

    /// Drop leading frames that belong to the capture path itself.
    trim_internal: bool,

    /// Record a stack at all. When false, every capture is empty.
    capture: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trim_internal: true,
            capture: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    stack: StackConfig,
}

impl StackConfig {
    /// Creates a new stack config builder.
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder::default()
    }

    /// Checks that the settings can drive a capture.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_depth` is zero.
    pub fn validate(&self) -> ErrtagResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::new(ConfigErrorKind::Invalid(
                "max_depth must be greater than 0".to_string(),
            ))
            .into());
        }
        Ok(())
    }

    /// Load the `[stack]` table from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ErrtagResult<Self> {
        debug!("Loading stack configuration from file");

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Read(format!(
                    "{}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;

        Self::finish(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when missing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use errtag_stack::StackConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = StackConfig::load()?;
    /// println!("capturing up to {} frames", config.max_depth());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> ErrtagResult<Self> {
        debug!("Loading stack configuration: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/errtag/errtag.toml");
            debug!(path = %home_config.display(), "Adding optional home config");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("errtag").required(false));

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;

        Self::finish(config)
    }

    /// Load only the bundled defaults, ignoring any user files.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> ErrtagResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;

        Self::finish(config)
    }

    fn finish(config: Config) -> ErrtagResult<Self> {
        let file: ConfigFile = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        file.stack.validate()?;
        debug!(
            max_depth = file.stack.max_depth,
            trim_internal = file.stack.trim_internal,
            capture = file.stack.capture,
            "Stack configuration loaded"
        );
        Ok(file.stack)
    }
}

/// Builder for `StackConfig`.
#[derive(Debug, Default)]
pub struct StackConfigBuilder {
    max_depth: Option<usize>,
    trim_internal: Option<bool>,
    capture: Option<bool>,
}

impl StackConfigBuilder {
    /// Sets the maximum capture depth.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = Some(value);
        self
    }

    /// Sets whether capture-path frames are trimmed.
    pub fn trim_internal(mut self, value: bool) -> Self {
        self.trim_internal = Some(value);
        self
    }

    /// Sets whether stacks are captured at all.
    pub fn capture(mut self, value: bool) -> Self {
        self.capture = Some(value);
        self
    }

    /// Builds the `StackConfig`.
    pub fn build(self) -> StackConfig {
        let defaults = StackConfig::default();
        StackConfig {
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            trim_internal: self.trim_internal.unwrap_or(defaults.trim_internal),
            capture: self.capture.unwrap_or(defaults.capture),
        }
    }
}
