//! Centralized configuration for Showmatch.
//!
//! All tunable parameters of decomposition and resolution live here
//! instead of being hard-coded at the call sites.

/// Central configuration for all Showmatch components.
///
/// Groups related settings into logical sections and supports
/// environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowmatchConfig {
    pub resolver: ResolverConfig,
    pub decomposer: DecomposerConfig,
}

/// Candidate resolution behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Emit a warning when several shows tie and the newest one is chosen
    pub ambiguity_notice: bool,
    /// Return the top-scored candidate outright when its score is strictly
    /// higher than the runner-up and the two names differ
    pub dominant_score_shortcut: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            ambiguity_notice: true,
            dominant_score_shortcut: true,
        }
    }
}

/// Free-text query decomposition behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposerConfig {
    /// Upper bound on search calls per decomposition (None = one per word)
    pub max_attempts: Option<usize>,
    /// Log each retry at info level instead of debug
    pub retry_notice: bool,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            retry_notice: true,
        }
    }
}

impl ShowmatchConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Values that fail to parse are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("SHOWMATCH_AMBIGUITY_NOTICE")
            && let Ok(enabled) = value.parse::<bool>()
        {
            config.resolver.ambiguity_notice = enabled;
        }

        if let Ok(value) = std::env::var("SHOWMATCH_DOMINANT_SHORTCUT")
            && let Ok(enabled) = value.parse::<bool>()
        {
            config.resolver.dominant_score_shortcut = enabled;
        }

        if let Ok(value) = std::env::var("SHOWMATCH_MAX_DECOMPOSE_ATTEMPTS")
            && let Ok(attempts) = value.parse::<usize>()
        {
            config.decomposer.max_attempts = Some(attempts.max(1));
        }

        if let Ok(value) = std::env::var("SHOWMATCH_RETRY_NOTICE")
            && let Ok(enabled) = value.parse::<bool>()
        {
            config.decomposer.retry_notice = enabled;
        }

        config
    }

    /// Creates a configuration that keeps logs quiet, for tests and batch use.
    pub fn quiet() -> Self {
        Self {
            resolver: ResolverConfig {
                ambiguity_notice: false,
                ..Default::default()
            },
            decomposer: DecomposerConfig {
                retry_notice: false,
                ..Default::default()
            },
        }
    }

    /// Creates a configuration that always scores qualifiers, even when one
    /// candidate clearly outranks the rest.
    pub fn qualifiers_first() -> Self {
        Self {
            resolver: ResolverConfig {
                dominant_score_shortcut: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
