//! Simulator settings from a JSON file plus command-line overrides

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use subrogation_workflow_core::SimulatorConfig;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// JSON file with simulator settings (missing keys keep their defaults)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// RNG seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Tick timer period in milliseconds
    #[arg(long = "tick-ms", global = true)]
    pub tick_ms: Option<u64>,

    /// Render timer period in milliseconds
    #[arg(long = "render-ms", global = true)]
    pub render_ms: Option<u64>,

    /// Processing time before a stage can finish, in milliseconds
    #[arg(long = "threshold-ms", global = true)]
    pub threshold_ms: Option<u64>,

    /// Chance that a finishing stage fails (0.0 to 1.0)
    #[arg(long = "failure-rate", global = true)]
    pub failure_rate: Option<f64>,
}

impl ConfigArgs {
    /// Resolve the effective configuration
    pub fn load(&self) -> anyhow::Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                SimulatorConfig::from_json(&json)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => SimulatorConfig::default(),
        };
        self.apply(&mut config);
        config.validate().context("invalid simulator configuration")?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn apply(&self, config: &mut SimulatorConfig) {
        if let Some(seed) = self.seed {
            config.rng_seed = seed;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_interval_ms = ms;
        }
        if let Some(ms) = self.render_ms {
            config.render_interval_ms = ms;
        }
        if let Some(ms) = self.threshold_ms {
            config.completion_threshold_ms = ms;
        }
        if let Some(p) = self.failure_rate {
            config.failure_probability = p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let config = ConfigArgs::default().load().unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let args = ConfigArgs {
            seed: Some(9),
            threshold_ms: Some(500),
            ..ConfigArgs::default()
        };
        let config = args.load().unwrap();
        assert_eq!(config.rng_seed, 9);
        assert_eq!(config.completion_threshold_ms, 500);
        assert_eq!(config.tick_interval_ms, 1_000);
    }

    #[test]
    fn test_out_of_range_failure_rate_rejected() {
        let args = ConfigArgs {
            failure_rate: Some(1.5),
            ..ConfigArgs::default()
        };
        assert!(args.load().is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/subro.json")),
            ..ConfigArgs::default()
        };
        let err = args.load().unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/subro.json"));
    }
}
