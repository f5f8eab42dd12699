//! CLI argument parsing with clap

use crate::config::Config;
use crate::store::AnswerPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Physique Onboarding - guided physique analysis intake
///
/// Walks through sign-in, a short lifestyle questionnaire and a photo
/// upload, then shows a physique analysis report.
#[derive(Parser, Debug)]
#[command(name = "physique-onboarding")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// When specified, settings from the config file are used as defaults.
    /// CLI arguments will override config file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Require every question to be answered before moving on
    #[arg(short, long)]
    pub strict: bool,

    /// Simulated sign-in latency in milliseconds
    #[arg(long)]
    pub login_delay_ms: Option<u64>,

    /// Simulated analysis latency in milliseconds
    #[arg(long)]
    pub analysis_delay_ms: Option<u64>,

    /// UI language (en, zh-CN)
    #[arg(short = 'L', long, env = "PHYSIQUE_LOCALE")]
    pub locale: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub print_sample_config: bool,
}

impl Cli {
    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if self.strict {
            config.policy = AnswerPolicy::Strict;
        }
        if let Some(login_delay_ms) = self.login_delay_ms {
            config.login_delay_ms = login_delay_ms;
        }
        if let Some(analysis_delay_ms) = self.analysis_delay_ms {
            config.analysis_delay_ms = analysis_delay_ms;
        }
        if let Some(ref locale) = self.locale {
            config.locale = Some(locale.clone());
        }

        config
    }

    /// Convert CLI arguments to Config (when no config file is used)
    pub fn to_config(&self) -> Config {
        self.merge_with_config(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["physique-onboarding"]);
        assert_eq!(cli.to_config(), Config::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::parse_from([
            "physique-onboarding",
            "--strict",
            "--analysis-delay-ms",
            "10",
        ]);
        let file = Config {
            login_delay_ms: 20,
            ..Config::default()
        };
        let config = cli.merge_with_config(file);
        assert_eq!(config.policy, AnswerPolicy::Strict);
        assert_eq!(config.login_delay_ms, 20);
        assert_eq!(config.analysis_delay_ms, 10);
    }
}
