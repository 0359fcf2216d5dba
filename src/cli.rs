//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use catworld_app::config::{self, Settings};
use catworld_core::PageVariant;

/// CatWorld - a terminal page all about cats
#[derive(Parser, Debug, Default)]
#[command(name = "catworld")]
#[command(about = "A terminal page all about cats", long_about = None)]
pub struct Args {
    /// Page iteration to mount: classic, selector, showcase or full
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<PageVariant>,

    /// Config file (default: <config dir>/catworld/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Facts fetched per refresh on the full page (1 to 50)
    #[arg(long, value_name = "K")]
    pub fact_count: Option<usize>,

    /// Write a default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Config file path this run reads from
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }

    /// Load the config file and apply command-line overrides on top
    pub fn resolve_settings(&self) -> Settings {
        let mut settings = config::load_settings(self.config.as_deref());

        if let Some(variant) = self.variant {
            settings.ui.variant = variant;
        }
        if let Some(count) = self.fact_count {
            settings.facts.count = count;
        }

        config::validate_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "catworld",
            "--variant",
            "showcase",
            "--fact-count",
            "3",
            "--config",
            "/tmp/cats.toml",
        ])
        .unwrap();

        assert_eq!(args.variant, Some(PageVariant::Showcase));
        assert_eq!(args.fact_count, Some(3));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/cats.toml")));
        assert!(!args.init_config);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Args::try_parse_from(["catworld", "--variant", "deluxe"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[facts]
count = 7

[ui]
variant = "classic"
"#,
        )
        .unwrap();

        let args = Args {
            config: Some(path.clone()),
            variant: Some(PageVariant::Full),
            ..Default::default()
        };
        let settings = args.resolve_settings();
        assert_eq!(settings.ui.variant, PageVariant::Full);
        assert_eq!(settings.facts.count, 7);

        let args = Args {
            config: Some(path),
            fact_count: Some(0),
            ..Default::default()
        };
        let settings = args.resolve_settings();
        assert_eq!(settings.ui.variant, PageVariant::Classic);
        // Zero is clamped like a zero in the file
        assert_eq!(settings.facts.count, 1);
    }

    #[test]
    fn test_huge_fact_count_flag_is_capped() {
        let args = Args::try_parse_from([
            "catworld",
            "--config",
            "/nonexistent/catworld.toml",
            "--fact-count",
            "65531",
        ])
        .unwrap();

        let settings = args.resolve_settings();
        assert_eq!(settings.facts.count, config::settings::MAX_FACT_COUNT);
    }
}
