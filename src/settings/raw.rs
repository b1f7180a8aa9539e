use anyhow::Result;
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Endpoint used when neither the configuration nor the CLI names one: the
/// character catalog of the original deployment.
pub(super) const DEFAULT_URL: &str = "https://rickandmortyapi.com/api/character";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    source: SourceSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
    url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    placeholder: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
    close_on_select: Option<bool>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if cli.url.is_some() {
            self.source.url = cli.url.clone();
        }
        if cli.title.is_some() {
            self.ui.title = cli.title.clone();
        }
        if cli.placeholder.is_some() {
            self.ui.placeholder = cli.placeholder.clone();
        }
        if cli.initial_query.is_some() {
            self.ui.initial_query = cli.initial_query.clone();
        }
        if cli.theme.is_some() {
            self.ui.theme = cli.theme.clone();
        }
        if cli.close_on_select {
            self.ui.close_on_select = Some(true);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating
    /// and filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let config = ResolvedConfig {
            url: self.source.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            title: self.ui.title,
            placeholder: self.ui.placeholder,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme: self.ui.theme,
            close_on_select: self.ui.close_on_select.unwrap_or(false),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        let mut argv = vec!["multipick"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).expect("parses")
    }

    #[test]
    fn defaults_resolve_to_the_bundled_endpoint() {
        let resolved = RawConfig::default().resolve().expect("resolves");
        assert_eq!(resolved.url, DEFAULT_URL);
        assert!(resolved.initial_query.is_empty());
        assert!(!resolved.close_on_select);
    }

    #[test]
    fn cli_overrides_win_over_file_values() {
        let mut raw = RawConfig::default();
        raw.source.url = Some("https://file.test/api".to_string());
        raw.ui.theme = Some("light".to_string());

        raw.apply_cli_overrides(&cli(&["--url", "https://cli.test/api", "--close-on-select"]));
        let resolved = raw.resolve().expect("resolves");
        assert_eq!(resolved.url, "https://cli.test/api");
        assert_eq!(resolved.theme.as_deref(), Some("light"));
        assert!(resolved.close_on_select);
    }

    #[test]
    fn non_http_url_is_rejected() {
        let mut raw = RawConfig::default();
        raw.source.url = Some("ftp://example.test".to_string());
        assert!(raw.resolve().is_err());
    }
}
