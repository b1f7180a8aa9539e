use anyhow::{Result, bail};

/// Fully validated configuration consumed by the picker workflow.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) url: String,
    pub(crate) title: Option<String>,
    pub(crate) placeholder: Option<String>,
    pub(crate) initial_query: String,
    pub(crate) theme: Option<String>,
    pub(crate) close_on_select: bool,
}

impl ResolvedConfig {
    /// Reject configurations the picker cannot act on.
    pub(super) fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            bail!("source.url must not be empty");
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            bail!("source.url must be an http(s) endpoint, got '{}'", self.url);
        }
        if let Some(theme) = &self.theme
            && multipick::ui::theme::by_name(theme).is_none()
        {
            bail!(
                "unknown theme '{theme}'; available: {}",
                multipick::ui::theme::names().join(", ")
            );
        }
        Ok(())
    }

    /// Print the resolved values, one per line.
    pub(crate) fn print_summary(&self) {
        println!("url: {}", self.url);
        println!("title: {}", self.title.as_deref().unwrap_or("(default)"));
        println!(
            "placeholder: {}",
            self.placeholder.as_deref().unwrap_or("(default)")
        );
        println!("initial_query: '{}'", self.initial_query);
        println!("theme: {}", self.theme.as_deref().unwrap_or("(default)"));
        println!("close_on_select: {}", self.close_on_select);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ResolvedConfig {
        ResolvedConfig {
            url: "https://example.test/api".to_string(),
            title: None,
            placeholder: None,
            initial_query: String::new(),
            theme: None,
            close_on_select: false,
        }
    }

    #[test]
    fn http_urls_validate() {
        assert!(config().validate().is_ok());
        let mut http = config();
        http.url = "http://example.test".to_string();
        assert!(http.validate().is_ok());
    }

    #[test]
    fn empty_url_fails_validation() {
        let mut bad = config();
        bad.url = "  ".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn unknown_theme_fails_validation() {
        let mut bad = config();
        bad.theme = Some("neon".to_string());
        assert!(bad.validate().is_err());
        let mut good = config();
        good.theme = Some("slate".to_string());
        assert!(good.validate().is_ok());
    }
}
