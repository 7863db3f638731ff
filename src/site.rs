//! Site identity

use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::pricing;

/// Errors raised while building a [`Site`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    /// The currency code is not a known ISO 4217 code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The base URL is not an absolute `http(s)` URL.
    #[error("site URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
}

/// Who the site is and where it lives.
///
/// Used for absolute URLs (sitemap, structured data), the web-app manifest,
/// page titles and price formatting.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub base_url: String,
    pub currency: &'static Currency,
    pub theme_color: String,
    pub background_color: String,
    pub contact_form_action: Option<String>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: "Corner Ayurveda".to_string(),
            short_name: "Corner Ayurveda".to_string(),
            description: "Authentic Ayurvedic products and natural wellness solutions rooted in \
                          traditional wisdom."
                .to_string(),
            base_url: "https://cornerayurveda.com".to_string(),
            currency: iso::INR,
            theme_color: "#6B8E5A".to_string(),
            background_color: "#F5F3F0".to_string(),
            contact_form_action: None,
        }
    }
}

impl Site {
    /// Site with default branding at `base_url`, pricing in `currency_code`.
    ///
    /// # Errors
    ///
    /// - [`SiteError::InvalidBaseUrl`] if `base_url` is not `http(s)://…`.
    /// - [`SiteError::UnknownCurrency`] if `currency_code` is not ISO 4217.
    pub fn new(base_url: &str, currency_code: &str) -> Result<Self, SiteError> {
        let base_url = base_url.trim().trim_end_matches('/');

        let has_host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());

        if !has_host {
            return Err(SiteError::InvalidBaseUrl(base_url.to_string()));
        }

        let code = currency_code.trim().to_uppercase();
        let currency = iso::find(&code).ok_or(SiteError::UnknownCurrency(code))?;

        Ok(Self {
            base_url: base_url.to_string(),
            currency,
            ..Self::default()
        })
    }

    /// Absolute URL for a site-relative path. `""` and `"/"` give the bare
    /// base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');

        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Format a minor-unit price in the site currency.
    #[must_use]
    pub fn format_price(&self, minor: u64) -> String {
        pricing::format_price(minor, self.currency)
    }

    /// ISO 4217 code of the site currency.
    #[must_use]
    pub fn currency_code(&self) -> &'static str {
        self.currency.iso_alpha_code
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_strips_trailing_slash() -> TestResult {
        let site = Site::new("https://example.com/", "inr")?;

        assert_eq!(site.base_url, "https://example.com");
        assert_eq!(site.currency_code(), "INR");

        Ok(())
    }

    #[test]
    fn new_rejects_relative_urls() {
        assert_eq!(
            Site::new("example.com", "INR").map(|_| ()),
            Err(SiteError::InvalidBaseUrl("example.com".to_string()))
        );
        assert!(Site::new("https://", "INR").is_err());
    }

    #[test]
    fn new_rejects_unknown_currency() {
        assert_eq!(
            Site::new("https://example.com", "XXQ").map(|_| ()),
            Err(SiteError::UnknownCurrency("XXQ".to_string()))
        );
    }

    #[test]
    fn url_joins_paths() {
        let site = Site::default();

        assert_eq!(site.url(""), "https://cornerayurveda.com");
        assert_eq!(site.url("/"), "https://cornerayurveda.com");
        assert_eq!(
            site.url("/products/1"),
            "https://cornerayurveda.com/products/1"
        );
        assert_eq!(site.url("blog"), "https://cornerayurveda.com/blog");
    }
}
