//! Site Config

use clap::Args;
use herbarium::site::{Site, SiteError};

/// Site identity settings.
#[derive(Debug, Args)]
pub struct SiteConfig {
    /// Public base URL, used for absolute links
    #[arg(long, env = "SITE_URL", default_value = "https://cornerayurveda.com")]
    pub site_url: String,

    /// Site name
    #[arg(long, env = "SITE_NAME")]
    pub site_name: Option<String>,

    /// Short name shown on installed app icons
    #[arg(long, env = "SITE_SHORT_NAME")]
    pub site_short_name: Option<String>,

    /// Site description
    #[arg(long, env = "SITE_DESCRIPTION")]
    pub site_description: Option<String>,

    /// ISO 4217 currency code for prices
    #[arg(long, env = "SITE_CURRENCY", default_value = "INR")]
    pub site_currency: String,

    /// Theme colour
    #[arg(long, env = "SITE_THEME_COLOR")]
    pub site_theme_color: Option<String>,

    /// Background colour
    #[arg(long, env = "SITE_BACKGROUND_COLOR")]
    pub site_background_color: Option<String>,

    /// External endpoint the contact form posts to
    #[arg(long, env = "CONTACT_FORM_ACTION")]
    pub contact_form_action: Option<String>,
}

impl SiteConfig {
    /// Build the site identity, keeping defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error for a relative base URL or an unknown currency.
    pub fn to_site(&self) -> Result<Site, SiteError> {
        let mut site = Site::new(&self.site_url, &self.site_currency)?;

        if let Some(name) = &self.site_name {
            site.name.clone_from(name);
        }

        if let Some(short_name) = &self.site_short_name {
            site.short_name.clone_from(short_name);
        }

        if let Some(description) = &self.site_description {
            site.description.clone_from(description);
        }

        if let Some(theme_color) = &self.site_theme_color {
            site.theme_color.clone_from(theme_color);
        }

        if let Some(background_color) = &self.site_background_color {
            site.background_color.clone_from(background_color);
        }

        site.contact_form_action.clone_from(&self.contact_form_action);

        Ok(site)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Wrapper {
        #[command(flatten)]
        site: SiteConfig,
    }

    #[test]
    fn overrides_replace_defaults() -> TestResult {
        let wrapper = Wrapper::try_parse_from([
            "test",
            "--site-url",
            "https://shop.example.com/",
            "--site-name",
            "Example Herbs",
            "--site-currency",
            "usd",
        ])?;

        let site = wrapper.site.to_site()?;

        assert_eq!(site.base_url, "https://shop.example.com");
        assert_eq!(site.name, "Example Herbs");
        assert_eq!(site.short_name, Site::default().short_name);
        assert_eq!(site.currency_code(), "USD");

        Ok(())
    }

    #[test]
    fn unknown_currency_is_rejected() -> TestResult {
        let wrapper = Wrapper::try_parse_from(["test", "--site-currency", "ZZZ"])?;

        assert!(wrapper.site.to_site().is_err());

        Ok(())
    }
}
