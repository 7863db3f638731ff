//! Web app manifest
//!
//! Served as `/manifest.webmanifest` so the site can be installed as a
//! standalone app.

use serde::{Deserialize, Serialize};

use crate::site::Site;

/// Icon or screenshot reference in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
}

impl ManifestImage {
    fn png(src: &str, sizes: &str) -> Self {
        Self {
            src: src.to_string(),
            sizes: sizes.to_string(),
            mime_type: "image/png".to_string(),
            purpose: None,
            form_factor: None,
        }
    }

    fn with_purpose(mut self, purpose: &str) -> Self {
        self.purpose = Some(purpose.to_string());
        self
    }

    fn with_form_factor(mut self, form_factor: &str) -> Self {
        self.form_factor = Some(form_factor.to_string());
        self
    }
}

/// Installable web app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub orientation: String,
    pub categories: Vec<String>,
    pub lang: String,
    pub icons: Vec<ManifestImage>,
    pub screenshots: Vec<ManifestImage>,
}

impl WebAppManifest {
    /// Manifest for `site`.
    #[must_use]
    pub fn for_site(site: &Site) -> Self {
        Self {
            name: site.name.clone(),
            short_name: site.short_name.clone(),
            description: site.description.clone(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: site.background_color.clone(),
            theme_color: site.theme_color.clone(),
            orientation: "portrait-primary".to_string(),
            categories: ["health", "wellness", "lifestyle", "shopping"]
                .map(String::from)
                .to_vec(),
            lang: "en".to_string(),
            icons: vec![
                ManifestImage::png("/icon-192x192.png", "192x192").with_purpose("maskable"),
                ManifestImage::png("/icon-512x512.png", "512x512").with_purpose("maskable"),
                ManifestImage::png("/apple-touch-icon.png", "180x180"),
            ],
            screenshots: vec![
                ManifestImage::png("/screenshot-wide.png", "1280x720").with_form_factor("wide"),
                ManifestImage::png("/screenshot-narrow.png", "750x1334")
                    .with_form_factor("narrow"),
            ],
        }
    }
}
