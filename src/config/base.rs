//! `[base]` section configuration.
//!
//! Public facts about the site that end up inside generated artifacts.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - site metadata.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://andresjanes.com"
/// image = "/img/profile.webp"
/// country = "GB"
/// region = "United Kingdom"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Canonical site URL without trailing slash.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,

    /// Profile image path, appended to `url` in structured data.
    #[serde(default = "defaults::base::image")]
    #[educe(Default = defaults::base::image())]
    pub image: String,

    /// ISO 3166 country code for the postal address.
    #[serde(default = "defaults::base::country")]
    #[educe(Default = defaults::base::country())]
    pub country: String,

    /// Human readable region for the postal address.
    #[serde(default = "defaults::base::region")]
    #[educe(Default = defaults::base::region())]
    pub region: String,
}

impl BaseConfig {
    /// Site URL with any trailing slash removed.
    pub fn site_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Absolute URL of the profile image.
    pub fn image_url(&self) -> String {
        format!("{}/{}", self.site_url(), self.image.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            url = "https://example.com/"
            image = "img/me.png"
            country = "CO"
            region = "Colombia"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.site_url(), "https://example.com");
        assert_eq!(config.base.image_url(), "https://example.com/img/me.png");
        assert_eq!(config.base.country, "CO");
        assert_eq!(config.base.region, "Colombia");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();

        assert_eq!(config.base.url, "https://andresjanes.com");
        assert_eq!(
            config.base.image_url(),
            "https://andresjanes.com/img/profile.webp"
        );
        assert_eq!(config.base.country, "GB");
        assert_eq!(config.base.region, "United Kingdom");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [base]
            title = "not a base field"
        "#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
