//! Static route table: every logical page the site serves, with the SEO
//! weighting the sitemap advertises for it.

use std::fmt;

use serde::Serialize;

/// How often a page is expected to change (sitemap `<changefreq>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata describing one logical page.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    /// Path below the locale prefix: "" for home, otherwise "/segment"
    pub path: &'static str,

    /// Identifier used for catalog keys (`metadata.{label}.title`, ...)
    pub label: &'static str,

    /// Sitemap priority in [0, 1]
    pub priority: f32,

    pub change_frequency: ChangeFrequency,
}

/// The site's pages, in sitemap order.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "",
        label: "home",
        priority: 1.0,
        change_frequency: ChangeFrequency::Weekly,
    },
    RouteDescriptor {
        path: "/platform",
        label: "platform",
        priority: 0.9,
        change_frequency: ChangeFrequency::Monthly,
    },
    RouteDescriptor {
        path: "/network",
        label: "network",
        priority: 0.9,
        change_frequency: ChangeFrequency::Monthly,
    },
    RouteDescriptor {
        path: "/banks",
        label: "banks",
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
    },
    RouteDescriptor {
        path: "/company",
        label: "company",
        priority: 0.7,
        change_frequency: ChangeFrequency::Monthly,
    },
    RouteDescriptor {
        path: "/contact",
        label: "contact",
        priority: 0.7,
        change_frequency: ChangeFrequency::Yearly,
    },
    RouteDescriptor {
        path: "/privacy",
        label: "privacy",
        priority: 0.3,
        change_frequency: ChangeFrequency::Yearly,
    },
    RouteDescriptor {
        path: "/terms",
        label: "terms",
        priority: 0.3,
        change_frequency: ChangeFrequency::Yearly,
    },
];

impl RouteDescriptor {
    /// Absolute URL of this page in a locale: `{base_url}/{code}{path}`.
    pub fn localized_url(&self, base_url: &str, locale_code: &str) -> String {
        format!("{}/{}{}", base_url, locale_code, self.path)
    }
}

/// Find the route for the page segment that follows the locale prefix.
///
/// `""` and `"/"` resolve to home; surrounding slashes are ignored, so
/// `"platform/"` and `"/platform"` both resolve to the platform page.
pub fn find(segment: &str) -> Option<&'static RouteDescriptor> {
    let trimmed = segment.trim_matches('/');
    ROUTES
        .iter()
        .find(|route| route.path.trim_start_matches('/') == trimmed)
}
