//! Fixed identity of the school, shared by the metadata and the structured data.

/// Full name of the school, used as site name, author, creator and publisher.
pub const SITE_NAME: &str = "Ecole Hôtelière Helvétique (EHH)";

/// Short name, used as `alternateName` in the JSON-LD record.
pub const SHORT_NAME: &str = "EHH";

/// Title used for the root page.
pub const DEFAULT_TITLE: &str =
    "Ecole Hôtelière Helvétique (EHH) - Shaping Tomorrow's Global Hospitality Leaders";

/// Template applied to page titles. `%s` is replaced with the page's own title.
pub const TITLE_TEMPLATE: &str = "%s | Ecole Hôtelière Helvétique (EHH)";

/// Description used in the `description`, `og:description` and `twitter:description` tags.
pub const DESCRIPTION: &str = "Swiss-inspired hospitality and culinary academy in Dubai, UAE. Real-world training with MAF Accor Hotels and Resorts. 70% practical, 30% academic excellence.";

/// Shorter description used in the JSON-LD record.
pub const ORGANIZATION_DESCRIPTION: &str = "Swiss-inspired hospitality and culinary academy in Dubai, UAE. Real-world training with MAF Accor Hotels and Resorts.";

pub const KEYWORDS: [&str; 14] = [
    "hospitality management",
    "culinary arts",
    "Dubai hospitality school",
    "Swiss hospitality education",
    "hotel management Dubai",
    "culinary school UAE",
    "MAF Accor training",
    "hospitality career Dubai",
    "hospitality degree UAE",
    "culinary arts program",
    "hospitality business program",
    "real-world hospitality training",
    "Dubai culinary academy",
    "hospitality education Dubai",
];

/// Handle credited in the `twitter:creator` tag.
pub const TWITTER_CREATOR: &str = "@ehheducation";

/// Path of the logo, relative to the base URL. Also used as the social preview image.
pub const LOGO_PATH: &str = "/main-logo-new.png";

/// Size in pixels announced for the social preview image.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

pub const LOCALE: &str = "en_US";
pub const LANGUAGE: &str = "en";

pub const SOCIAL_PROFILES: [&str; 4] = [
    "https://www.facebook.com/ecolehotelierehelvetique",
    "https://www.linkedin.com/company/ecole-hoteliere-helvetique/",
    "https://www.instagram.com/ehheducation/",
    "https://www.youtube.com/channel/UC_60J4DAFPrzJ3QczG5cOOg",
];

/// Postal address of the campus.
pub mod address {
    pub const STREET: &str = "Science Park - Al Barsha South";
    pub const LOCALITY: &str = "Dubai";
    pub const COUNTRY: &str = "AE";
    pub const POSTAL_CODE: &str = "345025";
}

/// Admissions contact.
pub mod contact {
    pub const TELEPHONE: &str = "+971-50-101-6067";
    pub const CONTACT_TYPE: &str = "Admissions";
    pub const EMAIL: &str = "info@ehheducation.com";
    pub const AREA_SERVED: &str = "AE";
    pub const LANGUAGES: [&str; 2] = ["English", "French"];
}

/// Joins a path onto the base URL without any parsing or validation.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_template_contains_placeholder() {
        assert!(TITLE_TEMPLATE.starts_with("%s | "));
        assert!(TITLE_TEMPLATE.ends_with(SITE_NAME));
    }

    #[test]
    fn test_absolute_url_is_literal_concatenation() {
        assert_eq!(
            absolute_url("https://example.com", LOGO_PATH),
            "https://example.com/main-logo-new.png"
        );
        assert_eq!(absolute_url("not a url", "/x"), "not a url/x");
    }
}
