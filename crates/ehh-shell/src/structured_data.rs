//! schema.org JSON-LD describing the school, embedded in every page.

use maud::{Markup, PreEscaped, html};
use serde::Serialize;

use crate::{
    errors::ShellError,
    identity::{self, absolute_url, address, contact},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub street_address: String,
    pub address_locality: String,
    pub address_country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub telephone: String,
    pub contact_type: String,
    pub email: String,
    pub area_served: String,
    pub available_language: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub category: String,
}

/// An `EducationalOrganization` record. Field order matches the serialized output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalOrganization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub alternate_name: String,
    pub description: String,
    pub url: String,
    pub logo: String,
    pub address: PostalAddress,
    pub contact_point: ContactPoint,
    pub same_as: Vec<String>,
    pub offers: Offer,
}

impl EducationalOrganization {
    pub fn to_json(&self) -> Result<String, ShellError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builds the organization record for the given base URL. The output only depends on `base_url`.
pub fn build_structured_data(base_url: &str) -> EducationalOrganization {
    EducationalOrganization {
        context: "https://schema.org",
        schema_type: "EducationalOrganization",
        name: identity::SITE_NAME.to_string(),
        alternate_name: identity::SHORT_NAME.to_string(),
        description: identity::ORGANIZATION_DESCRIPTION.to_string(),
        url: base_url.to_string(),
        logo: absolute_url(base_url, identity::LOGO_PATH),
        address: PostalAddress {
            schema_type: "PostalAddress",
            street_address: address::STREET.to_string(),
            address_locality: address::LOCALITY.to_string(),
            address_country: address::COUNTRY.to_string(),
            postal_code: address::POSTAL_CODE.to_string(),
        },
        contact_point: ContactPoint {
            schema_type: "ContactPoint",
            telephone: contact::TELEPHONE.to_string(),
            contact_type: contact::CONTACT_TYPE.to_string(),
            email: contact::EMAIL.to_string(),
            area_served: contact::AREA_SERVED.to_string(),
            available_language: contact::LANGUAGES.iter().map(|l| l.to_string()).collect(),
        },
        same_as: identity::SOCIAL_PROFILES
            .iter()
            .map(|url| url.to_string())
            .collect(),
        offers: Offer {
            schema_type: "Offer",
            category: "Education".to_string(),
        },
    }
}

/// Wraps the serialized record in a `<script type="application/ld+json">` tag.
///
/// The JSON is embedded as-is, with no escaping beyond what serialization does.
pub fn json_ld_script(organization: &EducationalOrganization) -> Result<Markup, ShellError> {
    let json = organization.to_json()?;

    Ok(html! {
        script type="application/ld+json" { (PreEscaped(json)) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parsed(base_url: &str) -> Value {
        let json = build_structured_data(base_url).to_json().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_schema_shape() {
        let value = parsed("https://ehheducation.com");

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "EducationalOrganization");
        assert_eq!(value["alternateName"], "EHH");
        assert_eq!(value["contactPoint"]["@type"], "ContactPoint");
        assert_eq!(value["contactPoint"]["telephone"], "+971-50-101-6067");
        assert_eq!(value["contactPoint"]["contactType"], "Admissions");
        assert_eq!(
            value["contactPoint"]["availableLanguage"],
            serde_json::json!(["English", "French"])
        );
        assert_eq!(value["address"]["@type"], "PostalAddress");
        assert_eq!(value["address"]["postalCode"], "345025");
        assert_eq!(value["offers"]["category"], "Education");
        assert_eq!(value["sameAs"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_urls_follow_base_url() {
        let value = parsed("https://example.com");
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["logo"], "https://example.com/main-logo-new.png");
    }

    #[test]
    fn test_deterministic() {
        let first = build_structured_data("https://example.com").to_json().unwrap();
        let second = build_structured_data("https://example.com").to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_order() {
        let json = build_structured_data("https://example.com").to_json().unwrap();
        assert!(json.starts_with(
            r#"{"@context":"https://schema.org","@type":"EducationalOrganization","name":"#
        ));
    }

    #[test]
    fn test_script_tag_embeds_json_verbatim() {
        let organization = build_structured_data("https://example.com");
        let json = organization.to_json().unwrap();
        let script = json_ld_script(&organization).unwrap().into_string();

        assert_eq!(
            script,
            format!(r#"<script type="application/ld+json">{}</script>"#, json)
        );
    }
}
