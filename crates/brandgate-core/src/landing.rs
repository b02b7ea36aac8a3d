//! # Landing View
//!
//! Everything a brand landing page renders for one visit: the brand, the
//! phone number to display, the ZIP handed to the weather widget and the
//! visitor's attribution.

use serde::Serialize;

use crate::attribution::Attribution;
use crate::brand::BrandConfig;
use crate::error::SwitchError;
use crate::site::Site;
use crate::zip::ZipCode;

/// Inputs taken from the landing page URL.
#[derive(Debug, Clone, Default)]
pub struct LandingRequest<'a> {
    /// Brand from the route parameter.
    pub brand_id: &'a str,
    /// Traffic source (`?source=`), used for phone overrides.
    pub source: Option<&'a str>,
    /// ZIP carried over from the ZIP entry page.
    pub zip: Option<&'a str>,
    /// Captured UTM parameters.
    pub attribution: Attribution,
}

/// Assembled landing page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    /// The selected brand.
    pub brand: BrandConfig,
    /// Phone number to display.
    pub phone: String,
    /// Source whose override produced `phone`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_source: Option<String>,
    /// Valid ZIP for the weather widget. Invalid ZIPs are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<ZipCode>,
    /// Visitor attribution.
    pub attribution: Attribution,
}

impl Site {
    /// Build the landing view for one visit.
    ///
    /// A fresh selection starts at the default brand and is switched to the
    /// route's brand when they differ.
    ///
    /// # Errors
    ///
    /// [`SwitchError::UnknownBrand`] when the route names no registered brand.
    pub fn landing(&self, req: LandingRequest<'_>) -> Result<LandingView, SwitchError> {
        let mut selection = self.registry().select();
        if selection.current().id != req.brand_id {
            selection.switch_to(req.brand_id)?;
        }
        let brand = selection.current();

        let (phone, phone_source) = self.phone_for(brand, req.source);
        let zip = req.zip.and_then(|z| ZipCode::parse(z).ok());

        Ok(LandingView {
            brand: brand.clone(),
            phone: phone.to_string(),
            phone_source: phone_source.map(str::to_string),
            zip,
            attribution: req.attribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site::builtin().unwrap()
    }

    #[test]
    fn default_brand_without_switch() {
        let view = site()
            .landing(LandingRequest {
                brand_id: "safehaven",
                ..Default::default()
            })
            .unwrap();
        assert_eq!(view.brand.id, "safehaven");
        assert_eq!(view.phone, view.brand.phone);
        assert!(view.phone_source.is_none());
    }

    #[test]
    fn switches_to_route_brand() {
        let view = site()
            .landing(LandingRequest {
                brand_id: "redhawk",
                zip: Some("35201"),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(view.brand.id, "redhawk");
        assert_eq!(view.zip.as_ref().map(ZipCode::as_str), Some("35201"));
    }

    #[test]
    fn unknown_brand_is_signaled() {
        let err = site()
            .landing(LandingRequest {
                brand_id: "acme",
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, SwitchError::UnknownBrand("acme".into()));
    }

    #[test]
    fn source_override_replaces_phone() {
        let view = site()
            .landing(LandingRequest {
                brand_id: "topsecurity",
                source: Some("valpak"),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(view.phone, "1-800-333-4444");
        assert_eq!(view.phone_source.as_deref(), Some("valpak"));
    }

    #[test]
    fn unknown_source_keeps_brand_phone() {
        let view = site()
            .landing(LandingRequest {
                brand_id: "topsecurity",
                source: Some("radio"),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(view.phone, "1-800-555-0130");
    }

    #[test]
    fn invalid_zip_dropped() {
        let view = site()
            .landing(LandingRequest {
                brand_id: "bestsecurity",
                zip: Some("3310"),
                ..Default::default()
            })
            .unwrap();
        assert!(view.zip.is_none());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("zip").is_none());
        assert_eq!(json["brand"]["id"], "bestsecurity");
    }
}
