//! # Routing Properties Against the Built-in Site
//!
//! Exercises ZIP resolution and brand selection end to end on the site
//! document shipped with the crate.

use brandgate_core::{
    BrandConfig, BrandId, BrandRegistry, ConfigError, RouteError, Site, SwitchError,
    MALFORMED_ZIP_MESSAGE, UNSERVED_AREA_MESSAGE,
};
use proptest::prelude::*;

fn site() -> Site {
    Site::builtin().expect("built-in site must load")
}

fn resolved(zip: &str) -> Option<String> {
    site().resolve(zip).map(|id| id.to_string())
}

// -- Known ZIPs ---------------------------------------------------------------

#[test]
fn known_zips_resolve() {
    assert_eq!(resolved("28201").as_deref(), Some("safehaven"));
    assert_eq!(resolved("33101").as_deref(), Some("bestsecurity"));
    assert_eq!(resolved("30301").as_deref(), Some("topsecurity"));
    assert_eq!(resolved("35201").as_deref(), Some("redhawk"));
}

#[test]
fn unserved_and_malformed_zips_resolve_to_none() {
    assert_eq!(resolved("99999"), None);
    assert_eq!(resolved("123"), None);
    assert_eq!(resolved("abcde"), None);
    assert_eq!(resolved(""), None);
}

#[test]
fn route_reports_user_messages() {
    let site = site();
    let malformed = site.route("123").unwrap_err();
    assert_eq!(malformed, RouteError::Malformed("123".into()));
    assert_eq!(malformed.user_message(), MALFORMED_ZIP_MESSAGE);

    let unserved = site.route("99999").unwrap_err();
    assert_eq!(unserved, RouteError::Unserved("99999".into()));
    assert_eq!(unserved.user_message(), UNSERVED_AREA_MESSAGE);

    assert_eq!(site.route("32801").unwrap().region, "Florida");
}

// -- Registry load ------------------------------------------------------------

fn brand(id: &str) -> BrandConfig {
    BrandConfig {
        id: BrandId::new(id).unwrap(),
        name: format!("{id} Security"),
        primary_color: "#333333".into(),
        cta_text: "Get protected".into(),
        phone: "1-800-555-0199".into(),
        region: "Test".into(),
        is_default: false,
    }
}

#[test]
fn registry_without_default_picks_first() {
    let reg = BrandRegistry::load(vec![brand("zeta"), brand("alpha")]).unwrap();
    assert_eq!(reg.select().current().id, "zeta");
}

#[test]
fn registry_empty_is_fatal() {
    assert!(matches!(BrandRegistry::load(vec![]), Err(ConfigError::NoBrands)));
}

// -- Selection ----------------------------------------------------------------

#[test]
fn selection_starts_at_default_and_switches() {
    let site = site();
    let mut sel = site.registry().select();
    assert_eq!(sel.current().id, "safehaven");

    sel.switch_to("redhawk").unwrap();
    assert_eq!(sel.current().id, "redhawk");

    assert_eq!(
        sel.switch_to("nosuchbrand"),
        Err(SwitchError::UnknownBrand("nosuchbrand".into()))
    );
    assert_eq!(sel.current().id, "redhawk");
}

#[test]
fn repeated_switch_to_current_is_stable() {
    let site = site();
    let mut sel = site.registry().select();
    sel.switch_to("bestsecurity").unwrap();
    for _ in 0..5 {
        let current = sel.current().id.to_string();
        assert!(sel.switch_to(&current).is_ok());
        assert_eq!(sel.current().id, "bestsecurity");
    }
}

// -- Properties ---------------------------------------------------------------

proptest! {
    /// A 5-digit ZIP resolves to a registered brand or to nothing.
    #[test]
    fn resolved_brand_is_always_registered(zip in "[0-9]{5}") {
        let site = site();
        if let Some(id) = site.resolve(&zip) {
            prop_assert!(site.registry().contains(id.as_str()), "unregistered brand {}", id);
        }
    }

    /// Strings that are not five ASCII digits never resolve.
    #[test]
    fn non_zip_strings_never_resolve(input in "[0-9a-zA-Z -]{0,10}") {
        prop_assume!(!(input.len() == 5 && input.bytes().all(|b| b.is_ascii_digit())));
        prop_assert!(site().resolve(&input).is_none());
    }
}
