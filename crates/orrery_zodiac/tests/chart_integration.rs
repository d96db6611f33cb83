//! Chart builder integration tests against fake and analytical providers.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use orrery_core::{ALL_BODIES, Body, EphemerisProvider, KeplerianEphemeris, ProviderError};
use orrery_frames::ecliptic_to_equatorial;
use orrery_zodiac::{
    AscendantConfig, AscendantSlot, ChartBuilder, ChartKind, ChartWarning, GeoInstant,
    GeoLocation, Placement, ZodiacSign,
};

/// Places each body at `30 * index + 15` degrees, except one that fails.
struct Staggered {
    failing: Option<Body>,
}

impl EphemerisProvider for Staggered {
    fn geocentric_vector(&self, body: Body, _: DateTime<Utc>) -> Result<[f64; 3], ProviderError> {
        if self.failing == Some(body) {
            return Err(ProviderError::Unavailable {
                body,
                message: "outside kernel coverage".into(),
            });
        }
        let lon = (30.0 * body.index() as f64 + 15.0).to_radians();
        Ok(ecliptic_to_equatorial(&[lon.cos(), lon.sin(), 0.0]))
    }
}

fn j2000() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
}

fn equator_at_j2000() -> GeoInstant {
    GeoInstant::new(&j2000(), GeoLocation::new(0.0, 0.0).unwrap())
}

#[test]
fn natal_chart_places_every_body() {
    let provider = Staggered { failing: None };
    let chart = ChartBuilder::new(&provider).build_natal(&equator_at_j2000());
    assert_eq!(chart.kind(), ChartKind::Natal);
    assert!(chart.is_complete());
    assert_eq!(chart.signs().len(), 10);
    assert_eq!(chart.sign(Body::Sun), Some(ZodiacSign::Aries));
    assert_eq!(chart.sign(Body::Moon), Some(ZodiacSign::Taurus));
    assert_eq!(chart.sign(Body::Pluto), Some(ZodiacSign::Capricorn));
    assert_eq!(chart.ascendant().sign(), Some(ZodiacSign::Aries));
}

#[test]
fn one_failing_body_leaves_the_rest_intact() {
    let provider = Staggered {
        failing: Some(Body::Neptune),
    };
    let chart = ChartBuilder::new(&provider).build_natal(&equator_at_j2000());
    assert_eq!(chart.missing_bodies(), vec![Body::Neptune]);
    assert_eq!(chart.signs().len(), 9);
    assert!(!chart.signs().contains_key(&Body::Neptune));
    assert!(matches!(chart.placement(Body::Neptune), Placement::Unresolved { .. }));
    assert_eq!(chart.sign(Body::Uranus), Some(ZodiacSign::Scorpio));
    let warnings = chart.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        ChartWarning::BodyUnresolved { body: Body::Neptune, reason } if reason.contains("kernel coverage")
    ));
}

#[test]
fn transit_chart_never_has_an_ascendant() {
    let provider = Staggered { failing: None };
    let chart = ChartBuilder::new(&provider).build_transit(&j2000());
    assert_eq!(chart.kind(), ChartKind::Transit);
    assert_eq!(chart.ascendant(), &AscendantSlot::NotRequested);
    assert!(chart.location().is_none());
    assert!(chart.is_complete());
}

#[test]
fn polar_birth_place_keeps_placements_but_fails_ascendant() {
    let provider = Staggered { failing: None };
    let at = GeoInstant::new(&j2000(), GeoLocation::new(89.95, 10.0).unwrap());
    let chart = ChartBuilder::new(&provider).build_natal(&at);
    assert_eq!(chart.signs().len(), 10);
    assert!(matches!(chart.ascendant(), AscendantSlot::Failed { .. }));
    assert_eq!(chart.ascendant().sign(), None);
    assert!(matches!(
        chart.warnings().as_slice(),
        [ChartWarning::AscendantFailed { .. }]
    ));
}

#[test]
fn builder_settings_reach_the_ascendant() {
    let provider = Staggered { failing: None };
    let at = GeoInstant::new(&j2000(), GeoLocation::new(70.0, 25.0).unwrap());
    let strict = ChartBuilder::new(&provider).with_ascendant_config(AscendantConfig {
        polar_limit_deg: 66.5,
    });
    assert!(matches!(strict.build_natal(&at).ascendant(), AscendantSlot::Failed { .. }));
    let lenient = ChartBuilder::new(&provider);
    assert_eq!(lenient.build_natal(&at).ascendant().sign(), Some(ZodiacSign::Leo));
}

#[test]
fn pair_uses_both_instants() {
    let provider = Staggered { failing: None };
    let now = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 20, 9, 0, 0)
        .unwrap();
    let pair = ChartBuilder::new(&provider).build_pair(&equator_at_j2000(), &now);
    assert_eq!(pair.natal.instant(), j2000());
    assert_eq!(
        pair.transit.instant(),
        Utc.with_ymd_and_hms(2024, 3, 20, 14, 0, 0).unwrap()
    );
    assert_eq!(pair.transit.ascendant(), &AscendantSlot::NotRequested);
}

#[test]
fn keplerian_natal_chart_at_j2000() {
    let eph = KeplerianEphemeris::new();
    let chart = ChartBuilder::new(&eph).build_natal(&equator_at_j2000());
    assert!(chart.is_complete(), "warnings: {:?}", chart.warnings());
    let expected = [
        (Body::Sun, ZodiacSign::Capricorn),
        (Body::Moon, ZodiacSign::Scorpio),
        (Body::Mercury, ZodiacSign::Capricorn),
        (Body::Venus, ZodiacSign::Sagittarius),
        (Body::Mars, ZodiacSign::Aquarius),
        (Body::Jupiter, ZodiacSign::Aries),
        (Body::Saturn, ZodiacSign::Taurus),
        (Body::Uranus, ZodiacSign::Aquarius),
        (Body::Neptune, ZodiacSign::Aquarius),
        (Body::Pluto, ZodiacSign::Sagittarius),
    ];
    for (body, sign) in expected {
        assert_eq!(chart.sign(body), Some(sign), "{body}");
    }
    assert_eq!(chart.ascendant().sign(), Some(ZodiacSign::Aries));
}

#[test]
fn keplerian_transit_at_vernal_equinox_2024() {
    let eph = KeplerianEphemeris::new();
    let now = Utc.with_ymd_and_hms(2024, 3, 21, 12, 0, 0).unwrap();
    let chart = ChartBuilder::new(&eph).build_transit(&now);
    assert_eq!(chart.sign(Body::Sun), Some(ZodiacSign::Aries));
    assert_eq!(chart.sign(Body::Moon), Some(ZodiacSign::Leo));
    assert_eq!(chart.sign(Body::Mercury), Some(ZodiacSign::Aries));
}

#[test]
fn chart_serializes_with_bodies_as_keys() {
    let provider = Staggered {
        failing: Some(Body::Moon),
    };
    let chart = ChartBuilder::new(&provider).build_natal(&equator_at_j2000());
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["kind"], "natal");
    assert_eq!(json["placements"]["sun"]["status"], "resolved");
    assert_eq!(json["placements"]["sun"]["sign"], "Aries");
    assert_eq!(json["placements"]["moon"]["status"], "unresolved");
    assert_eq!(json["ascendant"]["status"], "resolved");
    assert_eq!(json["placements"].as_object().unwrap().len(), ALL_BODIES.len());
}

/// NASA: New Moon 2024-Jan-11 11:57 UTC, Full Moon 2024-Jan-25 17:54 UTC
#[test]
fn keplerian_lunation_2024() {
    let eph = KeplerianEphemeris::new();
    let builder = ChartBuilder::new(&eph);

    let new_moon = builder.build_transit(&Utc.with_ymd_and_hms(2024, 1, 11, 11, 57, 0).unwrap());
    assert_eq!(new_moon.sign(Body::Sun), Some(ZodiacSign::Capricorn));
    assert_eq!(new_moon.sign(Body::Moon), Some(ZodiacSign::Capricorn));

    let full_moon = builder.build_transit(&Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap());
    assert_eq!(full_moon.sign(Body::Sun), Some(ZodiacSign::Aquarius));
    assert_eq!(full_moon.sign(Body::Moon), Some(ZodiacSign::Leo));
}
