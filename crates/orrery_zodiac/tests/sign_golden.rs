//! Golden-value tests for longitude → sign mapping.

use orrery_zodiac::{ALL_SIGNS, ZodiacError, ZodiacSign, sign_of, sign_position};

#[test]
fn every_sign_starts_on_its_boundary() {
    for sign in ALL_SIGNS {
        let start = f64::from(sign.index()) * 30.0;
        assert_eq!(sign_of(start).unwrap(), sign, "start of {sign}");
        assert_eq!(sign.start_deg(), start);
        assert_eq!(sign_of(start + 29.999).unwrap(), sign, "end of {sign}");
    }
}

#[test]
fn mapping_is_periodic_in_360() {
    for i in 0..12 {
        let lon = 7.3 + 30.0 * f64::from(i);
        let base = sign_of(lon).unwrap();
        for k in [-3.0, -1.0, 1.0, 2.0, 10.0] {
            assert_eq!(sign_of(lon + 360.0 * k).unwrap(), base, "lon {lon} k {k}");
        }
    }
}

#[test]
fn reference_longitudes() {
    let cases = [
        (0.0, ZodiacSign::Aries),
        (45.0, ZodiacSign::Taurus),
        (89.999_999, ZodiacSign::Gemini),
        (90.0, ZodiacSign::Cancer),
        (134.05, ZodiacSign::Leo),
        (180.0, ZodiacSign::Libra),
        (280.38, ZodiacSign::Capricorn),
        (359.999_999, ZodiacSign::Pisces),
        (360.0, ZodiacSign::Aries),
        (-0.5, ZodiacSign::Pisces),
        (-90.0, ZodiacSign::Capricorn),
        (725.0, ZodiacSign::Aries),
    ];
    for (lon, want) in cases {
        assert_eq!(sign_of(lon).unwrap(), want, "lon {lon}");
    }
}

#[test]
fn degrees_in_sign_stays_below_thirty() {
    let mut lon = -720.0;
    while lon < 720.0 {
        let pos = sign_position(lon).unwrap();
        assert!(
            (0.0..30.0).contains(&pos.degrees_in_sign),
            "lon {lon} gave {}",
            pos.degrees_in_sign
        );
        assert!((0.0..360.0).contains(&pos.longitude_deg));
        lon += 0.37;
    }
}

#[test]
fn non_finite_longitudes_are_rejected() {
    for lon in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(sign_of(lon), Err(ZodiacError::InvalidInput(_))));
    }
}
