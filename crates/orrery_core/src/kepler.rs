//! Built-in analytical ephemeris provider.
//!
//! Planets: two-body Keplerian orbits from the mean elements in
//! [`crate::elements`], heliocentric ecliptic J2000, made geocentric by
//! subtracting the Earth–Moon barycenter. The Sun is the negated
//! barycenter vector. The Moon comes from [`crate::moon`].
//!
//! Accuracy is of order arcminutes for the planets inside the 1800–2050
//! fit interval and degrades slowly outside it. Output is rotated to the
//! J2000 mean equator to honour the [`EphemerisProvider`] contract.

use chrono::{DateTime, Utc};
use log::debug;

use orrery_frames::{ecliptic_to_equatorial, spherical_to_cartesian};
use orrery_time::{centuries_since_j2000, datetime_to_jd};

use crate::elements::{self, OrbitalElements};
use crate::moon::moon_ecliptic_j2000;
use crate::{Body, EphemerisProvider, ProviderError};

/// Solver settings for Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerConfig {
    /// Convergence threshold on the eccentric anomaly, in degrees.
    pub tolerance_deg: f64,
    /// Newton iterations allowed before giving up.
    pub max_iterations: u32,
}

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1e-8,
            max_iterations: 30,
        }
    }
}

/// Analytical provider built from mean orbital elements.
#[derive(Debug, Clone, Default)]
pub struct KeplerianEphemeris {
    config: KeplerConfig,
}

impl KeplerianEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeplerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeplerConfig {
        &self.config
    }

    /// Heliocentric ecliptic J2000 position (AU) of one element set.
    fn heliocentric(
        &self,
        body: Body,
        el: &OrbitalElements,
        t: f64,
    ) -> Result<[f64; 3], ProviderError> {
        let el = el.at(t);
        let omega = el.peri_deg - el.node_deg;
        let mean_anomaly = (el.l_deg - el.peri_deg + 180.0).rem_euclid(360.0) - 180.0;
        let ecc_anomaly = solve_kepler(mean_anomaly, el.e, &self.config)
            .ok_or(ProviderError::NoConvergence {
                body,
                iterations: self.config.max_iterations,
            })?
            .to_radians();

        // Position in the orbital plane, x toward perihelion.
        let xp = el.a * (ecc_anomaly.cos() - el.e);
        let yp = el.a * (1.0 - el.e * el.e).sqrt() * ecc_anomaly.sin();

        let (sw, cw) = omega.to_radians().sin_cos();
        let (sn, cn) = el.node_deg.to_radians().sin_cos();
        let (si, ci) = el.i_deg.to_radians().sin_cos();

        Ok([
            (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp,
            (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        ])
    }

    /// Geocentric ecliptic J2000 position (AU).
    fn geocentric_ecliptic(&self, body: Body, t: f64) -> Result<[f64; 3], ProviderError> {
        let planet = match body {
            Body::Moon => return Ok(spherical_to_cartesian(&moon_ecliptic_j2000(t))),
            Body::Sun => None,
            Body::Mercury => Some(elements::MERCURY),
            Body::Venus => Some(elements::VENUS),
            Body::Mars => Some(elements::MARS),
            Body::Jupiter => Some(elements::JUPITER),
            Body::Saturn => Some(elements::SATURN),
            Body::Uranus => Some(elements::URANUS),
            Body::Neptune => Some(elements::NEPTUNE),
            Body::Pluto => Some(elements::PLUTO),
        };
        let earth = self.heliocentric(body, &elements::EARTH_MOON_BARYCENTER, t)?;
        let Some(planet) = planet else {
            return Ok([-earth[0], -earth[1], -earth[2]]);
        };
        let p = self.heliocentric(body, &planet, t)?;
        Ok([p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]])
    }
}

/// Solve `E − e·sin E = M` (degrees) by Newton iteration.
///
/// Returns `None` if the step size stays above the tolerance after
/// `max_iterations` or the iterate goes non-finite.
fn solve_kepler(mean_anomaly_deg: f64, e: f64, config: &KeplerConfig) -> Option<f64> {
    let e_deg = e.to_degrees();
    let mut ecc = mean_anomaly_deg + e_deg * mean_anomaly_deg.to_radians().sin();
    for _ in 0..config.max_iterations {
        let dm = mean_anomaly_deg - (ecc - e_deg * ecc.to_radians().sin());
        let de = dm / (1.0 - e * ecc.to_radians().cos());
        ecc += de;
        if !ecc.is_finite() {
            return None;
        }
        if de.abs() <= config.tolerance_deg {
            return Some(ecc);
        }
    }
    None
}

impl EphemerisProvider for KeplerianEphemeris {
    fn geocentric_vector(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<[f64; 3], ProviderError> {
        let jd = datetime_to_jd(&instant).map_err(|e| ProviderError::Unavailable {
            body,
            message: e.to_string(),
        })?;
        let t = centuries_since_j2000(jd);
        let ecl = self.geocentric_ecliptic(body, t)?;
        debug!("kepler: {body} at T={t:.8} ecliptic {ecl:?}");
        Ok(ecliptic_to_equatorial(&ecl))
    }
}
