//! Natal and transit chart assembly.
//!
//! A chart resolves every tracked body once and, for natal charts, the
//! ascendant. Per-body and ascendant failures are partial: the record is
//! still returned and the failures are reported through
//! [`ChartRecord::warnings`].

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use log::{debug, warn};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use thiserror::Error;

use orrery_core::{ALL_BODIES, Body, EphemerisProvider};

use crate::ascendant::{AscendantConfig, ascendant_position_with};
use crate::location::{GeoInstant, GeoLocation};
use crate::resolver::{Placement, resolve};
use crate::sign::{SignPosition, ZodiacSign};

/// Which instant a chart describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// A person's birth instant and place.
    Natal,
    /// The sky "now", without a location.
    Transit,
}

/// The ascendant field of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AscendantSlot {
    /// Transit charts carry no location, so no ascendant is computed.
    NotRequested,
    Resolved(SignPosition),
    /// The calculator refused the input; no sign is substituted.
    Failed { reason: String },
}

impl AscendantSlot {
    pub fn sign(&self) -> Option<ZodiacSign> {
        match self {
            Self::Resolved(pos) => Some(pos.sign),
            Self::NotRequested | Self::Failed { .. } => None,
        }
    }
}

/// A partial failure inside an otherwise usable chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartWarning {
    #[error("{body} could not be placed: {reason}")]
    BodyUnresolved { body: Body, reason: String },
    #[error("ascendant unavailable: {reason}")]
    AscendantFailed { reason: String },
}

fn serialize_placements<S: Serializer>(
    placements: &[Placement; 10],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(placements.len()))?;
    for (body, placement) in ALL_BODIES.iter().zip(placements) {
        map.serialize_entry(body, placement)?;
    }
    map.end()
}

/// Body placements for one instant, plus the ascendant for natal charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRecord {
    kind: ChartKind,
    instant: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<GeoLocation>,
    #[serde(serialize_with = "serialize_placements")]
    placements: [Placement; 10],
    ascendant: AscendantSlot,
}

impl ChartRecord {
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn location(&self) -> Option<&GeoLocation> {
        self.location.as_ref()
    }

    pub fn placement(&self, body: Body) -> &Placement {
        &self.placements[body.index()]
    }

    pub fn sign(&self, body: Body) -> Option<ZodiacSign> {
        self.placement(body).sign()
    }

    /// Resolved bodies keyed by body. Unresolved bodies are absent.
    pub fn signs(&self) -> BTreeMap<Body, ZodiacSign> {
        ALL_BODIES
            .iter()
            .filter_map(|&b| self.sign(b).map(|s| (b, s)))
            .collect()
    }

    /// Bodies the provider could not place, in chart order.
    pub fn missing_bodies(&self) -> Vec<Body> {
        ALL_BODIES
            .iter()
            .copied()
            .filter(|&b| !self.placement(b).is_resolved())
            .collect()
    }

    pub fn ascendant(&self) -> &AscendantSlot {
        &self.ascendant
    }

    /// All partial failures: unresolved bodies first, then the ascendant.
    pub fn warnings(&self) -> Vec<ChartWarning> {
        let mut out: Vec<ChartWarning> = ALL_BODIES
            .iter()
            .filter_map(|&body| match self.placement(body) {
                Placement::Unresolved { reason } => Some(ChartWarning::BodyUnresolved {
                    body,
                    reason: reason.clone(),
                }),
                Placement::Resolved(_) => None,
            })
            .collect();
        if let AscendantSlot::Failed { reason } = &self.ascendant {
            out.push(ChartWarning::AscendantFailed {
                reason: reason.clone(),
            });
        }
        out
    }

    /// True when every body resolved and, for natal charts, the ascendant did too.
    pub fn is_complete(&self) -> bool {
        self.warnings().is_empty()
    }
}

/// Natal and transit charts requested together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPair {
    pub natal: ChartRecord,
    pub transit: ChartRecord,
}

/// Builds chart records from an ephemeris provider.
///
/// Holds only a shared reference and immutable settings, so one builder
/// can serve concurrent requests.
pub struct ChartBuilder<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
    ascendant: AscendantConfig,
}

impl<P: EphemerisProvider + ?Sized> Clone for ChartBuilder<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: EphemerisProvider + ?Sized> Copy for ChartBuilder<'_, P> {}

impl<'a, P: EphemerisProvider + ?Sized> ChartBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            ascendant: AscendantConfig::default(),
        }
    }

    pub fn with_ascendant_config(mut self, config: AscendantConfig) -> Self {
        self.ascendant = config;
        self
    }

    fn placements(&self, instant: DateTime<Utc>) -> [Placement; 10] {
        ALL_BODIES.map(|body| resolve(self.provider, body, instant))
    }

    /// Chart for a birth instant and place, ascendant included.
    pub fn build_natal(&self, at: &GeoInstant) -> ChartRecord {
        debug!(
            "natal chart at {} ({}, {})",
            at.instant,
            at.location.latitude_deg(),
            at.location.longitude_deg()
        );
        let placements = self.placements(at.instant);
        let ascendant = match ascendant_position_with(&self.ascendant, at) {
            Ok(pos) => AscendantSlot::Resolved(pos),
            Err(e) => {
                warn!("ascendant failed at {}: {e}", at.instant);
                AscendantSlot::Failed {
                    reason: e.to_string(),
                }
            }
        };
        ChartRecord {
            kind: ChartKind::Natal,
            instant: at.instant,
            location: Some(at.location),
            placements,
            ascendant,
        }
    }

    /// Chart for an instant without a location. Never has an ascendant.
    pub fn build_transit<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> ChartRecord {
        let instant = instant.with_timezone(&Utc);
        debug!("transit chart at {instant}");
        ChartRecord {
            kind: ChartKind::Transit,
            instant,
            location: None,
            placements: self.placements(instant),
            ascendant: AscendantSlot::NotRequested,
        }
    }

    /// Natal chart for `birth` and transit chart for `now`.
    pub fn build_pair<Tz: TimeZone>(&self, birth: &GeoInstant, now: &DateTime<Tz>) -> ChartPair {
        ChartPair {
            natal: self.build_natal(birth),
            transit: self.build_transit(now),
        }
    }
}
