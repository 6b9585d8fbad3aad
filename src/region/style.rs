//! Deterministic display styling for exported layers.
//!
//! Styles depend only on a region's kind and multiplicity, so a consumer can
//! restyle a decomposition without consulting the engine again.

use serde::Serialize;

use super::{Region, RegionKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Multiplicity at which the overlap ramp reaches its hottest colour.
const RAMP_TOP: usize = 8;
const RAMP_COOL: Rgb = Rgb(0xfe, 0xe0, 0x8b);
const RAMP_HOT: Rgb = Rgb(0xb2, 0x18, 0x2b);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerStyle {
    pub fill: Rgb,
    pub outline: Rgb,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
}

impl LayerStyle {
    pub fn for_region(region: &Region) -> Self {
        match region.kind() {
            RegionKind::Original => Self::new(Rgb(0x43, 0x93, 0xc3), 0.25),
            RegionKind::Simple => Self::new(Rgb(0x66, 0xbd, 0x63), 0.5),
            RegionKind::SimpleTotal => Self::new(Rgb(0x1a, 0x98, 0x50), 0.5),
            RegionKind::Total => Self::new(Rgb(0x99, 0x99, 0x99), 0.2),
            RegionKind::MultiTotal if region.multiplicity() == 0 => {
                Self::new(Rgb(0xd7, 0x30, 0x27), 0.5)
            }
            RegionKind::Multi | RegionKind::MultiTotal => {
                Self::new(overlap_ramp(region.multiplicity()), 0.6)
            }
        }
    }

    fn new(fill: Rgb, opacity: f64) -> Self {
        let outline = fill.lerp(Rgb(0, 0, 0), 0.4);
        Self {
            fill,
            outline,
            opacity,
        }
    }
}

/// Colour for an overlap of `m` sources, `m >= 2`.
fn overlap_ramp(m: usize) -> Rgb {
    let span = (RAMP_TOP - 2) as f64;
    let t = (m.clamp(2, RAMP_TOP) - 2) as f64 / span;
    RAMP_COOL.lerp(RAMP_HOT, t)
}
