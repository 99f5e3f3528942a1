//! Closed circuit made of sectors.
//!
//! Distances are cumulative: a racer's distance keeps growing across laps and
//! is resolved to a lap, sector and offset on demand.

use thiserror::Error;

use crate::render::Color;
use crate::storage::config::SectorConfig;

/// Errors raised while building a track
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Track needs at least one sector")]
    Empty,

    #[error("Sector '{name}' has invalid length {length}")]
    InvalidLength { name: String, length: f64 },

    #[error("Sector '{name}' has invalid colour '{color}'")]
    InvalidColor { name: String, color: String },
}

/// A named stretch of road with its own theme
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    /// Display name
    pub name: String,
    /// Background colour when no image is available
    pub color: Color,
    /// Length in distance units
    pub length: f64,
    /// Obstacle spawn-rate multiplier
    pub obstacle_mult: f32,
    /// Rival target-speed multiplier
    pub ai_mult: f32,
    /// Road bend shown in this sector, negative to the left
    pub curve: f32,
    /// Background image file name
    pub image: Option<String>,
}

impl Sector {
    /// Sector with neutral multipliers and a straight road
    pub fn new(name: impl Into<String>, color: Color, length: f64) -> Self {
        Self {
            name: name.into(),
            color,
            length,
            obstacle_mult: 1.0,
            ai_mult: 1.0,
            curve: 0.0,
            image: None,
        }
    }
}

impl TryFrom<&SectorConfig> for Sector {
    type Error = TrackError;

    fn try_from(config: &SectorConfig) -> Result<Self, Self::Error> {
        let color = Color::from_hex(&config.color).ok_or_else(|| TrackError::InvalidColor {
            name: config.name.clone(),
            color: config.color.clone(),
        })?;

        Ok(Self {
            name: config.name.clone(),
            color,
            length: config.length,
            obstacle_mult: config.obstacle_mult,
            ai_mult: config.ai_mult,
            curve: config.curve,
            image: config.image.clone(),
        })
    }
}

/// Where a cumulative distance lands on the circuit
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackPosition {
    /// Completed laps
    pub lap: u32,
    /// Index of the current sector
    pub sector_index: usize,
    /// Distance into the current sector, always below its length
    pub offset: f64,
}

/// Ordered, wrapping sequence of sectors
#[derive(Debug, Clone)]
pub struct Track {
    sectors: Vec<Sector>,
    /// `prefix_sums[i]` is the distance at which sector `i` starts
    prefix_sums: Vec<f64>,
    total_length: f64,
}

impl Track {
    /// Build a track, rejecting empty layouts and non-positive lengths
    pub fn new(sectors: Vec<Sector>) -> Result<Self, TrackError> {
        if sectors.is_empty() {
            return Err(TrackError::Empty);
        }

        let mut prefix_sums = Vec::with_capacity(sectors.len());
        let mut total_length = 0.0;
        for sector in &sectors {
            if !(sector.length.is_finite() && sector.length > 0.0) {
                return Err(TrackError::InvalidLength {
                    name: sector.name.clone(),
                    length: sector.length,
                });
            }
            prefix_sums.push(total_length);
            total_length += sector.length;
        }

        Ok(Self {
            sectors,
            prefix_sums,
            total_length,
        })
    }

    /// Build a track from config entries
    pub fn from_config(configs: &[SectorConfig]) -> Result<Self, TrackError> {
        let sectors = configs
            .iter()
            .map(Sector::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sectors)
    }

    /// Sum of all sector lengths
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Number of sectors
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Always false; a track has at least one sector
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Sector by index, wrapping past the end
    pub fn sector(&self, index: usize) -> &Sector {
        &self.sectors[index % self.sectors.len()]
    }

    /// Distance at which a sector starts within a lap
    pub fn sector_start(&self, index: usize) -> f64 {
        self.prefix_sums[index % self.sectors.len()]
    }

    /// Cumulative distance folded into `[0, total_length)`
    pub fn wrap(&self, distance: f64) -> f64 {
        let wrapped = distance.rem_euclid(self.total_length);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if wrapped >= self.total_length {
            0.0
        } else {
            wrapped
        }
    }

    /// Resolve a cumulative distance to lap, sector and offset
    pub fn locate(&self, cumulative_distance: f64) -> TrackPosition {
        let distance = cumulative_distance.max(0.0);
        let lap = (distance / self.total_length).floor() as u32;
        let within_lap = self.wrap(distance);

        // Linear scan; the last sector whose start is not past the position wins
        let mut sector_index = 0;
        for (index, start) in self.prefix_sums.iter().enumerate() {
            if *start <= within_lap {
                sector_index = index;
            } else {
                break;
            }
        }

        let sector_length = self.sectors[sector_index].length;
        let offset = (within_lap - self.prefix_sums[sector_index]).clamp(0.0, sector_length);
        if offset >= sector_length {
            // Float residue at a boundary belongs to the next sector
            let next = (sector_index + 1) % self.sectors.len();
            let lap = if next == 0 { lap + 1 } else { lap };
            return TrackPosition {
                lap,
                sector_index: next,
                offset: 0.0,
            };
        }

        TrackPosition {
            lap,
            sector_index,
            offset,
        }
    }

    /// Fraction of the current lap completed, in `[0, 1)`
    pub fn lap_fraction(&self, cumulative_distance: f64) -> f64 {
        self.wrap(cumulative_distance.max(0.0)) / self.total_length
    }
}
