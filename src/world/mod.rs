//! Race world simulation
//!
//! The road, the cars driving on it and the things that appear on it. Road
//! coordinates are a lateral offset in road half-widths (`-1` left edge,
//! `1` right edge) and a depth in distance units ahead of the camera.

pub mod bounds;
pub mod collectibles;
pub mod hud;
pub mod npc;
pub mod obstacles;
pub mod physics;
pub mod projection;
pub mod track;
pub mod vehicle;

pub use bounds::Rect;
pub use collectibles::{Collectible, CollectibleEvent, CollectibleSpawner, CollectibleState};
pub use hud::{HudSnapshot, MinimapDot};
pub use npc::{Rival, RivalAi};
pub use obstacles::{Obstacle, ObstacleField, ObstacleHit};
pub use physics::DrivingModel;
pub use projection::{Projection, RoadPart, RoadPolygon, ScreenPoint, Viewport};
pub use track::{Sector, Track, TrackError, TrackPosition};
pub use vehicle::{BoostState, Vehicle};
