//! Image catalog with background decoding.
//!
//! Images are decoded off the UI thread and handed back over a channel. The
//! frame loop polls the channel; until an image arrives (or if it never
//! does) the renderer draws a placeholder instead.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crossbeam::channel::{unbounded, Receiver};
use thiserror::Error;

use super::surface::SpriteId;
use crate::storage::config::GameConfig;

/// Asset loading errors
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset file not found: {0}")]
    NotFound(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to start loader: {0}")]
    Loader(String),
}

/// Decoded RGBA8 pixels
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Convert for texture upload
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width as usize, self.height as usize], &self.rgba)
    }
}

/// Read and decode an image file
pub fn decode_image(path: &Path) -> Result<DecodedImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.display().to_string()));
    }
    let image = image::open(path).map_err(|e| AssetError::Decode(e.to_string()))?;
    let rgba = image.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

type LoadMessage = (SpriteId, Result<DecodedImage, AssetError>);

/// Named images and their load state
#[derive(Default)]
pub struct AssetCatalog {
    sources: Vec<(SpriteId, PathBuf)>,
    images: HashMap<SpriteId, DecodedImage>,
    failed: HashSet<SpriteId>,
    receiver: Option<Receiver<LoadMessage>>,
}

impl AssetCatalog {
    /// Catalog with nothing to load; everything draws as a placeholder
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog of the configured images, one background per sector that
    /// names one
    pub fn from_config(config: &GameConfig) -> Self {
        let assets = &config.assets;
        let mut sources = vec![
            (SpriteId::Player, config.asset_path(&assets.player)),
            (SpriteId::Rival, config.asset_path(&assets.rival)),
            (SpriteId::Boost, config.asset_path(&assets.boost)),
            (SpriteId::Collectible, config.asset_path(&assets.collectible)),
            (SpriteId::Track, config.asset_path(&assets.track)),
        ];
        for (index, sector) in config.sectors.iter().enumerate() {
            if let Some(image) = &sector.image {
                sources.push((SpriteId::Sector(index), config.asset_path(image)));
            }
        }
        Self::with_sources(sources)
    }

    pub fn with_sources(sources: Vec<(SpriteId, PathBuf)>) -> Self {
        Self {
            sources,
            ..Default::default()
        }
    }

    /// Start decoding every source on a background thread
    pub fn start_loading(&mut self) -> Result<(), AssetError> {
        let (tx, rx) = unbounded();
        let sources = self.sources.clone();

        std::thread::Builder::new()
            .name("asset-loader".to_string())
            .spawn(move || {
                for (id, path) in sources {
                    if tx.send((id, decode_image(&path))).is_err() {
                        // Catalog dropped
                        break;
                    }
                }
            })
            .map_err(|e| AssetError::Loader(e.to_string()))?;

        self.receiver = Some(rx);
        tracing::info!(count = self.sources.len(), "loading images");
        Ok(())
    }

    /// Collect finished loads. Returns how many images became ready.
    pub fn poll(&mut self) -> usize {
        let Some(rx) = &self.receiver else {
            return 0;
        };

        let mut ready = 0;
        for (id, result) in rx.try_iter() {
            match result {
                Ok(image) => {
                    tracing::debug!(asset = %id.name(), width = image.width, height = image.height, "image ready");
                    self.images.insert(id, image);
                    ready += 1;
                }
                Err(e) => {
                    tracing::warn!(asset = %id.name(), error = %e, "image unavailable, using placeholder");
                    self.failed.insert(id);
                }
            }
        }

        if self.is_settled() {
            self.receiver = None;
        }
        ready
    }

    /// Insert an already decoded image
    pub fn insert(&mut self, id: SpriteId, image: DecodedImage) {
        self.failed.remove(&id);
        self.images.insert(id, image);
    }

    pub fn is_ready(&self, id: SpriteId) -> bool {
        self.images.contains_key(&id)
    }

    pub fn has_failed(&self, id: SpriteId) -> bool {
        self.failed.contains(&id)
    }

    pub fn image(&self, id: SpriteId) -> Option<&DecodedImage> {
        self.images.get(&id)
    }

    /// Every source has either loaded or failed
    pub fn is_settled(&self) -> bool {
        self.sources
            .iter()
            .all(|(id, _)| self.images.contains_key(id) || self.failed.contains(id))
    }
}
