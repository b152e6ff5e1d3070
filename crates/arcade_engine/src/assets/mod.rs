//! Texture atlas loading
//!
//! One image file decoded once at startup; entities reference sub-rectangles
//! of it by tile grid coordinates. Decoding goes through the `image` crate
//! and failures come back as a recoverable [`AssetError`] rather than
//! aborting the process.

use crate::foundation::math::Rect;
use std::path::Path;
use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read or decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// The image dimensions do not fit the requested tile grid
    #[error("Invalid atlas geometry: {0}")]
    InvalidGeometry(String),
}

/// Decoded image data ready for upload by a platform backend
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Decode an image file to RGBA8
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();
        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{:?}: {}", path_ref, e)))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }
}

/// A texture atlas with a fixed square tile grid
///
/// The atlas carries the decoded pixels (for a backend to upload) plus the
/// tile geometry the render pass needs to address sprites.
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    pixels: Option<ImageData>,
    width: u32,
    height: u32,
    tile_size: u32,
}

impl TextureAtlas {
    /// Load and decode an atlas image with the given square tile size
    pub fn load<P: AsRef<Path>>(path: P, tile_size: u32) -> Result<Self, AssetError> {
        let pixels = ImageData::from_file(path)?;
        let (width, height) = (pixels.width, pixels.height);
        Self::check_geometry(width, height, tile_size)?;

        Ok(Self {
            pixels: Some(pixels),
            width,
            height,
            tile_size,
        })
    }

    /// Create an atlas with geometry only, no pixel data
    ///
    /// Used by headless runs and tests, where tile addressing still has to
    /// work but nothing is uploaded anywhere.
    pub fn from_dimensions(width: u32, height: u32, tile_size: u32) -> Result<Self, AssetError> {
        Self::check_geometry(width, height, tile_size)?;
        Ok(Self {
            pixels: None,
            width,
            height,
            tile_size,
        })
    }

    fn check_geometry(width: u32, height: u32, tile_size: u32) -> Result<(), AssetError> {
        if tile_size == 0 || width % tile_size != 0 || height % tile_size != 0 {
            return Err(AssetError::InvalidGeometry(format!(
                "{}x{} image does not divide into {}px tiles",
                width, height, tile_size
            )));
        }
        Ok(())
    }

    /// Decoded pixel data, if the atlas was loaded from a file
    pub fn pixels(&self) -> Option<&ImageData> {
        self.pixels.as_ref()
    }

    /// Atlas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Atlas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Square tile edge length in pixels
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of tile columns
    pub fn columns(&self) -> u32 {
        self.width / self.tile_size
    }

    /// Number of tile rows
    pub fn rows(&self) -> u32 {
        self.height / self.tile_size
    }

    /// Source rectangle of a tile by grid coordinates
    ///
    /// Coordinates outside the grid return `None`; a missing sprite is a
    /// content bug worth surfacing, not a crash.
    pub fn tile_rect(&self, col: u32, row: u32) -> Option<Rect> {
        if col >= self.columns() || row >= self.rows() {
            return None;
        }
        let size = self.tile_size as f32;
        Some(Rect::new(col as f32 * size, row as f32 * size, size, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_rect_addresses_grid() {
        let atlas = TextureAtlas::from_dimensions(1024, 1024, 128).expect("Should build");
        assert_eq!(atlas.columns(), 8);
        assert_eq!(atlas.rows(), 8);

        let rect = atlas.tile_rect(4, 0).expect("Should address tile");
        assert_eq!(rect, Rect::new(512.0, 0.0, 128.0, 128.0));

        let rect = atlas.tile_rect(0, 4).expect("Should address tile");
        assert_eq!(rect, Rect::new(0.0, 512.0, 128.0, 128.0));
    }

    #[test]
    fn test_tile_rect_out_of_grid_is_none() {
        let atlas = TextureAtlas::from_dimensions(256, 256, 128).expect("Should build");
        assert!(atlas.tile_rect(2, 0).is_none());
        assert!(atlas.tile_rect(0, 2).is_none());
    }

    #[test]
    fn test_geometry_must_divide_into_tiles() {
        assert!(TextureAtlas::from_dimensions(1000, 1024, 128).is_err());
        assert!(TextureAtlas::from_dimensions(1024, 1024, 0).is_err());
    }

    #[test]
    fn test_missing_file_is_recoverable() {
        let result = TextureAtlas::load("definitely/not/here.png", 128);
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }
}
