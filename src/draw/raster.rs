//! Owned pixel snapshots of Cairo image surfaces.
//!
//! Cairo surfaces are reference-counted handles whose pixel data can only be
//! borrowed while no drawing context is alive. [`Raster`] is the owned side of
//! that boundary: read a full snapshot with [`Raster::from_surface`], transform
//! it in plain Rust, then write it back with [`Raster::commit`].
//!
//! Pixels are stored as native-endian premultiplied ARGB32 words, the same
//! layout as `cairo::Format::ARgb32`.

use super::color::argb_alpha;
use crate::error::EditorError;
use cairo::{Format, ImageSurface};
use std::io::Cursor;

/// Owned, row-major premultiplied ARGB32 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl Raster {
    /// Creates a fully transparent raster.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Creates a raster with every pixel set to `pixel`.
    pub fn filled(width: i32, height: i32, pixel: u32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Alpha at `(x, y)`; zero outside the raster.
    pub fn alpha_at(&self, x: i32, y: i32) -> u8 {
        self.get(x, y).map(argb_alpha).unwrap_or(0)
    }

    /// Number of pixels whose alpha is non-zero.
    pub fn coverage(&self) -> usize {
        self.pixels.iter().filter(|&&p| argb_alpha(p) > 0).count()
    }

    /// Applies `f` to every pixel, producing a new raster of the same size.
    pub fn map(&self, f: impl Fn(u32) -> u32) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Clears every pixel that `stamp` covers with any alpha.
    pub fn erase_stamped(&mut self, stamp: &Raster) -> Result<(), EditorError> {
        if (stamp.width, stamp.height) != (self.width, self.height) {
            return Err(EditorError::RasterSizeMismatch {
                expected: (self.width, self.height),
                actual: (stamp.width, stamp.height),
            });
        }
        for (pixel, &mark) in self.pixels.iter_mut().zip(&stamp.pixels) {
            if argb_alpha(mark) > 0 {
                *pixel = 0;
            }
        }
        Ok(())
    }

    /// Reads a snapshot of `surface`.
    ///
    /// The surface must not have a live `cairo::Context`; otherwise Cairo
    /// refuses the borrow and [`EditorError::SurfaceBorrow`] is returned.
    /// `Rgb24` surfaces (opaque PNGs) are normalised to full alpha.
    pub fn from_surface(surface: &mut ImageSurface) -> Result<Self, EditorError> {
        surface.flush();
        let width = surface.width();
        let height = surface.height();
        let stride = surface.stride() as usize;
        let opaque = surface.format() == Format::Rgb24;

        let data = surface.data()?;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as usize {
            let row = &data[y * stride..y * stride + width as usize * 4];
            for px in row.chunks_exact(4) {
                let mut value = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                if opaque {
                    value |= 0xFF00_0000;
                }
                pixels.push(value);
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Writes this raster over the full contents of `surface`.
    pub fn commit(&self, surface: &mut ImageSurface) -> Result<(), EditorError> {
        let actual = (surface.width(), surface.height());
        if actual != (self.width, self.height) {
            return Err(EditorError::RasterSizeMismatch {
                expected: (self.width, self.height),
                actual,
            });
        }

        let stride = surface.stride() as usize;
        let width = self.width as usize;
        let mut data = surface.data()?;
        for (y, src_row) in self.pixels.chunks_exact(width.max(1)).enumerate() {
            let row = &mut data[y * stride..y * stride + width * 4];
            for (dst, src) in row.chunks_exact_mut(4).zip(src_row) {
                dst.copy_from_slice(&src.to_ne_bytes());
            }
        }
        Ok(())
    }

    /// Materialises the raster as a new ARGB32 surface.
    pub fn to_surface(&self) -> Result<ImageSurface, EditorError> {
        let mut surface = ImageSurface::create(Format::ARgb32, self.width, self.height)?;
        self.commit(&mut surface)?;
        Ok(surface)
    }

    /// Nearest-neighbour resample to `width` x `height`.
    ///
    /// Sampling is taken at pixel centres, so resampling to the same size is
    /// the identity.
    pub fn resample_nearest(&self, width: i32, height: i32) -> Self {
        if (width, height) == (self.width, self.height) {
            return self.clone();
        }
        let mut out = Self::new(width, height);
        if self.width == 0 || self.height == 0 {
            return out;
        }

        let sx = self.width as f64 / width.max(1) as f64;
        let sy = self.height as f64 / height.max(1) as f64;
        for y in 0..out.height {
            let src_y = (((y as f64 + 0.5) * sy) as i32).min(self.height - 1);
            for x in 0..out.width {
                let src_x = (((x as f64 + 0.5) * sx) as i32).min(self.width - 1);
                out.pixels[(y * width + x) as usize] =
                    self.pixels[(src_y * self.width + src_x) as usize];
            }
        }
        out
    }

    /// Encodes the raster as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, EditorError> {
        let surface = self.to_surface()?;
        let mut bytes = Vec::new();
        surface.write_to_png(&mut bytes)?;
        Ok(bytes)
    }

    /// Decodes PNG bytes into a raster.
    pub fn decode_png(bytes: &[u8]) -> Result<Self, EditorError> {
        let mut surface = ImageSurface::create_from_png(&mut Cursor::new(bytes))?;
        Self::from_surface(&mut surface)
    }
}
