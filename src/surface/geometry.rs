//! Aspect-preserving display geometry.

/// On-screen pixel size shared by the background and overlay surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayGeometry {
    pub width: i32,
    pub height: i32,
}

impl DisplayGeometry {
    /// Largest size with the source's aspect ratio that fits inside the
    /// container without cropping (fit-inside, never fit-cover).
    ///
    /// Returns `None` when either the source or the container is empty.
    pub fn fit_inside(
        source_width: i32,
        source_height: i32,
        container_width: u32,
        container_height: u32,
    ) -> Option<Self> {
        if source_width <= 0 || source_height <= 0 || container_width == 0 || container_height == 0
        {
            return None;
        }

        let sw = source_width as f64;
        let sh = source_height as f64;
        let cw = container_width.min(i32::MAX as u32) as f64;
        let ch = container_height.min(i32::MAX as u32) as f64;

        let scale = (cw / sw).min(ch / sh);
        let width = (sw * scale).round().clamp(1.0, cw) as i32;
        let height = (sh * scale).round().clamp(1.0, ch) as i32;

        Some(Self { width, height })
    }

    /// Total number of pixels.
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }
}
