use glam::Vec2;

/// Fixed-grid spritesheet layout. Frames are addressed by (column, row)
/// and resolved to UV fractions of the full texture.
#[derive(Debug, Clone, Copy)]
pub struct SpriteAtlas {
    pub columns: u32,
    pub rows: u32,
}

impl SpriteAtlas {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Width of one frame as a fraction of the texture (`ds`).
    pub fn frame_width(&self) -> f32 {
        1.0 / self.columns as f32
    }

    /// Height of one frame as a fraction of the texture (`dt`).
    pub fn frame_height(&self) -> f32 {
        1.0 / self.rows as f32
    }

    /// UV scale applied to a unit quad to cover exactly one frame.
    pub fn uv_scale(&self) -> Vec2 {
        Vec2::new(self.frame_width(), self.frame_height())
    }

    /// UV offset of the top-left corner of a frame.
    ///
    /// Rows are indexed bottom-up to match the walk sheet's layout, so
    /// row 0 addresses the bottom strip of the image.
    pub fn uv_offset(&self, column: u32, row: u32) -> Vec2 {
        let col = column % self.columns;
        let row = row % self.rows;
        Vec2::new(
            col as f32 * self.frame_width(),
            (self.rows - 1 - row) as f32 * self.frame_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_fractions() {
        let atlas = SpriteAtlas::new(6, 4);
        assert!((atlas.frame_width() - 1.0 / 6.0).abs() < 1e-6);
        assert!((atlas.frame_height() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn offsets_are_simple_fractions() {
        let atlas = SpriteAtlas::new(6, 4);

        // Row 0 is the bottom strip of the image.
        let origin = atlas.uv_offset(0, 0);
        assert!((origin.x - 0.0).abs() < 1e-6);
        assert!((origin.y - 0.75).abs() < 1e-6);

        let mid = atlas.uv_offset(3, 2);
        assert!((mid.x - 0.5).abs() < 1e-6);
        assert!((mid.y - 0.25).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_indices_wrap() {
        let atlas = SpriteAtlas::new(6, 4);
        assert_eq!(atlas.uv_offset(6, 4), atlas.uv_offset(0, 0));
        assert_eq!(atlas.uv_offset(7, 5), atlas.uv_offset(1, 1));
    }
}
