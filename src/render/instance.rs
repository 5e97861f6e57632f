use bytemuck::{Pod, Zeroable};

use crate::atlas::SpriteAtlas;
use crate::player::Player;

/// Per-sprite data uploaded to the GPU each frame.
/// Stride = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Screen position of the quad center (x, y).
    pub position: [f32; 2],
    /// Quad size in pixels (width, height).
    pub size: [f32; 2],
    /// UV offset of the current atlas frame.
    pub uv_offset: [f32; 2],
}

impl SpriteInstance {
    /// Build the instance for the character, interpolating position
    /// between the last two simulation ticks.
    pub fn from_player(player: &Player, atlas: &SpriteAtlas, alpha: f32) -> Self {
        let uv = atlas.uv_offset(player.animation.frame, player.facing.row());
        Self {
            position: player.render_position(alpha).into(),
            size: [player.size, player.size],
            uv_offset: uv.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn instance_picks_the_current_frame() {
        let atlas = SpriteAtlas::new(6, 4);
        let mut player = Player::new(Vec2::new(100.0, 100.0), 96.0);
        player.animation.frame = 2;

        let instance = SpriteInstance::from_player(&player, &atlas, 1.0);
        let expected = atlas.uv_offset(2, player.facing.row());
        assert_eq!(instance.uv_offset, [expected.x, expected.y]);
        assert_eq!(instance.position, [100.0, 100.0]);
        assert_eq!(instance.size, [96.0, 96.0]);
    }
}
