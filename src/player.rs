use glam::Vec2;

/// Movement speed in pixels/second.
const SPEED: f32 = 320.0;
/// Animation playback rate while moving (frames/second).
const ANIMATION_FPS: f32 = 12.0;
/// Seconds each animation frame is held.
const TIME_PER_FRAME: f32 = 1.0 / ANIMATION_FPS;
/// Frames per walk cycle (atlas columns).
pub const FRAMES_PER_CYCLE: u32 = 6;

/// Facing direction, mapped to an atlas row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Facing {
    Up,
    Right,
    Left,
    Down,
}

impl Facing {
    /// Atlas row holding this direction's walk cycle.
    pub fn row(self) -> u32 {
        match self {
            Facing::Up => 0,
            Facing::Right => 1,
            Facing::Left => 2,
            Facing::Down => 3,
        }
    }
}

/// Walk-cycle playback state: current frame column and the time
/// accumulated toward the next frame advance.
#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    pub frame: u32,
    pub elapsed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            frame: 0,
            elapsed: 0.0,
        }
    }
}

impl AnimationState {
    /// Advance the walk cycle. While moving, steps `frame` modulo the cycle
    /// length every 1/12 s of accumulated time; when idle, snaps back to
    /// frame 0 and drops the accumulator.
    pub fn advance(&mut self, dt: f32, moving: bool) {
        if moving {
            self.elapsed += dt;
            while self.elapsed >= TIME_PER_FRAME {
                self.frame = (self.frame + 1) % FRAMES_PER_CYCLE;
                self.elapsed -= TIME_PER_FRAME;
            }
        } else {
            self.frame = 0;
            self.elapsed = 0.0;
        }
    }
}

/// The one animated character.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Center position in screen pixels.
    pub position: Vec2,
    /// Previous tick's position, for render interpolation.
    pub prev_position: Vec2,
    pub facing: Facing,
    pub animation: AnimationState,
    /// On-screen quad size in pixels.
    pub size: f32,
}

impl Player {
    pub fn new(position: Vec2, size: f32) -> Self {
        Self {
            position,
            prev_position: position,
            facing: Facing::Down,
            animation: AnimationState::default(),
            size,
        }
    }

    /// One fixed-timestep tick: integrate the movement direction, clamp to
    /// the visible range, and advance the walk cycle.
    pub fn tick(&mut self, dt: f32, dir: Vec2, facing: Option<Facing>, screen_w: f32, screen_h: f32) {
        self.prev_position = self.position;

        if let Some(f) = facing {
            self.facing = f;
        }

        let moving = dir.length_squared() > 0.0;
        self.position += dir * SPEED * dt;
        self.clamp_to_screen(screen_w, screen_h);
        self.animation.advance(dt, moving);
    }

    /// Keep the whole quad on screen.
    fn clamp_to_screen(&mut self, screen_w: f32, screen_h: f32) {
        let half = self.size * 0.5;
        self.position.x = self.position.x.clamp(half, (screen_w - half).max(half));
        self.position.y = self.position.y.clamp(half, (screen_h - half).max(half));
    }

    /// Position to draw this frame, lerped between the last two ticks.
    pub fn render_position(&self, alpha: f32) -> Vec2 {
        Vec2::lerp(self.prev_position, self.position, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_wraps_around_cycle() {
        let mut anim = AnimationState::default();
        for expected in [1, 2, 3, 4, 5, 0, 1] {
            anim.advance(TIME_PER_FRAME, true);
            assert_eq!(anim.frame, expected);
        }
    }

    #[test]
    fn idle_resets_to_first_frame() {
        let mut anim = AnimationState {
            frame: 4,
            elapsed: 0.05,
        };
        anim.advance(0.016, false);
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.elapsed, 0.0);
    }

    #[test]
    fn sub_frame_time_accumulates() {
        let mut anim = AnimationState::default();
        anim.advance(TIME_PER_FRAME * 0.5, true);
        assert_eq!(anim.frame, 0);
        anim.advance(TIME_PER_FRAME * 0.5, true);
        assert_eq!(anim.frame, 1);
    }

    #[test]
    fn large_dt_steps_multiple_frames() {
        let mut anim = AnimationState::default();
        anim.advance(TIME_PER_FRAME * 3.0, true);
        assert_eq!(anim.frame, 3);
    }

    #[test]
    fn position_clamps_to_screen() {
        let mut player = Player::new(Vec2::new(10.0, 10.0), 96.0);
        player.tick(1.0, Vec2::new(-1.0, -1.0).normalize(), Some(Facing::Left), 800.0, 600.0);
        assert_eq!(player.position, Vec2::new(48.0, 48.0));

        let mut player = Player::new(Vec2::new(790.0, 590.0), 96.0);
        player.tick(1.0, Vec2::new(1.0, 1.0).normalize(), Some(Facing::Right), 800.0, 600.0);
        assert_eq!(player.position, Vec2::new(752.0, 552.0));
    }

    #[test]
    fn facing_maps_to_atlas_rows() {
        assert_eq!(Facing::Up.row(), 0);
        assert_eq!(Facing::Right.row(), 1);
        assert_eq!(Facing::Left.row(), 2);
        assert_eq!(Facing::Down.row(), 3);
    }

    #[test]
    fn facing_persists_when_idle() {
        let mut player = Player::new(Vec2::new(400.0, 300.0), 96.0);
        player.tick(0.016, Vec2::new(1.0, 0.0), Some(Facing::Right), 800.0, 600.0);
        player.tick(0.016, Vec2::ZERO, None, 800.0, 600.0);
        assert_eq!(player.facing, Facing::Right);
        assert_eq!(player.animation.frame, 0);
    }

    #[test]
    fn interpolation_blends_last_two_ticks() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 96.0);
        player.tick(0.1, Vec2::new(1.0, 0.0), Some(Facing::Right), 800.0, 600.0);
        let halfway = player.render_position(0.5);
        assert!((halfway.x - (100.0 + SPEED * 0.1 * 0.5)).abs() < 1e-3);
        assert_eq!(halfway.y, 100.0);
    }
}
