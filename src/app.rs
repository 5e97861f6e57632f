use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use instant::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::atlas::SpriteAtlas;
use crate::input::InputState;
use crate::player::Player;
use crate::render::instance::SpriteInstance;
use crate::render::GpuState;

/// Target simulation tick rate (seconds per tick).
const TICK_RATE: f64 = 1.0 / 60.0;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How often to log FPS (seconds).
const FPS_LOG_INTERVAL: f64 = 5.0;
/// Initial window size.
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
/// Walk sheet location, relative to the working directory.
const SHEET_PATH: &str = "assets/walk_sheet.png";
/// Walk sheet grid: 6 frames per cycle, 4 directions.
const ATLAS_COLUMNS: u32 = 6;
const ATLAS_ROWS: u32 = 4;
/// On-screen character size in pixels.
const SPRITE_SIZE: f32 = 96.0;

// ---------------------------------------------------------------------------
// Frame timing
// ---------------------------------------------------------------------------

struct FrameStats {
    frame_count: u64,
    last_log_time: Instant,
    frame_time_sum: f64,
    frame_time_min: f64,
    frame_time_max: f64,
    frames_since_log: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frame_count: 0,
            last_log_time: Instant::now(),
            frame_time_sum: 0.0,
            frame_time_min: f64::MAX,
            frame_time_max: 0.0,
            frames_since_log: 0,
        }
    }

    fn record_frame(&mut self, dt: f64) {
        self.frame_count += 1;
        self.frames_since_log += 1;
        self.frame_time_sum += dt;
        self.frame_time_min = self.frame_time_min.min(dt);
        self.frame_time_max = self.frame_time_max.max(dt);

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= FPS_LOG_INTERVAL {
            let avg_ms = (self.frame_time_sum / self.frames_since_log as f64) * 1000.0;
            let fps = self.frames_since_log as f64 / elapsed;
            log::info!(
                "FPS: {:.0} | avg: {:.2}ms | min: {:.2}ms | max: {:.2}ms | total frames: {}",
                fps,
                avg_ms,
                self.frame_time_min * 1000.0,
                self.frame_time_max * 1000.0,
                self.frame_count,
            );
            self.last_log_time = Instant::now();
            self.frame_time_sum = 0.0;
            self.frame_time_min = f64::MAX;
            self.frame_time_max = 0.0;
            self.frames_since_log = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level application state.
struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,

    // Simulation
    atlas: SpriteAtlas,
    player: Player,
    input: InputState,

    // Fixed timestep
    last_frame_time: Option<Instant>,
    accumulator: f64,
    tick_count: u64,

    // Frame timing
    frame_stats: FrameStats,

    // Surface dimensions
    screen_w: u32,
    screen_h: u32,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            atlas: SpriteAtlas::new(ATLAS_COLUMNS, ATLAS_ROWS),
            player: Player::new(
                Vec2::new(WINDOW_WIDTH as f32 * 0.5, WINDOW_HEIGHT as f32 * 0.5),
                SPRITE_SIZE,
            ),
            input: InputState::default(),
            last_frame_time: None,
            accumulator: 0.0,
            tick_count: 0,
            frame_stats: FrameStats::new(),
            screen_w: WINDOW_WIDTH,
            screen_h: WINDOW_HEIGHT,
        }
    }

    /// Run fixed-timestep simulation ticks.
    fn run_fixed_update(&mut self, dt: f64) {
        self.accumulator += dt;

        if self.accumulator > MAX_ACCUMULATOR {
            self.accumulator = MAX_ACCUMULATOR;
        }

        // Sample held keys once per frame (not per tick)
        let (dir, facing) = self.input.direction();

        while self.accumulator >= TICK_RATE {
            self.player.tick(
                TICK_RATE as f32,
                dir,
                facing,
                self.screen_w as f32,
                self.screen_h as f32,
            );
            self.accumulator -= TICK_RATE;
            self.tick_count += 1;
        }
    }

    /// Interpolation alpha for rendering between ticks.
    fn interpolation_alpha(&self) -> f32 {
        (self.accumulator / TICK_RATE) as f32
    }

    /// Show position and animation state in the title bar.
    fn update_title(&self) {
        if let Some(window) = &self.window {
            let pos = self.player.position;
            window.set_title(&format!(
                "spritewalk | pos: ({:.0}, {:.0}) row: {} frame: {}",
                pos.x,
                pos.y,
                self.player.facing.row(),
                self.player.animation.frame,
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("spritewalk")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );

        let size = window.inner_size();
        self.screen_w = size.width;
        self.screen_h = size.height;

        log::info!("Window created: {}x{}", size.width, size.height);

        // Initialize wgpu + pipeline + spritesheet. A missing sheet is
        // fatal: log it and close the window.
        let uv_scale = self.atlas.uv_scale();
        match GpuState::new(window.clone(), Path::new(SHEET_PATH), uv_scale.into()) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                log::info!("wgpu + sprite pipeline initialized");
            }
            Err(e) => {
                log::error!("GPU init failed: {e}");
                event_loop.exit();
                return;
            }
        }

        // Start the character centered.
        self.player = Player::new(
            Vec2::new(self.screen_w as f32 * 0.5, self.screen_h as f32 * 0.5),
            SPRITE_SIZE,
        );

        // Continuous game loop
        event_loop.set_control_flow(ControlFlow::Poll);

        self.window = Some(window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape {
                        log::info!("ESC pressed, exiting");
                        event_loop.exit();
                        return;
                    }
                    self.input.set_key(key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                    self.screen_w = new_size.width;
                    self.screen_h = new_size.height;
                }
            }
            WindowEvent::RedrawRequested => {
                // --- Timing ---
                let now = Instant::now();
                if let Some(last) = self.last_frame_time {
                    let dt = now.duration_since(last).as_secs_f64();

                    // Frame stats
                    self.frame_stats.record_frame(dt);

                    // Fixed timestep sim
                    self.run_fixed_update(dt);
                }
                self.last_frame_time = Some(now);

                self.update_title();

                // --- Render ---
                let alpha = self.interpolation_alpha();
                if let Some(gpu) = &mut self.gpu {
                    let instance =
                        SpriteInstance::from_player(&self.player, &self.atlas, alpha);
                    gpu.update_sprite(&instance);

                    if let Some(mut frame) = gpu.begin_frame() {
                        gpu.draw_sprite(&mut frame.encoder, &frame.view);
                        gpu.finish_frame(frame.encoder, frame.output);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Entry point — create event loop and run.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
