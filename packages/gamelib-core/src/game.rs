use gamelib_input::Keys;
use gamelib_math::{DrawContext, Transform};
use gamelib_timer::Timer;

use crate::scene::Scene;

#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// CSS color the screen is filled with before each frame. `None` clears
    /// the screen instead, which is much faster.
    pub background_color: Option<String>,
    pub screen_width: f64,
    pub screen_height: f64,
    pub debug: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            background_color: None,
            screen_width: 800.0,
            screen_height: 600.0,
            debug: false,
        }
    }
}

impl GameOptions {
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_screen_size(mut self, width: f64, height: f64) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Frame driver.
///
/// Owns the scene, a game-wide [`Timer`] and the keyboard state. The host
/// calls [`Game::start`] once and then [`Game::frame`] with a millisecond
/// timestamp each time the display refreshes.
#[derive(Debug)]
pub struct Game {
    pub options: GameOptions,
    pub scene: Scene,
    pub timer: Timer,
    pub keys: Keys,
    fps_timer: f64,
    fps_counter: u32,
    last_fps: u32,
    last_time: f64,
    just_focused: bool,
    running: bool,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            scene: Scene::new(),
            timer: Timer::new(),
            keys: Keys::new(),
            fps_timer: 0.0,
            fps_counter: 0,
            last_fps: 0,
            last_time: 0.0,
            just_focused: false,
            running: false,
        }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.fps_timer = now_ms;
        self.last_time = now_ms;
        self.fps_counter = 0;
        self.running = true;
        tracing::info!(
            "Game started ({}x{})",
            self.options.screen_width,
            self.options.screen_height
        );
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::info!("Game stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames counted over the last full second.
    pub fn fps(&self) -> u32 {
        self.last_fps
    }

    /// The window regained focus. The next frame draws without updating so
    /// the time spent away does not arrive as one huge step.
    pub fn notify_focus(&mut self) {
        self.just_focused = true;
    }

    /// Runs one frame: update then draw. Returns false once the game has
    /// been stopped, telling the host not to schedule another frame.
    pub fn frame(&mut self, now_ms: f64, ctx: &mut dyn DrawContext) -> bool {
        if !self.running {
            return false;
        }

        self.fps_counter += 1;
        if now_ms - self.fps_timer > 1000.0 {
            self.last_fps = self.fps_counter;
            tracing::debug!("{} frames per second", self.fps_counter);
            self.fps_counter = 0;
            self.fps_timer += 1000.0;
        }

        let dt = (now_ms - self.last_time) / 1000.0;
        if self.just_focused {
            self.just_focused = false;
        } else {
            self.scene.update(dt);
            self.timer.update(dt);
        }

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let (width, height) = (self.options.screen_width, self.options.screen_height);
        match &self.options.background_color {
            None => ctx.clear_rect(0.0, 0.0, width, height),
            Some(color) => {
                ctx.set_fill_style(color);
                ctx.fill_rect(0.0, 0.0, width, height);
            }
        }
        self.scene
            .draw(ctx, &Transform::identity(), self.options.debug);

        self.last_time = now_ms;
        self.running
    }
}
