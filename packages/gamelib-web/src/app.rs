use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gamelib_core::{Game, GameOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, KeyboardEvent, Window};

use crate::canvas::CanvasContext;
use crate::error::{Result, WebError};

type Listener = Closure<dyn FnMut(Event)>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A [`Game`] running in a browser tab.
///
/// Keyboard and focus listeners are registered on the window for as long as
/// this value lives. The frame loop keeps running until [`WebGame::stop`]
/// or until this value is dropped.
pub struct WebGame {
    game: Rc<RefCell<Game>>,
    window: Window,
    listeners: Vec<(&'static str, Listener)>,
    // The frame closure owns a handle to its own slot; cleared on drop.
    frame: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl WebGame {
    /// Builds a game on the canvas with id `canvas_id`, lets `setup` populate
    /// it, and starts the frame loop.
    ///
    /// The screen size is taken from the canvas, overriding `options`.
    pub fn launch<F>(canvas_id: &str, options: GameOptions, setup: F) -> Result<Self>
    where
        F: FnOnce(&mut Game),
    {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| WebError::ElementNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| WebError::NotACanvas(canvas_id.to_string()))?;
        let ctx = CanvasContext::from_canvas(&canvas)?;

        let options = options.with_screen_size(f64::from(canvas.width()), f64::from(canvas.height()));
        let mut game = Game::new(options);
        setup(&mut game);

        let mut web_game = Self {
            game: Rc::new(RefCell::new(game)),
            window,
            listeners: Vec::new(),
            frame: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        };
        web_game.listen("keydown", |game, event| {
            event.prevent_default();
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                game.keys.key_down(key.key_code());
            }
        })?;
        web_game.listen("keyup", |game, event| {
            event.prevent_default();
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                game.keys.key_up(key.key_code());
            }
        })?;
        // Skip the first update after switching back to the tab.
        web_game.listen("focus", |game, _| game.notify_focus())?;
        web_game.listen("blur", |game, _| game.keys.release_all())?;

        web_game.run(ctx)?;
        tracing::info!("Game launched on #{}", canvas_id);
        Ok(web_game)
    }

    pub fn game(&self) -> Rc<RefCell<Game>> {
        self.game.clone()
    }

    /// Stops the frame loop after the current frame.
    pub fn stop(&self) {
        self.game.borrow_mut().stop();
    }

    fn listen<F>(&mut self, event: &'static str, mut handler: F) -> Result<()>
    where
        F: FnMut(&mut Game, &Event) + 'static,
    {
        let game = self.game.clone();
        let closure = Listener::new(move |event: Event| {
            // Events may fire while a frame holds the borrow.
            if let Ok(mut game) = game.try_borrow_mut() {
                handler(&mut game, &event);
            }
        });
        self.window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.push((event, closure));
        Ok(())
    }

    fn run(&self, mut ctx: CanvasContext) -> Result<()> {
        let now = now(&self.window);
        self.game.borrow_mut().start(now);

        let next = self.frame.clone();
        let pending = self.pending.clone();
        let game = self.game.clone();
        let window = self.window.clone();

        *self.frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            pending.set(None);
            let keep_going = game.borrow_mut().frame(now, &mut ctx);
            if !keep_going {
                tracing::debug!("Frame loop finished");
                return;
            }
            if let Some(cb) = next.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(handle) => pending.set(Some(handle)),
                    Err(err) => tracing::warn!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }));

        if let Some(cb) = self.frame.borrow().as_ref() {
            let handle = self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())?;
            self.pending.set(Some(handle));
        }
        Ok(())
    }
}

impl Drop for WebGame {
    fn drop(&mut self) {
        if let Ok(mut game) = self.game.try_borrow_mut() {
            game.stop();
        }
        for (event, closure) in self.listeners.drain(..) {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        // Dropping the closure releases its clone of the game.
        self.frame.borrow_mut().take();
    }
}

fn now(window: &Window) -> f64 {
    window
        .performance()
        .map_or_else(js_sys::Date::now, |performance| performance.now())
}
