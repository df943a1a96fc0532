use gamelib_core::{Game, GameOptions, Positionable, Rectangle, Spinning};
use gamelib_math::{CommandRecorder, DrawCommand};
use std::cell::RefCell;
use std::rc::Rc;

fn spinning_game(options: GameOptions) -> (Game, gamelib_core::NodeId) {
    let mut game = Game::new(options);
    let root = game.scene.root();
    let node = game.scene.spawn_with(
        Positionable::at(400.0, 300.0),
        Spinning::new(Rectangle::new(10.0, 10.0, "#f00"), 1.0),
    );
    game.scene.add_child(root, node);
    (game, node)
}

#[test]
fn test_frame_before_start_does_nothing() {
    let (mut game, node) = spinning_game(GameOptions::default());
    let mut ctx = CommandRecorder::new();

    assert!(!game.frame(16.0, &mut ctx));
    assert!(ctx.commands.is_empty());
    assert_eq!(game.scene.rotation(node).unwrap(), 0.0);
}

#[test]
fn test_frame_updates_then_clears_and_draws() {
    let (mut game, node) = spinning_game(GameOptions::default());
    let mut ctx = CommandRecorder::new();

    game.start(1000.0);
    assert!(game.frame(1500.0, &mut ctx));

    assert!((game.scene.rotation(node).unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(
        ctx.commands[..2],
        [
            DrawCommand::SetTransform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
            },
        ]
    );
    assert!(ctx.commands.len() > 2);
}

#[test]
fn test_background_color_fills_screen() {
    let options = GameOptions::default()
        .with_background_color("#222")
        .with_screen_size(320.0, 240.0);
    let mut game = Game::new(options);
    let mut ctx = CommandRecorder::new();

    game.start(0.0);
    game.frame(16.0, &mut ctx);

    assert_eq!(
        ctx.commands,
        vec![
            DrawCommand::SetTransform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
            DrawCommand::SetFillStyle("#222".to_string()),
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                width: 320.0,
                height: 240.0,
            },
        ]
    );
}

#[test]
fn test_focus_skips_one_update() {
    let (mut game, node) = spinning_game(GameOptions::default());
    let mut ctx = CommandRecorder::new();

    game.start(0.0);
    game.frame(100.0, &mut ctx);
    let before = game.scene.rotation(node).unwrap();

    game.notify_focus();
    game.frame(60_000.0, &mut ctx);
    assert_eq!(game.scene.rotation(node).unwrap(), before);

    game.frame(60_100.0, &mut ctx);
    assert!((game.scene.rotation(node).unwrap() - before - 0.1).abs() < 1e-9);
}

#[test]
fn test_fps_counts_frames_per_second() {
    let mut game = Game::new(GameOptions::default());
    let mut ctx = CommandRecorder::new();

    game.start(0.0);
    for i in 1..=11 {
        game.frame(f64::from(i) * 100.0, &mut ctx);
    }
    assert_eq!(game.fps(), 11);
}

#[test]
fn test_game_timer_advances_with_frames() {
    let mut game = Game::new(GameOptions::default());
    let mut ctx = CommandRecorder::new();
    let fired = Rc::new(RefCell::new(false));
    {
        let fired = fired.clone();
        game.timer.after(0.25, "ready", move |_| *fired.borrow_mut() = true);
    }

    game.start(0.0);
    game.frame(200.0, &mut ctx);
    assert!(!*fired.borrow());
    game.frame(300.0, &mut ctx);
    assert!(*fired.borrow());
}

#[test]
fn test_stop_ends_the_loop() {
    let (mut game, node) = spinning_game(GameOptions::default());
    let mut ctx = CommandRecorder::new();

    game.start(0.0);
    assert!(game.is_running());
    game.stop();
    assert!(!game.is_running());
    assert!(!game.frame(500.0, &mut ctx));
    assert_eq!(game.scene.rotation(node).unwrap(), 0.0);
}

#[test]
fn test_keys_reachable_from_game() {
    let mut game = Game::new(GameOptions::default());
    let pressed = Rc::new(RefCell::new(0));
    {
        let pressed = pressed.clone();
        game.keys.on("key-space", move |_| *pressed.borrow_mut() += 1);
    }

    assert!(game.keys.key_down(32));
    assert!(!game.keys.key_down(32));
    assert!(game.keys.key_up(32));
    assert_eq!(*pressed.borrow(), 1);
}
