use std::f64::consts::FRAC_PI_2;

use anyhow::Result;
use clap::Parser;
use gamelib_core::{Circle, Game, GameOptions, NodeId, Positionable, Rectangle, Spinning};
use gamelib_math::{CommandRecorder, DrawCommand};
use tracing::Level;

const SHIFT: u32 = 16;
const KEY_A: u32 = 65;

#[derive(Parser)]
#[command(name = "gamelib-demo")]
#[command(about = "Runs the spinning-squares scene headlessly", long_about = None)]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Draw origin markers
    #[arg(long)]
    debug: bool,

    /// Log every structural change and draw call
    #[arg(short, long)]
    verbose: bool,
}

struct Nodes {
    a: NodeId,
    b: NodeId,
    c: NodeId,
}

fn build(game: &mut Game) -> Nodes {
    let scene = &mut game.scene;
    let root = scene.root();
    let a = scene.spawn_with(
        Positionable::at(400.0, 300.0),
        Spinning::new(Rectangle::new(100.0, 100.0, "#f00"), FRAC_PI_2),
    );
    let b = scene.spawn_with(Positionable::at(200.0, 0.0), Circle::new(50.0, "#0f0"));
    let c = scene.spawn_with(
        Positionable::at(0.0, 200.0),
        Rectangle::new(100.0, 100.0, "#00f"),
    );
    scene.add_child(root, a);
    scene.add_child(a, b);
    scene.add_child(b, c);

    game.keys.set_control_set([("a", "hello")]);
    game.keys.on("key-A", |data| tracing::info!("Pressed! {:?}", data));
    game.keys.on("control-hello", |data| tracing::info!("Hello! {:?}", data));

    Nodes { a, b, c }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::TRACE } else { Level::INFO })
        .init();

    if cli.dt <= 0.0 {
        anyhow::bail!("--dt must be positive, got {}", cli.dt);
    }

    let mut game = Game::new(GameOptions::default().with_debug(cli.debug));
    let nodes = build(&mut game);
    let mut ctx = CommandRecorder::new();

    let frame_ms = cli.dt * 1000.0;
    game.start(0.0);
    for frame in 1..=cli.frames {
        game.frame(f64::from(frame) * frame_ms, &mut ctx);
        let commands = ctx.take();
        tracing::debug!("Frame {} issued {} draw calls", frame, commands.len());
        for command in commands.iter().filter(|c| !matches!(c, DrawCommand::SetTransform(_))) {
            tracing::trace!("{:?}", command);
        }
    }

    game.keys.key_down(SHIFT);
    game.keys.key_down(KEY_A);
    game.keys.key_up(KEY_A);
    game.keys.key_up(SHIFT);

    for (name, id) in [("a", nodes.a), ("b", nodes.b), ("c", nodes.c)] {
        tracing::info!("{}: {}", name, game.scene.global_transform(id)?);
    }
    game.stop();
    Ok(())
}
