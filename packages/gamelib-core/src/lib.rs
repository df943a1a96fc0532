pub mod behavior;
pub mod error;
pub mod game;
pub mod positionable;
pub mod scene;
pub mod shapes;

pub use behavior::{Behavior, DrawCx, UpdateCx};
pub use error::{Result, SceneError};
pub use game::{Game, GameOptions};
pub use positionable::Positionable;
pub use scene::{NodeId, Scene, SceneEvent};
pub use shapes::{Circle, Rectangle, Spinning};
