use thiserror::Error;

use crate::scene::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),
}

pub type Result<T> = std::result::Result<T, SceneError>;
