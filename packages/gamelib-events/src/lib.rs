pub mod eventer;

pub use eventer::{Eventer, HandlerId};
