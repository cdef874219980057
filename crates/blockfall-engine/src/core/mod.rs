pub use self::{board::*, rng::*, shape::*};

pub(crate) mod board;
pub(crate) mod rng;
pub(crate) mod shape;
