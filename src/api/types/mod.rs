mod common;
mod pet;
mod user;

pub use common::*;
pub use pet::*;
pub use user::*;
