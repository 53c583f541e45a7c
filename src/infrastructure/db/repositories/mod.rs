pub mod pet;
pub mod user;

pub use pet::PetRepository;
pub use user::{AgeExtremes, NewUser, UserChanges, UserRepository};
