pub mod pet;
pub mod user;

pub use pet::Entity as Pet;
pub use user::Entity as User;
