pub mod planet;
pub mod user;

pub use planet::{NewPlanet, Planet};
pub use user::{NewUser, User};
