pub mod create;
pub mod detail;
pub mod remove;
pub mod update;

pub use create::add_planet;
pub use detail::planet_details;
pub use remove::remove_planet;
pub use update::update_planet;
