pub mod planets;
