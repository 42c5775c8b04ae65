pub mod capture;
pub mod config;
pub mod domain {
    pub mod attempt;
}
pub mod error;
pub mod loader;
pub mod payload;
pub mod session;
pub mod surface;
pub mod trail;
pub mod verify;
