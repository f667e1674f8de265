pub mod application;
pub mod domain;

pub use application::*;
pub use domain::*;
