pub mod appointment;
pub mod doctor;
pub mod error;
pub mod patient;
pub mod session;

pub use appointment::*;
pub use doctor::*;
pub use error::*;
pub use patient::*;
pub use session::*;
