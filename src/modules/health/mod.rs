pub mod controller;

pub use controller::health_check;
