pub mod controller;
pub mod error;
pub mod math;
pub mod motion;
pub mod prelude;
pub mod trace;
