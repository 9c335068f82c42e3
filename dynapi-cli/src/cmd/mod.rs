pub mod check;
pub mod config;
pub mod describe;
pub mod invoke;
