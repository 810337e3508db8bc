pub mod assignment;
pub mod progress;
