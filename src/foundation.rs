pub mod error;
pub mod pixel;
