pub mod classification;
pub mod detection;
pub mod shared;
