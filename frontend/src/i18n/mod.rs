pub mod en;

pub use en as current;
