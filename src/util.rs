pub mod image;
pub mod key;
