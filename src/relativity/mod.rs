pub mod input;
pub mod special;
