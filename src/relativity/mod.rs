pub mod grid;
pub mod special;
