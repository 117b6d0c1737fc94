pub mod clip;
pub mod extent;
pub mod info;
pub mod map;
