pub mod select;
pub mod spread;
