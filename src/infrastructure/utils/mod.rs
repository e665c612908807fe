pub mod filename;
pub mod normalize;
