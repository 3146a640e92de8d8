pub mod info;
pub mod sample;
pub mod smooth;
pub mod validate;
