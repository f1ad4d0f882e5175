//! Decoding pipeline: block split, data stage, option stage

pub mod data_block;
pub mod option_block;
pub mod scanner;
pub mod validation;
