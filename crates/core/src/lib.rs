#![forbid(unsafe_code)]

pub mod answer;
pub mod model;
