#![deny(warnings)]
pub mod codec;
pub mod model;
