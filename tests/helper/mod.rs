#![allow(dead_code)]

mod installation;
mod metadata;

pub use installation::*;
pub use metadata::*;
