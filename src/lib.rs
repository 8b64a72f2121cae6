//! trigen - Generate randomized triangle test cases for triangle-intersection engines

pub mod case;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod sampler;

pub use error::{GenError, Result};
