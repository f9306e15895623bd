extern crate hamdyn_core;
extern crate nalgebra as na;
pub mod config;
pub mod driver;
pub mod initializer;
pub mod macro_parameters;
pub mod solver;
