pub extern crate vector;

pub mod analyser;
pub mod error;
pub mod event;
pub mod flavor;
pub mod histogram;
pub mod integrand;
pub mod matrix_element;
pub mod matrix_elements;
pub mod pdf;
pub mod phase_space_generator;
pub mod rng;
pub mod run_card;

pub use crate::error::{Error, Result};
