//! The three-stage design pipeline.
//!
//! - [`resolve()`]: cutoff list → normalised [`Passband`] list
//! - [`ideal_response()`]: passbands → ideal (windowless) impulse response
//! - [`assemble()`]: window application + unity-gain normalisation
//!
//! The stages compose linearly with no feedback; [`crate::design()`] wires
//! them together.

pub mod assemble;
pub mod bands;
pub mod ideal;

pub use assemble::{assemble, reference_frequency};
pub use bands::{resolve, Passband};
pub use ideal::{ideal_response, sinc};
