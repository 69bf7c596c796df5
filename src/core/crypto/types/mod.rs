/*!
Core types for the mechanism wrappers.
*/

pub mod algorithms;
pub mod details;

pub use algorithms::{Family, KemFamily, MechanismFamily, SignatureFamily};
pub use details::{KemDetails, SignatureDetails};
