//! A Hidden-Markov-Model (HMM) matching
//! transition module that allows for
//! matching observed stops to an underlying
//! network.

pub mod candidate;
pub mod costing;
pub mod error;
pub mod graph;
pub mod layer;
pub mod solver;


// Re-Exports
#[doc(hidden)]
pub use candidate::*;
#[doc(hidden)]
pub use costing::*;
#[doc(hidden)]
pub use error::*;
#[doc(hidden)]
pub use graph::*;
#[doc(hidden)]
pub use layer::*;
#[doc(hidden)]
pub use solver::*;
