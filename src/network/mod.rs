//! The street network matched against.
//!
//! A [`Network`] stores edges as given. Matching operates on the
//! [`NetworkView`] of a network for a chosen [`Weighting`], which provides
//! candidate search through [`Scan`] and routing through [`ShortestPath`].

#[doc(hidden)]
pub mod edge;
#[doc(hidden)]
pub mod route;
#[doc(hidden)]
pub mod scan;
#[doc(hidden)]
pub mod store;
#[doc(hidden)]
pub mod view;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use edge::*;
#[doc(inline)]
pub use route::*;
#[doc(inline)]
pub use scan::*;
#[doc(inline)]
pub use store::*;
#[doc(inline)]
pub use view::*;
