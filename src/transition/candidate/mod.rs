//! Candidates are the possible matches of each observed stop onto the
//! network, and the transitions between them.

#[doc(hidden)]
pub mod collapse;
#[doc(hidden)]
pub mod entry;
#[doc(hidden)]
pub mod graph;
#[doc(hidden)]
pub mod ident;
#[doc(hidden)]
pub mod matched;

#[doc(inline)]
pub use collapse::*;
#[doc(inline)]
pub use entry::*;
#[doc(inline)]
pub use graph::*;
#[doc(inline)]
pub use ident::*;
#[doc(inline)]
pub use matched::*;
