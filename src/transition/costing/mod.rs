//! You may override individual costing strategies
//! in order to apply custom functionality to the
//! transition solver. See the [`Strategy`] trait.
//!
//! ## Structure
//! Strategies are joined onto the aggregate [`CostingStrategies`]
//! structure, which is then supplied to the relevant transition
//! graph constructor.
//!
//! To override the default strategies, apply your own using
//! [`CostingStrategies::new`]. You must provide an [`EmissionStrategy`]
//! and a [`TransitionStrategy`].
//!
//! ### Creating your own strategy
//!
//! Implement [`Strategy`] for your structure, with the context of the
//! cost you need to override. The higher-order traits, like
//! [`TransitionStrategy`], are auto-derived for all which implement
//! [`Strategy<TransitionContext>`].
//!
//!```rust
//! use streetmatch::transition::{Strategy, TransitionContext};
//!
//! struct DistanceOnly;
//!
//! impl<'a> Strategy<TransitionContext<'a>> for DistanceOnly {
//!    type Cost = f64;
//!
//!    fn calculate(&self, context: TransitionContext<'a>) -> Option<Self::Cost> {
//!        Some(context.connection.map_or(0.0, |route| route.distance))
//!    }
//! }
//! ```
//!
//! ### Default Strategies:
//! - [`WeightedEmission`]: Emission Cost
//! - [`WeightedTransition`]: Transition Cost
//!
#[doc(hidden)]
pub mod default;
#[doc(hidden)]
pub mod emission;
#[doc(hidden)]
pub mod transition;
#[doc(hidden)]
pub mod util;

#[doc(inline)]
pub use default::*;
#[doc(inline)]
pub use emission::*;
#[doc(inline)]
pub use transition::*;
#[doc(inline)]
pub use util::*;
