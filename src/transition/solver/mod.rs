#[doc(hidden)]
pub mod all_forward;
#[doc(hidden)]
pub mod methods;

#[doc(inline)]
pub use all_forward::*;
#[doc(inline)]
pub use methods::*;
