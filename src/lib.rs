//! Free-Slot Reordering
//!
//! Rearranges an array of distinct elements into a target order in place,
//! where every exchange must involve one designated free element.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

mod tracing_helpers;

pub mod algorithms;

/// Free-Slot Reordering Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::algorithms::error::{InvalidArrangementError, InvalidTargetError, SwapSortError};
    #[doc(no_inline)]
    pub use super::algorithms::exchange::{Exchange, ExchangeCounter, ExchangeSink};
    #[doc(no_inline)]
    pub use super::algorithms::free_slot::*;
}
