//! Algorithms.

pub mod error;
pub mod exchange;
pub mod free_slot;
pub mod rank_index;

pub use error::{InvalidArrangementError, InvalidTargetError, SwapSortError};
pub use exchange::{Exchange, ExchangeCounter, ExchangeSink};
pub use free_slot::{FreeSlotSorter, reorder, reorder_traced};
pub use rank_index::RankMap;
