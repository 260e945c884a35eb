//! Complete programs composed from the generators.

pub mod intervals;
pub mod parity;

pub use intervals::{
    copy_close_and_merge, copy_close_without_merge, merge_intervals, IntervalMerge,
    BUSINESS_HOURS_WIDTH,
};
pub use parity::{parity_transitions, ParityCheck};
