pub mod sequence;

pub use sequence::{
    index_from_i64, nth, nth_in, saturating_nth, wrapping_nth, OverflowPolicy, SequenceError,
    MAX_INDEX,
};
