use thiserror::Error;

use crate::id::ItemId;

/// Fatal failures reported by a packing call.
///
/// There are no retryable conditions here: both variants indicate that the
/// inputs cannot be packed under the configured maximum bucket size.
#[derive(Debug, Error)]
pub enum Error {
    /// A single item exceeds the maximum bucket size in both orientations.
    /// Reported before any packing is attempted.
    #[error("Item of size {width}x{height} cannot fit a {max_size}x{max_size} bucket in either orientation")]
    ItemTooLarge {
        id: ItemId,
        width: u32,
        height: u32,
        max_size: u32,
    },

    /// The overflow loop produced its maximum number of buckets and items
    /// were still left over. This signals a configuration problem, such as a
    /// maximum size that is far too small for the input set.
    #[error("Packing stalled after {limit} buckets with {unplaced} items still unplaced")]
    TooManyBuckets { limit: usize, unplaced: usize },
}
