use std::{
    num::NonZeroU64,
    sync::atomic::{AtomicU64, Ordering},
};

static LAST_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier tying an [`OutputItem`](struct.OutputItem.html) back to
/// the [`InputItem`](struct.InputItem.html) it was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(NonZeroU64);

impl ItemId {
    pub(crate) fn next() -> Self {
        let id = LAST_ID.fetch_add(1, Ordering::Relaxed);
        ItemId(NonZeroU64::new(id).unwrap())
    }
}
