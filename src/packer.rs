use std::borrow::Borrow;
use std::cmp::Reverse;

use crate::{
    error::Error,
    geometry::{Fit, Size, WorkRect},
    tree::PlacementTree,
    types::{Bucket, InputItem, OutputItem, PackOutput},
};

/// The discovery loop stops refining a bucket size once its search step has
/// shrunk to this granularity.
const DISCARD_STEP: u32 = 128;

/// Hard cap on the number of buckets one packing call may produce.
const MAX_BUCKETS: usize = 10;

/// The descending orders the search driver tries before settling on one.
#[derive(Debug, Clone, Copy)]
enum SortOrder {
    Area,
    Perimeter,
    MaxSide,
    Width,
    Height,
}

const SORT_ORDERS: [SortOrder; 5] = [
    SortOrder::Area,
    SortOrder::Perimeter,
    SortOrder::MaxSide,
    SortOrder::Width,
    SortOrder::Height,
];

impl SortOrder {
    fn apply(&self, items: &mut [WorkRect]) {
        match self {
            SortOrder::Area => items.sort_by_key(|rect| Reverse(rect.area())),
            SortOrder::Perimeter => items.sort_by_key(|rect| Reverse(rect.perimeter())),
            SortOrder::MaxSide => items.sort_by_key(|rect| Reverse(rect.max_side())),
            SortOrder::Width => items.sort_by_key(|rect| Reverse(rect.w)),
            SortOrder::Height => items.sort_by_key(|rect| Reverse(rect.h)),
        }
    }
}

/// Packs rectangles into the smallest square buckets it can find, rotating
/// items by 90 degrees where that helps and spilling whatever does not fit
/// one bucket into further buckets.
pub struct GuillotinePacker {
    max_size: u32,
}

impl GuillotinePacker {
    pub fn new() -> Self {
        Self { max_size: 1024 }
    }

    /// Sets the maximum edge length of a bucket. Items that cannot fit a
    /// square of this size in either orientation are rejected by `pack`.
    pub fn max_size(mut self, edge: u32) -> Self {
        self.max_size = edge;
        self
    }

    /// Packs every input into one or more buckets.
    ///
    /// Fails with [`Error::ItemTooLarge`](enum.Error.html) before any packing
    /// happens if an input exceeds the maximum bucket size in both
    /// orientations, and with [`Error::TooManyBuckets`](enum.Error.html) if
    /// the inputs do not fit the bucket budget.
    pub fn pack<I>(&self, items: I) -> Result<PackOutput, Error>
    where
        I: IntoIterator,
        I::Item: Borrow<InputItem>,
    {
        let mut remaining: Vec<WorkRect> = items
            .into_iter()
            .map(|item| WorkRect::from_input(item.borrow()))
            .collect();

        let bounds = Size::square(self.max_size);
        for rect in &remaining {
            if rect.fits(bounds) == Fit::None {
                return Err(Error::ItemTooLarge {
                    id: rect.id,
                    width: rect.w,
                    height: rect.h,
                    max_size: self.max_size,
                });
            }
        }

        let num_items = remaining.len();
        log::trace!("Packing {} items", num_items);

        let mut buckets = Vec::new();

        while !remaining.is_empty() {
            let (bucket, leftover) = Self::pack_bucket(&remaining, self.max_size);
            buckets.push(bucket);

            if !leftover.is_empty() && buckets.len() >= MAX_BUCKETS {
                return Err(Error::TooManyBuckets {
                    limit: MAX_BUCKETS,
                    unplaced: leftover.len(),
                });
            }

            remaining = leftover;
        }

        log::trace!(
            "Finished packing {} items into {} buckets",
            num_items,
            buckets.len()
        );

        Ok(PackOutput { buckets })
    }

    /// Packs as many of `items` as possible into a single bucket, returning
    /// the bucket and the items that did not make it in.
    fn pack_bucket(items: &[WorkRect], max_size: u32) -> (Bucket, Vec<WorkRect>) {
        log::trace!(
            "Trying to pack {} items into a bucket of at most {}x{}",
            items.len(),
            max_size,
            max_size
        );

        let mut orders: Vec<Vec<WorkRect>> = SORT_ORDERS
            .iter()
            .map(|order| {
                let mut sorted = items.to_vec();
                order.apply(&mut sorted);
                sorted
            })
            .collect();

        let mut tree = PlacementTree::new();

        // The smallest fully-fitting square seen so far, shared across sort
        // orders so later orders only search below it.
        // TODO: Seed the search from the total input area rounded up to the
        // next power of two instead of always starting at max_size.
        let mut min_bucket = Size::square(max_size);
        let mut min_order: Option<usize> = None;

        // Fallback when no order fits everything: the order that places the
        // most area into a max-size bucket.
        let mut best_order = 0;
        let mut best_area: u64 = 0;

        for (index, order) in orders.iter_mut().enumerate() {
            let mut step = min_bucket.w / 2;
            let mut failed = false;

            tree.reset(min_bucket);

            loop {
                let candidate = tree.extent();

                if candidate.w > min_bucket.w {
                    // Growth has pushed this order past the best size already
                    // found, so it cannot win outright. Until some order fits
                    // everything, score it by the area it places at max size.
                    if min_order.is_some() {
                        break;
                    }

                    tree.reset(min_bucket);
                    let mut placed_area = 0;

                    for rect in order.iter_mut() {
                        if tree.insert(rect).is_some() {
                            placed_area += rect.area();
                        }
                    }

                    if placed_area > best_area {
                        best_area = placed_area;
                        best_order = index;
                    }

                    failed = true;
                    break;
                }

                let mut all_placed = true;
                for rect in order.iter_mut() {
                    if tree.insert(rect).is_none() {
                        all_placed = false;
                        break;
                    }
                }

                if all_placed && step <= DISCARD_STEP {
                    break;
                }

                let next = if all_placed {
                    candidate.w - step
                } else {
                    candidate.w + step
                };

                tree.reset(Size::square(next));
                step = (step / 2).max(1);
            }

            if !failed {
                let candidate = tree.extent();
                if min_bucket.area() >= candidate.area() {
                    min_bucket = candidate;
                    min_order = Some(index);
                }
            }
        }

        let winner = match min_order {
            Some(index) => index,
            None => best_order,
        };
        let order = &mut orders[winner];

        // One final pass at the winning size assigns real coordinates. The
        // realized bucket is clipped to the furthest right/bottom edge in
        // use, which is usually smaller than the square search bound.
        tree.reset(min_bucket);

        let mut placed = Vec::new();
        let mut leftover = Vec::new();
        let mut clip = Size::new(0, 0);

        for rect in order.iter_mut() {
            match tree.insert(rect) {
                Some(region) => {
                    rect.x = region.left;
                    rect.y = region.top;

                    if rect.flipped {
                        // Persist the rotation into the stored dimensions.
                        rect.flipped = false;
                        rect.flip();
                    }

                    clip.w = clip.w.max(region.right);
                    clip.h = clip.h.max(region.bottom);

                    placed.push(OutputItem {
                        id: rect.id,
                        position: (rect.x, rect.y),
                        size: (rect.w, rect.h),
                        flipped: rect.flipped,
                    });
                }
                None => {
                    rect.flipped = false;
                    leftover.push(*rect);
                }
            }
        }

        log::trace!(
            "Packed {} items into a {}x{} bucket, {} left over",
            placed.len(),
            clip.w,
            clip.h,
            leftover.len()
        );

        let bucket = Bucket {
            size: (clip.w, clip.h),
            items: placed,
        };

        (bucket, leftover)
    }
}
