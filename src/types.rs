use crate::id::ItemId;

/// An input to the rectangle packing routines.
///
/// `InputItem` is just a 2D size and a Packbin-generated unique identifier.
/// It's expected that consumers will assign meaning to the given IDs and then
/// use them to associate the packing results back to the application's own
/// objects.
#[derive(Debug, Clone, Copy)]
pub struct InputItem {
    pub(crate) id: ItemId,
    pub(crate) size: (u32, u32),
}

impl InputItem {
    #[inline]
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            id: ItemId::next(),
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }
}

/// An item that was placed by a packing function.
///
/// `OutputItem` corresponds 1:1 to `InputItem` objects that were passed into
/// the packing function. They expose the ID from the input, as well as the
/// assigned position, the placed size, and whether the item was rotated.
///
/// When `flipped` returns true, `size` is the rotated footprint: its width
/// and height are swapped relative to the values the input was constructed
/// with.
#[derive(Debug, Clone, Copy)]
pub struct OutputItem {
    pub(crate) id: ItemId,
    pub(crate) position: (u32, u32),
    pub(crate) size: (u32, u32),
    pub(crate) flipped: bool,
}

impl OutputItem {
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.position
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        (self.position.0 + self.size.0, self.position.1 + self.size.1)
    }
}

/// The results from running a packing function.
///
/// Exposes the list of buckets that inputs were grouped into. Every input
/// given to the packing function appears in exactly one bucket.
#[derive(Debug, Clone)]
pub struct PackOutput {
    pub(crate) buckets: Vec<Bucket>,
}

impl PackOutput {
    #[inline]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

/// Contains a set of `OutputItem` values that were packed together into the
/// same container.
///
/// The bucket's size is the realized extent of the layout, which is usually
/// smaller than the square container the packer searched over.
#[derive(Debug, Clone)]
pub struct Bucket {
    pub(crate) size: (u32, u32),
    pub(crate) items: Vec<OutputItem>,
}

impl Bucket {
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn items(&self) -> &[OutputItem] {
        &self.items
    }

    /// The fraction of this bucket's area covered by placed items.
    pub fn occupancy(&self) -> f32 {
        let total = u64::from(self.size.0) * u64::from(self.size.1);
        if total == 0 {
            return 0.0;
        }

        let used: u64 = self
            .items
            .iter()
            .map(|item| u64::from(item.size.0) * u64::from(item.size.1))
            .sum();

        used as f32 / total as f32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = InputItem::new((4, 4));
        let b = InputItem::new((4, 4));

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn output_corners() {
        let item = OutputItem {
            id: ItemId::next(),
            position: (3, 5),
            size: (10, 20),
            flipped: false,
        };

        assert_eq!(item.min(), (3, 5));
        assert_eq!(item.max(), (13, 25));
    }

    #[test]
    fn occupancy_counts_placed_area() {
        let bucket = Bucket {
            size: (10, 10),
            items: vec![OutputItem {
                id: ItemId::next(),
                position: (0, 0),
                size: (5, 10),
                flipped: false,
            }],
        };

        assert!((bucket.occupancy() - 0.5).abs() < f32::EPSILON);
    }
}
