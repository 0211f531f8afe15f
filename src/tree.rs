//! The placement tree: a binary tree over bucket regions that places one
//! rectangle at a time, carving free space with guillotine cuts.
//!
//! The size-discovery search packs the same tree dozens of times against
//! different candidate bucket sizes, so nodes are never freed between trials.
//! `reset` deactivates every child slot and later splits reactivate them in
//! place, which keeps retrials allocation-free once the tree has grown.

use crate::geometry::{Fit, Region, Size, WorkRect};

#[derive(Debug, Default)]
struct ChildSlot {
    node: Option<Box<Node>>,
    in_use: bool,
}

impl ChildSlot {
    /// Activates this slot to cover `region`, reusing the node left over from
    /// an earlier trial when one exists.
    fn assign(&mut self, region: Region) {
        match self.node.as_deref_mut() {
            Some(node) => {
                node.region = region;
                node.occupied = false;
            }
            None => self.node = Some(Box::new(Node::new(region))),
        }

        self.in_use = true;
    }

    fn insert(&mut self, rect: &mut WorkRect) -> Option<Region> {
        self.node.as_deref_mut()?.insert(rect)
    }

    /// Deactivates this slot and everything beneath it without deallocating.
    /// Stale state on an inactive node is cleared when `assign` reuses it.
    fn deactivate(&mut self) {
        self.in_use = false;

        if let Some(node) = self.node.as_deref_mut() {
            node.children[0].deactivate();
            node.children[1].deactivate();
        }
    }
}

#[derive(Debug)]
struct Node {
    region: Region,
    occupied: bool,
    children: [ChildSlot; 2],
}

impl Node {
    fn new(region: Region) -> Self {
        Self {
            region,
            occupied: false,
            children: [ChildSlot::default(), ChildSlot::default()],
        }
    }

    fn insert(&mut self, rect: &mut WorkRect) -> Option<Region> {
        // Once split, this node only forwards to its children.
        if self.children[0].in_use {
            if let Some(placed) = self.children[0].insert(rect) {
                return Some(placed);
            }

            return self.children[1].insert(rect);
        }

        if self.occupied {
            return None;
        }

        match rect.fits(self.region.size()) {
            Fit::None => return None,
            Fit::Exact => {
                self.occupied = true;
                rect.flipped = false;
                return Some(self.region);
            }
            Fit::ExactFlipped => {
                self.occupied = true;
                rect.flipped = true;
                return Some(self.region);
            }
            Fit::Inside => rect.flipped = false,
            Fit::InsideFlipped => rect.flipped = true,
        }

        // Guillotine cut along the axis with the larger leftover, so the
        // remaining strip is as usable as possible.
        let placed = rect.placed_size();
        let Region {
            left,
            top,
            right,
            bottom,
        } = self.region;

        if self.region.width() - placed.w > self.region.height() - placed.h {
            self.children[0].assign(Region::new(left, top, left + placed.w, bottom));
            self.children[1].assign(Region::new(left + placed.w, top, right, bottom));
        } else {
            self.children[0].assign(Region::new(left, top, right, top + placed.h));
            self.children[1].assign(Region::new(left, top + placed.h, right, bottom));
        }

        // The first child is clipped to the rectangle along the cut axis, so
        // this insertion can only terminate there.
        self.children[0].insert(rect)
    }
}

/// A reusable tree over one bucket's area. `reset` forgets all placements but
/// keeps the allocated node structure for the next trial.
#[derive(Debug)]
pub(crate) struct PlacementTree {
    root: Node,
}

impl PlacementTree {
    pub fn new() -> Self {
        Self {
            root: Node::new(Region::new(0, 0, 0, 0)),
        }
    }

    pub fn reset(&mut self, size: Size) {
        self.root.occupied = false;
        self.root.region = Region::new(0, 0, size.w, size.h);
        self.root.children[0].deactivate();
        self.root.children[1].deactivate();
    }

    pub fn insert(&mut self, rect: &mut WorkRect) -> Option<Region> {
        self.root.insert(rect)
    }

    /// The candidate size this tree currently covers.
    pub fn extent(&self) -> Size {
        self.root.region.size()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::InputItem;

    fn rect(w: u32, h: u32) -> WorkRect {
        WorkRect::from_input(&InputItem::new((w, h)))
    }

    fn tree(size: Size) -> PlacementTree {
        let mut tree = PlacementTree::new();
        tree.reset(size);
        tree
    }

    #[test]
    fn exact_fit_claims_whole_region() {
        let mut tree = tree(Size::new(8, 8));
        let mut first = rect(8, 8);
        let mut second = rect(1, 1);

        assert_eq!(tree.insert(&mut first), Some(Region::new(0, 0, 8, 8)));
        assert_eq!(tree.insert(&mut second), None);
    }

    #[test]
    fn split_leaves_usable_sibling() {
        let mut tree = tree(Size::new(4, 2));
        let mut first = rect(2, 2);
        let mut second = rect(2, 2);

        // Wider leftover than tall, so the cut is vertical and the sibling
        // keeps the right half.
        assert_eq!(tree.insert(&mut first), Some(Region::new(0, 0, 2, 2)));
        assert_eq!(tree.insert(&mut second), Some(Region::new(2, 0, 4, 2)));
    }

    #[test]
    fn rotates_when_only_rotated_fits() {
        let mut tree = tree(Size::new(5, 10));
        let mut wide = rect(10, 5);

        assert_eq!(tree.insert(&mut wide), Some(Region::new(0, 0, 5, 10)));
        assert!(wide.flipped);
    }

    #[test]
    fn rotates_inside_sub_region() {
        let mut tree = tree(Size::new(10, 6));
        let mut tall = rect(4, 6);
        let mut wide = rect(6, 4);

        assert_eq!(tree.insert(&mut tall), Some(Region::new(0, 0, 4, 6)));
        // The remaining strip is 6 wide and 6 tall; the 6x4 rectangle fits it
        // either way, and the unrotated orientation is preferred.
        assert_eq!(tree.insert(&mut wide), Some(Region::new(4, 0, 10, 4)));
        assert!(!wide.flipped);
    }

    #[test]
    fn reset_forgets_placements() {
        let mut tree = tree(Size::new(4, 4));
        let mut first = rect(4, 4);

        assert!(tree.insert(&mut first).is_some());
        assert_eq!(tree.insert(&mut rect(4, 4)), None);

        tree.reset(Size::new(4, 4));
        assert_eq!(tree.insert(&mut rect(4, 4)), Some(Region::new(0, 0, 4, 4)));
    }

    #[test]
    fn reset_can_shrink_the_tree() {
        let mut tree = tree(Size::new(16, 16));
        assert!(tree.insert(&mut rect(3, 3)).is_some());

        tree.reset(Size::new(2, 2));
        assert_eq!(tree.extent(), Size::new(2, 2));
        assert_eq!(tree.insert(&mut rect(3, 3)), None);
        assert!(tree.insert(&mut rect(2, 2)).is_some());
    }

    #[test]
    fn no_fit_reports_none() {
        let mut tree = tree(Size::new(4, 4));
        assert_eq!(tree.insert(&mut rect(5, 5)), None);
    }
}
