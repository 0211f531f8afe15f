//! Packbin is a small library for packing rectangles into square containers.
//! Rectangles may be rotated by 90 degrees when that produces a tighter
//! layout, and inputs that overflow one container of the maximum permitted
//! size spill over into additional containers, called buckets.
//!
//! Packbin currently exposes a single packing implementation,
//! [`GuillotinePacker`][GuillotinePacker], which carves free space with
//! guillotine cuts and searches for the smallest square bucket that holds
//! everything. More algorithms can be added in the future using the same
//! basic types.
//!
//! ## Example
//! ```
//! use packbin::{GuillotinePacker, InputItem};
//!
//! // First, transform the rectangles you want to pack into the Packbin
//! // InputItem type.
//! let my_items = &[
//!     InputItem::new((128, 64)),
//!     InputItem::new((64, 64)),
//!     InputItem::new((1, 300)),
//! ];
//!
//! // Construct a packer and configure it with your constraints.
//! let packer = GuillotinePacker::new().max_size(512);
//!
//! // Compute a solution.
//! // GuillotinePacker::pack accepts anything that can turn into an iterator
//! // of InputItem or &InputItem.
//! let output = packer.pack(my_items).unwrap();
//!
//! for bucket in output.buckets() {
//!     println!("{:?} bucket with {} items", bucket.size(), bucket.items().len());
//! }
//! ```
//!
//! [GuillotinePacker]: struct.GuillotinePacker.html

mod error;
mod geometry;
mod id;
mod packer;
mod tree;
mod types;

pub use error::*;
pub use id::*;
pub use packer::*;
pub use types::*;
