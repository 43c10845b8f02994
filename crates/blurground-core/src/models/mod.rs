//! 도메인 모델.

pub mod background;
pub mod geometry;
pub mod identity;

pub use background::{CacheRecord, EncodedImage};
pub use geometry::{PageGeometry, Size, SnapshotRequest};
pub use identity::PageIdentity;
