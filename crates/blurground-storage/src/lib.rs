//! # blurground-storage
//!
//! 저장소 어댑터 crate.
//! `KeyValueStore` 포트의 인메모리/SQLite 구현과,
//! 그 위에 얹히는 TTL 기반 배경 캐시를 제공한다.

pub mod cache;
pub mod kv;

pub use cache::{is_fresh, BackgroundCache};
pub use kv::{MemoryKvStore, SqliteKvStore};
