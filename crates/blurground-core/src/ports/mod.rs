//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 스냅샷 렌더러, 블러 전략, KV 저장소, 배경 싱크는 외부 협력자이며
//! 파이프라인 생성 시점에 `Arc<dyn T>`로 주입된다.
//!
//! 비동기 포트는 `async_trait` 매크로로 object safety를 보장한다.

pub mod blur;
pub mod renderer;
pub mod sink;
pub mod store;

pub use blur::{BlurOutput, BlurStrategy};
pub use renderer::SnapshotRenderer;
pub use sink::BackgroundSink;
pub use store::KeyValueStore;
