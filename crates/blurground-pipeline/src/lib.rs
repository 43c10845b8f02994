//! # blurground-pipeline
//!
//! 배경 생성 오케스트레이터 crate.
//! 스냅샷 → 크롭/오프셋 → 알파 → 라이튼 → 블러 → 인코딩 → 캐시 기록 →
//! 게시 순서를 상태 머신으로 실행한다. 외부 협력자(렌더러, 블러 전략,
//! KV 저장소, 싱크)는 전부 생성 시점에 주입된다.

pub mod pipeline;
pub mod registry;

pub use pipeline::{BackgroundPipeline, PipelineHooks, PipelineState};
pub use registry::BlurRegistry;
