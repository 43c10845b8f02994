//! 블러 전략 레지스트리.
//!
//! 프로세서 이름 → 주입된 전략 객체 매핑. 선언된 프로세서의 전략이
//! 등록되어 있지 않으면 초기화 단계에서 `MissingCapability`로 즉시
//! 실패한다 (실행 도중으로 실패를 미루지 않는다).

use std::collections::HashMap;
use std::sync::Arc;

use blurground_core::config::{BlurProcessor, PipelineOptions};
use blurground_core::error::CoreError;
use blurground_core::ports::blur::BlurStrategy;
use blurground_vision::blur::{BoxBlur, NativeFilterBlur, RealtimeBlur, StackBlur, StackBlurMode};

/// 프로세서별 블러 전략 등록부
#[derive(Default)]
pub struct BlurRegistry {
    strategies: HashMap<BlurProcessor, Arc<dyn BlurStrategy>>,
}

impl BlurRegistry {
    /// 빈 레지스트리 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 네 가지 기본 전략을 전부 등록한 레지스트리.
    ///
    /// stackBlur 서브모드는 opacity 옵션으로 결정한다 — 비불투명
    /// 알파(`opacity < 1`)면 RGBA 경로, 아니면 RGB 경로 (레거시 동작 고정).
    pub fn with_defaults(options: &PipelineOptions) -> Self {
        let stack_mode = if options.opacity < 1.0 {
            StackBlurMode::Rgba
        } else {
            StackBlurMode::Rgb
        };

        let mut registry = Self::new();
        registry.register(BlurProcessor::BoxBlur, Arc::new(BoxBlur));
        registry.register(BlurProcessor::StackBlur, Arc::new(StackBlur::new(stack_mode)));
        registry.register(BlurProcessor::RealtimeBlur, Arc::new(RealtimeBlur::default()));
        registry.register(BlurProcessor::NativeFilterBlur, Arc::new(NativeFilterBlur));
        registry
    }

    /// 전략 등록 (같은 프로세서는 마지막 등록이 이긴다)
    pub fn register(&mut self, processor: BlurProcessor, strategy: Arc<dyn BlurStrategy>) {
        self.strategies.insert(processor, strategy);
    }

    /// 선언된 프로세서의 전략 해석
    pub fn resolve(&self, processor: BlurProcessor) -> Result<Arc<dyn BlurStrategy>, CoreError> {
        self.strategies.get(&processor).cloned().ok_or_else(|| {
            CoreError::MissingCapability(format!("블러 전략 미등록: {processor:?}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_cover_all_processors() {
        let registry = BlurRegistry::with_defaults(&PipelineOptions::default());
        for processor in [
            BlurProcessor::BoxBlur,
            BlurProcessor::StackBlur,
            BlurProcessor::RealtimeBlur,
            BlurProcessor::NativeFilterBlur,
        ] {
            assert!(registry.resolve(processor).is_ok(), "{processor:?} 누락");
        }
    }

    #[test]
    fn missing_strategy_is_missing_capability() {
        let registry = BlurRegistry::new();
        assert_matches!(
            registry.resolve(BlurProcessor::StackBlur).err(),
            Some(CoreError::MissingCapability(_))
        );
    }
}
