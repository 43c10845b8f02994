//! 파이프라인 옵션.
//!
//! 실행당 한 번 생성되는 불변 설정 스냅샷.
//! 실행 시작 이후 옵션은 변경되지 않는다 (전역 병합 없음).

use serde::{Deserialize, Serialize};

/// 블러 프로세서 종류.
/// 각 변형은 성능/품질 트레이드오프와 완료 신호(동기/비동기)가 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlurProcessor {
    /// 동기, 순수 — 균일 박스 커널 컨볼루션
    BoxBlur,
    /// 동기 — 고속 가우시안 근사 (스택 블러)
    StackBlur,
    /// 동기 — 축소/확대 기반 속도 우선 블러
    RealtimeBlur,
    /// 비동기 — 필터 래스터라이즈, 블러+인코딩 융합 (인코더 우회)
    NativeFilterBlur,
}

/// 파이프라인 실행 옵션 (불변 값 객체)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineOptions {
    /// 캐싱 활성화 여부
    pub cache_enabled: bool,
    /// 캐시 TTL (초) — 초과 시 배경 재생성
    pub cache_ttl_secs: u64,
    /// 배경 채움 색상 (`#rgb` 또는 `#rrggbb`)
    pub background_color: String,
    /// 블러 프로세서 선택
    pub blur_processor: BlurProcessor,
    /// 블러링 활성화 여부 — false면 라이튼 결과가 곧바로 인코딩된다
    pub blurring_enabled: bool,
    /// 블러 반경 (픽셀) — 0 이하면 블러 단계 스킵
    pub blur_radius: f32,
    /// 크롭 시작 X 오프셋 (픽셀)
    pub offset_x: i64,
    /// 크롭 시작 Y 오프셋 (픽셀)
    pub offset_y: i64,
    /// 알파 계수 (0.0 ~ 1.0) — 1 이상이면 무시
    pub opacity: f32,
    /// 인코딩 품질 (0.0 ~ 1.0) — 1 미만이면 손실 인코딩
    pub compress_quality: f32,
    /// 라이튼 계수 — 0 이하면 라이튼 단계 스킵
    pub lighten_factor: f32,
    /// 마일스톤 로그 출력 여부 (생성 시작/완료, 캐시 판정)
    pub logging_enabled: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl_secs: 86_400,
            background_color: "#ffffff".to_string(),
            blur_processor: BlurProcessor::StackBlur,
            blurring_enabled: true,
            blur_radius: 64.0,
            offset_x: 0,
            offset_y: 0,
            opacity: 1.0,
            compress_quality: 1.0,
            lighten_factor: 0.5,
            logging_enabled: false,
        }
    }
}

impl PipelineOptions {
    /// 블러 단계 실행 여부 판정.
    /// 비활성화 플래그 또는 반경 0 이하는 블러 전체 스킵을 의미한다.
    pub fn blur_requested(&self) -> bool {
        self.blurring_enabled && self.blur_radius > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plugin_defaults() {
        let opts = PipelineOptions::default();
        assert!(opts.cache_enabled);
        assert_eq!(opts.cache_ttl_secs, 86_400);
        assert_eq!(opts.background_color, "#ffffff");
        assert_eq!(opts.blur_processor, BlurProcessor::StackBlur);
        assert!(opts.blurring_enabled);
        assert_eq!(opts.blur_radius, 64.0);
        assert_eq!(opts.opacity, 1.0);
        assert_eq!(opts.compress_quality, 1.0);
        assert_eq!(opts.lighten_factor, 0.5);
        assert!(!opts.logging_enabled);
    }

    #[test]
    fn processor_names_are_camel_case() {
        let json = serde_json::to_string(&BlurProcessor::NativeFilterBlur).unwrap();
        assert_eq!(json, "\"nativeFilterBlur\"");
        let parsed: BlurProcessor = serde_json::from_str("\"stackBlur\"").unwrap();
        assert_eq!(parsed, BlurProcessor::StackBlur);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: PipelineOptions =
            serde_json::from_str(r#"{"blurRadius": 16.0, "cacheEnabled": false}"#).unwrap();
        assert_eq!(opts.blur_radius, 16.0);
        assert!(!opts.cache_enabled);
        assert_eq!(opts.lighten_factor, 0.5);
    }

    #[test]
    fn blur_requested_requires_flag_and_radius() {
        let mut opts = PipelineOptions::default();
        assert!(opts.blur_requested());
        opts.blur_radius = 0.0;
        assert!(!opts.blur_requested());
        opts.blur_radius = 64.0;
        opts.blurring_enabled = false;
        assert!(!opts.blur_requested());
    }
}
