//! BlurredGround 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 `Result<_, CoreError>`를 반환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 파이프라인 실행, 픽셀 필터, 저장소 접근의 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 필수 외부 기능(스냅샷 렌더러, 블러 백엔드)이 등록되지 않음.
    /// 실행 초기화 단계에서 즉시 실패한다 — DOM 변경 전에 보고.
    #[error("필수 기능 미탑재: {0}")]
    MissingCapability(String),

    /// 잘못된 컨볼루션 커널 (완전제곱 길이가 아니거나 변 길이가 짝수)
    #[error("잘못된 커널 (길이 {len}): {reason}")]
    InvalidKernel {
        /// 전달된 커널 길이
        len: usize,
        /// 실패 사유
        reason: String,
    },

    /// 영속 저장소 사용 불가 — 치명적이지 않음, 해당 실행에서 캐싱만 비활성화
    #[error("저장소 사용 불가: {0}")]
    StoreUnavailable(String),

    /// 스냅샷 렌더링 실패
    #[error("스냅샷 렌더링 에러: {0}")]
    Render(String),

    /// 이미지 인코딩/디코딩 실패
    #[error("이미지 인코딩 에러: {0}")]
    Encoding(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
