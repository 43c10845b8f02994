//! 인코딩된 배경 이미지와 캐시 레코드 모델.

use serde::{Deserialize, Serialize};

/// 인코딩된 배경 이미지 — 불투명한 data URI 문자열.
/// 호출자는 내부 구조를 가정하지 않는다 (디코딩 가능하다는 것만 보장).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// 인코딩 결과 문자열을 감싼다
    pub fn new(payload: String) -> Self {
        Self(payload)
    }

    /// 내부 문자열 참조
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 내부 문자열 반환
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for EncodedImage {
    fn from(payload: String) -> Self {
        Self(payload)
    }
}

/// 영속 캐시 레코드.
///
/// PageIdentity당 하나, JSON `{ "value": <string>, "timestamp": <epoch-ms> }`
/// 레이아웃으로 저장된다. 항상 통째로 교체되며 필드 단위 수정은 없다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    /// 인코딩된 배경 이미지 페이로드
    pub value: String,
    /// 생성 시각 (epoch 밀리초)
    pub timestamp: i64,
}
