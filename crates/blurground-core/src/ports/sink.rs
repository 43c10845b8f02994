//! 배경 싱크 포트.
//!
//! 생성된 배경을 소비자에게 게시하는 DOM 글루의 대역.
//! 요소 스타일링과 스크롤 동기화 자체는 이 시스템의 범위 밖이다.

use crate::models::background::EncodedImage;

/// 배경 소비자 — 게시 단계에서 호출된다
pub trait BackgroundSink: Send + Sync {
    /// 인코딩된 이미지를 요소 배경으로 부착
    fn attach(&self, image: &EncodedImage);

    /// 스크롤 위치 동기화 바인딩
    fn bind_scroll(&self);
}
