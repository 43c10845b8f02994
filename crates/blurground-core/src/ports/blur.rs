//! 블러 전략 포트.
//!
//! 구현: `blurground-vision` crate (boxBlur, stackBlur, realtimeBlur,
//! nativeFilterBlur). 동기 변형은 즉시 완료되고, nativeFilterBlur는
//! 블러+인코딩이 융합된 결과를 비동기로 산출한다.

use async_trait::async_trait;
use image::RgbaImage;

use crate::error::CoreError;
use crate::models::background::EncodedImage;

/// 블러 단계 산출물.
///
/// 래스터를 반환하는 변형은 이미지 크기를 보존한다.
/// `Encoded`는 nativeFilterBlur 전용 — 출력 포맷이 인코더와 다르므로
/// 파이프라인은 이 경우 인코딩 단계를 건너뛰어야 한다.
pub enum BlurOutput {
    /// 블러 적용된 래스터 (이후 인코딩 단계 필요)
    Raster(RgbaImage),
    /// 이미 인코딩 완료된 배경 (인코더 우회)
    Encoded(EncodedImage),
}

/// 반경 매개변수 블러 전략
#[async_trait]
pub trait BlurStrategy: Send + Sync {
    /// 이미지에 블러 적용.
    ///
    /// 래스터를 반환하는 경우 입력과 동일한 크기여야 한다.
    async fn blur(&self, image: RgbaImage, radius: f32) -> Result<BlurOutput, CoreError>;
}
