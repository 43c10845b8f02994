//! WebP 인코더.
//!
//! 품질 1 미만이면 손실 인코딩(품질 전달), 아니면 무손실.
//! 결과는 base64 data URI 문자열 — 호출자는 내부 구조를 가정하지 않는다.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use blurground_core::error::CoreError;
use blurground_core::models::background::EncodedImage;
use image::RgbaImage;
use tracing::debug;

/// WebP data URI 접두사
const DATA_URI_PREFIX: &str = "data:image/webp;base64,";

/// 래스터 이미지를 data URI 문자열로 인코딩.
///
/// `quality < 1.0` → 손실 WebP (`quality * 100`), 그 외 → 무손실 WebP.
pub fn encode(image: &RgbaImage, quality: f32) -> Result<EncodedImage, CoreError> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Err(CoreError::Encoding("빈 이미지는 인코딩 불가".to_string()));
    }

    let encoder = webp::Encoder::from_rgba(image.as_raw(), w, h);
    let encoded = if quality < 1.0 {
        encoder.encode(quality.clamp(0.0, 1.0) * 100.0)
    } else {
        encoder.encode_lossless()
    };
    let bytes = encoded.to_vec();

    debug!(
        "WebP 인코딩: {}x{} → {} bytes (품질 {:.2}, 압축률 {:.1}%)",
        w,
        h,
        bytes.len(),
        quality,
        (bytes.len() as f32 / (w * h * 4) as f32) * 100.0
    );

    Ok(EncodedImage::new(format!("{DATA_URI_PREFIX}{}", B64.encode(&bytes))))
}

/// data URI를 래스터 이미지로 복원.
///
/// 인코더 출력뿐 아니라 nativeFilterBlur의 PNG data URI도 디코딩 가능하다.
pub fn decode(encoded: &EncodedImage) -> Result<RgbaImage, CoreError> {
    let payload = encoded
        .as_str()
        .split_once("base64,")
        .map(|(_, p)| p)
        .ok_or_else(|| CoreError::Encoding("data URI 형식이 아님".to_string()))?;

    let bytes = B64
        .decode(payload)
        .map_err(|e| CoreError::Encoding(format!("base64 디코딩 실패: {e}")))?;

    let image = image::load_from_memory(&bytes)
        .map_err(|e| CoreError::Encoding(format!("이미지 디코딩 실패: {e}")))?;

    Ok(image.to_rgba8())
}
