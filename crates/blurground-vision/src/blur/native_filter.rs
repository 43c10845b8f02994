//! 네이티브 필터 블러 전략.
//!
//! 이미지를 가우시안 필터 컨테이너로 래스터라이즈한 뒤 인코딩 결과를
//! 직접 추출한다 — 블러+인코딩이 한 단계로 융합되어 있으며, 출력은
//! PNG data URI로 인코더의 WebP 경로와 포맷이 다르다. 파이프라인은
//! 이 출력을 그대로 캐시/게시해야 한다 (인코더 우회 보존).

use std::io::Cursor;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as B64, Engine};
use blurground_core::error::CoreError;
use blurground_core::models::background::EncodedImage;
use blurground_core::ports::blur::{BlurOutput, BlurStrategy};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// PNG data URI 접두사
const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// 필터 래스터라이즈 블러 — 비동기 완료
pub struct NativeFilterBlur;

#[async_trait]
impl BlurStrategy for NativeFilterBlur {
    async fn blur(&self, image: RgbaImage, radius: f32) -> Result<BlurOutput, CoreError> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Err(CoreError::Encoding("빈 이미지는 렌더링 불가".to_string()));
        }

        // CSS blur(Npx)의 표준편차 근사
        let sigma = (radius / 2.0).max(0.01);

        let encoded = tokio::task::spawn_blocking(move || -> Result<EncodedImage, CoreError> {
            let filtered = image::imageops::blur(&image, sigma);
            let mut buffer = Cursor::new(Vec::new());
            DynamicImage::ImageRgba8(filtered)
                .write_to(&mut buffer, image::ImageFormat::Png)
                .map_err(|e| CoreError::Encoding(format!("필터 렌더링 실패: {e}")))?;

            debug!(
                "네이티브 필터 블러: {}x{}, sigma {:.1} → {} bytes",
                w,
                h,
                sigma,
                buffer.get_ref().len()
            );

            Ok(EncodedImage::new(format!(
                "{DATA_URI_PREFIX}{}",
                B64.encode(buffer.get_ref())
            )))
        })
        .await
        .map_err(|e| CoreError::Internal(format!("블로킹 작업 조인 실패: {e}")))??;

        Ok(BlurOutput::Encoded(encoded))
    }
}
