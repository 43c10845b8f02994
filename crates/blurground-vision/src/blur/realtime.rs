//! 실시간 블러 전략.
//!
//! 속도 우선 고품질 근사: 품질 계수만큼 축소 → 축소 좌표계에서 박스
//! 통과 → 원래 크기로 확대. 블러 깊이는 `radius * 5.5`로 유도한다.

use async_trait::async_trait;
use blurground_core::error::CoreError;
use blurground_core::ports::blur::{BlurOutput, BlurStrategy};
use image::RgbaImage;
use tracing::debug;

use crate::blur::stack_blur::{box_pass_horizontal, box_pass_vertical};
use crate::resize;

/// 깊이 유도 계수
const DEPTH_FACTOR: f32 = 5.5;

/// 축소/확대 기반 실시간 블러
pub struct RealtimeBlur {
    /// 품질 계수 — 축소 제수 (클수록 빠르고 거칠다)
    quality: u32,
}

impl RealtimeBlur {
    /// 품질 계수를 고정한 실시간 블러 생성 (0은 1로 올림)
    pub fn new(quality: u32) -> Self {
        Self {
            quality: quality.max(1),
        }
    }
}

impl Default for RealtimeBlur {
    fn default() -> Self {
        Self::new(4)
    }
}

#[async_trait]
impl BlurStrategy for RealtimeBlur {
    async fn blur(&self, image: RgbaImage, radius: f32) -> Result<BlurOutput, CoreError> {
        let (w, h) = image.dimensions();
        if radius <= 0.0 || w == 0 || h == 0 {
            return Ok(BlurOutput::Raster(image));
        }

        let depth = radius * DEPTH_FACTOR;
        let down_w = (w / self.quality).max(1);
        let down_h = (h / self.quality).max(1);
        // 축소 좌표계 통과 반경 — 깊이를 제수와 통과 횟수(2)로 나눈다
        let pass_radius = ((depth / self.quality as f32) / 2.0).round().max(1.0) as usize;

        debug!(
            "실시간 블러: 반경 {} → 깊이 {:.1}, {}x{} → {}x{}, 통과 반경 {}",
            radius, depth, w, h, down_w, down_h, pass_radius
        );

        let mut small = resize::fast_resize(&image, down_w, down_h)?;
        let lanes: &[usize] = &[0, 1, 2, 3];
        box_pass_horizontal(&mut small, pass_radius, lanes);
        box_pass_vertical(&mut small, pass_radius, lanes);
        box_pass_horizontal(&mut small, pass_radius, lanes);
        box_pass_vertical(&mut small, pass_radius, lanes);

        let restored = resize::fast_resize(&small, w, h)?;
        Ok(BlurOutput::Raster(restored))
    }
}
