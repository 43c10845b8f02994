//! 박스 블러 전략.
//!
//! 반경에서 유도한 균일 정규화 커널로 컨볼루션. 동기, 순수, 결정적.

use async_trait::async_trait;
use blurground_core::error::CoreError;
use blurground_core::ports::blur::{BlurOutput, BlurStrategy};
use image::RgbaImage;
use tracing::debug;

use crate::filter;

/// 균일 박스 커널 블러 — `filter::convolve` 위임
pub struct BoxBlur;

impl BoxBlur {
    /// 반경에서 커널 변 길이 유도: `2*(radius/2).round() + 1` (항상 홀수)
    fn kernel_side(radius: f32) -> usize {
        2 * (radius / 2.0).round().max(0.0) as usize + 1
    }
}

#[async_trait]
impl BlurStrategy for BoxBlur {
    async fn blur(&self, image: RgbaImage, radius: f32) -> Result<BlurOutput, CoreError> {
        let side = Self::kernel_side(radius);
        let weight = 1.0 / (side * side) as f32;
        let kernel = vec![weight; side * side];

        debug!("박스 블러: 반경 {} → 커널 {}x{}", radius, side, side);

        let blurred = filter::convolve(&image, &kernel, true, 1.0)?;
        Ok(BlurOutput::Raster(blurred))
    }
}
