//! 스택 블러 전략.
//!
//! 고속 가우시안 근사 — 축별 이동 평균 2회 통과로 삼각 가중 커널을
//! 만든다. 알파 인지(RGBA) / RGB 전용 두 서브모드가 있으며, 선택은
//! 파이프라인이 opacity 옵션으로 결정한다 (이미지 검사로 결정하지 않음 —
//! 레거시 동작 고정).

use async_trait::async_trait;
use blurground_core::error::CoreError;
use blurground_core::ports::blur::{BlurOutput, BlurStrategy};
use image::RgbaImage;
use tracing::debug;

/// 서브모드 — 처리 대상 채널 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackBlurMode {
    /// R/G/B/A 네 채널 모두 블러 (비불투명 알파용)
    Rgba,
    /// R/G/B만 블러, 알파는 건드리지 않음
    Rgb,
}

impl StackBlurMode {
    fn lanes(self) -> &'static [usize] {
        match self {
            StackBlurMode::Rgba => &[0, 1, 2, 3],
            StackBlurMode::Rgb => &[0, 1, 2],
        }
    }
}

/// 스택 블러 — 이동 평균 기반 삼각 커널 블러
pub struct StackBlur {
    mode: StackBlurMode,
}

impl StackBlur {
    /// 서브모드를 고정한 스택 블러 생성
    pub fn new(mode: StackBlurMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl BlurStrategy for StackBlur {
    async fn blur(&self, mut image: RgbaImage, radius: f32) -> Result<BlurOutput, CoreError> {
        let r = radius.round().max(0.0) as usize;
        if r == 0 || image.width() == 0 || image.height() == 0 {
            return Ok(BlurOutput::Raster(image));
        }

        // 박스 2회 통과 = 삼각 가중 — 스택 블러의 커널 형태
        let pass_radius = r.div_ceil(2);
        let lanes = self.mode.lanes();

        debug!(
            "스택 블러: 반경 {} (통과 반경 {}, 모드 {:?})",
            r, pass_radius, self.mode
        );

        for _ in 0..2 {
            box_pass_horizontal(&mut image, pass_radius, lanes);
            box_pass_vertical(&mut image, pass_radius, lanes);
        }

        Ok(BlurOutput::Raster(image))
    }
}

/// 행 단위 엣지 클램프 이동 평균 (제자리 변환)
pub(crate) fn box_pass_horizontal(image: &mut RgbaImage, radius: usize, lanes: &[usize]) {
    if radius == 0 {
        return;
    }
    let (w, h) = (image.width() as usize, image.height() as usize);
    let stride = w * 4;
    let norm = 1.0 / (2 * radius + 1) as f32;
    let raw: &mut [u8] = &mut *image;
    let mut line = vec![0u8; stride];

    for y in 0..h {
        let row = &mut raw[y * stride..(y + 1) * stride];
        line.copy_from_slice(row);
        for &lane in lanes {
            let clamp_x = |i: i64| i.clamp(0, w as i64 - 1) as usize;
            let mut sum = 0.0f32;
            for i in -(radius as i64)..=(radius as i64) {
                sum += line[clamp_x(i) * 4 + lane] as f32;
            }
            for x in 0..w {
                row[x * 4 + lane] = (sum * norm).round().clamp(0.0, 255.0) as u8;
                let enter = clamp_x(x as i64 + radius as i64 + 1);
                let leave = clamp_x(x as i64 - radius as i64);
                sum += line[enter * 4 + lane] as f32 - line[leave * 4 + lane] as f32;
            }
        }
    }
}

/// 열 단위 엣지 클램프 이동 평균 (제자리 변환)
pub(crate) fn box_pass_vertical(image: &mut RgbaImage, radius: usize, lanes: &[usize]) {
    if radius == 0 {
        return;
    }
    let (w, h) = (image.width() as usize, image.height() as usize);
    let stride = w * 4;
    let norm = 1.0 / (2 * radius + 1) as f32;
    let raw: &mut [u8] = &mut *image;
    let mut column = vec![0u8; h * 4];

    for x in 0..w {
        for y in 0..h {
            let offset = y * stride + x * 4;
            column[y * 4..y * 4 + 4].copy_from_slice(&raw[offset..offset + 4]);
        }
        for &lane in lanes {
            let clamp_y = |i: i64| i.clamp(0, h as i64 - 1) as usize;
            let mut sum = 0.0f32;
            for i in -(radius as i64)..=(radius as i64) {
                sum += column[clamp_y(i) * 4 + lane] as f32;
            }
            for y in 0..h {
                raw[y * stride + x * 4 + lane] = (sum * norm).round().clamp(0.0, 255.0) as u8;
                let enter = clamp_y(y as i64 + radius as i64 + 1);
                let leave = clamp_y(y as i64 - radius as i64);
                sum += column[enter * 4 + lane] as f32 - column[leave * 4 + lane] as f32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checkerboard(w: u32, h: u32, cell: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                Rgba([255, 255, 255, 128])
            } else {
                Rgba([0, 0, 0, 128])
            }
        })
    }

    fn channel_variance(image: &RgbaImage) -> f64 {
        let values: Vec<f64> = image
            .pixels()
            .flat_map(|p| p.0[..3].iter().map(|&c| c as f64).collect::<Vec<_>>())
            .collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
    }

    #[tokio::test]
    async fn uniform_image_is_fixed_point() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([70, 140, 210, 255]));
        let BlurOutput::Raster(out) = StackBlur::new(StackBlurMode::Rgba)
            .blur(img.clone(), 16.0)
            .await
            .unwrap()
        else {
            panic!("스택 블러는 래스터를 반환해야 함");
        };
        assert_eq!(out, img);
    }

    #[tokio::test]
    async fn variance_decreases_and_size_preserved() {
        let img = checkerboard(48, 48, 6);
        let before = channel_variance(&img);
        let BlurOutput::Raster(out) = StackBlur::new(StackBlurMode::Rgba)
            .blur(img, 12.0)
            .await
            .unwrap()
        else {
            panic!("스택 블러는 래스터를 반환해야 함");
        };
        assert_eq!(out.dimensions(), (48, 48));
        assert!(channel_variance(&out) < before);
    }

    #[tokio::test]
    async fn rgb_mode_leaves_alpha_untouched() {
        let img = RgbaImage::from_fn(16, 16, |x, _| {
            Rgba([(x * 16) as u8, 0, 0, if x % 2 == 0 { 50 } else { 250 }])
        });
        let alphas: Vec<u8> = img.pixels().map(|p| p.0[3]).collect();
        let BlurOutput::Raster(out) = StackBlur::new(StackBlurMode::Rgb)
            .blur(img, 4.0)
            .await
            .unwrap()
        else {
            panic!("스택 블러는 래스터를 반환해야 함");
        };
        let after: Vec<u8> = out.pixels().map(|p| p.0[3]).collect();
        assert_eq!(alphas, after);
    }

    #[tokio::test]
    async fn rgba_mode_blurs_alpha() {
        let img = RgbaImage::from_fn(16, 16, |x, _| {
            Rgba([0, 0, 0, if x < 8 { 0 } else { 255 }])
        });
        let BlurOutput::Raster(out) = StackBlur::new(StackBlurMode::Rgba)
            .blur(img, 4.0)
            .await
            .unwrap()
        else {
            panic!("스택 블러는 래스터를 반환해야 함");
        };
        // 경계 근처 알파는 중간값으로 섞인다
        let edge_alpha = out.get_pixel(8, 8).0[3];
        assert!(edge_alpha > 0 && edge_alpha < 255);
    }

    #[tokio::test]
    async fn zero_radius_is_identity() {
        let img = checkerboard(16, 16, 2);
        let BlurOutput::Raster(out) = StackBlur::new(StackBlurMode::Rgba)
            .blur(img.clone(), 0.0)
            .await
            .unwrap()
        else {
            panic!("스택 블러는 래스터를 반환해야 함");
        };
        assert_eq!(out, img);
    }
}
