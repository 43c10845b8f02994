//! 순수 픽셀 버퍼 변환.
//!
//! 라이튼(채널별 비선형 밝힘), 알파 스케일, 크롭/오프셋 복사,
//! 엣지 클램프 컨볼루션. 모든 변환은 이미지 크기를 보존한다.

use blurground_core::error::CoreError;
use image::{Rgba, RgbaImage};

/// 채널별 비선형 라이튼 (제자리 변환).
///
/// 각 R/G/B 채널에 `c' = c + c*(c/255)*factor`를 적용하고 [0,255]로
/// 클램프한다. 알파는 건드리지 않는다. `factor <= 0`이면 항등 변환.
pub fn lighten(image: &mut RgbaImage, factor: f32) {
    if factor <= 0.0 {
        return;
    }
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            let c = *channel as f32;
            let lifted = c + c * (c / 255.0) * factor;
            *channel = lifted.clamp(0.0, 255.0) as u8;
        }
    }
}

/// 알파 채널 스케일 (제자리 변환). `opacity >= 1`이면 항등 변환.
pub fn apply_opacity(image: &mut RgbaImage, opacity: f32) {
    if opacity >= 1.0 {
        return;
    }
    let opacity = opacity.max(0.0);
    for pixel in image.pixels_mut() {
        pixel.0[3] = (pixel.0[3] as f32 * opacity).round().clamp(0.0, 255.0) as u8;
    }
}

/// 오프셋 크롭 복사.
///
/// 소스의 `(offset_x, offset_y)`에서 시작하는 영역을 목표 크기의 새
/// 캔버스 원점으로 복사한다. 소스가 덮지 못하는 영역은 `fill`로 남는다.
pub fn crop_offset(
    source: &RgbaImage,
    offset_x: i64,
    offset_y: i64,
    width: u32,
    height: u32,
    fill: Rgba<u8>,
) -> RgbaImage {
    let mut output = RgbaImage::from_pixel(width, height, fill);
    let (src_w, src_h) = source.dimensions();

    for y in 0..height as i64 {
        let sy = y + offset_y;
        if sy < 0 || sy >= src_h as i64 {
            continue;
        }
        for x in 0..width as i64 {
            let sx = x + offset_x;
            if sx < 0 || sx >= src_w as i64 {
                continue;
            }
            output.put_pixel(x as u32, y as u32, *source.get_pixel(sx as u32, sy as u32));
        }
    }
    output
}

/// 정사각 커널 변 길이 검증.
/// 길이가 완전제곱수이고 변이 홀수(≥1)가 아니면 `InvalidKernel`.
fn kernel_side(len: usize) -> Result<usize, CoreError> {
    let side = (len as f64).sqrt().round() as usize;
    if side * side != len {
        return Err(CoreError::InvalidKernel {
            len,
            reason: "커널 길이가 완전제곱수가 아님".to_string(),
        });
    }
    if side == 0 || side % 2 == 0 {
        return Err(CoreError::InvalidKernel {
            len,
            reason: "커널 변 길이가 홀수가 아님".to_string(),
        });
    }
    Ok(side)
}

/// 엣지 클램프 컨볼루션.
///
/// 각 출력 픽셀은 커널 창의 가중 합이며, 창이 경계를 벗어나면 가장
/// 가까운 유효 픽셀을 읽는다 (제로 패딩/랩어라운드 없음). 채널별 독립
/// 계산 후 [0,255] 클램프. `preserve_alpha`가 true면 출력 알파를 255로
/// 고정하고, false면 알파도 컨볼루션한 뒤 `a + (1-edge_factor)*(255-a)`로
/// 불투명 쪽으로 블렌딩한다.
///
/// 새 이미지를 반환하며 소스를 변경하지 않는다.
pub fn convolve(
    source: &RgbaImage,
    kernel: &[f32],
    preserve_alpha: bool,
    edge_factor: f32,
) -> Result<RgbaImage, CoreError> {
    let side = kernel_side(kernel.len())?;
    let half = (side / 2) as i64;
    let (width, height) = source.dimensions();
    let src = source.as_raw();
    let stride = width as usize * 4;
    let mut dst = vec![0u8; src.len()];

    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let mut sum = [0.0f32; 4];
            for ky in 0..side as i64 {
                let sy = (y + ky - half).clamp(0, height as i64 - 1) as usize;
                let row = sy * stride;
                for kx in 0..side as i64 {
                    let sx = (x + kx - half).clamp(0, width as i64 - 1) as usize;
                    let weight = kernel[(ky * side as i64 + kx) as usize];
                    let offset = row + sx * 4;
                    sum[0] += src[offset] as f32 * weight;
                    sum[1] += src[offset + 1] as f32 * weight;
                    sum[2] += src[offset + 2] as f32 * weight;
                    sum[3] += src[offset + 3] as f32 * weight;
                }
            }

            let offset = y as usize * stride + x as usize * 4;
            dst[offset] = sum[0].round().clamp(0.0, 255.0) as u8;
            dst[offset + 1] = sum[1].round().clamp(0.0, 255.0) as u8;
            dst[offset + 2] = sum[2].round().clamp(0.0, 255.0) as u8;
            dst[offset + 3] = if preserve_alpha {
                255
            } else {
                let alpha = sum[3].round().clamp(0.0, 255.0);
                (alpha + (1.0 - edge_factor) * (255.0 - alpha)).round().clamp(0.0, 255.0) as u8
            };
        }
    }

    RgbaImage::from_raw(width, height, dst)
        .ok_or_else(|| CoreError::Internal("컨볼루션 결과 버퍼 크기 불일치".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn uniform(w: u32, h: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(color))
    }

    fn gradient(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            Rgba([
                (x * 7 % 256) as u8,
                (y * 13 % 256) as u8,
                ((x + y) * 5 % 256) as u8,
                200,
            ])
        })
    }

    #[test]
    fn lighten_zero_factor_is_identity() {
        let original = gradient(16, 16);
        let mut image = original.clone();
        lighten(&mut image, 0.0);
        assert_eq!(image, original);
        lighten(&mut image, -0.5);
        assert_eq!(image, original);
    }

    #[test]
    fn lighten_is_monotonic_and_keeps_alpha() {
        let original = gradient(16, 16);
        let mut image = original.clone();
        lighten(&mut image, 0.5);
        for (before, after) in original.pixels().zip(image.pixels()) {
            for c in 0..3 {
                assert!(after.0[c] >= before.0[c]);
            }
            assert_eq!(after.0[3], before.0[3]);
        }
    }

    #[test]
    fn lighten_clamps_at_255() {
        let mut image = uniform(4, 4, [250, 255, 200, 255]);
        lighten(&mut image, 3.0);
        for pixel in image.pixels() {
            assert_eq!(pixel.0[0], 255);
            assert_eq!(pixel.0[1], 255);
            assert_eq!(pixel.0[2], 255);
        }
    }

    #[test]
    fn opacity_scales_alpha_only() {
        let mut image = uniform(4, 4, [10, 20, 30, 200]);
        apply_opacity(&mut image, 0.5);
        for pixel in image.pixels() {
            assert_eq!(&pixel.0[..3], &[10, 20, 30]);
            assert_eq!(pixel.0[3], 100);
        }
    }

    #[test]
    fn opacity_one_is_identity() {
        let original = gradient(8, 8);
        let mut image = original.clone();
        apply_opacity(&mut image, 1.0);
        assert_eq!(image, original);
    }

    #[test]
    fn crop_offset_shifts_origin() {
        let source = RgbaImage::from_fn(10, 10, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let out = crop_offset(&source, 2, 3, 4, 4, Rgba([9, 9, 9, 255]));
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(out.get_pixel(0, 0).0, [2, 3, 0, 255]);
        assert_eq!(out.get_pixel(3, 3).0, [5, 6, 0, 255]);
    }

    #[test]
    fn crop_offset_fills_uncovered_area() {
        let source = uniform(4, 4, [1, 2, 3, 255]);
        let fill = Rgba([255, 255, 255, 255]);
        let out = crop_offset(&source, 2, 2, 4, 4, fill);
        // 소스가 덮는 좌상단 2x2는 원본, 나머지는 채움 색
        assert_eq!(out.get_pixel(0, 0).0, [1, 2, 3, 255]);
        assert_eq!(out.get_pixel(3, 3).0, [255, 255, 255, 255]);
    }

    #[test]
    fn crop_offset_negative_offsets() {
        let source = uniform(4, 4, [1, 2, 3, 255]);
        let fill = Rgba([0, 0, 0, 0]);
        let out = crop_offset(&source, -2, -2, 4, 4, fill);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(2, 2).0, [1, 2, 3, 255]);
    }

    #[test]
    fn convolve_identity_kernel() {
        let source = gradient(12, 9);
        let out = convolve(&source, &[1.0], false, 1.0).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn convolve_rejects_non_square_kernel() {
        let source = uniform(4, 4, [0, 0, 0, 255]);
        assert_matches!(
            convolve(&source, &[1.0; 8], true, 1.0),
            Err(CoreError::InvalidKernel { len: 8, .. })
        );
    }

    #[test]
    fn convolve_rejects_even_side_kernel() {
        let source = uniform(4, 4, [0, 0, 0, 255]);
        // 길이 4 → 변 2 (짝수)
        assert_matches!(
            convolve(&source, &[0.25; 4], true, 1.0),
            Err(CoreError::InvalidKernel { len: 4, .. })
        );
        assert_matches!(
            convolve(&source, &[], true, 1.0),
            Err(CoreError::InvalidKernel { len: 0, .. })
        );
    }

    #[test]
    fn uniform_image_is_fixed_point_of_box_kernel() {
        // 엣지 클램프 덕분에 경계 픽셀도 동일 색 유지
        let source = uniform(8, 6, [120, 80, 40, 255]);
        let kernel = vec![1.0 / 9.0; 9];
        let out = convolve(&source, &kernel, true, 1.0).unwrap();
        for pixel in out.pixels() {
            assert_eq!(pixel.0, [120, 80, 40, 255]);
        }
    }

    #[test]
    fn convolve_preserve_alpha_forces_opaque() {
        let source = uniform(6, 6, [50, 60, 70, 100]);
        let kernel = vec![1.0 / 9.0; 9];
        let out = convolve(&source, &kernel, true, 1.0).unwrap();
        for pixel in out.pixels() {
            assert_eq!(pixel.0[3], 255);
        }
    }

    #[test]
    fn convolve_blends_alpha_toward_opaque() {
        let source = uniform(6, 6, [50, 60, 70, 100]);
        let kernel = vec![1.0 / 9.0; 9];
        // edge_factor 0 → a + (255-a) = 완전 불투명
        let out = convolve(&source, &kernel, false, 0.0).unwrap();
        assert_eq!(out.get_pixel(3, 3).0[3], 255);
        // edge_factor 1 → 알파 그대로
        let out = convolve(&source, &kernel, false, 1.0).unwrap();
        assert_eq!(out.get_pixel(3, 3).0[3], 100);
    }

    #[test]
    fn convolve_does_not_mutate_source() {
        let source = gradient(10, 10);
        let copy = source.clone();
        let _ = convolve(&source, &[1.0 / 9.0; 9], true, 1.0).unwrap();
        assert_eq!(source, copy);
    }
}
