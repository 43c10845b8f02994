//! 고속 리사이즈.
//!
//! fast_image_resize 기반 바이리니어 컨볼루션.
//! realtimeBlur 전략의 축소/확대 경로에서 사용한다.

use blurground_core::error::CoreError;
use fast_image_resize::{images::Image as FirImage, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbaImage;
use tracing::debug;

/// 고속 리사이즈
pub fn fast_resize(image: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage, CoreError> {
    let (src_w, src_h) = image.dimensions();

    if src_w == width && src_h == height {
        return Ok(image.clone());
    }
    if src_w == 0 || src_h == 0 {
        return Err(CoreError::Internal("소스 이미지 크기 0".to_string()));
    }
    if width == 0 || height == 0 {
        return Err(CoreError::Internal("목표 이미지 크기 0".to_string()));
    }

    let src_image = FirImage::from_vec_u8(src_w, src_h, image.as_raw().clone(), PixelType::U8x4)
        .map_err(|e| CoreError::Internal(format!("소스 이미지 생성 실패: {e}")))?;

    let mut dst_image = FirImage::new(width, height, PixelType::U8x4);

    let mut resizer = Resizer::new();
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(
        fast_image_resize::FilterType::Bilinear,
    ));

    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| CoreError::Internal(format!("리사이즈 실패: {e}")))?;

    let result = RgbaImage::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| CoreError::Internal("결과 이미지 생성 실패".to_string()))?;

    debug!("리사이즈: {}x{} → {}x{}", src_w, src_h, width, height);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn make_image(w: u32, h: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(color))
    }

    #[test]
    fn resize_basic() {
        let img = make_image(640, 480, [100, 100, 100, 255]);
        let small = fast_resize(&img, 160, 120).unwrap();
        assert_eq!(small.dimensions(), (160, 120));
    }

    #[test]
    fn same_size_noop() {
        let img = make_image(64, 64, [10, 20, 30, 255]);
        let out = fast_resize(&img, 64, 64).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn uniform_color_survives_round_trip() {
        let img = make_image(100, 100, [37, 120, 200, 255]);
        let small = fast_resize(&img, 25, 25).unwrap();
        let back = fast_resize(&small, 100, 100).unwrap();
        for pixel in back.pixels() {
            assert_eq!(pixel.0, [37, 120, 200, 255]);
        }
    }

    #[test]
    fn zero_size_rejected() {
        let img = make_image(10, 10, [0, 0, 0, 255]);
        assert!(fast_resize(&img, 0, 10).is_err());
        let empty = RgbaImage::new(0, 0);
        assert!(fast_resize(&empty, 10, 10).is_err());
    }
}
