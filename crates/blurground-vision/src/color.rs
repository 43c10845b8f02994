//! 배경 색상 파서.

use blurground_core::error::CoreError;
use image::Rgba;

/// `#rgb` / `#rrggbb` 16진 색상 문자열을 불투명 RGBA로 파싱
pub fn parse_color(hex: &str) -> Result<Rgba<u8>, CoreError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| CoreError::Config(format!("색상 형식 오류: {hex}")))?;

    let (r, g, b) = match digits.len() {
        3 => {
            let channel = |i| -> Result<u8, CoreError> {
                let d = u8::from_str_radix(&digits[i..i + 1], 16)
                    .map_err(|_| CoreError::Config(format!("색상 형식 오류: {hex}")))?;
                Ok(d * 17)
            };
            (channel(0)?, channel(1)?, channel(2)?)
        }
        6 => {
            let channel = |i| {
                u8::from_str_radix(&digits[i..i + 2], 16)
                    .map_err(|_| CoreError::Config(format!("색상 형식 오류: {hex}")))
            };
            (channel(0)?, channel(2)?, channel(4)?)
        }
        _ => return Err(CoreError::Config(format!("색상 형식 오류: {hex}"))),
    };

    Ok(Rgba([r, g, b, 255]))
}
