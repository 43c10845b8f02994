//! # blurground-vision
//!
//! 이미지 처리 crate.
//! 페이지 크기 계산, 픽셀 필터(라이튼/컨볼루션/알파), 블러 전략 4종,
//! WebP 인코딩 등 스냅샷 → 배경 변환 파이프라인의 처리 단계를 담당한다.

pub mod blur;
pub mod color;
pub mod encoder;
pub mod filter;
pub mod metrics;
pub mod resize;
