//! # blurground-core
//!
//! BlurredGround 클라이언트의 코어 레이어.
//! 에러 타입, 파이프라인 옵션, 도메인 모델, 포트 trait을 정의한다.
//! 무거운 로직은 어댑터 crate(`blurground-vision`, `blurground-storage`)에 둔다.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
