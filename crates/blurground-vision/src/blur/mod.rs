//! 블러 전략 구현.
//!
//! `BlurStrategy` 포트의 네 가지 변형. 동기 변형(boxBlur, stackBlur,
//! realtimeBlur)은 래스터를 반환하고, nativeFilterBlur는 블러+인코딩이
//! 융합된 data URI를 비동기로 반환한다.

pub mod box_blur;
pub mod native_filter;
pub mod realtime;
pub mod stack_blur;

pub use box_blur::BoxBlur;
pub use native_filter::NativeFilterBlur;
pub use realtime::RealtimeBlur;
pub use stack_blur::{StackBlur, StackBlurMode};
