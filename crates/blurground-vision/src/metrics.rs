//! 페이지 크기 계산.
//!
//! 콘텐츠 박스와 뷰포트 박스의 축별 최대값.
//! 콘텐츠가 뷰포트보다 좁거나 짧은 경우(또는 그 반대)를 방어한다.

use blurground_core::models::geometry::{PageGeometry, Size};

/// 스크롤 가능한 전체 페이지 크기 계산.
/// 부수 효과 없음 — 실행마다 새 기하로 다시 호출해야 한다.
pub fn page_size(geometry: &PageGeometry) -> Size {
    Size {
        width: geometry.content.width.max(geometry.viewport.width),
        height: geometry.content.height.max(geometry.viewport.height),
    }
}
