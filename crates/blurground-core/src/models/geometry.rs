//! 페이지 기하 모델.

use serde::{Deserialize, Serialize};

/// 픽셀 단위 크기
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// 너비 (픽셀)
    pub width: u32,
    /// 높이 (픽셀)
    pub height: u32,
}

/// 페이지 기하 — 콘텐츠 박스와 뷰포트 박스.
/// 페이지는 실행 간 정적이라고 가정할 수 없으므로 매 실행마다 다시 조회한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// 스크롤 가능한 전체 콘텐츠 박스
    pub content: Size,
    /// 현재 뷰포트 박스
    pub viewport: Size,
}

/// 스냅샷 렌더러에 넘기는 요청 — 전체 페이지 크기와 배경 채움 색상
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    /// 렌더링 너비 (픽셀)
    pub width: u32,
    /// 렌더링 높이 (픽셀)
    pub height: u32,
    /// 배경 채움 색상 (`#rrggbb`)
    pub background: String,
}
