//! 스냅샷 렌더러 포트.
//!
//! DOM 서브트리를 래스터 이미지로 변환하는 외부 기능.
//! 렌더링 충실도는 이 시스템의 범위 밖이다 — 불투명 기능으로 취급.

use async_trait::async_trait;
use image::RgbaImage;

use crate::error::CoreError;
use crate::models::geometry::{PageGeometry, SnapshotRequest};

/// 스냅샷 렌더러 — 페이지를 RGBA 래스터로 변환
#[async_trait]
pub trait SnapshotRenderer: Send + Sync {
    /// 페이지 정규 위치 문자열 (PageIdentity 해시 입력)
    fn location(&self) -> String;

    /// 현재 페이지 기하 조회.
    /// 페이지는 정적이지 않으므로 실행마다 호출해야 한다.
    fn page_geometry(&self) -> PageGeometry;

    /// 요청된 크기로 전체 페이지 스냅샷 렌더링.
    ///
    /// 정확히 하나의 이미지 또는 치명적 에러를 산출한다.
    /// 재시도 없음, 부분 결과 없음.
    async fn render(&self, request: &SnapshotRequest) -> Result<RgbaImage, CoreError>;
}
