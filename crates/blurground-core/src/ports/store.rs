//! 키-값 저장소 포트.
//!
//! 구현: `blurground-storage` crate (인메모리, rusqlite).
//! localStorage에 대응하는 범용 문자열 키 저장소다.

use async_trait::async_trait;

use crate::error::CoreError;

/// 문자열 키-값 저장소
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 키 조회 — 없으면 `None`
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// 값 기록 — 기존 항목을 통째로 교체한다 (부분 갱신 없음)
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// 키 삭제 (없어도 성공)
    async fn remove(&self, key: &str) -> Result<(), CoreError>;
}
