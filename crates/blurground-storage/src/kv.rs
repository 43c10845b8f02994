//! 키-값 저장소 어댑터.
//!
//! `KeyValueStore` 포트 구현 두 가지:
//! - `MemoryKvStore`: 휘발성 인메모리 맵 (테스트/기본)
//! - `SqliteKvStore`: rusqlite 기반 영속 저장소 (localStorage 대응)

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use blurground_core::error::CoreError;
use blurground_core::ports::store::KeyValueStore;
use parking_lot::{Mutex, RwLock};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

/// 인메모리 키-값 저장소
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// SQLite 키-값 저장소 — `kv(key TEXT PRIMARY KEY, value TEXT)` 단일 테이블
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
}

impl SqliteKvStore {
    /// 파일 기반 저장소 생성
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path)
            .map_err(|e| CoreError::StoreUnavailable(format!("SQLite 열기 실패: {e}")))?;

        // 성능 최적화 PRAGMA 설정
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA temp_store=MEMORY;
            ",
        )
        .map_err(|e| CoreError::StoreUnavailable(format!("PRAGMA 설정 실패: {e}")))?;

        Self::init_schema(&conn)?;
        info!("SQLite 키-값 저장소 초기화: {}", path.display());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// 인메모리 저장소 생성 (테스트용)
    pub fn open_in_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CoreError::StoreUnavailable(format!("인메모리 SQLite 생성 실패: {e}")))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), CoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| CoreError::StoreUnavailable(format!("스키마 생성 실패: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let conn = self.conn.lock();
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| CoreError::StoreUnavailable(format!("조회 실패: {e}")))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(|e| CoreError::StoreUnavailable(format!("기록 실패: {e}")))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| CoreError::StoreUnavailable(format!("삭제 실패: {e}")))?;
        Ok(())
    }
}
