//! TTL 배경 캐시.
//!
//! PageIdentity → 캐시 레코드 매핑. 저장소 가용성은 시작 시 1회
//! 프로브(시험 기록+삭제)로 판정하며, 실패 시 해당 실행 동안 캐싱만
//! 조용히 비활성화된다 (우아한 성능 저하, 치명적이지 않음).
//! 만료 항목은 능동 축출 없이 재생성 시 덮어쓴다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use blurground_core::error::CoreError;
use blurground_core::models::background::{CacheRecord, EncodedImage};
use blurground_core::models::identity::PageIdentity;
use blurground_core::ports::store::KeyValueStore;
use chrono::Utc;
use tracing::{debug, warn};

/// 프로브용 임시 키
const PROBE_KEY: &str = "__ocanvas_probe__";

/// 레코드 신선도 판정.
///
/// `floor(now/1000) - floor(timestamp/1000) <= ttl_secs`.
/// 초 단위 내림 비교 — 레거시 판정식 그대로.
pub fn is_fresh(record: &CacheRecord, ttl_secs: u64, now_ms: i64) -> bool {
    let now_secs = now_ms.div_euclid(1000);
    let created_secs = record.timestamp.div_euclid(1000);
    now_secs - created_secs <= ttl_secs as i64
}

/// 배경 캐시 — `KeyValueStore` 포트 위의 TTL 캐시
pub struct BackgroundCache {
    store: Arc<dyn KeyValueStore>,
    available: AtomicBool,
}

impl BackgroundCache {
    /// 주입된 저장소 핸들로 캐시 생성 (프로브 전까지는 가용 가정)
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            available: AtomicBool::new(true),
        }
    }

    /// 저장소 가용성 프로브 — 시험 기록+삭제 1회.
    /// 실패하면 이후 `load`/`save`는 전부 no-op이 된다.
    pub async fn probe(&self) -> bool {
        let result = async {
            self.store.set(PROBE_KEY, "1").await?;
            self.store.remove(PROBE_KEY).await?;
            Ok::<(), CoreError>(())
        }
        .await;

        match result {
            Ok(()) => {
                self.available.store(true, Ordering::Relaxed);
                true
            }
            Err(e) => {
                warn!("저장소 프로브 실패 — 이번 실행은 캐싱 비활성화: {e}");
                self.available.store(false, Ordering::Relaxed);
                false
            }
        }
    }

    /// 프로브 결과 조회
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    /// 캐시 레코드 로드.
    /// 키 부재, 저장소 에러, 손상된 JSON은 전부 `None` — 재생성 경로로 빠진다.
    pub async fn load(&self, identity: PageIdentity) -> Option<CacheRecord> {
        if !self.is_available() {
            return None;
        }
        let key = identity.storage_key();
        match self.store.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<CacheRecord>(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("캐시 레코드 손상 ({key}) — 무시하고 재생성: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("캐시 조회 실패 ({key}) — 무시하고 재생성: {e}");
                None
            }
        }
    }

    /// 캐시 레코드 저장 — 현재 시각 타임스탬프로 통째로 교체.
    /// 동시 실행 간 경쟁은 마지막 기록 우선 (락 없음).
    pub async fn save(&self, identity: PageIdentity, image: &EncodedImage) -> Result<(), CoreError> {
        if !self.is_available() {
            return Ok(());
        }
        let record = CacheRecord {
            value: image.as_str().to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };
        let raw = serde_json::to_string(&record)?;
        let key = identity.storage_key();
        self.store.set(&key, &raw).await?;
        debug!("캐시 기록: {key} ({} bytes)", raw.len());
        Ok(())
    }
}
