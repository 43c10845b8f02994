//! 배경 생성 파이프라인 (오케스트레이터).
//!
//! 상태 머신: `Idle → Initializing → {CacheHit, Generating} → Publishing →
//! Done`, 실패 시 `Initializing`/`Generating`에서 `Failed`.
//! 호출당 하나의 논리적 실행이며 재시도는 없다 — 실패한 실행은 호출자가
//! 다시 시작해야 한다. 치명적 실패 시 배경 부착도 캐시 기록도 일어나지
//! 않아 이전 상태가 보존된다.

use std::sync::Arc;

use blurground_core::config::PipelineOptions;
use blurground_core::error::CoreError;
use blurground_core::models::background::EncodedImage;
use blurground_core::models::geometry::SnapshotRequest;
use blurground_core::models::identity::PageIdentity;
use blurground_core::ports::blur::BlurOutput;
use blurground_core::ports::renderer::SnapshotRenderer;
use blurground_core::ports::sink::BackgroundSink;
use blurground_storage::cache::{self, BackgroundCache};
use blurground_vision::{color, encoder, filter, metrics};
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::registry::BlurRegistry;

/// 파이프라인 실행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// 실행 전
    Idle,
    /// 기능 검증, 식별자 계산, 캐시 프로브
    Initializing,
    /// 신선한 캐시 항목 재사용 (스냅샷/블러 스킵)
    CacheHit,
    /// 전체 재생성 진행 중
    Generating,
    /// 소비자에게 게시 중
    Publishing,
    /// 종료 — 성공
    Done,
    /// 종료 — 실패 (배경 미부착, 캐시 미기록)
    Failed,
}

/// 생성 훅 — 직렬화 대상이 아니므로 옵션과 분리해 주입한다
#[derive(Default)]
pub struct PipelineHooks {
    /// 재생성 시작 직전 호출
    pub on_before_generate: Option<Box<dyn Fn() + Send + Sync>>,
    /// 게시 단계에서 인코딩 결과와 함께 호출 (캐시 히트 포함)
    pub on_after_generate: Option<Box<dyn Fn(&EncodedImage) + Send + Sync>>,
}

/// 배경 생성 파이프라인
pub struct BackgroundPipeline {
    options: PipelineOptions,
    renderer: Arc<dyn SnapshotRenderer>,
    registry: BlurRegistry,
    cache: BackgroundCache,
    sink: Arc<dyn BackgroundSink>,
    hooks: PipelineHooks,
    state: RwLock<PipelineState>,
    current: RwLock<Option<EncodedImage>>,
}

impl BackgroundPipeline {
    /// 모든 외부 협력자를 주입받아 파이프라인 생성.
    /// 옵션은 실행 시작 이후 변경되지 않는 불변 스냅샷이다.
    pub fn new(
        options: PipelineOptions,
        renderer: Arc<dyn SnapshotRenderer>,
        registry: BlurRegistry,
        cache: BackgroundCache,
        sink: Arc<dyn BackgroundSink>,
        hooks: PipelineHooks,
    ) -> Self {
        Self {
            options,
            renderer,
            registry,
            cache,
            sink,
            hooks,
            state: RwLock::new(PipelineState::Idle),
            current: RwLock::new(None),
        }
    }

    /// 현재 상태 조회
    pub fn state(&self) -> PipelineState {
        *self.state.read()
    }

    /// 현재 게시된 배경 조회
    pub fn current_background(&self) -> Option<EncodedImage> {
        self.current.read().clone()
    }

    /// 배경 직접 설정 (소비자 표면)
    pub fn set_current_background(&self, image: EncodedImage) {
        *self.current.write() = Some(image);
    }

    /// 한 번의 논리적 실행.
    ///
    /// 실패는 보고 후 전파된다 — 배경 부착 없음, 캐시 기록 없음.
    pub async fn initialize(&self) -> Result<(), CoreError> {
        self.set_state(PipelineState::Initializing);
        match self.run().await {
            Ok(()) => {
                self.set_state(PipelineState::Done);
                Ok(())
            }
            Err(e) => {
                error!("배경 생성 실패: {e}");
                self.set_state(PipelineState::Failed);
                Err(e)
            }
        }
    }

    async fn run(&self) -> Result<(), CoreError> {
        // 선언된 블러 전략은 스냅샷 작업 전에 해석한다 — 기능 부재는
        // 실행 도중이 아니라 초기화에서 실패해야 한다.
        let strategy = if self.options.blur_requested() {
            Some(self.registry.resolve(self.options.blur_processor)?)
        } else {
            None
        };

        let identity = PageIdentity::from_location(&self.renderer.location());
        if self.options.logging_enabled {
            info!("페이지 위치 해시: {}", identity.value());
        }

        if self.options.cache_enabled && self.cache.probe().await {
            if let Some(record) = self.cache.load(identity).await {
                if cache::is_fresh(
                    &record,
                    self.options.cache_ttl_secs,
                    Utc::now().timestamp_millis(),
                ) {
                    self.set_state(PipelineState::CacheHit);
                    if self.options.logging_enabled {
                        info!("캐시 히트 — 저장된 배경 재사용");
                    }
                    self.publish(EncodedImage::new(record.value));
                    return Ok(());
                }
                if self.options.logging_enabled {
                    info!("캐시 만료 — 배경 재생성");
                }
            }
        }

        self.set_state(PipelineState::Generating);
        let started = Utc::now();
        if let Some(hook) = &self.hooks.on_before_generate {
            hook();
        }

        // 페이지 기하는 매 실행 새로 조회한다
        let size = metrics::page_size(&self.renderer.page_geometry());
        if self.options.logging_enabled {
            info!("전체 페이지 크기: {}x{}px", size.width, size.height);
        }

        let request = SnapshotRequest {
            width: size.width,
            height: size.height,
            background: self.options.background_color.clone(),
        };
        let snapshot = self.renderer.render(&request).await?;

        let fill = color::parse_color(&self.options.background_color)?;
        let mut canvas = filter::crop_offset(
            &snapshot,
            self.options.offset_x,
            self.options.offset_y,
            size.width,
            size.height,
            fill,
        );
        filter::apply_opacity(&mut canvas, self.options.opacity);
        filter::lighten(&mut canvas, self.options.lighten_factor);

        let encoded = match strategy {
            Some(strategy) => {
                debug!(
                    "블러 적용: {:?} (반경 {})",
                    self.options.blur_processor, self.options.blur_radius
                );
                match strategy.blur(canvas, self.options.blur_radius).await? {
                    BlurOutput::Raster(blurred) => {
                        encoder::encode(&blurred, self.options.compress_quality)?
                    }
                    // nativeFilterBlur는 블러+인코딩 융합 — 인코더를 거치지 않는다
                    BlurOutput::Encoded(encoded) => encoded,
                }
            }
            None => {
                debug!("블러 단계 스킵 (비활성화 또는 반경 0)");
                encoder::encode(&canvas, self.options.compress_quality)?
            }
        };

        if self.options.cache_enabled {
            // 저장소 장애는 성능 저하일 뿐 실행을 깨지 않는다
            if let Err(e) = self.cache.save(identity, &encoded).await {
                warn!("캐시 기록 실패 (무시): {e}");
            }
        }

        self.publish(encoded);

        if self.options.logging_enabled {
            let elapsed = (Utc::now() - started).num_milliseconds() as f64 / 1000.0;
            info!("배경 생성 완료: {elapsed:.1}초");
        }
        Ok(())
    }

    /// 게시 단계 — 부착, 스크롤 바인딩, 완료 훅, 현재 배경 갱신
    fn publish(&self, image: EncodedImage) {
        self.set_state(PipelineState::Publishing);
        self.sink.attach(&image);
        self.sink.bind_scroll();
        if let Some(hook) = &self.hooks.on_after_generate {
            hook(&image);
        }
        *self.current.write() = Some(image);
        debug!("배경 게시 완료");
    }

    fn set_state(&self, next: PipelineState) {
        debug!("상태 전이: {:?} → {:?}", *self.state.read(), next);
        *self.state.write() = next;
    }
}
