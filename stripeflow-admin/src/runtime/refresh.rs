// src/runtime/refresh.rs

//! 画面の自動更新
//!
//! 一定間隔でタスクを実行する。停止（[`AutoRefresh::teardown`] またはドロップ）
//! すると実行中の取得も中断され、破棄後の画面へ結果が届くことはない。

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

pub struct AutoRefresh {
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl AutoRefresh {
    /// 最初の実行は即時、以降は `period` ごと
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut task: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        tracing::debug!(view = name, "auto refresh tick");
                        // 取得中に停止された場合はここで中断する
                        tokio::select! {
                            biased;
                            _ = shutdown_rx.changed() => break,
                            _ = task() => {}
                        }
                    }
                }
            }
            tracing::debug!(view = name, "auto refresh stopped");
        });

        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// 停止してタスクの終了を待つ
    pub async fn teardown(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    tracing::warn!(error = %err, "auto refresh task panicked");
                }
            }
        }
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
