use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;
use tracing::warn;

/// 由 `/end` 触发的关闭信号
#[derive(Debug, Clone, Default)]
pub struct ShutdownTrigger {
    notify: Arc<Notify>,
}

impl ShutdownTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        // notify_one 会保存许可，先触发后等待也不会丢失
        self.notify.notify_one();
    }

    pub async fn triggered(&self) {
        self.notify.notified().await;
    }
}

pub async fn listen_for_shutdown(trigger: ShutdownTrigger) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {
            warn!("Shutdown signal received, initiating graceful shutdown...");
        }
        _ = trigger.triggered() => {
            warn!("Shutdown requested, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_before_listen_is_not_lost() {
        let trigger = ShutdownTrigger::new();
        trigger.trigger();

        let finished = tokio::time::timeout(
            Duration::from_secs(1),
            listen_for_shutdown(trigger.clone()),
        )
        .await;
        assert!(finished.is_ok());
    }

    #[tokio::test]
    async fn test_trigger_from_clone() {
        let trigger = ShutdownTrigger::new();
        let remote = trigger.clone();

        let waiter = tokio::spawn(async move { trigger.triggered().await });
        remote.trigger();

        let finished = tokio::time::timeout(Duration::from_secs(1), waiter).await;
        assert!(matches!(finished, Ok(Ok(()))));
    }
}
