// src/services/notification_service.rs
//
// Notification Center
//
// Any component holding an `Arc<NotificationCenter>` can raise a toast.
// Containers that display toasts subscribe through the event bus and
// unsubscribe when they go away. There is no module-level callback slot.
//
// CRITICAL RULES:
// - Toast ids are strictly increasing, starting at 1
// - Raising a toast never fails, even with no container subscribed
// - Every toast leaves the active list exactly once (dismissed or expired)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::config::ToastConfig;
use crate::domain::{DismissReason, Toast, ToastKind};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SubscriptionId, ToastDismissed, ToastRaised};

/// Source of the current time, injectable for tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct NotificationCenter {
    event_bus: Arc<EventBus>,
    clock: Arc<dyn Clock>,
    config: ToastConfig,
    next_id: AtomicU64,
    active: RwLock<Vec<Toast>>,
}

impl NotificationCenter {
    pub fn new(event_bus: Arc<EventBus>, config: ToastConfig) -> Self {
        Self::with_clock(event_bus, config, Arc::new(SystemClock))
    }

    pub fn with_clock(event_bus: Arc<EventBus>, config: ToastConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            event_bus,
            clock,
            config,
            next_id: AtomicU64::new(1),
            active: RwLock::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Raise a toast with the configured default duration
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) -> Toast {
        self.notify_with_duration(message, kind, self.config.default_duration_ms)
    }

    pub fn notify_with_duration(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_ms: u64,
    ) -> Toast {
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            kind,
            raised_at: self.clock.now(),
            duration_ms,
        };

        self.active
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast.clone());

        if self.event_bus.subscriber_count::<ToastRaised>() == 0 {
            debug!("Toast {} raised with no container subscribed", toast.id);
        }
        info!("[TOAST] {} #{}: {}", toast.kind, toast.id, toast.message);

        self.event_bus.emit(ToastRaised::new(toast.clone()));
        toast
    }

    pub fn success(&self, message: impl Into<String>) -> Toast {
        self.notify(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Toast {
        self.notify(message, ToastKind::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> Toast {
        self.notify(message, ToastKind::Info)
    }

    /// Close a toast on user request
    pub fn dismiss(&self, toast_id: u64) -> AppResult<Toast> {
        let removed = {
            let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
            let pos = active
                .iter()
                .position(|toast| toast.id == toast_id)
                .ok_or(AppError::NotFound)?;
            active.remove(pos)
        };

        self.event_bus
            .emit(ToastDismissed::new(removed.id, DismissReason::User));
        Ok(removed)
    }

    /// Remove every toast whose display time has elapsed
    pub fn expire(&self) -> Vec<Toast> {
        let now = self.clock.now();
        let expired: Vec<Toast> = {
            let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
            let expired = active
                .iter()
                .filter(|toast| toast.is_expired(now))
                .cloned()
                .collect();
            active.retain(|toast| !toast.is_expired(now));
            expired
        };

        for toast in &expired {
            self.event_bus
                .emit(ToastDismissed::new(toast.id, DismissReason::Expired));
        }
        expired
    }

    /// Snapshot of visible toasts, oldest first
    pub fn active(&self) -> Vec<Toast> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Attach a toast container. Detach with `EventBus::unsubscribe`.
    pub fn on_toast<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        self.event_bus
            .subscribe::<ToastRaised, _>(move |event| handler(&event.toast))
    }

    pub fn detach(&self, subscription: SubscriptionId) -> bool {
        self.event_bus.unsubscribe(subscription)
    }
}

// ============================================================================
// TESTS
// ============================================================================
