//! Transient user-facing notices.
//!
//! A board holds at most one notice. Posting replaces the current one,
//! cancels the pending auto-clear timer and schedules a fresh one; the epoch
//! counter keeps a stale timer from clearing a newer notice.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Error,
    Success,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub kind: Kind,
    pub message: String,
}

pub struct NoticeBoard {
    inner: Arc<Mutex<Slot>>,
    ttl: Duration,
}

#[derive(Default)]
struct Slot {
    current: Option<Notice>,
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> NoticeBoard {
        NoticeBoard {
            inner: Arc::new(Mutex::new(Slot::default())),
            ttl,
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.post(Kind::Error, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.post(Kind::Success, message);
    }

    /// Replace the current notice and restart the auto-clear timer.
    pub fn post(&self, kind: Kind, message: impl Into<String>) {
        let mut slot = self.inner.lock().unwrap();
        slot.epoch += 1;
        let epoch = slot.epoch;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = Some(Notice {
            kind,
            message: message.into(),
        });
        let inner = Arc::clone(&self.inner);
        let ttl = self.ttl;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = inner.lock().unwrap();
            if slot.epoch == epoch {
                slot.current = None;
                slot.timer = None;
            }
        }));
    }

    pub fn current(&self) -> Option<Notice> {
        self.inner.lock().unwrap().current.clone()
    }

    pub fn clear(&self) {
        let mut slot = self.inner.lock().unwrap();
        slot.epoch += 1;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::yield_now;
    use tokio::time::advance;

    const TTL: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn a_notice_expires_after_the_ttl() {
        let board = NoticeBoard::new(TTL);
        board.error("mensaje");
        yield_now().await;

        advance(TTL - Duration::from_millis(1)).await;
        yield_now().await;
        assert_eq!(
            board.current(),
            Some(Notice {
                kind: Kind::Error,
                message: "mensaje".to_owned(),
            })
        );

        advance(Duration::from_millis(2)).await;
        yield_now().await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn posting_restarts_the_timer() {
        let board = NoticeBoard::new(TTL);
        board.error("primero");
        yield_now().await;
        advance(Duration::from_secs(3)).await;

        board.success("segundo");
        yield_now().await;

        // Past the first notice's deadline but within the second's.
        advance(Duration::from_secs(3)).await;
        yield_now().await;
        let current = board.current().unwrap();
        assert_eq!(current.kind, Kind::Success);
        assert_eq!(current.message, "segundo");

        advance(Duration::from_secs(2) + Duration::from_millis(1)).await;
        yield_now().await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_removes_the_notice_and_the_timer() {
        let board = NoticeBoard::new(TTL);
        board.error("mensaje");
        yield_now().await;
        board.clear();
        assert_eq!(board.current(), None);

        // A new notice posted right after a clear lives a full TTL.
        board.success("otro");
        yield_now().await;
        advance(TTL - Duration::from_millis(1)).await;
        yield_now().await;
        assert!(board.current().is_some());
    }
}
