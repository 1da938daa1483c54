use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracen_core::{Error, Result};

pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(6);

/// Current slide of a wrap-around carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

/// Timer that moves a shared carousel forward every period. The timer is
/// cancelled when the handle is stopped or dropped. A zero period is refused.
#[derive(Debug)]
pub struct AutoAdvance {
    task: JoinHandle<()>,
}

impl AutoAdvance {
    pub fn start(carousel: Arc<Mutex<Carousel>>, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(Error::Config("auto-advance period must be non-zero".to_string()));
        }
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let index = carousel.lock().await.next();
                tracing::trace!("Carousel advanced to slide {}", index);
            }
        });
        Ok(Self { task })
    }

    pub fn stop(self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.task.abort();
    }
}
