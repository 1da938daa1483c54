use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracen_core::{ContentClient, ViewState};

use crate::adapter::SectionAdapter;
use crate::sections::Section;

/// Read access to a mount's view state that outlives the mount itself.
#[derive(Debug, Clone)]
pub struct ViewHandle {
    state: Arc<RwLock<ViewState>>,
}

impl ViewHandle {
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }
}

/// One lifetime of a section on screen.
///
/// Mounting seeds the initial state and starts the section's single fetch.
/// The response is written only while the mount is alive: after
/// [`Mount::unmount`] returns, or once the mount is dropped, a late response
/// is discarded instead of mutating the detached view.
pub struct Mount {
    name: String,
    state: Arc<RwLock<ViewState>>,
    alive: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl Mount {
    pub fn spawn(section: Box<dyn Section>, client: Arc<dyn ContentClient>) -> Self {
        Self::with_adapter(Arc::new(SectionAdapter::new(section, client)))
    }

    pub fn with_adapter(adapter: Arc<SectionAdapter>) -> Self {
        let name = adapter.section().name().to_string();
        let state = Arc::new(RwLock::new(adapter.initial_state()));
        let alive = Arc::new(AtomicBool::new(true));

        let task = tokio::spawn({
            let state = state.clone();
            let alive = alive.clone();
            async move {
                let outcome = adapter.fetch().await;
                let mut view = state.write().await;
                // Checked under the write lock so unmount can fence us out.
                if !alive.load(Ordering::Acquire) {
                    adapter.logger().debug("Discarding response for an unmounted view");
                    return;
                }
                adapter.apply(&mut view, outcome);
            }
        });

        Self {
            name,
            state,
            alive,
            task: Some(task),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> ViewHandle {
        ViewHandle {
            state: self.state.clone(),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Applies a view-level change such as a selection toggle.
    pub async fn update<R>(&self, change: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut view = self.state.write().await;
        change(&mut view)
    }

    /// Waits for the fetch to settle and returns the resulting state.
    pub async fn settled(&mut self) -> ViewState {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("[{}] Fetch task failed: {}", self.name, e);
            }
        }
        self.snapshot().await
    }

    /// Marks the mount dead and waits out any write already in progress.
    /// The request itself is not cancelled; its task handle is returned.
    pub async fn unmount(mut self) -> Option<JoinHandle<()>> {
        self.alive.store(false, Ordering::Release);
        drop(self.state.write().await);
        self.task.take()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}
