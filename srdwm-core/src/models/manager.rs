use crate::config::Config;
use crate::events::EventSystem;
use crate::platform::Platform;
use crate::state::State;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<C, P> {
    pub state: State,
    pub config: C,
    pub platform: P,
    pub(crate) running: Arc<AtomicBool>,
}

impl<C, P> Manager<C, P>
where
    C: Config,
    P: Platform,
{
    pub fn new(config: C, platform: P) -> Self {
        let mut state = State::new(&config);
        for monitor in platform.get_monitors() {
            state.add_monitor(monitor);
        }
        Self {
            state,
            config,
            platform,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Shared with anything that needs to stop the event loop from outside.
    #[must_use]
    pub fn running_handle(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Clears the running flag, the loop exits after the current iteration.
    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.running.store(false, Ordering::SeqCst);
    }

    #[must_use]
    pub fn events(&self) -> Rc<EventSystem> {
        self.state.events.clone()
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::platform::MockPlatform> {
    /// A manager with one 1920x1080 monitor and the named workspaces.
    pub fn new_test(workspaces: Vec<String>) -> Self {
        let monitor = crate::models::Monitor::new(0, 0, 0, 1920, 1080).named("TEST-1");
        Self::new(
            crate::config::tests::TestConfig {
                workspaces,
                ..Default::default()
            },
            crate::platform::MockPlatform::with_monitors(vec![monitor]),
        )
    }
}
