use crate::{Config, Manager, Mode, Platform, Window};
use std::time::Duration;

/// Pause between two iterations, roughly one frame.
const FRAME: Duration = Duration::from_millis(16);

impl<C: Config, P: Platform> Manager<C, P> {
    /// Runs until the running flag is cleared or the platform stops
    /// delivering events.
    pub async fn event_loop(&mut self) {
        self.platform.grab_keyboard();
        tracing::info!("Starting event loop on {}", self.platform.platform_name());

        while self.is_running() {
            let Some(events) = self.platform.poll_events() else {
                tracing::info!("Platform closed, leaving event loop");
                break;
            };
            for event in events {
                self.display_event_handler(event);
            }
            self.state.events.process_queue();

            self.state.arrange_windows();
            self.update_windows();

            // Actions queued by the handlers.
            while let Some(act) = self.state.actions.pop_front() {
                self.platform.execute_action(act);
            }
            self.platform.flush();

            if !self.is_running() {
                break;
            }
            tokio::time::sleep(FRAME).await;
        }

        self.platform.ungrab_keyboard();
    }

    fn update_windows(&mut self) {
        match self.state.mode {
            // When (resizing / moving) only deal with the single window.
            Mode::ResizingWindow(session, _) | Mode::MovingWindow(session) => {
                let windows: Vec<&Window> = self
                    .state
                    .windows
                    .iter()
                    .filter(|w| w.handle == session.handle)
                    .collect();
                self.platform.update_windows(&windows);
            }
            Mode::Normal => {
                let windows: Vec<&Window> = self.state.windows.iter().collect();
                self.platform.update_windows(&windows);
            }
        }
    }
}
