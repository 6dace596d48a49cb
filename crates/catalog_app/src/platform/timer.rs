use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_core::Msg;
use engine_logging::engine_debug;

use super::app::AppEvent;

/// Periodic `Msg::AutoAdvanceTick` source for the slider.
///
/// `stop` is best-effort: the worker notices the flag after its current
/// sleep, and a tick already queued will still be delivered.
pub struct AutoAdvance {
    interval: Duration,
    running: Option<Arc<AtomicBool>>,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: None,
        }
    }

    /// No-op if already running.
    pub fn start(&mut self, event_tx: mpsc::Sender<AppEvent>) {
        if self.running.is_some() {
            return;
        }
        let flag = Arc::new(AtomicBool::new(true));
        let worker_flag = flag.clone();
        let interval = self.interval;
        thread::spawn(move || loop {
            thread::sleep(interval);
            if !worker_flag.load(Ordering::Relaxed) {
                break;
            }
            if event_tx.send(AppEvent::Msg(Msg::AutoAdvanceTick)).is_err() {
                break;
            }
        });
        engine_debug!("Auto-advance started ({:?})", interval);
        self.running = Some(flag);
    }

    pub fn stop(&mut self) {
        if let Some(flag) = self.running.take() {
            flag.store(false, Ordering::Relaxed);
            engine_debug!("Auto-advance stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_until_stopped() {
        let (tx, rx) = mpsc::channel();
        let mut timer = AutoAdvance::new(Duration::from_millis(10));

        timer.start(tx.clone());
        timer.start(tx);
        assert!(timer.is_running());

        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(first, AppEvent::Msg(Msg::AutoAdvanceTick)));

        timer.stop();
        assert!(!timer.is_running());
        thread::sleep(Duration::from_millis(50));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }
}
