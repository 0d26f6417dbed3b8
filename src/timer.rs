use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    Tick,
}

/// Handle to the background ticker thread.
pub struct Ticker {
    rx: mpsc::Receiver<TimerEvent>,
    stop: Arc<AtomicBool>,
}

impl Ticker {
    pub fn try_recv(&self) -> Option<TimerEvent> {
        self.rx.try_recv().ok()
    }

    /// Blocks until the next tick. `None` once the ticker has stopped.
    pub fn recv(&self) -> Option<TimerEvent> {
        self.rx.recv().ok()
    }

    /// Returns true the first time only.
    pub fn stop(&self) -> bool {
        let first = !self.stop.swap(true, Ordering::SeqCst);
        if first {
            log::debug!("ticker stopped");
        }
        first
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

pub fn spawn_ticker(interval: Duration) -> Ticker {
    let (tx, rx) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));
    let thread_stop = Arc::clone(&stop);

    thread::spawn(move || loop {
        thread::sleep(interval);

        if thread_stop.load(Ordering::SeqCst) {
            break;
        }

        if tx.send(TimerEvent::Tick).is_err() {
            break;
        }
    });

    Ticker { rx, stop }
}

/// `HH:MM:SS`, hours grow past two digits if needed.
pub fn format_elapsed(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
