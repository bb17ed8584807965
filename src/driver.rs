use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::mpsc::Sender;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use crate::board::Board;
use crate::board::Delta;

/// A board shared between the driver thread and the UI thread.
///
/// The core engine is single-threaded; every mutating call must hold this
/// mutex for its full duration. That is what gives the no-overlap guarantee:
/// an auto-evolve tick and a manual evolve or clear can interleave, but never
/// run concurrently on the same board.
pub type SharedBoard = Arc<Mutex<Board>>;

/// The periodic auto-evolve driver.
///
/// One background thread repeatedly calls `evolve()` on the shared board and
/// sends each delta to the consumer. The cancellation flag is checked at the
/// top of every iteration, so an in-flight generation always completes before
/// the loop exits. The thread sleeps the configured interval after each tick
/// rather than chasing a deadline, so a slow consumer can never build up a
/// backlog of pending evolutions.
pub struct AutoEvolve {
    running: Arc<AtomicBool>,
    interval_ms: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl AutoEvolve {
    /// Start evolving `board` every `interval`, sending each generation's
    /// delta down `deltas`.
    pub fn spawn(board: SharedBoard, interval: Duration, deltas: Sender<Delta>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let interval_ms = Arc::new(AtomicU64::new(interval.as_millis() as u64));

        let run_flag = Arc::clone(&running);
        let tick_ms = Arc::clone(&interval_ms);

        let handle = thread::spawn(move || {
            while run_flag.load(Ordering::Acquire) {
                let delta = {
                    // A poisoned lock means the UI thread panicked mid-call;
                    // nothing left to drive.
                    let Ok(mut board) = board.lock() else { break };

                    board.evolve()
                };

                // Receiver gone: the consumer shut down without stopping us.
                if deltas.send(delta).is_err() {
                    break;
                }

                thread::sleep(Duration::from_millis(tick_ms.load(Ordering::Relaxed)));
            }

            debug!("auto-evolve loop exited");
        });

        Self {
            running,
            interval_ms,
            handle: Some(handle),
        }
    }

    /// Change the inter-tick delay. Takes effect from the next sleep.
    pub fn set_interval(&self, interval: Duration) {
        self.interval_ms
            .store(interval.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.load(Ordering::Relaxed))
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Flip the cancellation flag and wait for the loop to wind down.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.running.store(false, Ordering::Release);

        if let Some(handle) = self.handle.take() {
            // The driver thread only panics if Board::evolve does; join
            // propagates nothing we can act on here.
            let _ = handle.join();
        }
    }
}

impl Drop for AutoEvolve {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::mpsc;
    use std::time::Duration;

    use super::AutoEvolve;
    use crate::board::Board;
    use crate::coord::Coord;

    fn blinker_board() -> Board {
        let mut board = Board::new();

        for x in 0..3 {
            board.set_cell(Coord::new(x, 0), true);
        }

        board
    }

    #[test]
    fn test_driver_advances_and_stops() {
        let board = Arc::new(Mutex::new(blinker_board()));
        let (tx, rx) = mpsc::channel();

        let driver = AutoEvolve::spawn(Arc::clone(&board), Duration::from_millis(1), tx);

        // Each blinker tick flips 4 cells; wait for a few generations.
        for _ in 0..3 {
            let delta = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(delta.len(), 4);
        }

        driver.stop();

        let generation = board.lock().unwrap().generation();
        assert!(generation >= 3);

        // No ticks after stop: drain, then confirm the channel is dead or
        // silent.
        while rx.try_recv().is_ok() {}
        std::thread::sleep(Duration::from_millis(10));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_driver_stops_when_consumer_hangs_up() {
        let board = Arc::new(Mutex::new(blinker_board()));
        let (tx, rx) = mpsc::channel();

        let driver = AutoEvolve::spawn(Arc::clone(&board), Duration::from_millis(1), tx);
        drop(rx);

        // stop() joins; the loop must have already broken on the dead
        // channel or will on its next send.
        driver.stop();
    }

    #[test]
    fn test_interval_is_adjustable() {
        let board = Arc::new(Mutex::new(Board::new()));
        let (tx, _rx) = mpsc::channel();

        let driver = AutoEvolve::spawn(board, Duration::from_millis(5), tx);
        assert_eq!(driver.interval(), Duration::from_millis(5));

        driver.set_interval(Duration::from_millis(50));
        assert_eq!(driver.interval(), Duration::from_millis(50));

        driver.stop();
    }
}
