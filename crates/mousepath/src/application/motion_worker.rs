//! MotionWorker: runs one motion at a time off the async runtime.
//!
//! Every [`MotionExecutor`] call blocks for the nominal duration of the
//! motion, which can be several seconds.  The worker moves that blocking work
//! onto tokio's blocking thread pool and reports progress on an unbounded
//! `mpsc` channel, so the caller (the CLI event loop) stays free to react to
//! Ctrl-C while the cursor is moving.
//!
//! # Single-flight rule
//!
//! There is only one cursor.  While a job is in flight, [`MotionWorker::submit`]
//! rejects new requests with [`WorkerError::Busy`] instead of queueing or
//! interleaving them.  The busy flag is cleared *before* the final status
//! (`Finished` or `Failed`) is sent, so a caller that has observed the final
//! status can always submit the next job.
//!
//! # Status flow
//!
//! ```text
//! submit() ──► Started { job } ──► Finished { job, outcome }
//!                              └─► Failed   { job, error }
//! ```

use std::fmt;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::execute_motion::{MotionExecutor, MotionOutcome, MotionRequest};

/// Identifier of one submitted motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for the motion worker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkerError {
    #[error("a motion is already in progress")]
    Busy,
    #[error("motion task did not complete: {0}")]
    Join(String),
}

/// Progress report for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionStatus {
    Started { job: JobId },
    Finished { job: JobId, outcome: MotionOutcome },
    Failed { job: JobId, error: String },
}

impl MotionStatus {
    pub fn job(&self) -> JobId {
        match self {
            MotionStatus::Started { job }
            | MotionStatus::Finished { job, .. }
            | MotionStatus::Failed { job, .. } => *job,
        }
    }

    /// Returns `true` for `Finished` and `Failed`.
    pub fn is_final(&self) -> bool {
        !matches!(self, MotionStatus::Started { .. })
    }
}

/// Clears the busy flag when dropped, including when the job panicked.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Background runner for [`MotionRequest`]s.
pub struct MotionWorker {
    executor: Arc<MotionExecutor>,
    busy: Arc<AtomicBool>,
    status_tx: mpsc::UnboundedSender<MotionStatus>,
}

impl MotionWorker {
    /// Creates a worker and the receiving end of its status channel.
    pub fn new(executor: Arc<MotionExecutor>) -> (Self, mpsc::UnboundedReceiver<MotionStatus>) {
        let (status_tx, status_rx) = mpsc::unbounded_channel();
        let worker = Self {
            executor,
            busy: Arc::new(AtomicBool::new(false)),
            status_tx,
        };
        (worker, status_rx)
    }

    /// The executor jobs run on.  Useful for out-of-band calls such as
    /// [`MotionExecutor::emergency_stop`].
    pub fn executor(&self) -> &Arc<MotionExecutor> {
        &self.executor
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Starts `request` on the blocking thread pool.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Busy`] if another job has not finished yet.
    pub fn submit(&self, request: MotionRequest) -> Result<JobId, WorkerError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("motion rejected: another motion is in progress");
            return Err(WorkerError::Busy);
        }
        let guard = BusyGuard(Arc::clone(&self.busy));

        let job = JobId::new();
        let executor = Arc::clone(&self.executor);
        let status_tx = self.status_tx.clone();
        debug!(%job, ?request, "motion submitted");

        tokio::spawn(async move {
            // A closed receiver only means nobody is listening any more.
            let _ = status_tx.send(MotionStatus::Started { job });

            let handle = tokio::task::spawn_blocking(move || {
                let mut rng = rand::rng();
                executor.run(request, &mut rng)
            });
            let joined = handle.await;

            drop(guard);
            let status = match joined {
                Ok(Ok(outcome)) => MotionStatus::Finished { job, outcome },
                Ok(Err(e)) => MotionStatus::Failed {
                    job,
                    error: e.to_string(),
                },
                Err(e) => MotionStatus::Failed {
                    job,
                    error: WorkerError::Join(e.to_string()).to_string(),
                },
            };
            let _ = status_tx.send(status);
        });

        Ok(job)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::drive_cursor::{DriverError, MockCursorDriver};
    use crate::application::execute_motion::PathReport;
    use mousepath_core::{Point, ScreenBounds};
    use std::time::Duration;

    const HD: ScreenBounds = ScreenBounds::new(1920, 1080);

    fn worker_with(driver: MockCursorDriver) -> (MotionWorker, mpsc::UnboundedReceiver<MotionStatus>) {
        let executor = MotionExecutor::with_bounds(Arc::new(driver), HD);
        MotionWorker::new(Arc::new(executor))
    }

    fn slow_driver(delay: Duration) -> MockCursorDriver {
        let mut driver = MockCursorDriver::new();
        driver.expect_move_to().returning(move |_, _| {
            std::thread::sleep(delay);
            Ok(())
        });
        driver
    }

    fn move_request(x: i32, y: i32) -> MotionRequest {
        MotionRequest::MoveTo {
            target: Point::new(x, y),
            duration: Duration::from_millis(10),
        }
    }

    async fn final_status(rx: &mut mpsc::UnboundedReceiver<MotionStatus>) -> MotionStatus {
        loop {
            let status = rx.recv().await.expect("worker dropped the status channel");
            if status.is_final() {
                return status;
            }
        }
    }

    #[tokio::test]
    async fn test_submit_reports_started_then_finished() {
        // Arrange
        let (worker, mut rx) = worker_with(slow_driver(Duration::ZERO));

        // Act
        let job = worker.submit(move_request(100, 200)).unwrap();

        // Assert
        assert_eq!(rx.recv().await, Some(MotionStatus::Started { job }));
        assert_eq!(
            rx.recv().await,
            Some(MotionStatus::Finished {
                job,
                outcome: MotionOutcome::Moved(Point::new(100, 200)),
            })
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_busy_is_rejected() {
        // Arrange
        let (worker, mut rx) = worker_with(slow_driver(Duration::from_millis(150)));

        // Act
        let first = worker.submit(move_request(10, 10));
        let second = worker.submit(move_request(20, 20));

        // Assert
        assert!(first.is_ok());
        assert_eq!(second, Err(WorkerError::Busy));
        assert!(worker.is_busy());
        final_status(&mut rx).await;
    }

    #[tokio::test]
    async fn test_worker_accepts_new_job_after_final_status() {
        let (worker, mut rx) = worker_with(slow_driver(Duration::from_millis(20)));

        let first = worker.submit(move_request(10, 10)).unwrap();
        assert_eq!(final_status(&mut rx).await.job(), first);

        assert!(!worker.is_busy());
        let second = worker.submit(move_request(30, 30)).unwrap();
        assert_ne!(first, second);
        assert_eq!(final_status(&mut rx).await.job(), second);
    }

    #[tokio::test]
    async fn test_failed_motion_is_reported_with_message() {
        // Arrange
        let mut driver = MockCursorDriver::new();
        driver
            .expect_move_to()
            .returning(|_, _| Err(DriverError::FailSafeTriggered(Point::new(0, 0))));
        let (worker, mut rx) = worker_with(driver);

        // Act
        let job = worker.submit(move_request(10, 10)).unwrap();

        // Assert
        match final_status(&mut rx).await {
            MotionStatus::Failed { job: failed, error } => {
                assert_eq!(failed, job);
                assert!(error.contains("failsafe"), "unexpected message: {error}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!worker.is_busy());
    }

    #[tokio::test]
    async fn test_out_of_bounds_request_fails_without_moving() {
        let mut driver = MockCursorDriver::new();
        driver.expect_move_to().times(0);
        let (worker, mut rx) = worker_with(driver);

        worker.submit(move_request(5000, 10)).unwrap();

        assert!(matches!(final_status(&mut rx).await, MotionStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn test_path_job_reports_path_outcome() {
        let (worker, mut rx) = worker_with(slow_driver(Duration::ZERO));

        worker
            .submit(MotionRequest::FollowPath {
                path: vec![Point::new(1, 1), Point::new(-1, 1), Point::new(2, 2)],
                duration_per_point: Duration::ZERO,
            })
            .unwrap();

        match final_status(&mut rx).await {
            MotionStatus::Finished { outcome, .. } => assert_eq!(
                outcome,
                MotionOutcome::Path(PathReport {
                    visited: 2,
                    skipped: vec![Point::new(-1, 1)],
                })
            ),
            other => panic!("expected Finished, got {other:?}"),
        }
    }

    #[test]
    fn test_worker_error_messages() {
        assert_eq!(WorkerError::Busy.to_string(), "a motion is already in progress");
        assert_eq!(
            WorkerError::Join("panicked".to_string()).to_string(),
            "motion task did not complete: panicked"
        );
    }
}
