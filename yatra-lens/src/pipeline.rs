//! Classification worker and single-slot hand-off
//!
//! Two units of execution share exactly two capacity-1 slots: the inbound
//! frame slot and the outbound detection slot. The worker is the sole
//! reader of the first and the sole writer of the second. Submissions are
//! best-effort: a full inbound slot drops the new frame instead of
//! blocking, and a fresh detection overwrites an unconsumed older one.

use crate::frame::Frame;
use crate::scorer::{Detection, LandmarkScorer};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Inbound slot message: a frame to classify or the stop sentinel.
enum WorkerInput {
    Frame(Frame),
    Shutdown,
}

/// Handle to a running classification worker.
pub struct ClassifierPipeline {
    inbound: mpsc::Sender<WorkerInput>,
    latest: watch::Receiver<Option<Detection>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl ClassifierPipeline {
    /// Spawn the worker task. The scorer and its label set are read-only
    /// after this point and shared by reference.
    pub fn start(scorer: Arc<LandmarkScorer>) -> Self {
        let (inbound_tx, mut inbound_rx) = mpsc::channel::<WorkerInput>(1);
        let (latest_tx, latest_rx) = watch::channel::<Option<Detection>>(None);

        let handle = tokio::spawn(async move {
            while let Some(input) = inbound_rx.recv().await {
                let frame = match input {
                    WorkerInput::Frame(frame) => frame,
                    WorkerInput::Shutdown => break,
                };
                // Exactly one inference per accepted frame. A scoring
                // failure publishes an empty detection; only the sentinel
                // ends this loop.
                let detection = scorer.score(&frame);
                if latest_tx.send(Some(detection)).is_err() {
                    warn!("Detection slot has no receivers, stopping worker");
                    break;
                }
            }
            info!("Classification worker stopped");
        });

        Self {
            inbound: inbound_tx,
            latest: latest_rx,
            worker: Mutex::new(Some(handle)),
        }
    }

    /// Offer a frame to the worker without blocking.
    ///
    /// Returns `false` when the inbound slot is already occupied or the
    /// worker is gone; the frame is dropped in both cases.
    pub fn submit(&self, frame: Frame) -> bool {
        match self.inbound.try_send(WorkerInput::Frame(frame)) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                debug!("Inbound slot occupied, dropping frame");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!("Classification worker gone, dropping frame");
                false
            }
        }
    }

    /// Newest published detection, if any has been produced yet.
    pub fn latest(&self) -> Option<Detection> {
        self.latest.borrow().clone()
    }

    /// Wait for the next detection published after this call, up to
    /// `timeout`. Returns `None` when the bound elapses first.
    pub async fn wait_for_next(&self, timeout: Duration) -> Option<Detection> {
        let mut receiver = self.latest.clone();
        // Mark the current value seen so only a fresh publish wakes us.
        receiver.borrow_and_update();
        Self::await_change(receiver, timeout).await
    }

    /// Single-shot hand-off: submit one frame (best-effort, no retry) and
    /// wait up to `timeout` for the next published detection. The outbound
    /// slot is snapshotted before the submission so a result that lands
    /// immediately is not mistaken for an old one.
    pub async fn submit_and_wait(&self, frame: Frame, timeout: Duration) -> Option<Detection> {
        let mut receiver = self.latest.clone();
        receiver.borrow_and_update();
        self.submit(frame);
        Self::await_change(receiver, timeout).await
    }

    async fn await_change(
        mut receiver: watch::Receiver<Option<Detection>>,
        timeout: Duration,
    ) -> Option<Detection> {
        match tokio::time::timeout(timeout, receiver.changed()).await {
            Ok(Ok(())) => receiver.borrow().clone(),
            Ok(Err(_)) => None,
            Err(_) => None,
        }
    }

    /// Signal shutdown and join the worker.
    ///
    /// The sentinel travels through the inbound slot in place of a frame,
    /// so an in-progress inference completes before the worker exits. No
    /// detection is published after this returns.
    pub async fn shutdown(&self) {
        if self.inbound.send(WorkerInput::Shutdown).await.is_err() {
            debug!("Worker already stopped");
        }
        let handle = self.worker.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!("Classification worker join failed: {}", e);
            }
        }
    }
}
