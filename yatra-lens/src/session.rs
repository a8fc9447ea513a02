//! Lens session: acquisition cadence, threshold policy, summary cache
//!
//! The session owns the pipeline plus all per-session state the page
//! needs: the display threshold, the label descriptions, and the cache of
//! summary lookups. Two acquisition policies are offered: single-shot for
//! an uploaded image and continuous for a camera stream.

use crate::config::LensConfig;
use crate::encoder::ImageEncoder;
use crate::error::LensError;
use crate::frame::{Frame, FrameSource};
use crate::labels::LabelSet;
use crate::overlay::{Overlay, RenderSink};
use crate::pipeline::ClassifierPipeline;
use crate::scorer::{Detection, LandmarkScorer};
use crate::summary::SummaryProvider;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// The three terminal states a frame can be displayed in. Every failure
/// below this boundary is absorbed into one of them.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Found {
        label: String,
        confidence: f32,
        description: String,
    },
    NoLandmark,
    Processing,
}

pub struct LensSession {
    config: LensConfig,
    labels: Arc<LabelSet>,
    pipeline: ClassifierPipeline,
    summaries: Arc<dyn SummaryProvider>,
    summary_cache: Mutex<HashMap<String, String>>,
    is_running: Arc<RwLock<bool>>,
}

impl LensSession {
    /// Validate config, precompute label embeddings, and start the worker.
    pub fn start(
        config: LensConfig,
        labels: Arc<LabelSet>,
        encoder: Arc<dyn ImageEncoder>,
        summaries: Arc<dyn SummaryProvider>,
    ) -> Result<Self, LensError> {
        config.validate().map_err(LensError::Config)?;
        let scorer = Arc::new(LandmarkScorer::new(encoder, &labels)?);
        let pipeline = ClassifierPipeline::start(scorer);
        Ok(Self {
            config,
            labels,
            pipeline,
            summaries,
            summary_cache: Mutex::new(HashMap::new()),
            is_running: Arc::new(RwLock::new(false)),
        })
    }

    /// Classify one uploaded frame.
    ///
    /// The submission is fire-and-forget; if no detection arrives within
    /// the configured bound the caller renders a pending placeholder
    /// instead of blocking indefinitely.
    pub async fn classify_once(&self, frame: Frame) -> DisplayState {
        match self
            .pipeline
            .submit_and_wait(frame, self.config.single_shot_timeout)
            .await
        {
            Some(detection) => self.resolve(Some(detection)).await,
            None => DisplayState::Processing,
        }
    }

    /// Run the continuous acquisition loop until the source closes or
    /// [`stop`](Self::stop) is called.
    ///
    /// Frames are pulled at the source's native rate; submission to the
    /// worker is throttled to the configured minimum interval, and every
    /// rendered frame uses the newest published detection regardless of
    /// which frame produced it.
    pub async fn run_continuous<S: FrameSource>(&self, mut source: S, sink: &dyn RenderSink) {
        {
            let mut is_running = self.is_running.write();
            if *is_running {
                warn!("Continuous lens loop already running");
                return;
            }
            *is_running = true;
        }
        info!("Continuous lens loop started");

        let mut last_submit: Option<Instant> = None;
        while *self.is_running.read() {
            let Some(frame) = source.next_frame().await else {
                break;
            };

            let due = last_submit
                .map_or(true, |t| t.elapsed() >= self.config.min_submit_interval);
            if due && self.pipeline.submit(frame.clone()) {
                last_submit = Some(Instant::now());
            }

            let state = self.resolve(self.pipeline.latest()).await;
            let overlay = Overlay::from_state(&state, self.config.wrap_width);
            sink.render(&frame, &overlay);
        }

        *self.is_running.write() = false;
        info!("Continuous lens loop stopped");
    }

    /// Apply the threshold policy to a detection.
    ///
    /// A below-threshold hit keeps its label and confidence in the record
    /// but is displayed as a miss; only the display is suppressed.
    async fn resolve(&self, detection: Option<Detection>) -> DisplayState {
        let Some(detection) = detection else {
            return DisplayState::Processing;
        };
        match detection.as_hit() {
            Some((label, confidence)) if confidence >= self.config.similarity_threshold => {
                let description = self.describe(label).await;
                DisplayState::Found {
                    label: label.to_string(),
                    confidence,
                    description,
                }
            }
            _ => DisplayState::NoLandmark,
        }
    }

    /// Description for a confirmed label: session cache, then the summary
    /// collaborator, then the label set's built-in fallback. Whatever text
    /// was obtained is cached so each distinct label is looked up at most
    /// once per session.
    pub async fn describe(&self, label: &str) -> String {
        if let Some(cached) = self.summary_cache.lock().get(label).cloned() {
            return cached;
        }
        let text = match self.summaries.summary(label).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Summary lookup for '{}' failed, using fallback: {}", label, e);
                self.labels.description(label).unwrap_or_default().to_string()
            }
        };
        self.summary_cache.lock().insert(label.to_string(), text.clone());
        text
    }

    /// Ask a running continuous loop to exit after its current frame.
    pub fn stop(&self) {
        *self.is_running.write() = false;
    }

    /// Stop the loop and join the classification worker.
    pub async fn shutdown(&self) {
        self.stop();
        self.pipeline.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Encoder whose similarity is driven by the frame's first pixel:
    /// 200 scores 35 against the first label, 10 scores 10.
    struct PixelDrivenEncoder;

    impl ImageEncoder for PixelDrivenEncoder {
        fn encode_image(&self, frame: &Frame) -> Result<Vec<f32>, LensError> {
            let cos = match frame.pixels.first() {
                Some(200) => 0.35,
                Some(10) => 0.10,
                _ => 0.0,
            };
            Ok(vec![cos, 0.0, (1.0f32 - cos * cos).sqrt()])
        }

        fn encode_text(&self, labels: &[&str]) -> Result<Vec<Vec<f32>>, LensError> {
            Ok(labels
                .iter()
                .enumerate()
                .map(|(i, _)| {
                    let mut v = vec![0.0; 3];
                    v[i.min(2)] = 1.0;
                    v
                })
                .collect())
        }
    }

    struct CountingSummaries {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl SummaryProvider for CountingSummaries {
        async fn summary(&self, label: &str) -> Result<String, LensError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LensError::Summary("service unavailable".to_string()))
            } else {
                Ok(format!("{} is a famous landmark.", label))
            }
        }
    }

    struct CollectingSink {
        headers: Mutex<Vec<String>>,
    }

    impl RenderSink for CollectingSink {
        fn render(&self, _frame: &Frame, overlay: &Overlay) {
            self.headers.lock().push(overlay.header.clone());
        }
    }

    fn labels() -> Arc<LabelSet> {
        Arc::new(
            LabelSet::new(vec![
                ("Taj Mahal".to_string(), "Fallback description.".to_string()),
                ("Eiffel Tower".to_string(), "Iron tower.".to_string()),
            ])
            .unwrap(),
        )
    }

    fn frame_with_pixel(value: u8) -> Frame {
        Frame::new(1, 1, vec![value, 0, 0]).unwrap()
    }

    fn session(summaries: Arc<dyn SummaryProvider>) -> LensSession {
        LensSession::start(
            LensConfig::default(),
            labels(),
            Arc::new(PixelDrivenEncoder),
            summaries,
        )
        .unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_above_threshold_displays_found() {
        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let session = session(summaries);
        let state = session.classify_once(frame_with_pixel(200)).await;
        match state {
            DisplayState::Found {
                label, confidence, ..
            } => {
                assert_eq!(label, "Taj Mahal");
                assert!((confidence - 35.0).abs() < 0.01);
            }
            other => panic!("Expected Found, got {:?}", other),
        }
        session.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_below_threshold_suppresses_label() {
        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let session = session(summaries.clone());
        // Similarity 10 against threshold 22: label stays internal.
        let state = session.classify_once(frame_with_pixel(10)).await;
        assert_eq!(state, DisplayState::NoLandmark);
        // The suppressed label is still in the published record.
        let latest = session.pipeline.latest().unwrap();
        assert_eq!(latest.label.as_deref(), Some("Taj Mahal"));
        assert!((latest.confidence.unwrap() - 10.0).abs() < 0.01);
        // And no summary lookup happened for it.
        assert_eq!(summaries.calls.load(Ordering::SeqCst), 0);
        session.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_below_threshold_never_displays_across_cycles() {
        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let session = session(summaries);
        for _ in 0..5 {
            let state = session.classify_once(frame_with_pixel(10)).await;
            assert_eq!(state, DisplayState::NoLandmark);
        }
        session.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_summary_cached_per_label() {
        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let session = session(summaries.clone());
        for _ in 0..4 {
            let state = session.classify_once(frame_with_pixel(200)).await;
            assert!(matches!(state, DisplayState::Found { .. }));
        }
        assert_eq!(summaries.calls.load(Ordering::SeqCst), 1);
        session.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_summary_failure_falls_back_to_label_description() {
        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let session = session(summaries.clone());
        let state = session.classify_once(frame_with_pixel(200)).await;
        match state {
            DisplayState::Found { description, .. } => {
                assert_eq!(description, "Fallback description.");
            }
            other => panic!("Expected Found, got {:?}", other),
        }
        // The fallback is cached too; the dead service is not re-polled.
        session.describe("Taj Mahal").await;
        assert_eq!(summaries.calls.load(Ordering::SeqCst), 1);
        session.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_continuous_loop_renders_every_frame() {
        struct PacedSource {
            remaining: usize,
        }

        #[async_trait]
        impl FrameSource for PacedSource {
            async fn next_frame(&mut self) -> Option<Frame> {
                if self.remaining == 0 {
                    return None;
                }
                self.remaining -= 1;
                tokio::time::sleep(Duration::from_millis(20)).await;
                Some(frame_with_pixel(200))
            }
        }

        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let mut config = LensConfig::default();
        config.min_submit_interval = Duration::from_millis(0);
        let session = LensSession::start(
            config,
            labels(),
            Arc::new(PixelDrivenEncoder),
            summaries,
        )
        .unwrap();

        let sink = CollectingSink {
            headers: Mutex::new(Vec::new()),
        };
        session
            .run_continuous(PacedSource { remaining: 6 }, &sink)
            .await;

        let headers = sink.headers.lock().clone();
        // One render per pulled frame, even before the first detection.
        assert_eq!(headers.len(), 6);
        let found = "Taj Mahal  [35.0]";
        // The very first render may race the first publish; after that
        // the stale-but-recent detection is always on screen.
        assert!(headers[0] == "Processing..." || headers[0] == found);
        for header in &headers[1..] {
            assert_eq!(header, found);
        }
        session.shutdown().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_continuous_submissions_throttled() {
        struct CountingEncoder {
            encodes: Arc<AtomicUsize>,
        }

        impl ImageEncoder for CountingEncoder {
            fn encode_image(&self, _frame: &Frame) -> Result<Vec<f32>, LensError> {
                self.encodes.fetch_add(1, Ordering::SeqCst);
                Ok(vec![0.35, 0.0, (1.0f32 - 0.35 * 0.35).sqrt()])
            }

            fn encode_text(&self, labels: &[&str]) -> Result<Vec<Vec<f32>>, LensError> {
                Ok(labels
                    .iter()
                    .enumerate()
                    .map(|(i, _)| {
                        let mut v = vec![0.0; 3];
                        v[i.min(2)] = 1.0;
                        v
                    })
                    .collect())
            }
        }

        struct FastSource {
            remaining: usize,
        }

        #[async_trait]
        impl FrameSource for FastSource {
            async fn next_frame(&mut self) -> Option<Frame> {
                if self.remaining == 0 {
                    return None;
                }
                self.remaining -= 1;
                tokio::time::sleep(Duration::from_millis(5)).await;
                Some(frame_with_pixel(200))
            }
        }

        let encodes = Arc::new(AtomicUsize::new(0));
        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let mut config = LensConfig::default();
        // Ten frames arrive in well under one interval; only the first
        // may reach the worker.
        config.min_submit_interval = Duration::from_secs(5);
        let session = LensSession::start(
            config,
            labels(),
            Arc::new(CountingEncoder {
                encodes: encodes.clone(),
            }),
            summaries,
        )
        .unwrap();

        let sink = CollectingSink {
            headers: Mutex::new(Vec::new()),
        };
        session
            .run_continuous(FastSource { remaining: 10 }, &sink)
            .await;
        session.shutdown().await;

        assert_eq!(encodes.load(Ordering::SeqCst), 1);
        // Throttling bounds the worker, not the render rate.
        assert_eq!(sink.headers.lock().len(), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_stop_ends_continuous_loop() {
        struct EndlessSource;

        #[async_trait]
        impl FrameSource for EndlessSource {
            async fn next_frame(&mut self) -> Option<Frame> {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Some(Frame::new(1, 1, vec![0, 0, 0]).unwrap())
            }
        }

        struct NullSink;
        impl RenderSink for NullSink {
            fn render(&self, _frame: &Frame, _overlay: &Overlay) {}
        }

        let summaries = Arc::new(CountingSummaries {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let session = Arc::new(session(summaries));
        let runner = session.clone();
        let handle = tokio::spawn(async move {
            runner.run_continuous(EndlessSource, &NullSink).await;
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        session.stop();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("loop exits after stop")
            .unwrap();
        session.shutdown().await;
    }
}
