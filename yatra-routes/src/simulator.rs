//! Background hotspot risk simulation
//!
//! Every tick each hotspot's level takes a random step of -1, 0, or +1,
//! clamped to the 1..=5 scale, and the file is rewritten so other
//! processes see fresh levels. Persistence failures are logged and the
//! loop keeps running.

use crate::error::{Result, RoutesError};
use crate::models::Hotspot;
use crate::models::RiskLevel;
use crate::store::save_hotspots;
use parking_lot::RwLock;
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Seconds between risk updates.
    pub tick_secs: u64,
    /// File the updated levels are written back to.
    pub hotspots_path: PathBuf,
}

impl SimulatorConfig {
    pub fn new(hotspots_path: PathBuf) -> Self {
        Self {
            tick_secs: 30,
            hotspots_path,
        }
    }
}

pub struct RiskSimulator {
    config: SimulatorConfig,
    hotspots: Arc<RwLock<Vec<Hotspot>>>,
    is_running: Arc<RwLock<bool>>,
    handle: parking_lot::Mutex<Option<JoinHandle<()>>>,
}

impl RiskSimulator {
    pub fn new(config: SimulatorConfig, hotspots: Vec<Hotspot>) -> Self {
        Self {
            config,
            hotspots: Arc::new(RwLock::new(hotspots)),
            is_running: Arc::new(RwLock::new(false)),
            handle: parking_lot::Mutex::new(None),
        }
    }

    /// Current hotspot snapshot.
    pub fn hotspots(&self) -> Vec<Hotspot> {
        self.hotspots.read().clone()
    }

    pub fn is_running(&self) -> bool {
        *self.is_running.read()
    }

    /// Start the background walk. Starting twice is an error.
    pub fn start(&self) -> Result<()> {
        {
            let mut running = self.is_running.write();
            if *running {
                return Err(RoutesError::Simulator("already running".to_string()));
            }
            *running = true;
        }

        let hotspots = self.hotspots.clone();
        let is_running = self.is_running.clone();
        let tick = Duration::from_secs(self.config.tick_secs.max(1));
        let path = self.config.hotspots_path.clone();

        let handle = tokio::spawn(async move {
            info!("Risk simulator started (tick {:?})", tick);
            let mut interval = tokio::time::interval(tick);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first interval tick fires immediately; consume it so
            // levels only move after a full period.
            interval.tick().await;

            loop {
                interval.tick().await;
                if !*is_running.read() {
                    break;
                }

                let snapshot = {
                    let mut guard = hotspots.write();
                    let mut rng = rand::thread_rng();
                    for hotspot in guard.iter_mut() {
                        let step: i16 = rng.gen_range(-1..=1);
                        hotspot.risk = RiskLevel::clamped(hotspot.risk.value() as i16 + step);
                    }
                    guard.clone()
                };

                debug!("Risk walk updated {} hotspots", snapshot.len());
                if let Err(e) = save_hotspots(&path, &snapshot) {
                    error!("Failed to persist hotspot levels: {}", e);
                }
            }
            info!("Risk simulator stopped");
        });

        *self.handle.lock() = Some(handle);
        Ok(())
    }

    /// Signal the loop to stop and wait for it to finish.
    pub async fn stop(&self) {
        *self.is_running.write() = false;
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            handle.abort();
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_hotspots;
    use tempfile::NamedTempFile;
    use yatra_core::GeoPoint;

    fn sample_hotspots() -> Vec<Hotspot> {
        vec![
            Hotspot::new(GeoPoint::new(13.05, 80.28), RiskLevel::new(1).unwrap()),
            Hotspot::new(GeoPoint::new(13.06, 80.29), RiskLevel::new(5).unwrap()),
            Hotspot::new(GeoPoint::new(13.07, 80.30), RiskLevel::new(3).unwrap()),
        ]
    }

    #[tokio::test]
    async fn test_start_twice_fails() {
        let file = NamedTempFile::new().unwrap();
        let sim = RiskSimulator::new(
            SimulatorConfig::new(file.path().to_path_buf()),
            sample_hotspots(),
        );
        sim.start().unwrap();
        assert!(sim.start().is_err());
        sim.stop().await;
        assert!(!sim.is_running());
    }

    #[tokio::test]
    async fn test_walk_keeps_levels_in_range_and_persists() {
        let file = NamedTempFile::new().unwrap();
        let mut config = SimulatorConfig::new(file.path().to_path_buf());
        config.tick_secs = 1;
        let sim = RiskSimulator::new(config, sample_hotspots());

        tokio::time::pause();
        sim.start().unwrap();
        // Cross several ticks.
        for _ in 0..5 {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
        tokio::time::resume();

        for hotspot in sim.hotspots() {
            assert!((1..=5).contains(&hotspot.risk.value()));
        }
        sim.stop().await;

        let persisted = load_hotspots(file.path()).unwrap();
        assert_eq!(persisted.len(), 3);
    }

    #[tokio::test]
    async fn test_stop_without_start_is_harmless() {
        let file = NamedTempFile::new().unwrap();
        let sim = RiskSimulator::new(
            SimulatorConfig::new(file.path().to_path_buf()),
            sample_hotspots(),
        );
        sim.stop().await;
        assert!(!sim.is_running());
    }
}
