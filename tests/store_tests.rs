//! Tabular data stores: landmark/hotspot CSVs, the risk simulator's
//! persistence, and the per-state recommendation catalog.

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use yatra_core::GeoPoint;
use yatra_recommend::models::AppCategory;
use yatra_recommend::RecommendationStore;
use yatra_routes::{
    load_hotspots, load_landmarks, save_hotspots, Hotspot, MarkerKind, MarkerSet, RiskLevel,
    RiskSimulator, SimulatorConfig,
};

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn map_layers_from_csv_files() {
    let landmarks_file = write_file(
        "Name,Category,Lat,Lng\n\
         Taj Mahal,Monument,27.1751,78.0421\n\
         Meenakshi Temple,Temple,9.9195,78.1193\n",
    );
    let hotspots_file = write_file("lat,lng,risk_level\n27.17,78.04,5\n");

    let landmarks = load_landmarks(landmarks_file.path()).unwrap();
    let hotspots = load_hotspots(hotspots_file.path()).unwrap();

    let set = MarkerSet::builder()
        .user_location(GeoPoint::new(27.2, 78.0))
        .landmarks(&landmarks)
        .hotspots(&hotspots)
        .build();

    assert_eq!(set.len(), 4);
    assert!(matches!(set.markers[0].kind, MarkerKind::User));
    assert!(matches!(
        set.markers[2].kind,
        MarkerKind::Landmark { icon: "place-of-worship" }
    ));
    assert!(matches!(
        set.markers[3].kind,
        MarkerKind::Hotspot { color: "black", risk: 5 }
    ));
}

#[tokio::test]
async fn simulator_persists_levels_between_runs() {
    let file = write_file("lat,lng,risk_level\n13.05,80.28,3\n13.06,80.29,1\n");
    let hotspots = load_hotspots(file.path()).unwrap();

    let mut config = SimulatorConfig::new(file.path().to_path_buf());
    config.tick_secs = 1;
    let sim = RiskSimulator::new(config, hotspots);

    tokio::time::pause();
    sim.start().unwrap();
    for _ in 0..3 {
        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
    }
    tokio::time::resume();
    sim.stop().await;

    // A fresh load sees whatever the simulator last wrote, still in range.
    let reloaded = load_hotspots(file.path()).unwrap();
    assert_eq!(reloaded.len(), 2);
    for hotspot in &reloaded {
        assert!((1..=5).contains(&hotspot.risk.value()));
    }
}

#[test]
fn hotspot_round_trip_preserves_levels() {
    let file = NamedTempFile::new().unwrap();
    let hotspots: Vec<Hotspot> = (1..=5)
        .map(|level| {
            Hotspot::new(
                GeoPoint::new(13.0 + level as f64 * 0.01, 80.28),
                RiskLevel::new(level).unwrap(),
            )
        })
        .collect();
    save_hotspots(file.path(), &hotspots).unwrap();
    assert_eq!(load_hotspots(file.path()).unwrap(), hotspots);
}

#[test]
fn recommendation_catalog_lookup() {
    let file = write_file(
        "State/UT,Taxi Apps,Taxi App Links,Famous Food 1,Famous Food 2,Famous Food 3\n\
         Rajasthan,\"Ola, Uber\",https://ola.example|https://uber.example,Dal Baati,Ghevar,Laal Maas\n\
         Kerala,Rapido,https://rapido.example,Appam,Puttu,Sadya\n",
    );
    let store = RecommendationStore::load(file.path()).unwrap();

    assert_eq!(store.states(), vec!["Rajasthan", "Kerala"]);

    let rajasthan = store.for_state("RAJASTHAN").unwrap();
    let taxi = rajasthan.apps_for(AppCategory::Taxi);
    assert_eq!(taxi.len(), 2);
    assert_eq!(taxi[1].name, "Uber");
    assert_eq!(taxi[1].link, "https://uber.example");
    assert_eq!(rajasthan.famous_foods.len(), 3);

    // Categories absent from the file read as empty, not as errors.
    assert!(rajasthan.apps_for(AppCategory::Hotel).is_empty());
    assert!(store.for_state("Sikkim").is_none());
}
