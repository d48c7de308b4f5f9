//! Tests for graceful shutdown of a running sweep
//!
//! A shutdown signal stops new (dataset, strategy) pairs from starting. A pair
//! already inside the engine runs to completion and keeps its result.

use shadowmodel::adapters::resources::CsvResourceLoader;
use shadowmodel::anonymization::{AnonymizationEngine, AnonymizationMethod, StrategyConfig};
use shadowmodel::core::sweep::{PairStatus, SweepCoordinator, SweepSettings};
use shadowmodel::core::AttributeClassifier;
use shadowmodel::domain::{ClassifiedDataset, DatasetId, EngineError, Table};
use std::fs;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::watch;

/// Engine that blocks inside `run` until released
#[derive(Default)]
struct GatedEngine {
    started: AtomicUsize,
    released: AtomicBool,
}

impl AnonymizationEngine for GatedEngine {
    fn run(&self, dataset: &ClassifiedDataset, _config: StrategyConfig) -> Result<Table, EngineError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        while !self.released.load(Ordering::SeqCst) {
            std::thread::sleep(Duration::from_millis(5));
        }
        Ok(dataset.table.clone())
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

fn texas10_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("texas_10.csv"), "PAT_AGE;SEX_CODE\n03;F\n05;M\n").unwrap();
    fs::write(
        data.join("texas_10.cfg"),
        "PAT_AGE;categorical;TRUE;FALSE\nSEX_CODE;categorical;TRUE;FALSE\n",
    )
    .unwrap();
    dir
}

async fn wait_for_start(engine: &GatedEngine) {
    for _ in 0..400 {
        if engine.started.load(Ordering::SeqCst) > 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("engine never started");
}

#[tokio::test]
async fn test_shutdown_signal_propagation() {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut rx_clone = shutdown_rx.clone();

    shutdown_tx.send(true).unwrap();
    rx_clone.changed().await.unwrap();

    assert!(*shutdown_rx.borrow());
    assert!(*rx_clone.borrow());
}

#[tokio::test]
async fn test_shutdown_mid_sweep_lets_running_pair_finish() {
    let data = texas10_fixture();
    let engine = Arc::new(GatedEngine::default());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let settings = SweepSettings {
        datasets: vec![DatasetId::Texas10],
        strategies: AnonymizationMethod::ALL.to_vec(),
        suppression_limit: 0.0,
        max_parallel: 1,
        output_dir: None,
        dry_run: false,
    };
    let classifier = AttributeClassifier::new(Arc::new(CsvResourceLoader::new(data.path())));
    let coordinator = SweepCoordinator::new(classifier, engine.clone(), settings, shutdown_rx);

    let sweep = tokio::spawn(async move { coordinator.execute().await });

    wait_for_start(&engine).await;
    shutdown_tx.send(true).unwrap();
    engine.released.store(true, Ordering::SeqCst);

    let summary = sweep.await.unwrap().unwrap();

    assert_eq!(engine.started.load(Ordering::SeqCst), 1);
    assert_eq!(summary.total(), 5);
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.skipped(), 4);
    assert!(!summary.is_successful());
    assert!(matches!(
        summary.outcomes[0].status,
        PairStatus::Succeeded { rows: 2, .. }
    ));
}

#[tokio::test]
async fn test_shutdown_skips_remaining_datasets() {
    let data = texas10_fixture();
    let engine = Arc::new(GatedEngine::default());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let settings = SweepSettings {
        datasets: vec![DatasetId::Texas10, DatasetId::Adult],
        strategies: vec![AnonymizationMethod::Identity],
        suppression_limit: 0.0,
        max_parallel: 1,
        output_dir: None,
        dry_run: false,
    };
    let classifier = AttributeClassifier::new(Arc::new(CsvResourceLoader::new(data.path())));
    let coordinator = SweepCoordinator::new(classifier, engine.clone(), settings, shutdown_rx);

    let sweep = tokio::spawn(async move { coordinator.execute().await });

    wait_for_start(&engine).await;
    shutdown_tx.send(true).unwrap();
    engine.released.store(true, Ordering::SeqCst);

    let summary = sweep.await.unwrap().unwrap();

    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.failed(), 0);
    let adult = summary
        .outcomes
        .iter()
        .find(|o| o.dataset == DatasetId::Adult)
        .unwrap();
    assert_eq!(adult.status, PairStatus::Skipped);
}
