//! Integration tests for the strategy catalog across the engine boundary
//!
//! A recording engine captures the configuration each strategy hands over.

use shadowmodel::anonymization::{
    AnonymizationEngine, AnonymizationMethod, PopulationUniquenessModel, PrivacyModelSpec,
    Region, SearchAlgorithm, StrategyConfig,
};
use shadowmodel::domain::{
    AttributePolicy, ClassifiedAttribute, ClassifiedDataset, DataType, DatasetId, EngineError,
    Hierarchy, ShadowError, Table,
};
use std::str::FromStr;
use std::sync::Mutex;
use test_case::test_case;

#[derive(Default)]
struct RecordingEngine {
    calls: Mutex<Vec<StrategyConfig>>,
    fail_with: Option<fn() -> EngineError>,
}

impl RecordingEngine {
    fn failing(error: fn() -> EngineError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    fn last(&self) -> StrategyConfig {
        *self.calls.lock().unwrap().last().unwrap()
    }
}

impl AnonymizationEngine for RecordingEngine {
    fn run(&self, dataset: &ClassifiedDataset, config: StrategyConfig) -> Result<Table, EngineError> {
        self.calls.lock().unwrap().push(config);
        if let Some(error) = self.fail_with {
            return Err(error());
        }
        let mut output = dataset.table.clone();
        for row in &mut output.rows {
            row[0] = "*".to_string();
        }
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

fn sample_dataset() -> ClassifiedDataset {
    ClassifiedDataset::new(
        DatasetId::Texas10,
        Table::new(
            vec!["PAT_AGE".to_string(), "SEX_CODE".to_string()],
            vec![
                vec!["03".to_string(), "F".to_string()],
                vec!["05".to_string(), "M".to_string()],
            ],
        ),
        vec![
            ClassifiedAttribute {
                name: "PAT_AGE".to_string(),
                data_type: DataType::String,
                policy: AttributePolicy::QuasiIdentifying {
                    hierarchy: Hierarchy::new(vec![
                        vec!["03".to_string(), "*".to_string()],
                        vec!["05".to_string(), "*".to_string()],
                    ]),
                    aggregation: None,
                },
            },
            ClassifiedAttribute {
                name: "SEX_CODE".to_string(),
                data_type: DataType::String,
                policy: AttributePolicy::Insensitive,
            },
        ],
    )
}

#[test_case(AnonymizationMethod::Identity, 1, Some((SearchAlgorithm::BestEffortBottomUp, 1)) ; "identity")]
#[test_case(AnonymizationMethod::KAnonymity2, 2, Some((SearchAlgorithm::BestEffortTopDown, 1000)) ; "k2")]
#[test_case(AnonymizationMethod::KAnonymity5, 5, None ; "k5")]
#[test_case(AnonymizationMethod::KAnonymity10, 10, None ; "k10")]
fn test_k_anonymity_configs(
    method: AnonymizationMethod,
    k: u32,
    search: Option<(SearchAlgorithm, u32)>,
) {
    let engine = RecordingEngine::default();
    method.anonymize(&engine, &sample_dataset()).unwrap();

    let config = engine.last();
    assert_eq!(*config.privacy_model(), PrivacyModelSpec::KAnonymity { k });
    assert_eq!(config.suppression_limit(), 0.0);
    assert_eq!(
        config.algorithm().zip(config.heuristic_step_limit().map(|s| s.get())),
        search
    );
}

#[test]
fn test_pitman_config() {
    let engine = RecordingEngine::default();
    AnonymizationMethod::Pitman01
        .anonymize_with_suppression(&engine, &sample_dataset(), 0.2)
        .unwrap();

    let config = engine.last();
    assert_eq!(
        *config.privacy_model(),
        PrivacyModelSpec::PopulationUniqueness {
            threshold: 0.01,
            estimator: PopulationUniquenessModel::Pitman,
            region: Region::Usa,
        }
    );
    assert_eq!(config.suppression_limit(), 0.2);
    assert_eq!(config.algorithm(), Some(SearchAlgorithm::BestEffortTopDown));
    assert_eq!(config.heuristic_step_limit().map(|s| s.get()), Some(1000));
}

#[test]
fn test_engine_output_returned_unmodified() {
    let engine = RecordingEngine::default();
    let output = AnonymizationMethod::KAnonymity2
        .anonymize(&engine, &sample_dataset())
        .unwrap();

    assert_eq!(output.header, vec!["PAT_AGE", "SEX_CODE"]);
    assert_eq!(output.rows[0], vec!["*", "F"]);
    assert_eq!(output.rows[1], vec!["*", "M"]);
}

#[test]
fn test_repeated_calls_leave_dataset_untouched() {
    let engine = RecordingEngine::default();
    let dataset = sample_dataset();
    let before = dataset.clone();

    for method in AnonymizationMethod::ALL {
        method.anonymize(&engine, &dataset).unwrap();
        method.anonymize(&engine, &dataset).unwrap();
    }

    assert_eq!(dataset, before);
    assert_eq!(engine.calls.lock().unwrap().len(), 10);
}

#[test]
fn test_configs_are_independent_per_call() {
    let engine = RecordingEngine::default();
    let dataset = sample_dataset();

    AnonymizationMethod::KAnonymity5
        .anonymize_with_suppression(&engine, &dataset, 0.5)
        .unwrap();
    AnonymizationMethod::KAnonymity5
        .anonymize(&engine, &dataset)
        .unwrap();

    let calls = engine.calls.lock().unwrap();
    assert_eq!(calls[0].suppression_limit(), 0.5);
    assert_eq!(calls[1].suppression_limit(), 0.0);
}

#[test]
fn test_engine_failure_is_wrapped() {
    let engine = RecordingEngine::failing(|| EngineError::Failed {
        status: 137,
        stderr: "OutOfMemoryError".to_string(),
    });

    match AnonymizationMethod::KAnonymity10.anonymize(&engine, &sample_dataset()) {
        Err(ShadowError::AnonymizationExecution { strategy, source }) => {
            assert_eq!(strategy, "10-Anonymity");
            assert!(matches!(source, EngineError::Failed { status: 137, .. }));
        }
        other => panic!("expected wrapped engine failure, got {:?}", other),
    }
    assert_eq!(engine.calls.lock().unwrap().len(), 1);
}

#[test]
fn test_invalid_suppression_limit_never_reaches_engine() {
    let engine = RecordingEngine::default();
    let result =
        AnonymizationMethod::Identity.anonymize_with_suppression(&engine, &sample_dataset(), 1.5);

    assert!(matches!(result, Err(ShadowError::InvalidSuppressionLimit(_))));
    assert!(engine.calls.lock().unwrap().is_empty());
}

#[test_case("identity", AnonymizationMethod::Identity ; "identity key")]
#[test_case("2-Anonymity", AnonymizationMethod::KAnonymity2 ; "display name")]
#[test_case("K10", AnonymizationMethod::KAnonymity10 ; "uppercase key")]
#[test_case(" pitman01 ", AnonymizationMethod::Pitman01 ; "padded key")]
fn test_strategy_lookup(name: &str, expected: AnonymizationMethod) {
    assert_eq!(AnonymizationMethod::from_str(name).unwrap(), expected);
}

#[test]
fn test_unknown_strategy_rejected() {
    assert!(AnonymizationMethod::from_str("k3").is_err());
}
