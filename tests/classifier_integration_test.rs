//! Integration tests for attribute classification against on-disk datasets

use shadowmodel::adapters::resources::CsvResourceLoader;
use shadowmodel::core::AttributeClassifier;
use shadowmodel::domain::{
    AggregationFunction, DataType, DatasetId, Locale, ResourceKind, ShadowError,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// ADULT-shaped dataset: two QIs, one insensitive attribute, one excluded column
fn adult_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "data/adult.csv",
        "age;sex;race;income\n39;Male;White;<=50K\n50;Female;Black;>50K\n",
    );
    write(
        root,
        "data/adult.cfg",
        "age;continuous;TRUE;TRUE\nsex;categorical;TRUE;TRUE\nrace;categorical;TRUE;FALSE\nincome;ordinal;FALSE;FALSE\n",
    );
    write(root, "data/adult_hierarchy_age.csv", "39;30-39;*\n50;50-59;*\n");
    write(root, "data/adult_hierarchy_sex.csv", "Male;*\nFemale;*\n");
    dir
}

fn classifier(root: &Path) -> AttributeClassifier {
    AttributeClassifier::new(Arc::new(CsvResourceLoader::new(root)))
}

#[test]
fn test_classify_adult() {
    let dir = adult_fixture();
    let dataset = classifier(dir.path()).classify(DatasetId::Adult).unwrap();

    assert_eq!(dataset.id, DatasetId::Adult);
    assert_eq!(dataset.table.row_count(), 2);
    assert_eq!(dataset.table.column_count(), 4);

    let names: Vec<&str> = dataset.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["age", "sex", "race"]);

    let age = dataset.attribute("age").unwrap();
    assert!(age.is_quasi_identifier());
    assert_eq!(
        age.data_type,
        DataType::Decimal {
            format: "#.#".to_string(),
            locale: Locale::EnUs,
        }
    );
    assert_eq!(age.hierarchy().unwrap().depth(), 3);
    let aggregation = age.aggregation().unwrap();
    assert_eq!(aggregation.function, AggregationFunction::ArithmeticMean);
    assert!(aggregation.ignore_missing_data);

    let sex = dataset.attribute("sex").unwrap();
    assert_eq!(sex.data_type, DataType::String);
    assert!(sex.is_quasi_identifier());
    assert!(sex.aggregation().is_none());
    assert_eq!(sex.hierarchy().unwrap().rows[1], vec!["Female", "*"]);

    let race = dataset.attribute("race").unwrap();
    assert!(!race.is_quasi_identifier());
    assert!(race.hierarchy().is_none());

    assert!(dataset.attribute("income").is_none());
}

#[test]
fn test_classification_is_fresh_each_call() {
    let dir = adult_fixture();
    let classifier = classifier(dir.path());

    let first = classifier.classify(DatasetId::Adult).unwrap();
    let second = classifier.classify(DatasetId::Adult).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_hierarchy_fails_whole_classification() {
    let dir = adult_fixture();
    fs::remove_file(dir.path().join("data/adult_hierarchy_sex.csv")).unwrap();

    match classifier(dir.path()).classify(DatasetId::Adult) {
        Err(ShadowError::ResourceLoad { resource, path, .. }) => {
            assert_eq!(resource, ResourceKind::Hierarchy);
            assert!(path.ends_with("data/adult_hierarchy_sex.csv"));
        }
        other => panic!("expected hierarchy load failure, got {:?}", other),
    }
}

#[test]
fn test_missing_data_source() {
    let dir = adult_fixture();
    fs::remove_file(dir.path().join("data/adult.csv")).unwrap();

    assert!(matches!(
        classifier(dir.path()).classify(DatasetId::Adult),
        Err(ShadowError::ResourceLoad {
            resource: ResourceKind::DataSource,
            ..
        })
    ));
}

#[test]
fn test_included_ordinal_is_unsupported() {
    let dir = adult_fixture();
    write(
        dir.path(),
        "data/adult.cfg",
        "age;continuous;TRUE;TRUE\nincome;ordinal;TRUE;FALSE\n",
    );

    match classifier(dir.path()).classify(DatasetId::Adult) {
        Err(ShadowError::UnsupportedAttributeKind { attribute, kind }) => {
            assert_eq!(attribute, "income");
            assert_eq!(kind, "ordinal");
        }
        other => panic!("expected unsupported kind, got {:?}", other),
    }
}

#[test]
fn test_unknown_kind_is_invalid_type() {
    let dir = adult_fixture();
    write(dir.path(), "data/adult.cfg", "race;nominal;TRUE;FALSE\n");

    assert!(matches!(
        classifier(dir.path()).classify(DatasetId::Adult),
        Err(ShadowError::InvalidAttributeType { ref attribute, ref kind })
            if attribute == "race" && kind == "nominal"
    ));
}

#[test]
fn test_unknown_kind_on_excluded_row_is_ignored() {
    let dir = adult_fixture();
    write(
        dir.path(),
        "data/adult.cfg",
        "race;nominal;FALSE;FALSE\nsex;categorical;TRUE;FALSE\n",
    );

    let dataset = classifier(dir.path()).classify(DatasetId::Adult).unwrap();
    assert_eq!(dataset.attributes.len(), 1);
    assert_eq!(dataset.attributes[0].name, "sex");
}

#[test]
fn test_lowercase_flags_are_false() {
    let dir = adult_fixture();
    write(
        dir.path(),
        "data/adult.cfg",
        "age;continuous;true;TRUE\nsex;categorical;TRUE;true\n",
    );

    let dataset = classifier(dir.path()).classify(DatasetId::Adult).unwrap();
    assert_eq!(dataset.attributes.len(), 1);
    assert!(!dataset.attributes[0].is_quasi_identifier());
}

#[test]
fn test_short_config_row_is_malformed() {
    let dir = adult_fixture();
    write(dir.path(), "data/adult.cfg", "age;continuous;TRUE\n");

    assert!(matches!(
        classifier(dir.path()).classify(DatasetId::Adult),
        Err(ShadowError::MalformedAttributeConfig { row: 0, .. })
    ));
}

#[test]
fn test_adult_full_hierarchies_use_commas() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "data_new/adult_full.csv", "age;sex\n39;Male\n");
    write(
        root,
        "data_new/adult_full.cfg",
        "age;continuous;TRUE;TRUE\nsex;categorical;TRUE;FALSE\n",
    );
    write(root, "data_new/adult_full_hierarchy_age.csv", "39,30-39,*\n");

    let dataset = classifier(root).classify(DatasetId::AdultFull).unwrap();
    let hierarchy = dataset.attribute("age").unwrap().hierarchy().unwrap();
    assert_eq!(hierarchy.rows, vec![vec!["39", "30-39", "*"]]);
}

#[test]
fn test_crafted_variant_shares_base_configuration() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "data_new/texas.csv", "PAT_AGE;SEX_CODE\n03;F\n05;M\n");
    write(root, "data_new/texas_crafted.csv", "PAT_AGE;SEX_CODE\n07;M\n");
    write(
        root,
        "data_new/texas_NHS.cfg",
        "PAT_AGE;categorical;TRUE;TRUE\nSEX_CODE;categorical;TRUE;FALSE\n",
    );
    write(root, "data_new/texas_hierarchy_PAT_AGE.csv", "03;*\n05;*\n07;*\n");

    let classifier = classifier(root);
    let base = classifier.classify(DatasetId::Texas).unwrap();
    let crafted = classifier.classify(DatasetId::TexasCrafted).unwrap();

    assert_eq!(base.attributes, crafted.attributes);
    assert_eq!(base.table.row_count(), 2);
    assert_eq!(crafted.table.row_count(), 1);
}
