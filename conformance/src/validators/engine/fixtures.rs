//! Fixture validator.
//!
//! Classifies each built-in fixture document and compares every partition
//! with the fixture's expected lines. The AML fixture is also converted to
//! clauses and compared line by line.

use facts_engine::datalog::document_clauses;
use facts_engine::{Classifier, PartitionKind, Partitions};
use facts_graph::Graph;

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures::{self, Expected};

/// Runs every fixture through the engine.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_partitions("aml_tank", fixtures::AML_TANK, fixtures::AML_TANK_EXPECTED, &mut report);
    check_partitions(
        "opcua_boiler",
        fixtures::OPCUA_BOILER,
        fixtures::OPCUA_BOILER_EXPECTED,
        &mut report,
    );
    check_partitions(
        "mixed_plant",
        fixtures::MIXED_PLANT,
        fixtures::MIXED_PLANT_EXPECTED,
        &mut report,
    );
    check_clauses(&mut report);

    report
}

fn classify(source: &str, name: &str) -> Result<Partitions, String> {
    let graph = Graph::from_turtle_str(name, source).map_err(|e| e.to_string())?;
    Classifier::default()
        .classify(&graph)
        .map_err(|e| e.to_string())
}

fn check_partitions(name: &str, source: &str, expected: Expected, report: &mut ConformanceReport) {
    let validator = format!("engine/fixtures/{name}");
    let partitions = match classify(source, name) {
        Ok(p) => p,
        Err(e) => {
            report.push(TestResult::fail(validator, format!("classification failed: {e}")));
            return;
        }
    };

    let mut mismatches = Vec::new();
    for kind in PartitionKind::ALL {
        let want: &[&str] = expected
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, lines)| *lines)
            .unwrap_or(&[]);
        let got: Vec<String> = partitions.get(kind).lines().collect();
        if got != want {
            mismatches.push(format!("{kind}: expected {want:?}, got {got:?}"));
        }
    }

    if mismatches.is_empty() {
        report.push(TestResult::pass(
            validator,
            "all five partitions match the expected lines",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            validator,
            format!("{} partition(s) differ", mismatches.len()),
            mismatches,
        ));
    }
}

fn check_clauses(report: &mut ConformanceReport) {
    let validator = "engine/fixtures/aml_tank_clauses";
    let clauses = Graph::from_turtle_str("aml_tank", fixtures::AML_TANK)
        .map_err(|e| e.to_string())
        .and_then(|graph| document_clauses(&graph, 1).map_err(|e| e.to_string()));

    match clauses {
        Ok(lines) if lines == fixtures::AML_TANK_CLAUSES => report.push(TestResult::pass(
            validator,
            format!("{} clauses match", lines.len()),
        )),
        Ok(lines) => report.push(TestResult::fail_with_details(
            validator,
            "clause lines differ",
            lines,
        )),
        Err(e) => report.push(TestResult::fail(
            validator,
            format!("clause conversion failed: {e}"),
        )),
    }
}
