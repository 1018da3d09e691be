//! JSON reference fixtures for SAR.
//!
//! Each case in `tests/fixtures/sar_reference.json` pins the exact values
//! TA-Lib produces for a small input, including the range placement and the
//! acceleration actually used.

#![allow(clippy::float_cmp)]

mod common;

use common::{assert_series_eq, EPSILON};
use fast_sar::indicators::{sar_range, sar_range_into};
use fast_sar::params::SarParams;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    indicator: String,
    cases: Vec<ReferenceCase>,
}

#[derive(Debug, Deserialize)]
struct ReferenceCase {
    name: String,
    rationale: String,
    input: ReferenceInput,
    params: ReferenceParams,
    expected: ReferenceExpected,
}

#[derive(Debug, Deserialize)]
struct ReferenceInput {
    high: Vec<f64>,
    low: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ReferenceParams {
    start_idx: usize,
    end_idx: usize,
    acceleration: f64,
    maximum: f64,
}

#[derive(Debug, Deserialize)]
struct ReferenceExpected {
    beg_idx: usize,
    nb_element: usize,
    acceleration: f64,
    values: Vec<f64>,
}

fn load_reference() -> ReferenceFile {
    let path = fixtures_dir().join("sar_reference.json");
    let content = fs::read_to_string(&path).expect("Failed to read fixture file");
    let file: ReferenceFile = serde_json::from_str(&content).expect("Invalid fixture schema");
    assert_eq!(file.indicator, "sar");
    assert!(!file.cases.is_empty(), "fixture file has no cases");
    file
}

fn find_case<'a>(file: &'a ReferenceFile, name: &str) -> &'a ReferenceCase {
    file.cases
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("missing fixture case {name}"))
}

#[test]
fn reference_all_cases() {
    let file = load_reference();
    for case in &file.cases {
        assert!(!case.rationale.is_empty(), "{}: missing rationale", case.name);

        let params = SarParams::new(case.params.acceleration, case.params.maximum);
        let (run, values) = sar_range(
            case.params.start_idx,
            case.params.end_idx,
            &case.input.high,
            &case.input.low,
            params,
        )
        .unwrap_or_else(|e| panic!("{}: {e}", case.name));

        assert_eq!(run.beg_idx, case.expected.beg_idx, "{}: beg_idx", case.name);
        assert_eq!(
            run.nb_element, case.expected.nb_element,
            "{}: nb_element",
            case.name
        );
        assert_eq!(
            run.acceleration, case.expected.acceleration,
            "{}: acceleration",
            case.name
        );
        assert_series_eq(&values, &case.expected.values, EPSILON, &case.name);
    }
}

#[test]
fn reference_f32_input_matches_within_tolerance() {
    let file = load_reference();
    for case in &file.cases {
        let high: Vec<f32> = case.input.high.iter().map(|&v| v as f32).collect();
        let low: Vec<f32> = case.input.low.iter().map(|&v| v as f32).collect();
        let params = SarParams::new(case.params.acceleration, case.params.maximum);

        let (run, values) =
            sar_range(case.params.start_idx, case.params.end_idx, &high, &low, params).unwrap();
        assert_eq!(run.nb_element, case.expected.nb_element, "{}", case.name);
        // Rounding of the stored prices only; the recurrence itself is f64.
        assert_series_eq(&values, &case.expected.values, 1e-4, &case.name);
    }
}

#[test]
fn reference_four_bar_scenario_exact() {
    let file = load_reference();
    let case = find_case(&file, "four_bar_scenario");
    let mut out = vec![f64::NAN; case.input.high.len()];
    let run = sar_range_into(
        case.params.start_idx,
        case.params.end_idx,
        &case.input.high,
        &case.input.low,
        SarParams::new(case.params.acceleration, case.params.maximum),
        &mut out,
    )
    .unwrap();

    assert_eq!(&out[..run.nb_element], case.expected.values.as_slice());
}

#[test]
fn reference_oversized_buffer_untouched_past_count() {
    let file = load_reference();
    let case = find_case(&file, "mid_series_start");
    let mut out = vec![-1.0_f64; case.input.high.len() + 5];
    let run = sar_range_into(
        case.params.start_idx,
        case.params.end_idx,
        &case.input.high,
        &case.input.low,
        SarParams::new(case.params.acceleration, case.params.maximum),
        &mut out,
    )
    .unwrap();

    assert!(out[run.nb_element..].iter().all(|&v| v == -1.0));
}
