use midpoint_search::{search, BinarySearch, Mode, Termination};

/// `[1, max_value - 21]` at 8 bits, short enough that small targets never overflow.
fn demo_sequence() -> Vec<i64> {
    (1..=106).collect()
}

#[test]
fn small_target_is_found_despite_prone_midpoint() {
    let seq = demo_sequence();
    assert_eq!(search(&seq, &7, seq.len(), Mode::OverflowProne), 6);
}

#[test]
fn large_target_is_lost_to_midpoint_overflow() {
    let seq = demo_sequence();
    let report = BinarySearch::with_default_width(Mode::OverflowProne).run(&seq, &100, seq.len());

    assert_eq!(report.result, -1);
    assert!(report.termination.is_defensive());
    assert_eq!(report.termination, Termination::IterationCap { iterations: seq.len() });
    assert!(report.trace.midpoints().iter().any(|&mid| mid < 0));
}

#[test]
fn large_target_is_found_with_safe_midpoint() {
    let seq = demo_sequence();
    assert_eq!(search(&seq, &100, seq.len(), Mode::OverflowSafe), 99);
}

#[test]
fn wider_index_removes_the_overflow() {
    let seq = demo_sequence();
    let report = BinarySearch::new(Mode::OverflowProne, 16)
        .unwrap()
        .run(&seq, &100, seq.len());

    assert_eq!(report.termination, Termination::Found { index: 99 });
}

#[test]
fn every_element_is_found_in_safe_mode() {
    let seq = demo_sequence();
    let search = BinarySearch::with_default_width(Mode::OverflowSafe);
    for (index, value) in seq.iter().enumerate() {
        assert_eq!(search.run(&seq, value, seq.len()).found(), Some(index));
    }
}

#[test]
fn report_serializes_to_json() {
    let seq = demo_sequence();
    let report = BinarySearch::with_default_width(Mode::OverflowProne).run(&seq, &100, seq.len());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mode"], "prone");
    assert_eq!(json["result"], -1);
    assert_eq!(json["termination"]["kind"], "iteration_cap");
    assert_eq!(json["termination"]["iterations"], 106);
    assert_eq!(json["trace"].as_array().unwrap().len(), 106);
    assert_eq!(json["trace"][1]["mid"]["value"], -49);
}
