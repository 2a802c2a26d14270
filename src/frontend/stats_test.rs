use crate::frontend::TransportStats;

#[test]
fn stats_accumulate_successes_and_failures() {
    let mut stats = TransportStats::default();
    stats.record_success(100, 40);
    stats.record_success(300, 60);
    stats.record_failure();

    assert_eq!(stats.payloads, 3);
    assert_eq!(stats.compressed, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.raw_bytes, 400);
    assert_eq!(stats.compressed_bytes, 100);
    assert_eq!(stats.overall_ratio(), 0.75);
}

#[test]
fn empty_session_has_zero_ratio() {
    assert_eq!(TransportStats::default().overall_ratio(), 0.0);
}
