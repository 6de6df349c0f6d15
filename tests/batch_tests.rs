use std::io::Write;
use std::sync::{Arc, Mutex};

use renko_builder::renko::batch::{build_from_series, build_from_series_with_limit};
use renko_builder::renko::builder::BrickBuilder;
use renko_builder::RenkoError;
use rstest::rstest;

#[test]
fn steps_from_first_price() {
    let bricks = build_from_series(&[100, 125], 10).unwrap();
    assert_eq!(bricks, vec![(100, 110), (110, 120)]);
}

#[test]
fn matches_incremental_builder_when_anchor_is_on_grid() {
    let series = [100, 125, 95, 101, 131];
    let batch = build_from_series(&series, 10).unwrap();

    let mut builder = BrickBuilder::new(10, false).unwrap();
    for (t, &p) in series.iter().enumerate() {
        builder.add_tick(t as u64, p).unwrap();
    }
    let incremental: Vec<(i64, i64)> = builder
        .bricks()
        .iter()
        .map(|b| (b.open_price, b.close_price))
        .collect();
    assert_eq!(batch, incremental);
}

#[test]
fn reversal_needs_a_full_brick() {
    let bricks = build_from_series(&[100, 115, 106, 99], 10).unwrap();
    assert_eq!(bricks, vec![(100, 110), (110, 100)]);
}

#[test]
fn negative_moves() {
    let bricks = build_from_series(&[0, -25], 10).unwrap();
    assert_eq!(bricks, vec![(0, -10), (-10, -20)]);
}

#[test]
fn every_step_is_one_brick_high_and_chained() {
    let series: Vec<i64> = (0..500)
        .map(|i| 5_000 + (300.0 * (i as f64 * 0.07).sin()) as i64)
        .collect();
    let bricks = build_from_series(&series, 7).unwrap();
    assert!(!bricks.is_empty());
    assert!(bricks.iter().all(|(o, c)| (c - o).abs() == 7));
    for pair in bricks.windows(2) {
        assert_eq!(pair[1].0, pair[0].1);
    }
}

#[test]
fn empty_series_is_empty() {
    assert!(build_from_series(&[], 10).unwrap().is_empty());
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MIN)]
fn rejects_non_positive_brick_size(#[case] brick_size: i64) {
    assert!(matches!(
        build_from_series(&[1, 2], brick_size),
        Err(RenkoError::InvalidConfig(_))
    ));
}

#[test]
fn limit_guards_runaway_steps() {
    let err = build_from_series_with_limit(&[0, 1_000], 1, 10).unwrap_err();
    assert_eq!(
        err,
        RenkoError::ExcessiveBrickCount {
            required: 1_000,
            limit: 10
        }
    );
    assert_eq!(build_from_series_with_limit(&[0, 10], 1, 10).unwrap().len(), 10);
}

#[test]
fn unbounded_limit_rejects_unallocatable_step() {
    let err = build_from_series_with_limit(&[0, i64::MAX - 1], 1, usize::MAX).unwrap_err();
    assert!(matches!(err, RenkoError::ExcessiveBrickCount { .. }));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[test]
fn batch_and_builder_both_warn_on_rejected_counts() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(build_from_series_with_limit(&[0, 1_000], 1, 10).is_err());

        let mut b = BrickBuilder::new(1, false)
            .unwrap()
            .with_max_bricks_per_tick(10)
            .unwrap();
        b.add_tick(0, 0).unwrap();
        assert!(b.add_tick(1, 1_000).is_err());
    });

    let text = logs.text();
    assert!(text.contains("Rejected series step: too many bricks"), "{}", text);
    assert!(text.contains("Rejected tick: too many bricks"), "{}", text);
    assert_eq!(text.matches("required=1000").count(), 2, "{}", text);
}
