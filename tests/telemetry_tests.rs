use renko_builder::config::LoggingConfig;
use renko_builder::renko::builder::BrickBuilder;
use renko_builder::telemetry::init_tracing;

#[test]
fn init_tracing_installs_once() {
    let logging = LoggingConfig {
        level: "not a directive =".to_string(),
        json: true,
    };
    assert!(init_tracing(&logging).is_ok());

    // Builder events go through the installed subscriber.
    let mut b = BrickBuilder::new(10, false).unwrap();
    b.add_tick(0, 100).unwrap();
    b.add_tick(1, 130).unwrap();

    let err = init_tracing(&logging).unwrap_err();
    assert!(err.to_string().contains("failed to install tracing subscriber"));
}
