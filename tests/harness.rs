use fieldcheck::*;
use termcolor::Buffer;

/// Run the checker with `settings`, capturing uncolored output
fn run(settings: &Settings) -> (RunSummary, String) {
    let checker = FieldAccessChecker::new(settings).unwrap();
    let mut buffer = Buffer::no_color();
    let summary = checker.run(settings, &mut buffer).unwrap();
    let output = String::from_utf8(buffer.into_inner()).unwrap();
    (summary, output)
}

fn only(names: &[&str]) -> Settings {
    Settings {
        only: names.iter().map(|name| String::from(*name)).collect(),
        ..Settings::default()
    }
}

#[test]
fn full_run_passes() {
    let (summary, output) = run(&Settings::default());

    assert_eq!(
        output,
        "Result of static-get: 3\n\
         Expected: 3 (a + b)\n\
         SUCCESS: getstatic support is working correctly!\n\
         Result of static-write-read: 32\n\
         Expected: 32 (sa + sb after sb = 22)\n\
         SUCCESS: Static field access is working correctly!\n\
         Result of instance-field: 200\n\
         Expected: 200 (field after field = 200)\n\
         SUCCESS: Instance field access is working correctly!\n \
         - static-get [OK]\n \
         - static-write-read [OK]\n \
         - instance-field [OK]\n"
    );
    assert_eq!(
        summary.outcomes,
        vec![
            ("static-get", ScenarioOutcome::Pass(3)),
            ("static-write-read", ScenarioOutcome::Pass(32)),
            ("instance-field", ScenarioOutcome::Pass(200)),
        ]
    );
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn injected_failure_exits_non_zero() {
    let settings = Settings {
        inject_failure: true,
        ..Settings::default()
    };
    let (summary, output) = run(&settings);

    assert!(output.contains("Result of static-get: 100\n"));
    assert!(output.contains("FAILURE: getstatic support is not working correctly! actual=100\n"));
    assert!(output.contains(" - static-get [FAILED]\n"));

    // The remaining scenarios still run and pass
    assert!(output.contains("SUCCESS: Static field access is working correctly!\n"));
    assert!(output.contains("SUCCESS: Instance field access is working correctly!\n"));
    assert_eq!(summary.count_fail(), 1);
    assert_eq!(
        summary.outcomes[0].1,
        ScenarioOutcome::Fail(AssertionMismatch {
            scenario: "static-get",
            expected: 3,
            actual: 100,
        })
    );
    assert_ne!(summary.exit_code(), 0);
}

#[test]
fn static_get_is_isolated_from_static_write() {
    let (after_write, _) = run(&Settings::default());
    let (alone, _) = run(&only(&["static-get"]));

    assert_eq!(after_write.outcomes[0], alone.outcomes[0]);
    assert_eq!(alone.outcomes, vec![("static-get", ScenarioOutcome::Pass(3))]);
}

#[test]
fn instance_field_runs_alone() {
    let (summary, output) = run(&only(&["instance-field"]));

    assert_eq!(
        output,
        "Result of instance-field: 200\n\
         Expected: 200 (field after field = 200)\n\
         SUCCESS: Instance field access is working correctly!\n \
         - instance-field [OK]\n"
    );
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn unknown_scenario_is_an_error() {
    match FieldAccessChecker::new(&only(&["getfield"])) {
        Err(Error::UnknownScenario(name)) => assert_eq!(name, "getfield"),
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("unknown scenario was accepted"),
    }
}

#[test]
fn repeated_runs_are_identical() {
    let settings = Settings::default();
    let checker = FieldAccessChecker::new(&settings).unwrap();

    let mut first = Buffer::no_color();
    let mut second = Buffer::no_color();
    let first_summary = checker.run(&settings, &mut first).unwrap();
    let second_summary = checker.run(&settings, &mut second).unwrap();

    assert_eq!(first_summary, second_summary);
    assert_eq!(first.into_inner(), second.into_inner());
}
