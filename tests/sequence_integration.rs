use demo_sequence::config::Config;
use demo_sequence::output::{OutputFormat, render};
use demo_sequence::program::{Bindings, run};

const EXPECTED: [&str; 9] = [
    "Initial values: 10 Hello 42 Grouped true 100 [1 2 3 4 5]",
    "Result of add(a, b): 52",
    "Flag is true, as expected: true",
    "Result is positive. Setting result to 10.",
    "Final value of result: 10",
    "Values of multiple variables: Hello 42 Grouped true [1 2 3 4 5]",
    "Result of add(c, b): 142",
    "Checking positivity of new result:",
    "New result is positive.",
];

#[test]
fn default_run_produces_exact_lines() {
    let transcript = run(&Bindings::default());
    assert_eq!(transcript.lines, EXPECTED);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = render(&run(&Bindings::default()), OutputFormat::Text).unwrap();
    for _ in 0..5 {
        let again = render(&run(&Bindings::default()), OutputFormat::Text).unwrap();
        assert_eq!(first, again);
    }
    assert_eq!(first, format!("{}\n", EXPECTED.join("\n")));
}

#[test]
fn config_overrides_flow_into_transcript() {
    let config = Config::parse(
        r#"
[bindings]
a = -42
str = "Bye"
j = []
"#,
    )
    .unwrap();
    let transcript = run(&config.bindings);
    assert_eq!(
        transcript.lines[0],
        "Initial values: -42 Bye 42 Grouped true 100 []"
    );
    assert_eq!(transcript.lines[1], "Result of add(a, b): 0");
    assert_eq!(
        transcript.lines[3],
        "Result is not positive. Setting result to 20."
    );
    assert_eq!(transcript.lines[4], "Final value of result: 20");
    assert_eq!(
        transcript.lines[5],
        "Values of multiple variables: Bye 42 Grouped true []"
    );
    assert_eq!(transcript.final_result, 142);
}

#[test]
fn overflowing_sum_wraps_instead_of_panicking() {
    let bindings = Bindings {
        c: i64::MAX,
        b: 1,
        ..Bindings::default()
    };
    let transcript = run(&bindings);
    assert_eq!(
        transcript.lines[6],
        format!("Result of add(c, b): {}", i64::MIN)
    );
    assert_eq!(transcript.lines[8], "New result is not positive.");
}
