use baleq::find_balancing_coefficients;
use num_bigint::BigUint;

pub struct TestCase<'a> {
    pub name: &'a str,
    pub equation: &'a str,
    pub expected: Vec<u64>,
}

pub fn run_group_test(group_name: &str, cases: Vec<TestCase>) {
    let mut failures = 0;
    let mut total_cases = 0;

    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<24} | {:<24} | {:<24}",
        "Reaction", "Expected", "Calculated"
    );

    for case in cases {
        let calculated = find_balancing_coefficients(case.equation)
            .expect("Balancing failed")
            .coefficients;
        let expected: Vec<BigUint> = case.expected.iter().map(|&v| BigUint::from(v)).collect();

        println!(
            "{:<24} | {:<24} | {:<24}",
            case.name,
            format_coefficients(&expected),
            format_coefficients(&calculated),
        );

        if calculated != expected {
            failures += 1;
        }
        total_cases += 1;
    }

    println!("{:-<80}", "");
    println!("Group Statistics for '{}':", group_name);
    println!("  Total Cases: {}", total_cases);
    println!("  Failures:    {}", failures);
    println!("{:-<80}\n", "");

    assert_eq!(
        failures, 0,
        "{} of {} cases in group '{}' produced wrong coefficients",
        failures, total_cases, group_name
    );
}

fn format_coefficients(coefficients: &[BigUint]) -> String {
    coefficients
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
