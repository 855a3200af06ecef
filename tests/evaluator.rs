use calibration::{
    calibration_result, operator::digit_count, reachable_values, CalibrationReport, Equation,
    Operator, BASIC_OPERATORS, EXTENDED_OPERATORS,
};

fn sample_equations() -> Vec<Equation> {
    calibration::read_equations("tests/data/sample.txt").unwrap()
}

#[test]
fn two_components_yield_sum_and_product() {
    let mut values = reachable_values(&[10, 19], &BASIC_OPERATORS);
    values.sort_unstable();

    assert_eq!(values, vec![29, 190]);
    assert!(Equation::try_from("190: 10 19").unwrap().is_valid(&BASIC_OPERATORS));
}

#[test]
fn fold_is_left_to_right_without_precedence() {
    // 2 + 3 * 4 folds to 20, never 14.
    let values = reachable_values(&[2, 3, 4], &BASIC_OPERATORS);

    assert!(values.contains(&20));
    assert!(!values.contains(&14));
    assert_eq!(values.len(), 4);
}

#[test]
fn single_component_and_empty_input() {
    assert_eq!(reachable_values(&[42], &EXTENDED_OPERATORS), vec![42]);
    assert_eq!(reachable_values(&[42], &[]), vec![42]);
    assert!(reachable_values(&[], &BASIC_OPERATORS).is_empty());
    assert!(reachable_values(&[1, 2], &[]).is_empty());
}

#[test]
fn colliding_combinations_are_kept() {
    let values = reachable_values(&[81, 40, 27], &BASIC_OPERATORS);

    assert_eq!(values.iter().filter(|&&v| v == 3267).count(), 2);
}

#[test]
fn concatenation_is_needed_for_some_equations() {
    let equation = Equation::try_from("7290: 6 8 6 15").unwrap();

    assert!(!equation.is_valid(&BASIC_OPERATORS));
    assert!(equation.is_valid(&EXTENDED_OPERATORS));
}

#[test]
fn concatenate_appends_decimal_digits() {
    for b in [0i64, 1, 9, 10, 99, 100] {
        let expected = format!("{}{}", 12, b).parse::<i64>().unwrap();
        assert_eq!(Operator::Concatenate.apply(12, b), Some(expected));
    }
    assert_eq!(Operator::Concatenate.apply(7, 0), Some(70));
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(u64::MAX), 20);
}

#[test]
fn overflowing_combinations_are_dropped() {
    assert_eq!(Operator::Multiply.apply(i64::MAX, 2), None);
    assert_eq!(Operator::Concatenate.apply(i64::MAX, 1), None);
    assert_eq!(Operator::Concatenate.apply(i64::MIN, 1), None);

    let values = reachable_values(&[i64::MAX, 1], &EXTENDED_OPERATORS);
    assert_eq!(values, vec![i64::MAX]);
}

#[test]
fn negative_components_fold_like_any_other() {
    let equation = Equation::try_from("5: -1 6").unwrap();

    assert!(equation.is_valid(&BASIC_OPERATORS));
    assert_eq!(Operator::Concatenate.apply(-12, 5), Some(-125));
    assert_eq!(Operator::Concatenate.apply(12, -5), None);
    assert!(!Equation::try_from("125: 12 -5").unwrap().is_valid(&EXTENDED_OPERATORS));
}

#[test]
fn totals_do_not_overflow_the_target_type() {
    let equations = vec![
        Equation::new(i64::MAX, vec![i64::MAX]).unwrap(),
        Equation::new(1, vec![1]).unwrap(),
    ];

    assert_eq!(
        calibration_result(&equations, &BASIC_OPERATORS),
        i128::from(i64::MAX) + 1
    );
}

#[test]
fn sample_totals_match_worked_example() {
    let equations = sample_equations();

    assert_eq!(calibration_result(&equations, &BASIC_OPERATORS), 3749);
    assert_eq!(calibration_result(&equations, &EXTENDED_OPERATORS), 11387);
}

#[test]
fn report_renders_both_lines() {
    let report = CalibrationReport::compute(&sample_equations());

    assert_eq!(
        report.to_string(),
        "Total calibration result: 3749\nTotal calibration result with concatenation: 11387"
    );
}
