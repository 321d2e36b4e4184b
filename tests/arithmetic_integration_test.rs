use small_calc::{CalcError, Calculator, Operation};

#[test]
fn test_basic_operations_match_ieee_arithmetic() {
    let calc = Calculator::new();

    let cases = [(2.0, 3.0), (-1.5, 4.25), (0.0, 0.0), (1e10, -2.5)];
    for (a, b) in cases {
        assert_eq!(calc.add(a, b), a + b);
        assert_eq!(calc.subtract(a, b), a - b);
        assert_eq!(calc.multiply(a, b), a * b);
    }
}

#[test]
fn test_divide_returns_quotient() {
    let calc = Calculator::new();
    assert_eq!(calc.divide(10.0, 4.0).unwrap(), 2.5);
    assert_eq!(calc.divide(-9.0, 3.0).unwrap(), -3.0);
}

#[test]
fn test_divide_by_zero_is_rejected() {
    let calc = Calculator::new();
    let err = calc.divide(5.0, 0.0).unwrap_err();
    assert!(matches!(err, CalcError::DivisionByZero { .. }));
    assert_eq!(err.user_friendly_message(), "Cannot divide by zero");
}

#[test]
fn test_power_follows_floating_point_semantics() {
    let calc = Calculator::new();
    assert_eq!(calc.power(2.0, 10.0), 1024.0);
    assert_eq!(calc.power(9.0, 0.5), 3.0);
    assert_eq!(calc.power(2.0, -2.0), 0.25);
    assert_eq!(calc.power(0.0, 0.0), 1.0);
}

#[test]
fn test_square_root() {
    let calc = Calculator::new();
    assert_eq!(calc.square_root(9.0).unwrap(), 3.0);
    assert_eq!(calc.square_root(2.25).unwrap(), 1.5);
    assert!(matches!(
        calc.square_root(-4.0),
        Err(CalcError::InvalidArgument { .. })
    ));
}

#[test]
fn test_evaluate_dispatches_every_operation() {
    let calc = Calculator::new();

    let cases = [
        (Operation::Add, vec![2.0, 3.0], 5.0),
        (Operation::Subtract, vec![2.0, 3.0], -1.0),
        (Operation::Multiply, vec![2.0, 3.0], 6.0),
        (Operation::Divide, vec![3.0, 2.0], 1.5),
        (Operation::Power, vec![2.0, 10.0], 1024.0),
        (Operation::SquareRoot, vec![9.0], 3.0),
    ];

    for (operation, operands, expected) in cases {
        let evaluation = calc.evaluate(operation, &operands).unwrap();
        assert_eq!(evaluation.result, expected, "operation {}", operation);
        assert_eq!(evaluation.operands, operands);
        assert_eq!(evaluation.operation, operation);
    }
}

#[test]
fn test_evaluate_rejects_wrong_operand_count() {
    let calc = Calculator::new();

    let err = calc.evaluate(Operation::Divide, &[1.0]).unwrap_err();
    assert!(matches!(err, CalcError::InvalidArgument { .. }));

    let err = calc
        .evaluate(Operation::SquareRoot, &[1.0, 2.0])
        .unwrap_err();
    assert!(matches!(err, CalcError::InvalidArgument { .. }));
}

#[test]
fn test_evaluation_serializes_for_json_output() {
    let calc = Calculator::new();
    let evaluation = calc.evaluate(Operation::Power, &[2.0, 10.0]).unwrap();

    let json: serde_json::Value = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(json["operation"], "power");
    assert_eq!(json["operands"][0], 2.0);
    assert_eq!(json["operands"][1], 10.0);
    assert_eq!(json["result"], 1024.0);
}
