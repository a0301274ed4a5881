use rstest::rstest;
use shunt::{
    error::LexError,
    interpreter::{
        lexer::lex,
        token::{
            core::{Structural, Token, join},
            operator::{
                AssignmentOperator, BinaryArithmeticOperator, ComparisonOperator, Operator,
                UnaryArithmeticOperator,
            },
        },
        value::core::Value,
    },
};

fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

#[rstest]
#[case("42", Value::Integer(42))]
#[case("2.75", Value::Float(2.75))]
#[case("1.", Value::Float(1.0))]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("null", Value::Null)]
fn single_literals(#[case] source: &str, #[case] expected: Value) {
    assert_eq!(lex(source).unwrap(), vec![Token::literal(expected)]);
}

#[rstest]
#[case("x")]
#[case("_tmp")]
#[case("truex")]
#[case("nullable")]
#[case("x2")]
fn identifiers(#[case] source: &str) {
    assert_eq!(lex(source).unwrap(), vec![Token::identifier(source)]);
}

#[test]
fn minus_is_binary_after_an_operand() {
    let tokens = lex("a - 1").unwrap();

    assert_eq!(tokens[1],
               op(Operator::BinaryArithmetic(BinaryArithmeticOperator::Minus)));
}

#[test]
fn minus_is_binary_after_a_closing_paren() {
    let tokens = lex("(a) - 1").unwrap();

    assert_eq!(tokens[3],
               op(Operator::BinaryArithmetic(BinaryArithmeticOperator::Minus)));
}

#[rstest]
#[case("-1", 0)]
#[case("3 - -2", 2)]
#[case("(-1)", 1)]
fn minus_negates_elsewhere(#[case] source: &str, #[case] index: usize) {
    let tokens = lex(source).unwrap();

    assert_eq!(tokens[index],
               op(Operator::UnaryArithmetic(UnaryArithmeticOperator::Negate)));
}

#[test]
fn plus_is_unary_after_a_closing_paren() {
    let tokens = lex("(1) + 2").unwrap();

    assert_eq!(tokens[3],
               op(Operator::UnaryArithmetic(UnaryArithmeticOperator::Plus)));
}

#[test]
fn leading_assignment() {
    assert_eq!(lex("x = 4").unwrap(),
               vec![Token::identifier("x"),
                    op(Operator::Assignment(AssignmentOperator::Assignment)),
                    Token::literal(4_i64)]);
}

#[test]
fn assignment_after_open_paren_is_on_the_fly() {
    assert_eq!(lex("2 * (y = 4)").unwrap()[4],
               op(Operator::Assignment(AssignmentOperator::OnTheFly)));
}

#[test]
fn stray_equals_is_dropped() {
    assert_eq!(join(&lex("1 = 2").unwrap()), "1 2");
}

#[rstest]
#[case("x += 1", AssignmentOperator::Plus)]
#[case("x -= 1", AssignmentOperator::Minus)]
#[case("x *= 1", AssignmentOperator::Times)]
#[case("x /= 1", AssignmentOperator::Divide)]
#[case("x **= 1", AssignmentOperator::Power)]
#[case("x &= 1", AssignmentOperator::BitwiseAnd)]
#[case("x |= 1", AssignmentOperator::BitwiseOr)]
#[case("x ^= 1", AssignmentOperator::BitwiseXor)]
fn compound_assignments(#[case] source: &str, #[case] expected: AssignmentOperator) {
    assert_eq!(lex(source).unwrap()[1], op(Operator::Assignment(expected)));
}

#[rstest]
#[case("a == b", ComparisonOperator::Equals)]
#[case("a != b", ComparisonOperator::NotEqual)]
#[case("a < b", ComparisonOperator::LessThan)]
#[case("a <= b", ComparisonOperator::LessThanOrEqual)]
#[case("a > b", ComparisonOperator::GreaterThan)]
#[case("a >= b", ComparisonOperator::GreaterThanOrEqual)]
fn comparisons(#[case] source: &str, #[case] expected: ComparisonOperator) {
    assert_eq!(lex(source).unwrap()[1], op(Operator::Comparison(expected)));
}

#[test]
fn whitespace_is_optional() {
    assert_eq!(join(&lex("x**=2").unwrap()), "x **= 2");
    assert_eq!(join(&lex("a&&b||!c").unwrap()), "a && b || ! c");
}

#[test]
fn unknown_characters_are_skipped() {
    assert_eq!(join(&lex("4 @+ 1 $").unwrap()), "4 + 1");
}

#[test]
fn newline_is_a_token() {
    assert_eq!(lex("1\n2").unwrap(),
               vec![Token::literal(1_i64),
                    Token::Structural(Structural::Newline),
                    Token::literal(2_i64)]);
}

#[test]
fn too_many_decimal_points() {
    assert_eq!(lex("x = 1.2.3"),
               Err(LexError::TooManyDecimalPoints { literal:  "1.2.3".to_string(),
                                                    position: 4, }));
}

#[test]
fn integer_out_of_range() {
    assert!(matches!(lex("99999999999999999999"),
                     Err(LexError::NumberOutOfRange { position: 0, .. })));
}

#[rstest]
#[case("x = 1 +", "+", 6)]
#[case("-", "-", 0)]
#[case("!", "!", 0)]
#[case("a =", "=", 2)]
#[case("a ^", "^", 2)]
fn operator_at_end_of_input(#[case] source: &str, #[case] operator: &str, #[case] position: usize) {
    assert_eq!(lex(source),
               Err(LexError::IncompleteOperator { operator: operator.to_string(),
                                                  position }));
}

#[test]
fn two_character_operator_may_end_input() {
    assert_eq!(join(&lex("a ==").unwrap()), "a ==");
}

#[test]
fn minus_after_newline_is_an_error() {
    assert_eq!(lex("2\n-1"),
               Err(LexError::UnexpectedTokenBeforeMinus { token:    "\\n".to_string(),
                                                          position: 2, }));
}
