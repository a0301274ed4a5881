/// Every operator the lexer can produce, grouped by family.
///
/// The family decides how many operands the operator consumes and, together
/// with the variant, its precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+x`, `-x`
    UnaryArithmetic(UnaryArithmeticOperator),
    /// `!x`
    UnaryBoolean(UnaryBooleanOperator),
    /// `+ - * / **`
    BinaryArithmetic(BinaryArithmeticOperator),
    /// `& | ^`
    Bitwise(BitwiseOperator),
    /// `== != < <= > >=`
    Comparison(ComparisonOperator),
    /// `&& ||`
    BinaryBoolean(BinaryBooleanOperator),
    /// `=` and the compound forms `+= -= *= /= **= &= |= ^=`
    Assignment(AssignmentOperator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryArithmeticOperator {
    Plus,
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryBooleanOperator {
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryArithmeticOperator {
    Plus,
    Minus,
    Times,
    Divide,
    Power,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitwiseOperator {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equals,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryBooleanOperator {
    And,
    Or,
}

/// Assignment forms.
///
/// `Assignment` is a top-level `name = value`; `OnTheFly` is the same store
/// written directly after an opening parenthesis, `(name = value)`, and binds
/// much tighter. The remaining variants are compound assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assignment,
    OnTheFly,
    Plus,
    Minus,
    Times,
    Divide,
    Power,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
}

/// How an operator takes its operands off the evaluation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One resolved operand.
    Unary,
    /// Two resolved operands, right popped first.
    Binary,
    /// A resolved value on top of an unresolved identifier.
    Assignment(AssignmentOperator),
}

impl Operator {
    /// Returns the fixed precedence of the operator. Higher binds tighter.
    ///
    /// - `-4`: `!`
    /// - `-3`: `&&`, `||`
    /// - `-2`: comparisons
    /// - `-1`: `=` and the compound assignments
    /// - `0`: binary `+`, `-`
    /// - `1`: `*`
    /// - `2`: `/`
    /// - `3`: `**`
    /// - `4`: `&`, `|`, `^`
    /// - `5`: on-the-fly `(name = ...)`
    /// - `6`: unary `+`, `-`
    #[must_use]
    pub const fn precedence(self) -> i8 {
        match self {
            Self::UnaryBoolean(UnaryBooleanOperator::Not) => -4,
            Self::BinaryBoolean(_) => -3,
            Self::Comparison(_) => -2,
            Self::Assignment(AssignmentOperator::OnTheFly) => 5,
            Self::Assignment(_) => -1,
            Self::BinaryArithmetic(op) => match op {
                BinaryArithmeticOperator::Plus | BinaryArithmeticOperator::Minus => 0,
                BinaryArithmeticOperator::Times => 1,
                BinaryArithmeticOperator::Divide => 2,
                BinaryArithmeticOperator::Power => 3,
            },
            Self::Bitwise(_) => 4,
            Self::UnaryArithmetic(_) => 6,
        }
    }

    /// Returns `true` if `self` binds strictly tighter than `other`.
    ///
    /// Operators of equal precedence never bind tighter than each other, so a
    /// chain such as `10 - 3 - 2` groups to the right.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::token::operator::{BinaryArithmeticOperator as B, Operator};
    ///
    /// let times = Operator::BinaryArithmetic(B::Times);
    /// let plus = Operator::BinaryArithmetic(B::Plus);
    /// let minus = Operator::BinaryArithmetic(B::Minus);
    ///
    /// assert!(times.binds_tighter_than(plus));
    /// assert!(!plus.binds_tighter_than(minus));
    /// ```
    #[must_use]
    pub const fn binds_tighter_than(self, other: Self) -> bool {
        self.precedence() > other.precedence()
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::UnaryArithmetic(_) | Self::UnaryBoolean(_) => Arity::Unary,
            Self::BinaryArithmetic(_)
            | Self::Bitwise(_)
            | Self::Comparison(_)
            | Self::BinaryBoolean(_) => Arity::Binary,
            Self::Assignment(op) => Arity::Assignment(op),
        }
    }

    /// The operator as written in source. Unary forms are wrapped in
    /// parentheses so they can be told apart from their binary twins.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::UnaryArithmetic(UnaryArithmeticOperator::Plus) => "(+)",
            Self::UnaryArithmetic(UnaryArithmeticOperator::Negate) => "(-)",
            Self::UnaryBoolean(UnaryBooleanOperator::Not) => "!",
            Self::BinaryArithmetic(op) => match op {
                BinaryArithmeticOperator::Plus => "+",
                BinaryArithmeticOperator::Minus => "-",
                BinaryArithmeticOperator::Times => "*",
                BinaryArithmeticOperator::Divide => "/",
                BinaryArithmeticOperator::Power => "**",
            },
            Self::Bitwise(op) => match op {
                BitwiseOperator::And => "&",
                BitwiseOperator::Or => "|",
                BitwiseOperator::Xor => "^",
            },
            Self::Comparison(op) => match op {
                ComparisonOperator::Equals => "==",
                ComparisonOperator::NotEqual => "!=",
                ComparisonOperator::LessThan => "<",
                ComparisonOperator::LessThanOrEqual => "<=",
                ComparisonOperator::GreaterThan => ">",
                ComparisonOperator::GreaterThanOrEqual => ">=",
            },
            Self::BinaryBoolean(op) => match op {
                BinaryBooleanOperator::And => "&&",
                BinaryBooleanOperator::Or => "||",
            },
            Self::Assignment(op) => match op {
                AssignmentOperator::Assignment => "=",
                AssignmentOperator::OnTheFly => "(=)",
                AssignmentOperator::Plus => "+=",
                AssignmentOperator::Minus => "-=",
                AssignmentOperator::Times => "*=",
                AssignmentOperator::Divide => "/=",
                AssignmentOperator::Power => "**=",
                AssignmentOperator::BitwiseAnd => "&=",
                AssignmentOperator::BitwiseOr => "|=",
                AssignmentOperator::BitwiseXor => "^=",
            },
        }
    }
}

impl AssignmentOperator {
    /// The binary operation a compound assignment applies before storing, or
    /// `None` for plain and on-the-fly assignment.
    #[must_use]
    pub const fn compound_operation(self) -> Option<Operator> {
        match self {
            Self::Assignment | Self::OnTheFly => None,
            Self::Plus => Some(Operator::BinaryArithmetic(BinaryArithmeticOperator::Plus)),
            Self::Minus => Some(Operator::BinaryArithmetic(BinaryArithmeticOperator::Minus)),
            Self::Times => Some(Operator::BinaryArithmetic(BinaryArithmeticOperator::Times)),
            Self::Divide => Some(Operator::BinaryArithmetic(BinaryArithmeticOperator::Divide)),
            Self::Power => Some(Operator::BinaryArithmetic(BinaryArithmeticOperator::Power)),
            Self::BitwiseAnd => Some(Operator::Bitwise(BitwiseOperator::And)),
            Self::BitwiseOr => Some(Operator::Bitwise(BitwiseOperator::Or)),
            Self::BitwiseXor => Some(Operator::Bitwise(BitwiseOperator::Xor)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
