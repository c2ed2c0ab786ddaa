use super::token::{tokenize, Token};

/// Why a reduction failed. Internal only: callers of [`evaluate`] see a
/// uniform `None` regardless of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The expression produced no tokens at all.
    Empty,
    /// A numeral lexeme did not parse as a float (e.g. `1.2.3`).
    BadNumber,
    /// An operator had fewer than two operands. Covers leading unary
    /// sign, which is not supported: `-5` is a binary minus with no
    /// left operand.
    MissingOperand,
    /// A `)` without a matching `(`, or a `(` left over at the end.
    UnmatchedParen,
    DivisionByZero,
    /// Invalid real-exponent power (negative base, fractional exponent)
    /// or overflow to a non-finite value.
    BadDomain,
    /// More than one value remained after full reduction.
    Leftover,
}

// Fixed operator table: symbol -> precedence. Shared read-only across
// calls; `+ -` bind loosest, `^` tightest.
const PRECEDENCE: [(char, u8); 5] = [('+', 1), ('-', 1), ('*', 2), ('/', 2), ('^', 3)];

fn precedence(symbol: char) -> u8 {
    PRECEDENCE
        .iter()
        .find(|(op, _)| *op == symbol)
        .map(|(_, level)| *level)
        .unwrap_or(0)
}

fn apply(symbol: char, a: f64, b: f64) -> Result<f64, EvalError> {
    let result = match symbol {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        '/' => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        '^' => a.powf(b),
        // The tokenizer only emits the five symbols above.
        _ => return Err(EvalError::BadDomain),
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::BadDomain)
    }
}

/// Stack entry during reduction: a pending operator or an open paren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Op(char),
    Paren,
}

fn apply_top(operators: &mut Vec<Pending>, values: &mut Vec<f64>) -> Result<(), EvalError> {
    let Some(Pending::Op(symbol)) = operators.pop() else {
        return Err(EvalError::UnmatchedParen);
    };
    let b = values.pop().ok_or(EvalError::MissingOperand)?;
    let a = values.pop().ok_or(EvalError::MissingOperand)?;
    values.push(apply(symbol, a, b)?);
    Ok(())
}

fn reduce(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::new();
    let mut operators: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(text) => {
                let value: f64 = text.parse().map_err(|_| EvalError::BadNumber)?;
                // An over-range numeral parses to infinity; that must
                // not enter the value stack.
                if !value.is_finite() {
                    return Err(EvalError::BadNumber);
                }
                values.push(value);
            }
            Token::LeftParen => operators.push(Pending::Paren),
            Token::RightParen => {
                loop {
                    match operators.last().copied() {
                        None => return Err(EvalError::UnmatchedParen),
                        Some(Pending::Paren) => {
                            operators.pop();
                            break;
                        }
                        Some(Pending::Op(_)) => apply_top(&mut operators, &mut values)?,
                    }
                }
            }
            Token::Operator(symbol) => {
                // Equal precedence pops first: every operator, `^`
                // included, associates to the left.
                while let Some(Pending::Op(top)) = operators.last().copied() {
                    if precedence(top) >= precedence(*symbol) {
                        apply_top(&mut operators, &mut values)?;
                    } else {
                        break;
                    }
                }
                operators.push(Pending::Op(*symbol));
            }
        }
    }

    // Strict on a dangling `(`: it counts as a mismatch, not something
    // to silently drop.
    while let Some(pending) = operators.last().copied() {
        match pending {
            Pending::Paren => return Err(EvalError::UnmatchedParen),
            Pending::Op(_) => apply_top(&mut operators, &mut values)?,
        }
    }

    match (values.pop(), values.is_empty()) {
        (Some(result), true) => Ok(result),
        (Some(_), false) => Err(EvalError::Leftover),
        (None, _) => Err(EvalError::MissingOperand),
    }
}

// Scaling by 10^4 can push a result near f64::MAX over the edge, so
// rounding itself may produce infinity.
fn round4(value: f64) -> Result<f64, EvalError> {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded.is_finite() {
        Ok(rounded)
    } else {
        Err(EvalError::BadDomain)
    }
}

pub(crate) fn evaluate_tokens(tokens: &[Token]) -> Result<f64, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    round4(reduce(tokens)?)
}

/// Evaluates an arithmetic expression, returning the result rounded to
/// 4 decimal places, or `None` if the expression cannot be computed for
/// any reason. Never panics on malformed input.
pub fn evaluate(expression: &str) -> Option<f64> {
    evaluate_tokens(&tokenize(expression)).ok()
}
