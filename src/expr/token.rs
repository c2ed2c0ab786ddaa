/// A classified atomic unit of an expression string.
///
/// `Number` carries the raw numeral text rather than a parsed value:
/// the scanner is deliberately permissive (it accepts a second decimal
/// point in a run) and leaves numeric validation to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(String),
    Operator(char),
    LeftParen,
    RightParen,
}

const OPERATOR_CHARS: [char; 5] = ['+', '-', '*', '/', '^'];

/// Splits an expression string into tokens.
///
/// Whitespace is ignored, a maximal run of digits and `.` becomes one
/// `Number` token, and any character outside the expression alphabet is
/// silently skipped. This stage never fails; malformed input surfaces
/// later when the evaluator tries to use the tokens.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let chars: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            tokens.push(Token::Number(chars[start..i].iter().collect()));
            continue;
        }

        if OPERATOR_CHARS.contains(&c) {
            tokens.push(Token::Operator(c));
        } else if c == '(' {
            tokens.push(Token::LeftParen);
        } else if c == ')' {
            tokens.push(Token::RightParen);
        }
        i += 1;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_operators() {
        let tokens = tokenize("2+3*4");
        assert_eq!(
            tokens,
            vec![
                Token::Number("2".to_string()),
                Token::Operator('+'),
                Token::Number("3".to_string()),
                Token::Operator('*'),
                Token::Number("4".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_stripped() {
        assert_eq!(tokenize(" 1 +  2 "), tokenize("1+2"));
    }

    #[test]
    fn test_decimal_run_is_one_token() {
        let tokens = tokenize("3.14");
        assert_eq!(tokens, vec![Token::Number("3.14".to_string())]);
    }

    #[test]
    fn test_second_decimal_point_kept_in_lexeme() {
        // Deferred validation: the scanner accepts it, the evaluator
        // rejects it when parsing the numeral.
        let tokens = tokenize("1.2.3");
        assert_eq!(tokens, vec![Token::Number("1.2.3".to_string())]);
    }

    #[test]
    fn test_parens() {
        let tokens = tokenize("(2)");
        assert_eq!(
            tokens,
            vec![
                Token::LeftParen,
                Token::Number("2".to_string()),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_unknown_characters_skipped() {
        assert_eq!(tokenize("a2b+c3"), tokenize("2+3"));
        assert!(tokenize("abc").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_letters_only_yield_nothing() {
        for input in ["hello world", "zażółć", "!@#$%&", "  \t\n"] {
            assert!(tokenize(input).is_empty(), "expected no tokens for {input:?}");
        }
    }
}
