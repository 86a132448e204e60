/*!
A parser from text to [expressions](crate::structures::expression).

Syntax, binding tightest to loosest:

| Form            | Text                              |
| --------------- | --------------------------------- |
| Atom            | `[A-Za-z_][A-Za-z0-9_]*`          |
| Constant        | `true`, `false`                   |
| Negation        | `~a`, `!a`                        |
| Conjunction     | `a & b`                           |
| Disjunction     | `a \| b`                          |
| Implication     | `a -> b`, right associative       |
| Equivalence     | `a <-> b`, right associative      |

Parentheses group as usual, and whitespace between tokens is free.
Errors carry the byte position at which parsing stopped.

```rust
# use entrench::builder::parse::expression;
# use entrench::types::err::ParseError;
let expr = expression("~rain | (rain -> wet)")?;
assert_eq!(format!("{expr}"), "~rain | (rain -> wet)");

assert_eq!(expression("   "), Err(ParseError::Empty));
assert_eq!(expression("a & & b"), Err(ParseError::UnexpectedCharacter(4)));
# Ok::<(), ParseError>(())
```
*/

use crate::{structures::expression::Expr, types::err::ParseError};

/// The expression written in `text`.
pub fn expression(text: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser { text, position: 0 };

    parser.skip_whitespace();
    if parser.at_end() {
        return Err(ParseError::Empty);
    }

    let expr = parser.equivalence()?;

    parser.skip_whitespace();
    match parser.at_end() {
        true => Ok(expr),
        false => Err(ParseError::TrailingInput(parser.position)),
    }
}

impl std::str::FromStr for Expr {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        expression(text)
    }
}

/// A position in some text, with a method per level of the grammar.
struct Parser<'t> {
    text: &'t str,
    position: usize,
}

impl Parser<'_> {
    fn at_end(&self) -> bool {
        self.position == self.text.len()
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while let Some(byte) = bytes.get(self.position) {
            match byte.is_ascii_whitespace() {
                true => self.position += 1,
                false => break,
            }
        }
    }

    /// Consumes `token` and returns true, when `token` is next in the text.
    ///
    /// Whitespace before a token is skipped whether or not the token is next, so a refused take leaves the position at the first character of whatever is next.
    fn take(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        match self.text[self.position..].starts_with(token) {
            true => {
                self.position += token.len();
                true
            }
            false => false,
        }
    }

    fn equivalence(&mut self) -> Result<Expr, ParseError> {
        let left = self.implication()?;
        match self.take("<->") {
            true => Ok(left.iff(self.equivalence()?)),
            false => Ok(left),
        }
    }

    fn implication(&mut self) -> Result<Expr, ParseError> {
        let left = self.disjunction()?;
        match self.take("->") {
            true => Ok(left.implies(self.implication()?)),
            false => Ok(left),
        }
    }

    fn disjunction(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.conjunction()?;
        while self.take("|") {
            expr = expr | self.conjunction()?;
        }
        Ok(expr)
    }

    fn conjunction(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.negation()?;
        while self.take("&") {
            expr = expr & self.negation()?;
        }
        Ok(expr)
    }

    fn negation(&mut self) -> Result<Expr, ParseError> {
        match self.take("~") || self.take("!") {
            true => Ok(!self.negation()?),
            false => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.take("(") {
            let expr = self.equivalence()?;
            match self.take(")") {
                true => Ok(expr),
                false => Err(ParseError::UnbalancedParenthesis(self.position)),
            }
        } else {
            // A refused take leaves the position at the next character.
            let bytes = self.text.as_bytes();
            match bytes.get(self.position) {
                None => Err(ParseError::MissingOperand(self.position)),

                Some(byte) if byte.is_ascii_alphabetic() || *byte == b'_' => {
                    let start = self.position;
                    let mut end = start + 1;
                    while bytes
                        .get(end)
                        .is_some_and(|byte| byte.is_ascii_alphanumeric() || *byte == b'_')
                    {
                        end += 1;
                    }
                    self.position = end;

                    match &self.text[start..end] {
                        "true" => Ok(Expr::True),
                        "false" => Ok(Expr::False),
                        name => Ok(Expr::atom(name)),
                    }
                }

                Some(_) => Err(ParseError::UnexpectedCharacter(self.position)),
            }
        }
    }
}
