use entrench::{structures::expression::Expr, types::err::ParseError};

fn expr(text: &str) -> Expr {
    text.parse().unwrap()
}

mod parse {
    use super::*;

    #[test]
    fn precedence_tightest_to_loosest() {
        // Negation, conjunction, disjunction, implication, equivalence.
        assert_eq!(
            expr("~p & q | r -> s <-> t"),
            expr("((((~p) & q) | r) -> s) <-> t"),
        );
    }

    #[test]
    fn implication_is_right_associative() {
        assert_eq!(expr("p -> q -> r"), expr("p -> (q -> r)"));
        assert_ne!(expr("p -> q -> r"), expr("(p -> q) -> r"));
    }

    #[test]
    fn equivalence_is_right_associative() {
        assert_eq!(expr("p <-> q <-> r"), expr("p <-> (q <-> r)"));
    }

    #[test]
    fn either_negation_glyph() {
        assert_eq!(expr("~p"), expr("!p"));
        assert_eq!(expr("~!p"), expr("!!p"));
    }

    #[test]
    fn constants_and_atoms() {
        assert_eq!(expr("true"), Expr::True);
        assert_eq!(expr("false"), Expr::False);
        // Keywords only match whole identifiers.
        assert_eq!(expr("truth"), Expr::atom("truth"));
        assert_eq!(expr("_false2"), Expr::atom("_false2"));
    }

    #[test]
    fn whitespace_is_free() {
        assert_eq!(expr("  p->q  "), expr("p -> q"));
        assert_eq!(expr("~ \t p"), expr("~p"));
    }

    #[test]
    fn empty_input() {
        assert_eq!("".parse::<Expr>(), Err(ParseError::Empty));
        assert_eq!(" \t ".parse::<Expr>(), Err(ParseError::Empty));
    }

    #[test]
    fn error_positions() {
        assert_eq!("p & ".parse::<Expr>(), Err(ParseError::MissingOperand(4)));
        assert_eq!("p @ q".parse::<Expr>(), Err(ParseError::TrailingInput(2)));
        assert_eq!("& p".parse::<Expr>(), Err(ParseError::UnexpectedCharacter(0)));
        assert_eq!(
            "(p | q".parse::<Expr>(),
            Err(ParseError::UnbalancedParenthesis(6)),
        );
        assert_eq!("p | q)".parse::<Expr>(), Err(ParseError::TrailingInput(5)));
    }

    #[test]
    fn display_round_trips() {
        for text in [
            "~(p & q)",
            "p -> (q -> r) -> r",
            "(p <-> q) <-> (q | r)",
            "(a | b) & ~(c -> d)",
        ] {
            let parsed = expr(text);
            assert_eq!(parsed, expr(&format!("{parsed}")));
        }
    }
}
