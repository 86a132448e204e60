use entrench::{
    backend::{Backend, CanonicalBackend},
    structures::formula::Formula,
};

fn formula(text: &str) -> Formula {
    CanonicalBackend.normalize(&text.parse().unwrap())
}

mod normal_form {
    use super::*;

    #[test]
    fn contraposition_is_structural() {
        assert_eq!(formula("p -> q"), formula("~q -> ~p"));
    }

    #[test]
    fn de_morgan() {
        assert_eq!(formula("~(p & q)"), formula("~p | ~q"));
        assert_eq!(formula("~(p | q)"), formula("~p & ~q"));
    }

    #[test]
    fn double_negation() {
        assert_eq!(formula("~~p"), formula("p"));
    }

    #[test]
    fn disjunction_distributes() {
        assert_eq!(formula("p | (q & r)"), formula("(p | q) & (p | r)"));
    }

    #[test]
    fn implication_elimination() {
        assert_eq!(formula("p -> q"), formula("~p | q"));
    }

    #[test]
    fn equivalence_elimination() {
        assert_eq!(formula("p <-> q"), formula("(p -> q) & (q -> p)"));
    }

    #[test]
    fn tautologous_clauses_vanish() {
        assert!(formula("p | ~p").is_verum());
        assert!(formula("(p | ~p) & (q | p | ~p)").is_verum());
        assert!(!formula("p | ~q").is_verum());
    }

    #[test]
    fn constants_collapse() {
        assert_eq!(formula("p & true"), formula("p"));
        assert_eq!(formula("p | false"), formula("p"));
        assert!(formula("false -> p").is_verum());
        assert!(formula("p & false").has_empty_clause());
    }

    #[test]
    fn repeats_collapse() {
        assert_eq!(formula("p | p | q"), formula("q | p"));
        assert_eq!(formula("(p | q) & (q | p)"), formula("p | q"));
    }

    #[test]
    fn normalisation_is_a_fixpoint() {
        for text in ["p -> q", "(a | b) & ~c", "p <-> (q & r)", "~(p & (q | r))"] {
            let once = formula(text);
            let twice = CanonicalBackend.normalize(&once.as_expr());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn negation_inverts() {
        let held = formula("(p | q) & r");

        assert_eq!(held.negated(), formula("~((p | q) & r)"));
        assert!(formula("true").negated().has_empty_clause());
        assert!(formula("p & ~p").negated().is_verum());
    }
}

mod satisfiability {
    use super::*;

    #[test]
    fn trivial() {
        assert!(CanonicalBackend.satisfiable(&formula("p")));
        assert!(CanonicalBackend.satisfiable(&formula("true")));
        assert!(!CanonicalBackend.satisfiable(&formula("false")));
        assert!(!CanonicalBackend.satisfiable(&formula("p & ~p")));
    }

    #[test]
    fn unit_propagation_chain() {
        assert!(!CanonicalBackend.satisfiable(&formula("p & (p -> q) & (q -> r) & ~r")));
        assert!(CanonicalBackend.satisfiable(&formula("p & (p -> q) & (q -> r)")));
    }

    #[test]
    fn splitting_required() {
        // No unit clause, so the search has to branch.
        let all_pairs = formula("(p | q) & (~p | q) & (p | ~q) & (~p | ~q)");

        assert!(!all_pairs.has_empty_clause());
        assert!(!CanonicalBackend.satisfiable(&all_pairs));
        assert!(CanonicalBackend.satisfiable(&formula("(p | q) & (~p | q) & (p | ~q)")));
    }
}
