use entrench::{
    backend::{Backend, CanonicalBackend},
    resolution::{entails, resolvents},
    structures::{clause::Clause, formula::Formula, literal::Literal},
};

fn formula(text: &str) -> Formula {
    CanonicalBackend.normalize(&text.parse().unwrap())
}

mod entailment {
    use super::*;

    #[test]
    fn modus_ponens() {
        let conditional = formula("rain -> wet");
        let antecedent = formula("rain");

        assert!(entails(&[&conditional, &antecedent], &formula("wet")));
    }

    #[test]
    fn chaining() {
        let first = formula("p -> q");
        let second = formula("q -> r");
        let start = formula("p");

        assert!(entails(&[&first, &second, &start], &formula("r")));
    }

    #[test]
    fn no_affirming_the_consequent() {
        let conditional = formula("p -> q");
        let consequent = formula("q");

        assert!(!entails(&[&conditional, &consequent], &formula("p")));
    }

    #[test]
    fn contradictory_premises_entail_anything() {
        let positive = formula("p");
        let negative = formula("~p");

        assert!(entails(&[&positive, &negative], &formula("unrelated")));
    }

    #[test]
    fn tautologies_from_no_premises() {
        assert!(entails(&[], &formula("p | ~p")));
        assert!(entails(&[], &formula("p -> p")));
        assert!(entails(&[], &formula("(p -> q) | (q -> p)")));
    }

    #[test]
    fn contingencies_from_no_premises() {
        assert!(!entails(&[], &formula("p")));
        assert!(!entails(&[], &formula("p | q")));
        assert!(!entails(&[], &formula("p -> q")));
    }

    #[test]
    fn saturation_stops_without_the_empty_clause() {
        let left = formula("p | q");
        let right = formula("~q | r");

        assert!(!entails(&[&left, &right], &formula("p & r")));
    }

    #[test]
    fn case_split() {
        let split = formula("p | q");
        let from_p = formula("p -> r");
        let from_q = formula("q -> r");

        assert!(entails(&[&split, &from_p, &from_q], &formula("r")));
        assert!(!entails(&[&split, &from_p], &formula("r")));
    }
}

mod resolvent {
    use super::*;

    #[test]
    fn one_resolvent_per_complementary_pair() {
        let left = Clause::from_literals(vec![
            Literal::new("p", true),
            Literal::new("q", false),
        ]);
        let right = Clause::from_literals(vec![
            Literal::new("p", false),
            Literal::new("q", true),
        ]);

        let resolved = resolvents(&left, &right);

        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|clause| clause.is_tautological()));
    }

    #[test]
    fn no_resolvent_without_complements() {
        let left = Clause::from_literals(vec![Literal::new("p", true)]);
        let right = Clause::from_literals(vec![Literal::new("q", true)]);

        assert!(resolvents(&left, &right).is_empty());
    }

    #[test]
    fn complementary_units_resolve_to_the_empty_clause() {
        let positive = Clause::from_literals(vec![Literal::new("p", true)]);
        let negative = Clause::from_literals(vec![Literal::new("p", false)]);

        assert_eq!(resolvents(&positive, &negative), vec![Clause::empty()]);
    }

    #[test]
    fn shared_literals_collapse_in_the_resolvent() {
        let left = Clause::from_literals(vec![
            Literal::new("p", true),
            Literal::new("r", true),
        ]);
        let right = Clause::from_literals(vec![
            Literal::new("p", false),
            Literal::new("r", true),
        ]);

        let resolved = resolvents(&left, &right);

        assert_eq!(
            resolved,
            vec![Clause::from_literals(vec![Literal::new("r", true)])]
        );
    }
}
