use entrench::{
    base::specific::BeliefBase, builder::ChangeOk, structures::expression::Expr,
    types::err::OrderError,
};

fn expr(text: &str) -> Expr {
    text.parse().unwrap()
}

fn base_with(beliefs: &[(&str, f64)]) -> BeliefBase {
    let mut base = BeliefBase::default();
    for (text, order) in beliefs {
        base.add(&expr(text), *order).unwrap();
    }
    base
}

fn orders(base: &BeliefBase) -> Vec<f64> {
    base.beliefs().map(|belief| belief.order()).collect()
}

mod expansion {
    use super::*;

    #[test]
    fn adds_at_the_given_order() {
        let mut base = BeliefBase::default();

        assert_eq!(base.expand(&expr("p"), 0.5, true), Ok(ChangeOk::Applied));
        assert_eq!(base.len(), 1);
        assert_eq!(base.degree(&expr("p")), 0.5);
    }

    #[test]
    fn without_the_add_only_reranks() {
        let mut base = BeliefBase::default();
        base.expand(&expr("p"), 0.5, false).unwrap();

        assert!(base.is_empty());
    }

    #[test]
    fn contradictions_are_ignored() {
        let mut base = base_with(&[("a", 0.5)]);

        assert_eq!(
            base.expand(&expr("b & ~b"), 0.7, true),
            Ok(ChangeOk::Contradiction),
        );
        assert_eq!(base.len(), 1);
        assert_eq!(base.degree(&expr("a")), 0.5);
    }

    #[test]
    fn tautologies_settle_at_full_order() {
        let mut base = BeliefBase::default();
        base.expand(&expr("t | ~t | s"), 0.3, true).unwrap();

        assert_eq!(orders(&base), vec![1.0]);
        assert!(base.beliefs().all(|belief| belief.formula().is_verum()));
    }

    #[test]
    fn raises_what_the_incoming_formula_implies() {
        let mut base = base_with(&[("p", 0.3)]);
        base.expand(&expr("p & q"), 0.6, true).unwrap();

        // p follows from p & q, so p cannot rank below it.
        assert_eq!(orders(&base), vec![0.6, 0.6]);
        assert_eq!(base.degree(&expr("p")), 0.6);
    }

    #[test]
    fn leaves_more_entrenched_beliefs_alone() {
        let mut base = base_with(&[("p", 0.9)]);
        base.expand(&expr("p & q"), 0.4, true).unwrap();

        assert_eq!(orders(&base), vec![0.9, 0.4]);
        assert_eq!(base.degree(&expr("p")), 0.9);
        assert_eq!(base.degree(&expr("q")), 0.4);
    }

    #[test]
    fn unrelated_beliefs_keep_their_degree() {
        let mut base = base_with(&[("q", 0.2)]);
        base.expand(&expr("p"), 0.5, true).unwrap();

        assert_eq!(base.degree(&expr("q")), 0.2);
        assert_eq!(base.degree(&expr("p")), 0.5);
    }

    #[test]
    fn equivalent_belief_rises_to_the_incoming_order() {
        let mut base = base_with(&[("p & (p | q)", 0.2)]);
        base.expand(&expr("p"), 0.6, false).unwrap();

        assert_eq!(orders(&base), vec![0.6]);
    }

    #[test]
    fn out_of_range_orders_are_rejected_without_mutation() {
        let mut base = base_with(&[("a", 0.5)]);

        assert_eq!(
            base.expand(&expr("b"), 1.5, true),
            Err(OrderError::OutOfRange),
        );
        assert_eq!(
            base.expand(&expr("b"), -0.1, true),
            Err(OrderError::OutOfRange),
        );
        assert_eq!(
            base.expand(&expr("b"), f64::NAN, true),
            Err(OrderError::OutOfRange),
        );
        assert_eq!(base.len(), 1);
        assert_eq!(base.degree(&expr("a")), 0.5);
    }
}
