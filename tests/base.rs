use entrench::{
    base::specific::BeliefBase, builder::ChangeOk, config::Config,
    structures::expression::Expr, types::err::OrderError,
};

fn expr(text: &str) -> Expr {
    text.parse().unwrap()
}

fn orders(base: &BeliefBase) -> Vec<f64> {
    base.beliefs().map(|belief| belief.order()).collect()
}

mod bases {
    use super::*;

    #[test]
    fn equal_formulas_replace() {
        let mut base = BeliefBase::default();
        base.add(&expr("p -> q"), 0.4).unwrap();

        // Same canonical form, so the one belief is re-ranked.
        assert_eq!(base.add(&expr("~p | q"), 0.9), Ok(ChangeOk::Applied));
        assert_eq!(base.len(), 1);
        assert_eq!(base.degree(&expr("p -> q")), 0.9);
    }

    #[test]
    fn order_zero_round_trips_to_absence() {
        let mut base = BeliefBase::default();
        base.add(&expr("p"), 0.0).unwrap();
        assert!(base.is_empty());

        base.add(&expr("p"), 0.5).unwrap();
        base.add(&expr("p"), 0.0).unwrap();
        assert!(base.is_empty());
        assert_eq!(base.degree(&expr("p")), 0.0);
    }

    #[test]
    fn out_of_range_orders_are_rejected() {
        let mut base = BeliefBase::default();

        assert_eq!(base.add(&expr("p"), 1.5), Err(OrderError::OutOfRange));
        assert!(base.is_empty());
    }

    #[test]
    fn iteration_descends_through_changes() {
        let mut base = BeliefBase::default();
        base.add(&expr("a"), 0.2).unwrap();
        base.add(&expr("b"), 0.9).unwrap();
        base.add(&expr("c"), 0.5).unwrap();
        assert_eq!(orders(&base), vec![0.9, 0.5, 0.2]);

        base.revise(&expr("d"), 0.7, true).unwrap();
        let reordered = orders(&base);
        assert_eq!(reordered, vec![0.9, 0.7, 0.5, 0.2]);
        assert!(reordered.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn queue_is_drained_by_every_operation() {
        let mut base = BeliefBase::default();
        base.add(&expr("p"), 0.6).unwrap();
        base.add(&expr("q"), 0.4).unwrap();

        base.contract(&expr("p"), 0.2).unwrap();
        assert!(base.reorder_q.is_empty());

        base.expand(&expr("p & q"), 0.5, true).unwrap();
        assert!(base.reorder_q.is_empty());

        base.revise(&expr("~p"), 0.8, true).unwrap();
        assert!(base.reorder_q.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut base = BeliefBase::default();
        base.add(&expr("p"), 0.6).unwrap();
        base.add(&expr("q"), 0.4).unwrap();

        base.clear();

        assert!(base.is_empty());
        assert_eq!(base.degree(&expr("p")), 0.0);

        base.add(&expr("r"), 0.3).unwrap();
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn display() {
        let mut base = BeliefBase::default();
        assert_eq!(format!("{base}"), "empty");

        base.add(&expr("p & q"), 0.5).unwrap();
        assert_eq!(format!("{base}"), "Belief(p & q, order=0.5)");

        base.add(&expr("r | s"), 0.7).unwrap();
        assert_eq!(
            format!("{base}"),
            "Belief(r | s, order=0.7)\nBelief(p & q, order=0.5)",
        );
    }
}

mod strata {
    use super::*;

    #[test]
    fn grouping_follows_the_tolerance() {
        let config = Config {
            stratum_tolerance: 0.1,
        };
        let mut base = BeliefBase::from_config(config);
        base.add(&expr("a"), 0.5).unwrap();
        base.add(&expr("b"), 0.45).unwrap();
        base.add(&expr("c"), 0.38).unwrap();

        let strata: Vec<(f64, usize)> = base
            .belief_db
            .strata()
            .map(|(order, members)| (order, members.len()))
            .collect();

        // c sits within tolerance of b, but strata measure from their first member.
        assert_eq!(strata, vec![(0.5, 2), (0.38, 1)]);
    }

    #[test]
    fn default_tolerance_is_tight() {
        let mut base = BeliefBase::default();
        base.add(&expr("a"), 0.5).unwrap();
        base.add(&expr("b"), 0.45).unwrap();

        assert_eq!(base.belief_db.strata().count(), 2);
    }

    #[test]
    fn degree_sees_the_grouping() {
        let config = Config {
            stratum_tolerance: 0.1,
        };
        let mut base = BeliefBase::from_config(config);
        base.add(&expr("p"), 0.5).unwrap();
        base.add(&expr("p -> q"), 0.45).unwrap();

        assert_eq!(base.degree(&expr("q")), 0.5);
    }
}
