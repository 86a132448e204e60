/*!
Entailment by resolution refutation.

A set of premises entails a goal exactly when the premises together with the negation of the goal are unsatisfiable, witnessed here by deriving the empty clause under resolution.
The procedure saturates: each round resolves every pair of clauses in the working set, and the search stops when either the empty clause appears or a round derives nothing new.

```rust
# use entrench::resolution::entails;
# use entrench::backend::{Backend, CanonicalBackend};
let backend = CanonicalBackend::default();

let rain_wet = backend.normalize(&"rain -> wet".parse().unwrap());
let rain = backend.normalize(&"rain".parse().unwrap());
let wet = backend.normalize(&"wet".parse().unwrap());

assert!(entails(&[&rain_wet, &rain], &wet));
assert!(!entails(&[&rain_wet], &wet));
```

With no premises, entailment of a formula is a tautology test.
The clause space over the atoms in play is finite and the working set grows strictly between rounds, so the procedure always terminates.
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets,
    structures::{clause::Clause, formula::Formula},
};

/// Whether the conjunction of `premises` entails `goal`.
pub fn entails(premises: &[&Formula], goal: &Formula) -> bool {
    log::trace!(target: targets::RESOLUTION, "{} premise(s), goal: {goal}", premises.len());

    let mut clauses: Vec<Clause> = premises
        .iter()
        .flat_map(|premise| premise.conjuncts().cloned())
        .chain(goal.negated().conjuncts().cloned())
        .collect();
    clauses.sort_unstable();
    clauses.dedup();

    if clauses.iter().any(|clause| clause.is_empty()) {
        return true;
    }

    let mut members: HashSet<Clause> = clauses.iter().cloned().collect();
    let mut derived: HashSet<Clause> = HashSet::new();

    loop {
        for i in 0..clauses.len() {
            for j in (i + 1)..clauses.len() {
                for resolvent in resolvents(&clauses[i], &clauses[j]) {
                    if resolvent.is_empty() {
                        log::trace!(target: targets::RESOLUTION, "refuted: {} and {}", clauses[i], clauses[j]);
                        return true;
                    }
                    derived.insert(resolvent);
                }
            }
        }

        if derived.iter().all(|clause| members.contains(clause)) {
            // Saturated without the empty clause.
            return false;
        }

        for clause in &derived {
            if members.insert(clause.clone()) {
                clauses.push(clause.clone());
            }
        }
    }
}

/// Every resolvent of a pair of clauses, one per complementary pair of literals, without duplicates.
pub fn resolvents(left: &Clause, right: &Clause) -> Vec<Clause> {
    let mut resolved: Vec<Clause> = left
        .literals()
        .filter(|pivot| right.contains(&pivot.negated()))
        .map(|pivot| left.resolvent_on(right, pivot))
        .collect();
    resolved.sort_unstable();
    resolved.dedup();
    resolved
}
