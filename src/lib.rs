//! A library for iterated revision of ranked propositional belief bases.
//!
//! entrench maintains a base of propositional beliefs, each held at a real-valued order of entrenchment from 0 to 1, and revises the base so the rationality postulates of Alchourrón, Gärdenfors, and Makinson hold across repeated changes.
//! The order of a belief settles what survives a change: the less entrenched yield first.
//!
//! Two pieces do the work.
//! A [resolution](crate::resolution)-based entailment checker decides what a collection of formulas commits a reasoner to, and the [base](crate::base) queries it, stratum by stratum, to compute the [degree](crate::base::GenericBase::degree) of any formula and to re-rank beliefs during [expansion](crate::base::GenericBase::expand), [contraction](crate::base::GenericBase::contract), and [revision](crate::base::GenericBase::revise).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [base](crate::base).
//!
//! Bases are built from a [configuration](crate::config) and a [backend](crate::backend) for normalisation and satisfiability, and beliefs are put to a base as [expressions](crate::structures::expression), written [in text](crate::builder::parse) or built programmatically.
//!
//! Internally, a change to the base is a scan over a handful of structures:
//! - Beliefs live in a [store](crate::db::store), indexed by decreasing order of entrenchment.
//! - Candidate re-rankings accumulate in a [reorder queue](crate::db::reorder_q) while the store is scanned, and apply as one batch afterwards.
//! - Every question of entailment reduces to [clauses](crate::structures::clause) in canonical form, settled by saturation under [resolution](crate::resolution).
//!
//! Useful starting points:
//! - The [procedures](crate::procedures) for the dynamics of a change.
//! - The [database module](crate::db) for the data a change works over.
//! - The [structures] for the elements in play (expressions, literals, clauses, formulas).
//!
//! # Examples
//!
//! + Degrees of belief follow entrenchment, not membership.
//!
//! ```rust
//! use entrench::base::specific::BeliefBase;
//!
//! let mut base = BeliefBase::default();
//!
//! base.add(&"a".parse().unwrap(), 0.7).unwrap();
//! base.add(&"a | b".parse().unwrap(), 0.7).unwrap();
//! base.add(&"b".parse().unwrap(), 0.5).unwrap();
//!
//! assert_eq!(base.degree(&"a".parse().unwrap()), 0.7);
//! assert_eq!(base.degree(&"a & b".parse().unwrap()), 0.5);
//! assert_eq!(base.degree(&"a | b".parse().unwrap()), 0.7);
//! ```
//!
//! + Revision accepts the incoming formula and clears whatever contradicts it, keeping what it can.
//!
//! ```rust
//! use entrench::base::specific::BeliefBase;
//!
//! let mut base = BeliefBase::default();
//!
//! base.revise(&"rain -> wet".parse().unwrap(), 0.9, true).unwrap();
//! base.revise(&"rain".parse().unwrap(), 0.6, true).unwrap();
//!
//! assert_eq!(base.degree(&"wet".parse().unwrap()), 0.6);
//!
//! base.revise(&"~rain".parse().unwrap(), 0.8, true).unwrap();
//!
//! assert_eq!(base.degree(&"~rain".parse().unwrap()), 0.8);
//! assert!(base.degree(&"rain".parse().unwrap()) < 0.8);
//! assert_eq!(base.degree(&"rain -> wet".parse().unwrap()), 0.9);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) trace the internals of each operation, with a target per subsystem to help narrow output to relevant parts of the library.
//! No logging implementation is installed by the library, so logs cost nothing until a consumer asks for them.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [expansion](crate::base::GenericBase::expand) can be filtered with `RUST_LOG=expand …` or,
//! - The orders applied by each commit, without the surrounding detail, with `RUST_LOG=queue=debug …`

#![allow(clippy::len_without_is_empty)]

pub mod backend;
pub mod base;
pub mod builder;
pub mod procedures;

pub mod config;
pub mod resolution;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
