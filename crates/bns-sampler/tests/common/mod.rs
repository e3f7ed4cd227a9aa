#![allow(dead_code)]

use bns_core::{Assignment, Evidence, Network, Query, RandomSource, Sample};
use bns_net::{DiscreteNetwork, NetworkBuilder};

/// A -> B with P(A=yes)=0.5, P(B=yes|A=yes)=0.9, P(B=yes|A=no)=0.2.
pub fn two_node() -> DiscreteNetwork {
    NetworkBuilder::new()
        .variable("A", &["yes", "no"], &[], vec![vec![0.5, 0.5]])
        .variable(
            "B",
            &["yes", "no"],
            &["A"],
            vec![vec![0.9, 0.1], vec![0.2, 0.8]],
        )
        .build()
        .unwrap()
}

/// A -> B where B always copies A.
pub fn copying_pair() -> DiscreteNetwork {
    NetworkBuilder::new()
        .variable("A", &["yes", "no"], &[], vec![vec![0.5, 0.5]])
        .variable(
            "B",
            &["yes", "no"],
            &["A"],
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        )
        .build()
        .unwrap()
}

/// Single binary root with P(X=true)=p.
pub fn coin(p: f64) -> DiscreteNetwork {
    NetworkBuilder::new()
        .variable("X", &["true", "false"], &[], vec![vec![p, 1.0 - p]])
        .build()
        .unwrap()
}

/// Replays a fixed list of draws and counts how many were consumed.
pub struct Scripted {
    draws: Vec<f64>,
    pub consumed: usize,
}

impl Scripted {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, consumed: 0 }
    }
}

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.consumed % self.draws.len()];
        self.consumed += 1;
        draw
    }
}

/// Exact `P(query | evidence)` by enumerating every total assignment.
pub fn exact_posterior(network: &DiscreteNetwork, query: &Query, evidence: &Evidence) -> f64 {
    let order = network.topological_order().to_vec();
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    enumerate(
        network,
        &order,
        &mut Assignment::new(),
        1.0,
        &mut |assignment, p| {
            let sample = Sample::from_assignment(assignment.clone());
            if evidence.is_consistent_with(&sample) {
                denominator += p;
                if sample.satisfies(query) {
                    numerator += p;
                }
            }
        },
    );
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn enumerate(
    network: &DiscreteNetwork,
    remaining: &[String],
    assignment: &mut Assignment,
    p: f64,
    visit: &mut dyn FnMut(&Assignment, f64),
) {
    let Some((variable, rest)) = remaining.split_first() else {
        visit(assignment, p);
        return;
    };
    for state in network.states(variable).unwrap() {
        let q = network
            .conditional_probability(variable, state, assignment)
            .unwrap();
        if q == 0.0 {
            continue;
        }
        assignment.insert(variable.clone(), state.clone());
        enumerate(network, rest, assignment, p * q, visit);
        assignment.remove(variable);
    }
}
