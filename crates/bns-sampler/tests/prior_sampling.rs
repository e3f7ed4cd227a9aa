mod common;

use bns_core::{Assignment, BnError, Network, RngHandle};
use bns_net::asia_network;
use bns_sampler::generate_sample;

use common::{coin, Scripted};

#[test]
fn root_frequency_converges_to_its_probability() {
    let net = coin(0.3);
    let mut rng = RngHandle::from_seed(17);
    let draws = 100_000;
    let hits = (0..draws)
        .filter(|_| generate_sample(&net, &mut rng).unwrap().get("X") == Some("true"))
        .count();
    let rate = hits as f64 / draws as f64;
    assert!((rate - 0.3).abs() < 0.01, "empirical rate {rate}");
}

#[test]
fn every_variable_is_assigned() {
    let net = asia_network();
    let mut rng = RngHandle::from_seed(5);
    for _ in 0..200 {
        let sample = generate_sample(&net, &mut rng).unwrap();
        assert_eq!(sample.len(), net.len());
        for variable in net.topological_order() {
            let state = sample.get(variable).unwrap();
            assert!(net.states(variable).unwrap().iter().any(|s| s == state));
        }
    }
}

#[test]
fn identical_seeds_give_identical_samples() {
    let net = asia_network();
    let mut rng_a = RngHandle::from_seed(2024);
    let mut rng_b = RngHandle::from_seed(2024);
    for _ in 0..50 {
        assert_eq!(
            generate_sample(&net, &mut rng_a).unwrap(),
            generate_sample(&net, &mut rng_b).unwrap()
        );
    }
}

#[test]
fn one_draw_per_variable() {
    let net = asia_network();
    let mut rng = Scripted::new(vec![0.5]);
    generate_sample(&net, &mut rng).unwrap();
    assert_eq!(rng.consumed, net.len());
}

#[test]
fn deterministic_children_follow_their_parent() {
    let net = asia_network();
    let mut rng = RngHandle::from_seed(8);
    for _ in 0..500 {
        let sample = generate_sample(&net, &mut rng).unwrap();
        let either = sample.get("lung") == Some("yes") || sample.get("tub") == Some("yes");
        assert_eq!(sample.get("either"), Some(if either { "yes" } else { "no" }));
    }
}

/// A network whose single CPT row sums slightly below one.
struct ShortRow {
    order: Vec<String>,
    states: Vec<String>,
}

impl Network for ShortRow {
    fn topological_order(&self) -> &[String] {
        &self.order
    }

    fn states(&self, _variable: &str) -> Result<&[String], BnError> {
        Ok(&self.states)
    }

    fn conditional_probability(
        &self,
        _variable: &str,
        _state: &str,
        _partial: &Assignment,
    ) -> Result<f64, BnError> {
        Ok(0.4999)
    }
}

#[test]
fn rounding_shortfall_assigns_last_state() {
    let net = ShortRow {
        order: vec!["v".into()],
        states: vec!["low".into(), "high".into()],
    };
    let mut rng = Scripted::new(vec![0.9999]);
    let sample = generate_sample(&net, &mut rng).unwrap();
    assert_eq!(sample.get("v"), Some("high"));
}
