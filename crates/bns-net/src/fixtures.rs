//! Reference networks used by tests, benchmarks and the CLI.

use crate::builder::NetworkBuilder;
use crate::network::DiscreteNetwork;

const NO_YES: [&str; 2] = ["no", "yes"];
const YES_NO: [&str; 2] = ["yes", "no"];

/// Classic sprinkler network.
///
/// ```text
///      Cloudy
///      ↙    ↘
/// Sprinkler  Rain
///      ↘    ↙
///     WetGrass
/// ```
pub fn sprinkler_network() -> DiscreteNetwork {
    NetworkBuilder::new()
        .variable("Cloudy", &NO_YES, &[], vec![vec![0.5, 0.5]])
        .variable(
            "Sprinkler",
            &NO_YES,
            &["Cloudy"],
            vec![vec![0.5, 0.5], vec![0.9, 0.1]],
        )
        .variable(
            "Rain",
            &NO_YES,
            &["Cloudy"],
            vec![vec![0.8, 0.2], vec![0.2, 0.8]],
        )
        .variable(
            "WetGrass",
            &NO_YES,
            &["Sprinkler", "Rain"],
            vec![
                vec![1.0, 0.0],
                vec![0.2, 0.8],
                vec![0.1, 0.9],
                vec![0.01, 0.99],
            ],
        )
        .build()
        .expect("sprinkler network is well formed")
}

/// Lauritzen and Spiegelhalter's chest clinic ("Asia") network.
pub fn asia_network() -> DiscreteNetwork {
    NetworkBuilder::new()
        .variable("asia", &YES_NO, &[], vec![vec![0.01, 0.99]])
        .variable(
            "tub",
            &YES_NO,
            &["asia"],
            vec![vec![0.05, 0.95], vec![0.01, 0.99]],
        )
        .variable("smoke", &YES_NO, &[], vec![vec![0.5, 0.5]])
        .variable(
            "lung",
            &YES_NO,
            &["smoke"],
            vec![vec![0.1, 0.9], vec![0.01, 0.99]],
        )
        .variable(
            "bronc",
            &YES_NO,
            &["smoke"],
            vec![vec![0.6, 0.4], vec![0.3, 0.7]],
        )
        // Deterministic OR of lung and tub.
        .variable(
            "either",
            &YES_NO,
            &["lung", "tub"],
            vec![
                vec![1.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 0.0],
                vec![0.0, 1.0],
            ],
        )
        .variable(
            "xray",
            &YES_NO,
            &["either"],
            vec![vec![0.98, 0.02], vec![0.05, 0.95]],
        )
        .variable(
            "dysp",
            &YES_NO,
            &["bronc", "either"],
            vec![
                vec![0.9, 0.1],
                vec![0.8, 0.2],
                vec![0.7, 0.3],
                vec![0.1, 0.9],
            ],
        )
        .build()
        .expect("asia network is well formed")
}
