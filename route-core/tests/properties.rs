//! Property tests over the full reference registry.
//!
//! Every ordered port pair is evaluated with every vessel class, so these
//! exercise the whole pipeline rather than hand-picked fixtures.

use rand::SeedableRng;
use rand::rngs::StdRng;

use route_core::{
    CostModel, CostModelConfig, Objective, RouteCandidate, RouteEngine, RouteError, RouteKind,
    SavingsConfig, Registry, select_optimal,
};

/// Run `check` over every (origin, destination, vessel) triple.
fn for_every_request(engine: &RouteEngine, mut check: impl FnMut(&str, &str, &[RouteCandidate; 3])) {
    let mut rng = StdRng::seed_from_u64(2024);
    let registry = engine.registry();

    for origin in registry.list_ports() {
        for destination in registry.list_ports() {
            if origin.id == destination.id {
                continue;
            }
            for vessel in registry.list_vessels() {
                let candidates = engine
                    .compute_routes(&origin.id, &destination.id, &vessel.id, &mut rng)
                    .unwrap();
                check(&origin.id, &destination.id, &candidates);
            }
        }
    }
}

#[test]
fn property_one_candidate_per_kind_with_fixed_multipliers() {
    let engine = RouteEngine::with_reference_data();

    for_every_request(&engine, |origin, destination, candidates| {
        let kinds: Vec<RouteKind> = candidates.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, RouteKind::ALL, "{origin}->{destination}");

        let [direct, weather, fuel] = candidates;
        let tol = 1e-9 * direct.distance_nm.max(1.0);
        assert!((weather.distance_nm - direct.distance_nm * 1.08).abs() < tol);
        assert!((fuel.distance_nm - direct.distance_nm * 1.12).abs() < tol);

        assert_eq!(direct.waypoints.len(), 2);
        assert_eq!(weather.waypoints.len(), 3);
        assert_eq!(fuel.waypoints.len(), 3);
    });
}

#[test]
fn property_total_cost_is_exact_sum() {
    let engine = RouteEngine::with_reference_data();

    for_every_request(&engine, |origin, destination, candidates| {
        for c in candidates {
            assert_eq!(
                c.total_cost,
                c.fuel_cost + c.time_cost + c.port_fees,
                "{origin}->{destination} {}",
                c.kind
            );
        }
    });
}

#[test]
fn property_weather_risk_bounded() {
    let engine = RouteEngine::with_reference_data();

    for_every_request(&engine, |_, _, candidates| {
        for c in candidates {
            assert!(
                (0.1..=0.9).contains(&c.weather_risk_score),
                "{} risk = {}",
                c.kind,
                c.weather_risk_score
            );
        }
    });
}

#[test]
fn property_weather_risk_bounded_under_extreme_jitter() {
    let cost_model = CostModel::new(CostModelConfig {
        risk_jitter_std_dev: 5.0,
        ..CostModelConfig::default()
    })
    .unwrap();
    let engine = RouteEngine::new(
        Registry::with_reference_data(),
        cost_model,
        SavingsConfig::default(),
    );

    for_every_request(&engine, |_, _, candidates| {
        for c in candidates {
            assert!((0.1..=0.9).contains(&c.weather_risk_score));
        }
    });
}

#[test]
fn property_selection_is_minimum_of_key() {
    let engine = RouteEngine::with_reference_data();

    for_every_request(&engine, |_, _, candidates| {
        for objective in Objective::all() {
            let optimal = select_optimal(candidates, objective).unwrap();
            let best = candidates
                .iter()
                .map(|c| objective.key(c))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(objective.key(optimal), best, "{objective}");
        }
    });
}

#[test]
fn property_time_objective_always_picks_direct() {
    // Travel time depends on distance only and direct is the shortest.
    let engine = RouteEngine::with_reference_data();

    for_every_request(&engine, |_, _, candidates| {
        let optimal = select_optimal(candidates, Objective::Time).unwrap();
        assert_eq!(optimal.kind, RouteKind::Direct);
    });
}

#[test]
fn property_same_seed_is_idempotent() {
    let engine = RouteEngine::with_reference_data();

    let first = engine
        .compute_routes("SHANGHAI", "LOS_ANGELES", "Bulk Carrier", &mut StdRng::seed_from_u64(77))
        .unwrap();
    let second = engine
        .compute_routes("SHANGHAI", "LOS_ANGELES", "Bulk Carrier", &mut StdRng::seed_from_u64(77))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn property_identical_ports_always_invalid() {
    let engine = RouteEngine::with_reference_data();
    let mut rng = StdRng::seed_from_u64(0);

    for port in engine.registry().list_ports() {
        let err = engine
            .compute_routes(&port.id, &port.id, "Tanker", &mut rng)
            .unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)), "{}: {err:?}", port.id);
    }
}
