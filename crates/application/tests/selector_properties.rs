//! Property-based tests for the route selector
//!
//! Each candidate carries its index; a scripted emissions port answers from a
//! table of outcomes (failure, missing figure, or a number).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use application::{ApplicationError, EmissionsPort, RouteSelector};
use async_trait::async_trait;
use domain::{EmissionsReport, RouteCandidate};
use proptest::prelude::*;
use serde_json::json;

#[derive(Debug, Clone, Copy)]
enum Scripted {
    Fail,
    Missing,
    Value(f64),
}

#[derive(Debug)]
struct ScriptedEmissions {
    script: Vec<Scripted>,
    calls: AtomicUsize,
}

#[async_trait]
impl EmissionsPort for ScriptedEmissions {
    async fn estimate(&self, route: &RouteCandidate) -> Result<EmissionsReport, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let index = route
            .as_value()
            .get("index")
            .and_then(serde_json::Value::as_u64)
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(|| ApplicationError::ExternalService("no index".to_string()))?;

        match self.script[index] {
            Scripted::Fail => Err(ApplicationError::ExternalService("HTTP 502".to_string())),
            Scripted::Missing => Ok(EmissionsReport::missing()),
            Scripted::Value(v) => Ok(EmissionsReport::reported(v)),
        }
    }
}

fn scripted() -> impl Strategy<Value = Scripted> {
    prop_oneof![
        1 => Just(Scripted::Fail),
        1 => Just(Scripted::Missing),
        // Small integer range so ties are common
        4 => (0u8..20).prop_map(|v| Scripted::Value(f64::from(v))),
    ]
}

fn run(script: &[Scripted]) -> (Option<(usize, f64)>, usize) {
    let port = Arc::new(ScriptedEmissions {
        script: script.to_vec(),
        calls: AtomicUsize::new(0),
    });
    let selector = RouteSelector::new(port.clone());
    let candidates = (0..script.len())
        .map(|i| RouteCandidate::new(json!({ "index": i })))
        .collect();

    let best = tokio_test::block_on(selector.select(candidates)).map(|eco| {
        let index = eco
            .route
            .as_value()
            .get("index")
            .and_then(serde_json::Value::as_u64)
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(usize::MAX);
        (index, eco.emissions)
    });
    (best, port.calls.load(Ordering::SeqCst))
}

proptest! {
    #[test]
    fn every_candidate_is_looked_up_exactly_once(script in prop::collection::vec(scripted(), 0..12)) {
        let (_, calls) = run(&script);
        prop_assert_eq!(calls, script.len());
    }

    #[test]
    fn selects_earliest_minimum(script in prop::collection::vec(scripted(), 0..12)) {
        let reported: Vec<(usize, f64)> = script
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match s {
                Scripted::Value(v) => Some((i, *v)),
                Scripted::Fail | Scripted::Missing => None,
            })
            .collect();

        let (best, _) = run(&script);

        let minimum = reported.iter().map(|(_, v)| *v).reduce(f64::min);
        match minimum {
            None => prop_assert!(best.is_none()),
            Some(min) => {
                let expected_index = reported
                    .iter()
                    .find(|(_, v)| (*v - min).abs() < f64::EPSILON)
                    .map(|(i, _)| *i);
                prop_assert_eq!(best.map(|(i, _)| i), expected_index);
                prop_assert!((best.map_or(f64::NAN, |(_, v)| v) - min).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn failures_and_missing_figures_never_win(script in prop::collection::vec(scripted(), 1..12)) {
        let (best, _) = run(&script);
        if let Some((index, _)) = best {
            prop_assert!(matches!(script[index], Scripted::Value(_)));
        }
    }
}
