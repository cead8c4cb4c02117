//! User-facing output

use application::EcoRouteOutcome;

/// Printed after the traffic lookup fails
pub const TRAFFIC_UNAVAILABLE: &str = "Unable to retrieve traffic data";

/// Printed whenever no eco-route could be determined
pub const FAILURE: &str = "Failed to calculate eco-route.";

/// Progress line shown before the calculation starts
pub fn header(origin: &str, destination: &str) -> String {
    format!("Calculating eco-route from {origin} to {destination}...")
}

/// Lines describing the outcome of a calculation
pub fn outcome_lines(outcome: &EcoRouteOutcome) -> Vec<String> {
    match outcome {
        EcoRouteOutcome::Found(eco) => vec![
            "Eco-route calculated successfully:".to_string(),
            eco.route.to_pretty_string(),
            format!("Estimated emissions: {}", eco.emissions),
        ],
        EcoRouteOutcome::NoRoute { .. } => vec![FAILURE.to_string()],
        EcoRouteOutcome::TrafficUnavailable { reason } => vec![
            format!("{TRAFFIC_UNAVAILABLE}: {reason}"),
            FAILURE.to_string(),
        ],
    }
}
