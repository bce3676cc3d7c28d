//! DemCoin Simulator Binary
//!
//! Solves one participation equilibrium, then sweeps incentive parameters.

use anyhow::Result;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demcoin_common::{BestParameters, RoundResult};
use demcoin_equilibrium::{
    config::{OutputFormat, SimulatorSettings},
    Simulator, EQUILIBRIUM_VERSION,
};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting DemCoin simulator v{}", EQUILIBRIUM_VERSION);

    // Load configuration
    let settings = SimulatorSettings::load()?;
    info!("Loaded configuration: {:?}", settings);

    let simulator = Simulator::from_settings(&settings)?;
    info!(
        "Population ready: {} citizens, {}",
        simulator.population().len(),
        simulator.config()
    );

    let round = simulator.simulate_round();
    let optimal = simulator.optimize_parameters()?;

    match settings.output {
        OutputFormat::Text => print_text(&round, &optimal),
        OutputFormat::Json => {
            let report = json!({
                "settings": settings,
                "round": round,
                "optimal": optimal,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_text(round: &RoundResult, optimal: &BestParameters) {
    println!("Results:");
    println!("  Participation Rate: {:.1}%", round.participation_rate);
    println!("  Number Participating: {}", round.num_participating);
    println!("  Average Quality: {:.1}/10", round.avg_quality);
    println!("  Converged after {} iterations", round.converged_iteration);
    if round.hit_iteration_cap() {
        println!("  (iteration cap reached)");
    }

    println!();
    println!("Optimal Settings:");
    println!("  DemCoin per hour: {}", optimal.demcoin_per_hour);
    println!("  Success bonus: {}", optimal.success_bonus);
    println!(
        "  Expected participation: {:.1}%",
        optimal.result.participation_rate
    );
    println!("  Score: {:.2}", optimal.score);
}
