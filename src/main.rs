//! Wire - WireBench Quantity Solver
//!
//! Command-line front end for the W.I.R.E. DC resolver and the AC network
//! evaluator.
//!
//! # Usage
//!
//! ```bash
//! wire dc --voltage 12 --resistance 4
//! wire ac --voltage 10 --frequency 1000 --resistance 50 --inductance 0.01
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wire_core::{
    error::Result,
    format::{format_quantity, format_value, format_with_unit},
    quantity::{AcCircuitInput, PartialQuantitySet, Quantity},
    resolve, solve_ac, validate,
};

/// Electrical quantity solver for the WireBench circuit lab
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the four DC quantities from any known subset
    Dc {
        /// Known power in watts
        #[arg(long)]
        watts: Option<f64>,

        /// Known current in amperes
        #[arg(long)]
        current: Option<f64>,

        /// Known resistance in ohms
        #[arg(long)]
        resistance: Option<f64>,

        /// Known voltage in volts
        #[arg(long)]
        voltage: Option<f64>,
    },

    /// Evaluate an AC network from voltage, frequency, R, L, C
    Ac {
        /// Source voltage in volts (RMS)
        #[arg(long)]
        voltage: f64,

        /// Source frequency in hertz
        #[arg(long)]
        frequency: f64,

        /// Series resistance in ohms
        #[arg(long)]
        resistance: f64,

        /// Series inductance in henries
        #[arg(long, default_value_t = 0.0)]
        inductance: f64,

        /// Series capacitance in farads
        #[arg(long, default_value_t = 0.0)]
        capacitance: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match args.command {
        Command::Dc {
            watts,
            current,
            resistance,
            voltage,
        } => {
            let input = PartialQuantitySet {
                watts,
                current,
                resistance,
                voltage,
            };
            let solved = resolve(&input)?;

            for quantity in Quantity::ALL {
                let provenance = match solved.derivation(quantity) {
                    Some(record) => record.formula,
                    None => "given",
                };
                println!(
                    "{:<12} {:>12}   ({})",
                    quantity,
                    format_quantity(solved.quantities.get(quantity), quantity, 2),
                    provenance
                );
            }
        }

        Command::Ac {
            voltage,
            frequency,
            resistance,
            inductance,
            capacitance,
        } => {
            let input = AcCircuitInput::new(voltage, frequency, resistance)
                .with_inductance(inductance)
                .with_capacitance(capacitance);

            validate(&input).into_result()?;
            let result = solve_ac(&input);

            println!("{:<22} {}", "inductive reactance", format_with_unit(result.inductive_reactance, "Ω", 4));
            println!("{:<22} {}", "capacitive reactance", format_with_unit(result.capacitive_reactance, "Ω", 4));
            println!("{:<22} {}", "net reactance", format_with_unit(result.net_reactance, "Ω", 4));
            println!("{:<22} {}", "impedance", format_with_unit(result.impedance, "Ω", 4));
            println!("{:<22} {}°", "phase angle", format_value(result.phase_angle_degrees, 2));
            println!("{:<22} {}", "current", format_with_unit(result.current, "A", 6));
            println!("{:<22} {}", "apparent power", format_with_unit(result.apparent_power, "VA", 4));
            println!("{:<22} {}", "real power", format_with_unit(result.real_power, "W", 4));
            println!("{:<22} {}", "reactive power", format_with_unit(result.reactive_power, "VAR", 4));
            println!("{:<22} {}", "power factor", format_value(result.power_factor, 4));
        }
    }

    Ok(())
}
