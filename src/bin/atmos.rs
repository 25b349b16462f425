use std::env;

use aerosim::resources::{EnvironmentConfig, EnvironmentModel};
use aerosim::utils::SimError;

const ALTITUDE_STEP: f64 = 1000.0;
const MAX_ALTITUDE: f64 = 15000.0;

/// Print the configured atmosphere as an altitude table.
///
/// Usage: `aerosim-atmos [environment.yaml]`
fn main() -> Result<(), SimError> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => EnvironmentConfig::from_file(&path)?,
        None => EnvironmentConfig::default(),
    };
    if let Some(extra) = args.next() {
        return Err(SimError::InvalidArgument(format!(
            "unexpected argument '{}'",
            extra
        )));
    }

    let model = EnvironmentModel::new(&config);
    println!("model: {:?}", config.atmosphere.model_type);
    println!(
        "{:>10} {:>10} {:>12} {:>10}",
        "alt [m]", "T [K]", "p [Pa]", "rho"
    );

    let mut altitude = 0.0;
    while altitude <= MAX_ALTITUDE {
        let air = model.atmosphere(altitude);
        println!(
            "{:>10.0} {:>10.2} {:>12.1} {:>10.4}",
            altitude, air.temperature, air.pressure, air.density
        );
        altitude += ALTITUDE_STEP;
    }

    Ok(())
}
