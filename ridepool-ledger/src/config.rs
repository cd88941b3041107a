use serde::Deserialize;
use std::env;

/// Business rules for the ledger.
///
/// Both knobs default to the permissive behavior: unbounded seat counts and
/// zero fares accepted. Deployments wanting the stricter variants turn them
/// on through configuration rather than a code change.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LedgerConfig {
    /// Upper bound on the seat count of a single offer, if any.
    #[serde(default)]
    pub max_seat_count: Option<u32>,

    /// Reject offers whose fare is zero.
    #[serde(default)]
    pub require_nonzero_fare: bool,
}

impl LedgerConfig {
    /// Load from layered config files plus the environment.
    ///
    /// Every file layer is optional; with nothing present the permissive
    /// defaults apply. Eg. `RIDEPOOL_MAX_SEAT_COUNT=8` sets the seat cap.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RIDEPOOL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
