use crate::error::MatchError;
use crate::network::Weighting;
use crate::transition::{
    SearchParameters, DEFAULT_DETOUR_FACTOR, DEFAULT_K_NEAREST, DEFAULT_SEARCH_RADIUS,
};

use log::debug;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_SEARCH_RADIUS: &str = "STREETMATCH_SEARCH_RADIUS";
pub const ENV_K_NEAREST: &str = "STREETMATCH_K_NEAREST";
pub const ENV_WEIGHT: &str = "STREETMATCH_WEIGHT";
pub const ENV_DEADLINE_MS: &str = "STREETMATCH_DEADLINE_MS";
pub const ENV_DETOUR_FACTOR: &str = "STREETMATCH_DETOUR_FACTOR";

/// Options of a [`match_trajectories`](crate::match_trajectories) call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Maximum distance between an observed point and a candidate edge.
    /// Must be finite and positive.
    pub search_radius: f64,

    /// The edge value used for routing and for scaling emission costs.
    pub weighting: Weighting,

    /// The number of nearest candidate edges kept per point, or all when `None`.
    pub k_nearest: Option<NonZeroUsize>,

    /// The time each trajectory may spend building its transitions.
    pub deadline: Option<Duration>,

    /// How far a route between two stops may stray, as a multiple of the
    /// straight-line distance it covers. Infinite searches every route.
    pub detour_factor: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            search_radius: DEFAULT_SEARCH_RADIUS,
            weighting: Weighting::Length,
            k_nearest: NonZeroUsize::new(DEFAULT_K_NEAREST),
            deadline: None,
            detour_factor: DEFAULT_DETOUR_FACTOR,
        }
    }
}

impl MatchOptions {
    pub fn new(search_radius: f64) -> Self {
        Self {
            search_radius,
            ..Self::default()
        }
    }

    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Keeps the `k` nearest candidates per point. Zero keeps all of them.
    pub fn with_k_nearest(mut self, k: usize) -> Self {
        self.k_nearest = NonZeroUsize::new(k);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_detour_factor(mut self, factor: f64) -> Self {
        self.detour_factor = factor;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.search_radius.is_finite() || self.search_radius <= 0.0 {
            return Err(MatchError::InvalidRadius(self.search_radius));
        }

        if self.detour_factor.is_nan() || self.detour_factor < 1.0 {
            return Err(MatchError::InvalidDetour(self.detour_factor));
        }

        Ok(())
    }

    pub fn search(&self) -> SearchParameters {
        SearchParameters {
            radius: self.search_radius,
            k_nearest: self.k_nearest,
        }
    }

    /// Reads the options from the environment, after loading a `.env`
    /// file if one is present. Unset keys keep their default.
    ///
    /// ```bash
    /// STREETMATCH_SEARCH_RADIUS=50
    /// STREETMATCH_K_NEAREST=8        # `0` or `all` for unbounded
    /// STREETMATCH_WEIGHT=length      # or the name of an edge attribute
    /// STREETMATCH_DEADLINE_MS=250
    /// STREETMATCH_DETOUR_FACTOR=4    # `inf` for unbounded
    /// ```
    pub fn from_env() -> Result<Self, MatchError> {
        if let Err(error) = dotenv::dotenv() {
            debug!("No .env file loaded: {error}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MatchError> {
        let mut options = Self::default();

        if let Some(value) = lookup(ENV_SEARCH_RADIUS) {
            options.search_radius = parse(ENV_SEARCH_RADIUS, &value)?;
        }

        if let Some(value) = lookup(ENV_K_NEAREST) {
            options.k_nearest = match value.trim() {
                all if all.eq_ignore_ascii_case("all") => None,
                k => NonZeroUsize::new(parse(ENV_K_NEAREST, k)?),
            };
        }

        if let Some(value) = lookup(ENV_WEIGHT) {
            options.weighting = parse(ENV_WEIGHT, &value)?;
        }

        if let Some(value) = lookup(ENV_DEADLINE_MS) {
            options.deadline = Some(Duration::from_millis(parse(ENV_DEADLINE_MS, &value)?));
        }

        if let Some(value) = lookup(ENV_DETOUR_FACTOR) {
            options.detour_factor = parse(ENV_DETOUR_FACTOR, &value)?;
        }

        options.validate()?;
        Ok(options)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, MatchError> {
    value.trim().parse().map_err(|_| MatchError::InvalidConfig {
        key,
        value: value.to_string(),
    })
}
