//! Fluent builder for constructing a [`Flock`].

use flock_core::{FlockParameters, SimConfig, SimRng, Vec3};

use crate::{spawn_ring, Flock, SimResult};

/// Fluent builder for [`Flock`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, dt, snapshot interval
/// - `population` — number of agents to spawn
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                       |
/// |--------------------|-------------------------------|
/// | `.params(p)`       | `FlockParameters::default()`  |
/// | `.spawn_radius(r)` | `5.0`                         |
/// | `.origin(o)`       | `Vec3::ZERO`                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut flock = FlockBuilder::new(SimConfig::default(), 64)
///     .spawn_radius(5.0)
///     .params(FlockParameters { max_speed: 6.0, ..Default::default() })
///     .build()?;
/// flock.run(&mut NoopObserver)?;
/// ```
pub struct FlockBuilder {
    config:       SimConfig,
    population:   usize,
    spawn_radius: f32,
    origin:       Vec3,
    params:       Option<FlockParameters>,
}

impl FlockBuilder {
    /// Create a builder for a flock of `population` agents.
    pub fn new(config: SimConfig, population: usize) -> Self {
        Self {
            config,
            population,
            spawn_radius: 5.0,
            origin: Vec3::ZERO,
            params: None,
        }
    }

    /// Radius of the spawn ring.  Must be non-negative; zero stacks all
    /// agents at the origin (legal, if visually chaotic on tick 1).
    pub fn spawn_radius(mut self, radius: f32) -> Self {
        self.spawn_radius = radius;
        self
    }

    /// Center of the spawn ring.
    pub fn origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Supply behavior parameters.  If not called,
    /// [`FlockParameters::default`] is used.
    pub fn params(mut self, params: FlockParameters) -> Self {
        self.params = Some(params);
        self
    }

    /// Validate inputs, spawn the population on the ring, and return a
    /// ready-to-run [`Flock`].
    ///
    /// All configuration errors surface here — the tick loop never sees a
    /// malformed parameter set or an empty population.
    pub fn build(self) -> SimResult<Flock> {
        let params = self.params.unwrap_or_default();
        params.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let agents = spawn_ring(
            self.population,
            self.spawn_radius,
            self.origin,
            &params,
            &mut rng,
        )?;

        Ok(Flock::new(self.config, agents, params))
    }
}
