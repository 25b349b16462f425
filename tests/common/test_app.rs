use aerosim::{
    components::{AircraftConfig, SpatialComponent},
    plugins::{AerodynamicsPlugin, AircraftPlugin, ControlPlugin, EnvironmentPlugin, PhysicsPlugin},
    resources::EnvironmentConfig,
};
use bevy::prelude::*;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    aircraft: Vec<(AircraftConfig, SpatialComponent)>,
    environment_config: Option<EnvironmentConfig>,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            aircraft: Vec::new(),
            environment_config: None,
            time_step: 1.0 / 120.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: AircraftConfig, spatial: SpatialComponent) -> Self {
        self.aircraft.push((config, spatial));
        self
    }

    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        self.environment_config = Some(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(EnvironmentPlugin::with_config(
                self.environment_config.unwrap_or_default(),
            ))
            .add_plugins(ControlPlugin)
            .add_plugins(AerodynamicsPlugin)
            .add_plugins(PhysicsPlugin {
                timestep: self.time_step,
            });

        for (config, spatial) in self.aircraft {
            app.add_plugins(AircraftPlugin::new(config, spatial));
        }

        // Run an initial update so startup spawns land in the world
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Advance fixed time by one timestep and run the fixed schedule once.
    pub fn run_fixed_step(&mut self) {
        let world = self.app.world_mut();
        let timestep = world.resource::<Time<Fixed>>().timestep();
        world.resource_mut::<Time<Fixed>>().advance_by(timestep);
        world.run_schedule(FixedUpdate);
    }

    pub fn run_fixed_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.run_fixed_step();
        }
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
