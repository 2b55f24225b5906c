//! Game session state and boundary events
//!
//! One owned aggregate holds everything a tick touches: the ship, the three
//! entity groups, the session counters and the seeded RNG. The host calls
//! into it strictly sequentially; there is no hidden shared state.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::group::SpriteGroup;
use super::ship::Ship;
use crate::config::FieldConfig;
use crate::consts::SHIP_TURN_RATE;

/// Fire-and-forget audio triggers emitted by the core.
///
/// The host drains these each frame and maps them to actual playback; the
/// core never blocks on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Thrust looping cue should start
    ThrustStart,
    /// Thrust looping cue should stop
    ThrustStop,
    /// Missile fired
    Fire,
    /// Entity destroyed
    Explosion,
}

/// Complete session state
#[derive(Debug)]
pub struct GameState {
    pub config: FieldConfig,
    pub ship: Ship,
    pub rocks: SpriteGroup,
    pub missiles: SpriteGroup,
    pub explosions: SpriteGroup,
    pub score: u64,
    pub lives: u32,
    /// `false` = idle (splash screen), `true` = running
    pub started: bool,
    /// Tick counter driving the spawner; wraps once it exceeds the field width
    pub elapsed_ticks: u32,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<AudioEvent>,
}

impl GameState {
    /// Fresh idle session with the ship at rest in the field center
    pub fn new(seed: u64, config: FieldConfig) -> Self {
        let ship = Ship::new(config.center());
        Self {
            config,
            ship,
            rocks: SpriteGroup::new(),
            missiles: SpriteGroup::new(),
            explosions: SpriteGroup::new(),
            score: 0,
            lives: 0,
            started: false,
            elapsed_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    // --- input commands (host-driven, edge-triggered) ---

    pub fn turn_left(&mut self) {
        self.ship.set_angle_vel(SHIP_TURN_RATE);
    }

    pub fn turn_right(&mut self) {
        self.ship.set_angle_vel(-SHIP_TURN_RATE);
    }

    pub fn stop_turn(&mut self) {
        self.ship.set_angle_vel(0.0);
    }

    pub fn thrust_on(&mut self) {
        self.ship.set_thrust(true, &mut self.events);
    }

    pub fn thrust_off(&mut self) {
        self.ship.set_thrust(false, &mut self.events);
    }

    /// Fire a missile. Always succeeds; there is no cooldown or ammo limit.
    pub fn fire(&mut self) {
        let missile = self.ship.shoot(&mut self.events);
        self.missiles.insert(missile);
    }

    /// Begin a session from the idle screen.
    ///
    /// Resets score and lives and clears the rock and missile groups. The
    /// ship's position and velocity carry over from wherever the previous
    /// session left them. Ignored while already running.
    pub fn start_game(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.rocks.clear();
        self.missiles.clear();
        log::info!("session started with {} lives", self.lives);
    }

    // --- queries ---

    /// Drain queued audio triggers for the host to play
    pub fn drain_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.events)
    }
}
