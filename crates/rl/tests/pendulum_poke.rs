use rl::{Action, Env, EnvError, EnvRng, Observation, PendulumPoke, PokeConfig, State};
use std::f32::consts::PI;

fn seeded(seed: u64) -> PendulumPoke {
    PendulumPoke::new(PokeConfig { seed: Some(seed), ..Default::default() }).unwrap()
}

fn without_pokes() -> PendulumPoke {
    PendulumPoke::new(PokeConfig { poke_probability: 0.0, seed: Some(0), ..Default::default() }).unwrap()
}

#[test]
fn environment_setup() {
    let env = PendulumPoke::default();
    assert!(!env.is_started());
    assert_eq!(env.observation_size(), 3);
    assert_eq!(env.num_actions(), 3);
}

#[test]
fn step_without_start_fails() {
    let mut env = PendulumPoke::default();
    for action in Action::ALL {
        assert_eq!(env.step(action), Err(EnvError::NotStarted));
    }
    assert!(!env.is_started());
    assert!(env.get_state().is_none());
}

#[test]
fn start_observation_is_exact() {
    let mut env = PendulumPoke::default();
    let obs = env.start();
    assert_eq!(obs, [1.0, 0.0, 0.0]);
    assert!(env.is_started());
}

#[test]
fn one_step_from_rest_earns_nothing() {
    let mut env = PendulumPoke::default();
    env.start();
    for action in [Action::Negative, Action::Positive, Action::Stay] {
        let (_, reward) = env.step(action).unwrap();
        assert_eq!(reward, 0.0);
    }
}

#[test]
fn get_state_after_start_is_rest_and_read_only() {
    let mut env = seeded(5);
    env.start();
    let first = env.get_state().unwrap();
    assert_eq!(first.angle, 0.0);
    assert_eq!(first.velocity, 0.0);
    assert_eq!(first.rng, EnvRng::with_seed(5));

    let second = env.get_state().unwrap();
    assert_eq!(first, second);
}

/// Runs two `Positive` steps from `start()`, restores the start snapshot,
/// replays them and returns both final observations.
fn replay_two_positive_steps(env: &mut PendulumPoke) -> (Observation, Observation) {
    let mut old_obs = env.start();
    let prev_state = env.get_state().unwrap();
    for _ in 0..2 {
        old_obs = env.step(Action::Positive).unwrap().0;
    }

    let new_state = State { angle: 0.0, velocity: 0.0, rng: prev_state.rng };
    let mut new_obs = env.set_state(new_state);
    assert_eq!(new_obs, [1.0, 0.0, 0.0]);
    for _ in 0..2 {
        new_obs = env.step(Action::Positive).unwrap().0;
    }
    (old_obs, new_obs)
}

#[test]
fn setting_state_replays_positive_steps() {
    let mut unpoked = without_pokes();
    let (calm, _) = replay_two_positive_steps(&mut unpoked);

    let mut poked_seeds = 0;
    for seed in 0..1000 {
        let (old_obs, new_obs) = replay_two_positive_steps(&mut seeded(seed));
        for i in 0..3 {
            assert!(
                new_obs[i].abs() <= old_obs[i],
                "seed {seed} component {i}: {new_obs:?} vs {old_obs:?}"
            );
        }
        assert_eq!(new_obs, old_obs, "seed {seed}");
        if old_obs != calm {
            poked_seeds += 1;
        }
    }
    assert!(poked_seeds > 0, "no seed poked the pendulum within two steps");
}

#[test]
fn default_environment_replays_positive_steps() {
    let mut env = PendulumPoke::default();
    let (old_obs, new_obs) = replay_two_positive_steps(&mut env);
    for i in 0..3 {
        assert!(new_obs[i].abs() <= old_obs[i], "component {i}: {new_obs:?} vs {old_obs:?}");
    }
    assert_eq!(new_obs, old_obs);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "non-finite")]
fn setting_non_finite_state_panics_in_debug() {
    let mut env = seeded(3);
    env.set_state(State { angle: f32::NAN, velocity: 0.0, rng: EnvRng::with_seed(3) });
}

#[test]
fn positive_torque_deflects_positively_without_pokes() {
    let mut env = without_pokes();
    env.start();
    let mut obs = [0.0; 3];
    for _ in 0..2 {
        obs = env.step(Action::Positive).unwrap().0;
    }
    assert!(obs[0] > 0.0 && obs[1] > 0.0 && obs[2] > 0.0, "obs={obs:?}");
}

#[test]
fn set_state_starts_the_environment() {
    let mut env = PendulumPoke::default();
    let obs = env.set_state(State::at_rest(EnvRng::with_seed(9)));
    assert_eq!(obs, [1.0, 0.0, 0.0]);
    assert!(env.step(Action::Stay).is_ok());
}

#[test]
fn set_state_round_trip_keeps_observation() {
    let mut env = seeded(77);
    env.start();
    for action in [Action::Positive, Action::Positive, Action::Negative, Action::Positive] {
        env.step(action).unwrap();
    }
    let state = env.get_state().unwrap();
    let expected = rl::observation(&state);
    let obs = env.set_state(state.clone());
    assert_eq!(obs, expected);
    assert_eq!(env.get_state().unwrap(), state);
}

#[test]
fn set_state_wraps_the_angle() {
    let mut env = PendulumPoke::default();
    let obs = env.set_state(State { angle: -0.5, velocity: 0.25, rng: EnvRng::with_seed(1) });
    let state = env.get_state().unwrap();
    assert!((state.angle - (2.0 * PI - 0.5)).abs() < 1e-5);
    assert!((obs[0] - (-0.5_f32).cos()).abs() < 1e-5);
    assert!((obs[1] - (-0.5_f32).sin()).abs() < 1e-5);
    assert_eq!(obs[2], 0.25);
}

#[test]
fn snapshots_replay_bit_identically() {
    let config = PokeConfig { poke_probability: 1.0, poke_strength: 2.0, seed: Some(42), ..Default::default() };
    let mut env = PendulumPoke::new(config).unwrap();
    env.start();
    env.step(Action::Positive).unwrap();
    let snapshot = env.get_state().unwrap();

    let actions: Vec<Action> = (0..40).map(|i| Action::ALL[(i * 7 + 3) % 3]).collect();
    let record = |env: &mut PendulumPoke| -> Vec<(Observation, f32)> {
        actions.iter().map(|&a| env.step(a).unwrap()).collect()
    };

    let first = record(&mut env);
    env.set_state(snapshot.clone());
    let second = record(&mut env);
    assert_eq!(first, second);

    let mut other = PendulumPoke::new(env.config().clone()).unwrap();
    other.set_state(snapshot);
    assert_eq!(record(&mut other), first);
}

#[test]
fn pokes_draw_from_the_state_rng() {
    let config = PokeConfig { poke_probability: 1.0, poke_strength: 1.0, ..Default::default() };
    let mut env = PendulumPoke::new(config).unwrap();
    env.set_state(State::at_rest(EnvRng::with_seed(3)));
    let (a, _) = env.step(Action::Stay).unwrap();
    env.set_state(State::at_rest(EnvRng::with_seed(4)));
    let (b, _) = env.step(Action::Stay).unwrap();
    assert_ne!(a, b);
    assert_ne!(a[2], 0.0);
}

#[test]
fn no_pokes_and_no_torque_stays_at_rest() {
    let mut env = without_pokes();
    env.start();
    for _ in 0..50 {
        let (obs, reward) = env.step(Action::Stay).unwrap();
        assert_eq!(obs, [1.0, 0.0, 0.0]);
        assert_eq!(reward, 0.0);
    }
}

#[test]
fn rng_advances_even_without_pokes() {
    let mut env = without_pokes();
    env.start();
    let before = env.get_state().unwrap().rng;
    env.step(Action::Stay).unwrap();
    assert_ne!(env.get_state().unwrap().rng, before);
}

#[test]
fn upright_band_is_rewarded() {
    let mut env = without_pokes();
    env.set_state(State { angle: PI, velocity: 0.0, rng: EnvRng::with_seed(0) });
    let (obs, reward) = env.step(Action::Stay).unwrap();
    assert_eq!(reward, 1.0);
    assert!(obs[0] < -0.99);
    assert_eq!(env.reward(&env.get_state().unwrap()), 1.0);

    let outside = State { angle: PI / 2.0, velocity: 0.0, rng: EnvRng::with_seed(0) };
    assert_eq!(env.reward(&outside), 0.0);
}

#[test]
fn seeded_starts_are_reproducible() {
    let mut a = seeded(99);
    let mut b = seeded(99);
    a.start();
    b.start();
    for action in [Action::Positive, Action::Negative, Action::Stay, Action::Positive] {
        assert_eq!(a.step(action).unwrap(), b.step(action).unwrap());
    }
    // restarting resets the generator too
    a.start();
    assert_eq!(a.get_state().unwrap().rng, EnvRng::with_seed(99));
}

#[test]
fn state_serializes_with_rng() {
    let state = State { angle: 1.5, velocity: -0.5, rng: EnvRng::with_seed(21) };
    let json = serde_json::to_string(&state).unwrap();
    let back: State = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn actions_map_to_torque_signs() {
    assert_eq!(Action::Negative.torque_sign(), -1.0);
    assert_eq!(Action::Stay.torque_sign(), 0.0);
    assert_eq!(Action::Positive.torque_sign(), 1.0);
    for (i, action) in Action::ALL.into_iter().enumerate() {
        assert_eq!(Action::from_index(i), Some(action));
    }
    assert_eq!(Action::from_index(3), None);
}
