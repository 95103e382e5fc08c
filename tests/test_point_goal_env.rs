use anyhow::Result;
use goal_env::dummy::PointGoalEnv;
use goal_env::{
    BatchGoalDict, BatchGoalRewardEnv, GoalDict, GoalEnv, GoalEnvConfig, GoalKey, RewardType,
};
use ndarray::{array, Axis};
use tempdir::TempDir;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sparse_env(seed: u64) -> PointGoalEnv {
    PointGoalEnv::new(GoalEnvConfig::default(), seed)
}

fn dense_env(seed: u64) -> PointGoalEnv {
    let config = GoalEnvConfig::default().reward_type(RewardType::Dense);
    PointGoalEnv::new(config, seed)
}

#[test]
fn test_sparse_reward_around_threshold() {
    init();
    // distance_threshold = 0.05
    let env = sparse_env(0);
    let achieved = array![0.0f32, 0.0];
    assert_eq!(env.distance_reward(&achieved, &array![0.0f32, 0.04]), 0.0);
    assert_eq!(env.distance_reward(&achieved, &array![0.0f32, 0.05]), 0.0);
    assert_eq!(env.distance_reward(&achieved, &array![0.0f32, 0.06]), -1.0);
}

#[test]
fn test_dense_reward_is_negative_distance() {
    init();
    let env = dense_env(0);
    let achieved = array![0.0f32, 0.0];
    assert_eq!(env.distance_reward(&achieved, &array![0.0f32, 0.04]), -0.04);
    assert_eq!(env.distance_reward(&achieved, &array![3.0f32, 4.0]), -5.0);
}

#[test]
fn test_success_uses_strict_comparison() {
    init();
    let env = sparse_env(0);
    let achieved = array![0.0f32, 0.0];
    assert_eq!(env.is_success(&achieved, &array![0.0f32, 0.04]), 1.0);
    assert_eq!(env.is_success(&achieved, &array![0.0f32, 0.06]), 0.0);

    // A distance exactly at the threshold earns the sparse reward 0.0 but
    // does not count as a success.
    let at_threshold = array![0.0f32, 0.05];
    assert_eq!(env.distance_reward(&achieved, &at_threshold), 0.0);
    assert_eq!(env.is_success(&achieved, &at_threshold), 0.0);
}

#[test]
fn test_sample_goal_equals_first_of_batch() {
    init();
    let mut env1 = sparse_env(42);
    let mut env2 = sparse_env(42);
    assert_eq!(env1.sample_goal(), env2.sample_goals(1).unbatchify(0));
}

#[test]
fn test_sample_goals_keyed_like_get_goal() {
    init();
    let mut env = sparse_env(7);
    let goal = env.get_goal();
    let goals = env.sample_goals(3);
    assert_eq!(goals.batch_size(), 3);
    assert_eq!(goal.len(), goals.len());
    for k in goal.keys() {
        assert!(goals.get(*k).is_some());
    }
}

#[test]
fn test_compute_reward_equals_batch_of_one() {
    init();
    for env in [sparse_env(3), dense_env(3)].iter() {
        let obs = GoalDict::from_slice(&[
            (GoalKey::AchievedGoal, array![0.1f32, 0.2]),
            (GoalKey::DesiredGoal, array![0.3f32, 0.4]),
        ]);
        let action = array![0.0f32, 0.0];
        let actions = action.clone().insert_axis(Axis(0));
        let rewards = env.compute_rewards(&actions, &obs.to_batch());
        assert_eq!(env.compute_reward(&action, &obs), rewards[0]);
    }
}

#[test]
fn test_compute_rewards_over_batch() {
    init();
    let env = sparse_env(5);
    let obs = BatchGoalDict::from_slice(&[
        (GoalKey::AchievedGoal, array![[0.0f32, 0.0], [0.0, 0.0]]),
        (GoalKey::DesiredGoal, array![[0.0f32, 0.04], [0.0, 0.5]]),
    ]);
    let actions = array![[0.0f32, 0.0], [0.0, 0.0]];
    assert_eq!(env.compute_rewards(&actions, &obs), array![0.0f32, -1.0]);
}

#[test]
fn test_unbatchify_slices_at_index() {
    init();
    let batch = BatchGoalDict::from_slice(&[
        (GoalKey::DesiredGoal, array![[1.0f32, 2.0], [3.0, 4.0]]),
        (GoalKey::StateDesiredGoal, array![[5.0f32, 6.0], [7.0, 8.0]]),
    ]);
    let g = batch.unbatchify(1);
    assert_eq!(g.get(GoalKey::DesiredGoal), Some(&array![3.0f32, 4.0]));
    assert_eq!(g.get(GoalKey::StateDesiredGoal), Some(&array![7.0f32, 8.0]));

    // batchify is a second name for the same operation
    assert_eq!(batch.batchify(0), batch.unbatchify(0));
    assert_eq!(batch.batchify(1), batch.unbatchify(1));
}

#[test]
fn test_batch_of_one_round_trip() {
    init();
    let goal = GoalDict::from_slice(&[
        (GoalKey::DesiredGoal, array![1.0f32, 2.0]),
        (GoalKey::StateDesiredGoal, array![3.0f32, 4.0]),
    ]);
    let batch = goal.to_batch();
    assert_eq!(batch.batch_size(), 1);
    assert_eq!(batch.unbatchify(0), goal);
}

#[test]
fn test_step_never_terminates() -> Result<()> {
    init();
    let mut env = sparse_env(11);
    let act = array![0.5f32, -0.25];
    for _ in 0..3 {
        env.simulate(&act);
        let (step, record) = env.step(&act);
        assert!(!step.is_terminated);
        assert!(!step.is_done());

        let achieved = step.obs.try_get(GoalKey::AchievedGoal)?.clone();
        assert_eq!(step.reward, env.distance_reward(&achieved, env.state_goal()));
        assert_eq!(
            step.info.is_success,
            env.is_success(&achieved, env.state_goal())
        );
        assert_eq!(record.get_scalar("reward")?, step.reward);
        assert_eq!(record.get_scalar("is_success")?, step.info.is_success);
    }
    Ok(())
}

#[test]
fn test_reset_replaces_goal() {
    init();
    let mut env = sparse_env(13);
    let goal_before = env.state_goal().clone();
    let obs = env.reset();
    assert_eq!(obs.get(GoalKey::Observation), Some(&array![0.0f32, 0.0]));
    assert_ne!(env.state_goal(), &goal_before);
    assert_eq!(obs.get(GoalKey::DesiredGoal), Some(env.state_goal()));
}

#[test]
fn test_diagnostics_default_is_empty() {
    init();

    struct Minimal {
        config: GoalEnvConfig,
        goal: ndarray::Array1<f32>,
    }

    impl GoalEnv for Minimal {
        type Act = ndarray::Array1<f32>;

        fn config(&self) -> &GoalEnvConfig {
            &self.config
        }

        fn state_goal(&self) -> &ndarray::Array1<f32> {
            &self.goal
        }

        fn observe(&self) -> GoalDict {
            GoalDict::from_slice(&[(GoalKey::AchievedGoal, self.goal.clone())])
        }

        fn get_goal(&self) -> GoalDict {
            GoalDict::from_slice(&[(GoalKey::DesiredGoal, self.goal.clone())])
        }

        fn sample_goals(&mut self, batch_size: usize) -> BatchGoalDict {
            BatchGoalDict::from_slice(&[(
                GoalKey::DesiredGoal,
                ndarray::Array2::zeros((batch_size, 2)),
            )])
        }
    }

    let env = Minimal {
        config: GoalEnvConfig::default(),
        goal: array![0.0f32, 0.0],
    };
    assert!(env.get_diagnostics().is_empty());

    // the point env overrides the default
    let env = sparse_env(17);
    assert!(env.get_diagnostics().get_scalar("final_distance").is_ok());
}

#[test]
fn test_config_yaml_round_trip() -> Result<()> {
    init();
    let config = GoalEnvConfig::default()
        .reward_type(RewardType::Dense)
        .distance_threshold(0.1);

    let dir = TempDir::new("goal_env_config")?;
    let path = dir.path().join("config.yaml");
    config.save(&path)?;
    let config_ = GoalEnvConfig::load(&path)?;
    assert_eq!(config, config_);
    Ok(())
}

#[test]
fn test_reward_type_recognizes_sparse_or_anything_else() {
    init();
    let config: GoalEnvConfig =
        serde_yaml::from_str("reward_type: sparse\ndistance_threshold: 0.05\n").unwrap();
    assert_eq!(config.reward_type, RewardType::Sparse);

    let config: GoalEnvConfig =
        serde_yaml::from_str("reward_type: euclidean\ndistance_threshold: 0.05\n").unwrap();
    assert_eq!(config.reward_type, RewardType::Dense);
}
