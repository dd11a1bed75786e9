use anyhow::Result;
use quadrl_core::{
    record::{BufferedRecorder, Record},
    util, Policy,
};
use quadrl_task::{
    QuadAct, QuadEnv, QuadObs, ScriptedSim, SimConfig, Task, TaskConfig, ACTION_HIGH, ACTION_LOW,
    ACTION_SIZE,
};
use serde::Serialize;
use std::{convert::TryFrom, fs::File};

type Env = QuadEnv<ScriptedSim>;

struct RandomPolicy {}

impl Policy<Env> for RandomPolicy {
    fn sample(&mut self, _: &QuadObs) -> QuadAct {
        let speeds = (0..ACTION_SIZE)
            .map(|_| ACTION_LOW + fastrand::f64() * (ACTION_HIGH - ACTION_LOW))
            .collect::<Vec<_>>();
        QuadAct::new(speeds)
    }
}

#[derive(Debug, Serialize)]
struct HoverRecord {
    episode: usize,
    step: usize,
    reward: f32,
    success: usize,
    crashed: bool,
    z: f32,
}

impl TryFrom<&Record> for HoverRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        let obs = record.get_array1("obs")?;
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            reward: record.get_scalar("reward")?,
            success: record.get_scalar("success")? as _,
            crashed: record.get_scalar("crashed")? != 0.0,
            // Altitude of the last pose in the observation.
            z: obs[obs.len() - 4],
        })
    }
}

/// A climb from the ground to above the target, then a fall through the floor.
fn climb_and_fall() -> Vec<[f64; 6]> {
    let climb = (0..60).map(|i| [0.0, 0.0, i as f64, 0.0, 0.0, 0.0]);
    let fall = (0..60).map(|i| [0.0, 0.0, 59.0 - 1.5 * i as f64, 0.0, 0.0, 0.0]);
    climb.chain(fall).collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let config = TaskConfig::default().sim(SimConfig::default().init_pose([0.0; 6]));
    config.validate()?;
    let sim = ScriptedSim::new(&config.sim).with_script(climb_and_fall());
    let task = Task::with_simulator(sim, config.target_pos.as_deref())?;
    let mut env = QuadEnv::new(task).max_steps(Some(100));
    let mut recorder = BufferedRecorder::new();
    let mut policy = RandomPolicy {};

    let returns = util::eval_with_recorder(&mut env, &mut policy, 1, &mut recorder)?;
    log::info!("Returns: {:?}", returns);

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(File::create("random_hover_eval.csv")?);
    for record in recorder.iter() {
        wtr.serialize(HoverRecord::try_from(record)?)?;
    }
    wtr.flush()?;

    Ok(())
}
