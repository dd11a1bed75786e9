//! Action of the hover task.
use crate::{
    task::{ACTION_HIGH, ACTION_LOW, ACTION_SIZE},
    OutOfBounds, RotorSpeeds, TaskError,
};
use log::debug;
use quadrl_core::Act;

/// Rotor speeds chosen by a policy.
///
/// The length and range are not checked on construction; [`Task::step`]
/// validates them.
///
/// [`Task::step`]: crate::Task::step
#[derive(Clone, Debug, PartialEq)]
pub struct QuadAct(Vec<f64>);

impl QuadAct {
    /// Constructs an action.
    pub fn new(rotor_speeds: Vec<f64>) -> Self {
        Self(rotor_speeds)
    }

    /// Returns the rotor speeds.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<RotorSpeeds> for QuadAct {
    fn from(rotor_speeds: RotorSpeeds) -> Self {
        Self(rotor_speeds.to_vec())
    }
}

impl Act for QuadAct {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Checks the rotor speeds before handing them to the simulator.
pub(crate) fn to_rotor_speeds(
    act: &[f64],
    out_of_bounds: OutOfBounds,
) -> Result<RotorSpeeds, TaskError> {
    if act.len() != ACTION_SIZE {
        return Err(TaskError::InvalidAction(format!(
            "expected {} rotor speeds, got {}",
            ACTION_SIZE,
            act.len()
        )));
    }

    let mut speeds = [0.0; ACTION_SIZE];
    for (i, (dst, v)) in speeds.iter_mut().zip(act.iter().copied()).enumerate() {
        if !v.is_finite() {
            return Err(TaskError::InvalidAction(format!(
                "rotor {} has a non-finite speed {}",
                i, v
            )));
        }
        *dst = if (ACTION_LOW..=ACTION_HIGH).contains(&v) {
            v
        } else {
            match out_of_bounds {
                OutOfBounds::Clamp => {
                    debug!("Clamp speed {} of rotor {}", v, i);
                    v.clamp(ACTION_LOW, ACTION_HIGH)
                }
                OutOfBounds::Reject => {
                    return Err(TaskError::InvalidAction(format!(
                        "rotor {} speed {} is out of [{}, {}]",
                        i, v, ACTION_LOW, ACTION_HIGH
                    )))
                }
            }
        };
    }

    Ok(speeds)
}
