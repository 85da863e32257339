use serde::{Deserialize, Serialize};

/// Bookkeeping for one [`Swarm::run`](`super::Swarm::run`), written by
/// [`Terminator`](`crate::traits::Terminator`)s.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SwarmStatus {
    /// An indicator of whether a terminator considers the swarm converged
    pub converged: bool,
    /// A message containing information about why the run stopped
    pub message: String,
}

impl SwarmStatus {
    /// Replace the status message.
    pub fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}
