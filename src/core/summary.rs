use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Float;

use super::Bounds;

/// A struct that holds the results of a [`Swarm::run`](`crate::swarm::Swarm::run`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwarmSummary {
    /// The bounds of the search space.
    pub bounds: Bounds,
    /// The names of the parameters. This is `None` if no names were set.
    pub parameter_names: Option<Vec<String>>,
    /// A message left by the [`Terminator`](`crate::traits::Terminator`) which ended the run.
    pub message: String,
    /// The global best position.
    pub x: Vec<Float>,
    /// The fitness at [`SwarmSummary::x`].
    pub fx: Float,
    /// The number of fitness evaluations, including those of the initial population.
    pub cost_evals: usize,
    /// The number of completed iterations.
    pub iterations: usize,
    /// The number of particles in the swarm.
    pub n_particles: usize,
    /// Flag that says whether or not a terminator declared the run converged.
    pub converged: bool,
}

impl SwarmSummary {
    /// Set the names associated with each parameter.
    pub fn with_parameter_names(mut self, parameter_names: &[String]) -> Self {
        self.parameter_names = Some(parameter_names.to_vec());
        self
    }
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use tabled::{
            builder::Builder,
            settings::{object::Row, themes::BorderCorrection, Alignment, Span, Style},
        };
        let mut builder = Builder::default();
        builder.push_record(["SWARM RESULTS"]);
        builder.push_record(["Status", "f(x)", "#f(x)", "Iterations", "Particles"]);
        builder.push_record([
            if self.converged {
                "Converged"
            } else {
                "Stopped"
            },
            &format!("{:.5}", self.fx),
            &self.cost_evals.to_string(),
            &self.iterations.to_string(),
            &self.n_particles.to_string(),
        ]);
        builder.push_record(["Message", &self.message]);
        builder.push_record(["Parameter", "=", "-", "+", "At Limit?"]);

        let names = self.parameter_names.clone().unwrap_or_else(|| {
            (0..self.x.len())
                .map(|i| format!("x_{}", i))
                .collect::<Vec<_>>()
        });
        for ((v, b), n) in self.x.iter().zip(self.bounds.iter()).zip(names) {
            builder.push_record([
                &n,
                &format!("{:.5}", v),
                &format!("{:.5}", b.lower()),
                &format!("{:.5}", b.upper()),
                &(if b.at_bound(*v) { "Yes" } else { "No" }.to_string()),
            ]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .modify(Row::from(0), Alignment::center())
            .modify((0, 0), Span::column(5))
            .modify((3, 1), Span::column(4))
            .with(BorderCorrection::span());

        f.write_str(&table.to_string())?;
        Ok(())
    }
}
