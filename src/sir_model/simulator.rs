use{
    super::*,
    crate::errors::*,
    crate::network::*,
    serde::{Serialize, Deserialize},
    rand::Rng,
    std::collections::{HashMap, HashSet},
    tracing::debug
};

/// Discrete-time SIR process over an arbitrary graph.
///
/// `trans_prob` is the per-step infection probability lambda (beta in the
/// epidemiology literature), `recovery_prob` the per-step recovery
/// probability gamma.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SirModel{
    pub trans_prob: f64,
    pub recovery_prob: f64
}

impl Default for SirModel{
    fn default() -> Self{
        Self{
            trans_prob: crate::misc_types::DEFAULT_TRANS_PROB,
            recovery_prob: crate::misc_types::DEFAULT_RECOVERY_PROB
        }
    }
}

impl SirModel{
    pub fn new(trans_prob: f64, recovery_prob: f64) -> NetResult<Self>
    {
        check_probability("trans_prob", trans_prob)?;
        check_probability("recovery_prob", recovery_prob)?;
        Ok(
            Self{
                trans_prob,
                recovery_prob
            }
        )
    }

    /// Run the process for `steps` steps and record the compartment
    /// counts once per step, *before* that step's transition — entry 0
    /// is the initial condition and the trace has exactly `steps`
    /// entries.
    ///
    /// Updates are synchronous: every node's next state is computed from
    /// the pre-step snapshot, then committed at once. A susceptible node
    /// runs a single Bernoulli(`trans_prob`) trial against the *first*
    /// infected neighbour in sorted order; further infected neighbours do
    /// not compound the probability. An infected node recovers with
    /// `recovery_prob`, independent of its neighbourhood; recovered nodes
    /// are absorbing.
    pub fn run<N, R>(
        &self,
        graph: &Network<N>,
        initial_infected: &[N],
        steps: usize,
        rng: &mut R
    ) -> NetResult<SirTrace>
    where
        N: GraphNode,
        R: Rng
    {
        let nodes = graph.nodes();
        let mut states: HashMap<N, InfectionState> = nodes.iter()
            .map(|&node| (node, InfectionState::Susceptible))
            .collect();

        let mut seen: HashSet<N> = HashSet::with_capacity(initial_infected.len());
        for &patient in initial_infected{
            if !graph.has_node(patient){
                return Err(
                    NetError::invalid_param(
                        "initial_infected",
                        format!("node {:?} is not part of the graph", patient)
                    )
                );
            }
            if !seen.insert(patient){
                return Err(
                    NetError::invalid_param(
                        "initial_infected",
                        format!("node {:?} listed twice", patient)
                    )
                );
            }
            states.insert(patient, InfectionState::Infected);
        }

        let mut counts = Vec::with_capacity(steps);
        for _ in 0..steps{
            counts.push(count_compartments(&states));

            let mut new_states = states.clone();
            for &node in &nodes{
                match states[&node]{
                    InfectionState::Susceptible => {
                        let first_infected = graph.neighbors(node)
                            .into_iter()
                            .find(|neighbor| states[neighbor].inf_check());
                        if first_infected.is_some() && rng.gen::<f64>() < self.trans_prob{
                            new_states.insert(node, InfectionState::Infected);
                        }
                    }
                    InfectionState::Infected => {
                        if rng.gen::<f64>() < self.recovery_prob{
                            new_states.insert(node, InfectionState::Recovered);
                        }
                    }
                    InfectionState::Recovered => {}
                }
            }
            states = new_states;
        }

        let trace = SirTrace::new(counts);
        debug!(
            steps,
            lifespan = trace.lifespan(),
            max_infected = trace.max_infected(),
            "sir run finished"
        );
        Ok(trace)
    }
}

fn count_compartments<N: GraphNode>(states: &HashMap<N, InfectionState>) -> CompartmentCounts
{
    CompartmentCounts{
        susceptible: states.values().filter(|s| s.sus_check()).count(),
        infected: states.values().filter(|s| s.inf_check()).count(),
        recovered: states.values().filter(|s| s.rec_check()).count()
    }
}
