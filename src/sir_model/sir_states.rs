use serde::{Serialize, Deserialize};

/// Compartment of a single node. Transitions are one way only:
/// Susceptible -> Infected -> Recovered.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState{
    Susceptible,
    Infected,
    Recovered,
}

impl InfectionState{
    pub fn sus_check(&self) -> bool{
        matches!(self, InfectionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self, InfectionState::Infected)
    }
    pub fn rec_check(&self) -> bool{
        matches!(self, InfectionState::Recovered)
    }

    pub fn is_or_was_infected(&self) -> bool
    {
        matches!(self, Self::Infected | Self::Recovered)
    }
}

impl Default for InfectionState{
    fn default() -> Self{
        InfectionState::Susceptible
    }
}

#[cfg(test)]
mod testing
{
    use super::*;

    #[test]
    fn predicates_match_variants()
    {
        assert!(InfectionState::default().sus_check());
        assert!(InfectionState::Infected.inf_check());
        assert!(InfectionState::Recovered.rec_check());
        assert!(InfectionState::Infected.is_or_was_infected());
        assert!(InfectionState::Recovered.is_or_was_infected());
        assert!(!InfectionState::Susceptible.is_or_was_infected());
    }
}
