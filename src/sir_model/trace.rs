use{
    serde::{Serialize, Deserialize},
    std::io::Write
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompartmentCounts{
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize
}

impl CompartmentCounts{
    pub fn total(&self) -> usize
    {
        self.susceptible + self.infected + self.recovered
    }
}

/// Per-step compartment counts of one SIR run. Entry 0 is the initial
/// condition; counts are recorded before each step's transition, so a run
/// over `steps` steps has exactly `steps` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SirTrace{
    counts: Vec<CompartmentCounts>
}

impl SirTrace{
    pub fn new(counts: Vec<CompartmentCounts>) -> Self
    {
        Self{
            counts
        }
    }

    pub fn len(&self) -> usize
    {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[CompartmentCounts]
    {
        &self.counts
    }

    /// Steps during which at least one node was infected.
    pub fn lifespan(&self) -> usize
    {
        self.counts.iter()
            .filter(|c| c.infected > 0)
            .count()
    }

    /// Largest infected count seen over the run.
    pub fn max_infected(&self) -> usize
    {
        self.counts.iter()
            .map(|c| c.infected)
            .max()
            .unwrap_or(0)
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()>
    {
        writeln!(writer, "#t S I R")?;
        for (t, c) in self.counts.iter().enumerate(){
            writeln!(writer, "{} {} {} {}", t, c.susceptible, c.infected, c.recovered)?;
        }
        Ok(())
    }
}
