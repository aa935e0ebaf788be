use{
    super::*,
    crate::errors::*,
    crate::generators::*,
    crate::misc_types::*,
    serde::{Serialize, Deserialize},
    rand::Rng,
    std::{io::Write, num::NonZeroUsize},
    tracing::debug
};

/// Parallel series from a rewiring probability sweep: `(p, L, C)` per
/// probe point. Feed `write` output straight to gnuplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult
{
    pub p_values: Vec<f64>,
    pub l_values: Vec<f64>,
    pub c_values: Vec<f64>
}

impl SweepResult{
    pub fn len(&self) -> usize
    {
        self.p_values.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.p_values.is_empty()
    }

    pub fn iter(&'_ self) -> impl Iterator<Item=(f64, f64, f64)> + '_
    {
        self.p_values.iter()
            .zip(self.l_values.iter())
            .zip(self.c_values.iter())
            .map(|((&p, &l), &c)| (p, l, c))
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()>
    {
        writeln!(writer, "#p L C")?;
        for (p, l, c) in self.iter(){
            writeln!(writer, "{:E} {:E} {:E}", p, l, c)?;
        }
        Ok(())
    }
}

/// Sweep the rewiring probability over the canonical log-spaced range
/// 1e-4..=1 and collect both metrics per probe point.
///
/// `factory` builds a generator for one `p` with everything else held
/// fixed; the caller decides the policy and seeding. The characteristic
/// small-world signature is an `L` that collapses orders of magnitude
/// before `C` does.
pub fn sweep_rewire_prob<F, G, R>(
    factory: F,
    num_points: NonZeroUsize,
    rng: &mut R
) -> NetResult<SweepResult>
where
    F: Fn(f64) -> NetResult<G>,
    G: NetworkGenerator,
    R: Rng
{
    let p_values = F64LogRangeBuilder::sweep_range(num_points).points();
    let mut l_values = Vec::with_capacity(p_values.len());
    let mut c_values = Vec::with_capacity(p_values.len());

    for &p in &p_values{
        let graph = factory(p)?.generate(rng)?;
        let (l, c) = calculate_metrics(&graph)?;
        debug!(p, l, c, "sweep point");
        l_values.push(l);
        c_values.push(c);
    }

    Ok(
        SweepResult{
            p_values,
            l_values,
            c_values
        }
    )
}

#[cfg(test)]
mod testing
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    #[test]
    fn sweep_produces_parallel_series()
    {
        let mut rng = Pcg64::seed_from_u64(DEFAULT_GRAPH_SEED);
        let num_points = NonZeroUsize::new(4).unwrap();
        let result = sweep_rewire_prob(
            |p| SmallWorld::new(30, 4, p, RewirePolicy::FixedCount),
            num_points,
            &mut rng
        ).unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(result.l_values.len(), 4);
        assert_eq!(result.c_values.len(), 4);
        assert!((result.p_values[0] - SWEEP_P_MIN).abs() < 1e-12);
        assert_eq!(result.p_values[3], SWEEP_P_MAX);
        for (_, l, c) in result.iter(){
            assert!(l >= 1.0);
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn invalid_factory_params_propagate()
    {
        let mut rng = Pcg64::seed_from_u64(0);
        let res = sweep_rewire_prob(
            // k odd: every probe point must fail up front
            |p| SmallWorld::new(30, 3, p, RewirePolicy::PerEdge),
            NonZeroUsize::new(2).unwrap(),
            &mut rng
        );
        assert!(matches!(res, Err(NetError::InvalidParameter{..})));
    }

    #[test]
    fn dat_output_lists_one_line_per_point()
    {
        let result = SweepResult{
            p_values: vec![1e-4, 1.0],
            l_values: vec![12.5, 3.2],
            c_values: vec![0.5, 0.01]
        };
        let mut buf = Vec::new();
        result.write(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "#p L C");
        assert!(lines[1].starts_with("1E-4"));
    }
}
