use{
    crate::errors::*,
    serde::{Serialize, Deserialize},
    rand_pcg::Pcg64,
    rand::SeedableRng,
    std::num::NonZeroUsize
};

pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;
pub const DEFAULT_TRANS_PROB: f64 = 0.1763;
pub const DEFAULT_RECOVERY_PROB: f64 = 0.14;
pub const DEFAULT_REWIRE_PROB: f64 = 1e-2;

// canonical probe range for the Watts-Strogatz characterisation sweep
pub const SWEEP_P_MIN: f64 = 1e-4;
pub const SWEEP_P_MAX: f64 = 1.0;
pub const DEFAULT_SWEEP_POINTS: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(10)};

/// The rng used throughout: seeded Pcg64, injected into every stochastic
/// call so a fixed seed reproduces a run bit for bit.
pub type GraphRng = Pcg64;

pub fn rng_from_seed(seed: u64) -> GraphRng
{
    Pcg64::seed_from_u64(seed)
}

/// Logarithmically spaced probe points between two positive endpoints.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct F64LogRangeBuilder
{
    pub start: f64,
    pub end: f64,
    pub steps: NonZeroUsize
}

impl Default for F64LogRangeBuilder{
    fn default() -> Self{
        Self::sweep_range(DEFAULT_SWEEP_POINTS)
    }
}

impl F64LogRangeBuilder{
    pub fn new(start: f64, end: f64, steps: NonZeroUsize) -> NetResult<Self>
    {
        if !(start.is_finite() && start > 0.0){
            return Err(
                NetError::invalid_param("start", format!("log range needs a positive start, got {}", start))
            );
        }
        if !(end.is_finite() && end > 0.0){
            return Err(
                NetError::invalid_param("end", format!("log range needs a positive end, got {}", end))
            );
        }
        Ok(
            Self{
                start,
                end,
                steps
            }
        )
    }

    pub fn sweep_range(steps: NonZeroUsize) -> Self
    {
        Self{
            start: SWEEP_P_MIN,
            end: SWEEP_P_MAX,
            steps
        }
    }

    pub fn points(&self) -> Vec<f64>
    {
        let n = self.steps.get();
        if n == 1{
            return vec![self.start];
        }
        let lg_start = self.start.log10();
        let lg_end = self.end.log10();
        let step = (lg_end - lg_start) / (n - 1) as f64;
        (0..n).map(
            |i|
            {
                if i == n - 1{
                    self.end
                } else {
                    10.0_f64.powf(lg_start + step * i as f64)
                }
            }
        ).collect()
    }
}

#[cfg(test)]
mod testing
{
    use super::*;

    #[test]
    fn log_points_hit_both_endpoints()
    {
        let range = F64LogRangeBuilder::sweep_range(NonZeroUsize::new(5).unwrap());
        let points = range.points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 1e-4).abs() < 1e-12);
        assert_eq!(points[4], 1.0);
        // decade per step for 1e-4..1 over 5 points
        assert!((points[1] - 1e-3).abs() < 1e-9);
        assert!((points[2] - 1e-2).abs() < 1e-8);
        for window in points.windows(2){
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn single_step_collapses_to_the_start()
    {
        let range = F64LogRangeBuilder::new(0.5, 2.0, NonZeroUsize::new(1).unwrap()).unwrap();
        assert_eq!(range.points(), vec![0.5]);
    }

    #[test]
    fn non_positive_endpoints_are_rejected()
    {
        let steps = NonZeroUsize::new(3).unwrap();
        assert!(F64LogRangeBuilder::new(0.0, 1.0, steps).is_err());
        assert!(F64LogRangeBuilder::new(1e-4, -1.0, steps).is_err());
    }
}
