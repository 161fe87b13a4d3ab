// src/series/solver.rs

//! Narrow boundary to the numerical engine.

/// Result shapes produced by the supported algorithms: a single exponent or
/// slope value, or a per-iteration/per-dimension spectrum.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutput {
    Scalar(f64),
    Spectrum(Vec<f64>),
}

impl SolverOutput {
    /// Text form written to the per-file output: one formatted number, or
    /// one value per line.
    pub fn render(&self) -> String {
        match self {
            SolverOutput::Scalar(value) => value.to_string(),
            SolverOutput::Spectrum(values) => values
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A numerical algorithm computing a result from one series window.
///
/// Concrete algorithms (Wolf, Rosenstein, Kantz, Sano-Sawada, ...) live in
/// an external engine; an implementation of this trait carries its own
/// parameters (embedding dimension, delay, iteration count, neighborhood
/// thresholds, ...) and exposes only the computation. Keeping the boundary
/// this narrow leaves selection and dispatch independent of which algorithm
/// a job runs.
pub trait Solver: Send + Sync {
    fn compute(&self, series: &[f64]) -> anyhow::Result<SolverOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_renders_as_one_number() {
        assert_eq!(SolverOutput::Scalar(0.25).render(), "0.25");
    }

    #[test]
    fn spectrum_renders_newline_joined() {
        let out = SolverOutput::Spectrum(vec![1.0, -0.5]);
        assert_eq!(out.render(), "1\n-0.5");
    }
}
