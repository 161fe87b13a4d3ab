use std::error::Error;
use std::fs;
use std::path::Path;

use chaosbatch::select::SelectSpec;
use chaosbatch::series::{run_series_jobs, Solver, SolverOutput, WindowSpec};
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

/// Stand-in for the external numerical engine: the window's mean.
struct MeanSolver;

impl Solver for MeanSolver {
    fn compute(&self, series: &[f64]) -> anyhow::Result<SolverOutput> {
        if series.is_empty() {
            anyhow::bail!("empty series");
        }
        let mean = series.iter().sum::<f64>() / series.len() as f64;
        Ok(SolverOutput::Scalar(mean))
    }
}

struct EchoSolver;

impl Solver for EchoSolver {
    fn compute(&self, series: &[f64]) -> anyhow::Result<SolverOutput> {
        Ok(SolverOutput::Spectrum(series.to_vec()))
    }
}

#[test]
fn pipeline_writes_one_result_per_input_under_the_subdir() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("run1.txt"), "0 1.0\n1 2.0\n2 3.0\n")?;
    fs::write(dir.path().join("run2.txt"), "0 10.0\n1 20.0\n")?;

    let select = SelectSpec::folder_scan(dir.path(), ".txt");
    let window = WindowSpec::default();
    let written = run_series_jobs(&select, &window, &MeanSolver, Path::new("LLE/wolf"))?;

    assert_eq!(written.len(), 2);
    for path in &written {
        assert!(path.starts_with(dir.path().join("LLE/wolf")));
    }

    let run1 = fs::read_to_string(dir.path().join("LLE/wolf/run1.txt"))?;
    assert_eq!(run1, "2");
    let run2 = fs::read_to_string(dir.path().join("LLE/wolf/run2.txt"))?;
    assert_eq!(run2, "15");
    Ok(())
}

#[test]
fn pipeline_respects_the_window_spec() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("series.txt"), "0 5.0\n1 6.0\n2 7.0\n3 8.0\n")?;

    let select = SelectSpec {
        folder: Some(dir.path().to_path_buf()),
        file: Some("series.txt".into()),
        extension: None,
    };
    let window = WindowSpec {
        column: 1,
        start: Some(1),
        stop: Some(3),
    };

    run_series_jobs(&select, &window, &EchoSolver, Path::new("out"))?;

    let result = fs::read_to_string(dir.path().join("out/series.txt"))?;
    assert_eq!(result, "6\n7");
    Ok(())
}

#[test]
fn selection_failure_is_fatal_before_any_output_exists() -> TestResult {
    let dir = tempdir()?;

    let select = SelectSpec::folder_scan(dir.path(), ".txt");
    let window = WindowSpec::default();
    let result = run_series_jobs(&select, &window, &MeanSolver, Path::new("out"));

    assert!(result.is_err());
    assert!(!dir.path().join("out").exists());
    Ok(())
}
