//! Group iteration: sample, render and write one test case per group

use log::{debug, info};
use rand::Rng;

use crate::case::{AnswerSource, CaseFormat, CasePaths, CaseWriter};
use crate::config::{GenConfig, GroupSpec};
use crate::error::Result;
use crate::geometry::Triangle;
use crate::sampler::sample_count;

/// Summary of one written test case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// 1-based position of the group in the run
    pub index: usize,
    pub triangles: usize,
    pub paths: CasePaths,
}

/// Sample the triangles of a single group
pub fn generate_group<R: Rng + ?Sized>(
    group: &GroupSpec,
    group_index: usize,
    rng: &mut R,
) -> Result<Vec<Triangle>> {
    let sampler = group.sampler(group_index)?;
    let count = sample_count(rng, group.number.min, group.number.max);
    debug!(
        "Group {}: {} triangles from [{}, {})",
        group_index, count, group.number.min, group.number.max
    );
    Ok(sampler.sample_many(rng, count))
}

/// Generate every group in order, writing case `i` for the `i`-th group.
///
/// The first error aborts the run; cases already written stay on disk.
pub fn generate_cases<R, F, A>(
    groups: &[GroupSpec],
    writer: &CaseWriter,
    format: &F,
    answers: &A,
    rng: &mut R,
) -> Result<Vec<CaseReport>>
where
    R: Rng + ?Sized,
    F: CaseFormat + ?Sized,
    A: AnswerSource + ?Sized,
{
    let mut reports = Vec::with_capacity(groups.len());

    for (i, group) in groups.iter().enumerate() {
        let index = i + 1;
        let triangles = generate_group(group, index, rng)?;
        let test_text = format.render(&triangles);
        let answer_text = answers.answer(&triangles);
        let paths = writer.persist(&test_text, &answer_text, index)?;

        info!(
            "Case {}: wrote {} triangles to {}",
            index,
            triangles.len(),
            paths.test.display()
        );
        reports.push(CaseReport {
            index,
            triangles: triangles.len(),
            paths,
        });
    }

    Ok(reports)
}

/// Run a whole config with its own templates and output format
pub fn generate<R, A>(config: &GenConfig, answers: &A, rng: &mut R) -> Result<Vec<CaseReport>>
where
    R: Rng + ?Sized,
    A: AnswerSource + ?Sized,
{
    let writer = CaseWriter::new(
        &config.output_path,
        &config.test_template,
        &config.answer_template,
    );
    generate_cases(&config.groups, &writer, &config.format, answers, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{EmptyAnswer, Spaced};
    use crate::config::{CountRange, HalfExtent};
    use crate::error::GenError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::tempdir;

    fn group(min: usize, max: usize) -> GroupSpec {
        GroupSpec::new(
            CountRange { min, max },
            5.0,
            1.0,
            HalfExtent {
                x: 10.0,
                y: 10.0,
                z: 10.0,
            },
        )
    }

    struct CountAnswer;

    impl AnswerSource for CountAnswer {
        fn answer(&self, triangles: &[Triangle]) -> String {
            triangles.len().to_string()
        }
    }

    #[test]
    fn test_group_count_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let triangles = generate_group(&group(2, 6), 1, &mut rng).unwrap();
            assert!((2..6).contains(&triangles.len()));
        }
    }

    #[test]
    fn test_invalid_group_reports_index() {
        let mut bad = group(1, 2);
        bad.std = -1.0;
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            generate_group(&bad, 4, &mut rng),
            Err(GenError::InvalidGroup { group: 4, .. })
        ));
    }

    #[test]
    fn test_case_indices_follow_groups() {
        let dir = tempdir().unwrap();
        let writer = CaseWriter::new(dir.path(), "naive{index}.dat", "naive{index}.dat.ans");
        let groups = vec![group(1, 2), group(3, 4), group(0, 1)];
        let mut rng = StdRng::seed_from_u64(11);

        let reports = generate_cases(&groups, &writer, &Spaced, &EmptyAnswer, &mut rng).unwrap();

        let indices: Vec<usize> = reports.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        let counts: Vec<usize> = reports.iter().map(|r| r.triangles).collect();
        assert_eq!(counts, vec![1, 3, 0]);

        for i in 1..=3 {
            assert!(dir.path().join(format!("naive{i}.dat")).is_file());
            assert!(dir.path().join(format!("naive{i}.dat.ans")).is_file());
        }
        let empty = fs::read_to_string(dir.path().join("naive3.dat")).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_answer_source_is_pluggable() {
        let dir = tempdir().unwrap();
        let writer = CaseWriter::new(dir.path(), "t{index}", "t{index}.ans");
        let mut rng = StdRng::seed_from_u64(3);

        generate_cases(&[group(4, 5)], &writer, &Spaced, &CountAnswer, &mut rng).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("t1.ans")).unwrap(), "4");
    }

    #[test]
    fn test_write_failure_stops_run() {
        let dir = tempdir().unwrap();
        let writer = CaseWriter::new(dir.path().join("missing"), "a{index}", "a{index}.ans");
        let mut rng = StdRng::seed_from_u64(3);

        let result = generate_cases(&[group(1, 2)], &writer, &Spaced, &EmptyAnswer, &mut rng);
        assert!(matches!(result, Err(GenError::Filesystem { .. })));
    }
}
