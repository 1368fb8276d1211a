use crate::utils::error::{ExerciseError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCORES: [i32; 10] = [72, 85, 90, 78, 99, 92, 88, 75, 82, 74];

/// How the mean of integer scores is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageMode {
    #[default]
    Exact,
    /// Integer division before widening to float (83.5 becomes 83).
    Truncated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreStats {
    pub first: i32,
    pub last: i32,
    pub min: i32,
    pub max: i32,
    pub sum: i64,
    pub count: usize,
}

impl ScoreStats {
    pub fn compute(scores: &[i32]) -> Result<Self> {
        let (&first, rest) = scores.split_first().ok_or(ExerciseError::EmptyInputError)?;

        let mut stats = ScoreStats {
            first,
            last: first,
            min: first,
            max: first,
            sum: i64::from(first),
            count: 1,
        };
        for &score in rest {
            stats.min = stats.min.min(score);
            stats.max = stats.max.max(score);
            stats.sum += i64::from(score);
            stats.last = score;
            stats.count += 1;
        }
        Ok(stats)
    }

    pub fn average(&self, mode: AverageMode) -> f64 {
        let count = self.count as i64;
        match mode {
            AverageMode::Exact => self.sum as f64 / count as f64,
            AverageMode::Truncated => (self.sum / count) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scores() {
        let stats = ScoreStats::compute(&DEFAULT_SCORES).unwrap();
        assert_eq!(stats.min, 72);
        assert_eq!(stats.max, 99);
        assert_eq!(stats.sum, 835);
        assert_eq!(stats.first, 72);
        assert_eq!(stats.last, 74);
        assert_eq!(stats.count, 10);
    }

    #[test]
    fn test_average_modes() {
        let stats = ScoreStats::compute(&DEFAULT_SCORES).unwrap();
        assert_eq!(stats.average(AverageMode::Exact), 83.5);
        assert_eq!(stats.average(AverageMode::Truncated), 83.0);
    }

    #[test]
    fn test_min_max_found_by_scan_not_position() {
        let stats = ScoreStats::compute(&[50, 10, 90, 30]).unwrap();
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 90);
    }

    #[test]
    fn test_single_score() {
        let stats = ScoreStats::compute(&[7]).unwrap();
        assert_eq!(stats.first, stats.last);
        assert_eq!(stats.average(AverageMode::Exact), 7.0);
    }

    #[test]
    fn test_empty_scores_rejected() {
        assert!(matches!(
            ScoreStats::compute(&[]),
            Err(ExerciseError::EmptyInputError)
        ));
    }

    #[test]
    fn test_average_mode_parses_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            average: AverageMode,
        }
        let parsed: Wrapper = toml::from_str("average = \"truncated\"").unwrap();
        assert_eq!(parsed.average, AverageMode::Truncated);
    }
}
