//! Per-frame population statistics.

use serde::{Deserialize, Serialize};

/// A periodic snapshot of simulation-wide metrics at a given frame.
///
/// Long runs record thousands of these. Readers typically touch only an
/// excerpt (head and tail), so the fields are deserialized leniently and
/// enforced where an entry is actually rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStat {
    /// The frame this snapshot was taken at.
    pub frame_number: Option<i64>,
    /// Number of live cells at that frame.
    pub population: Option<u64>,
    /// Mean energy across the live population.
    pub avg_energy: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn stat_parses_with_producer_extras() {
        // Real logs carry environment columns next to the core three.
        let stat: FrameStat = serde_json::from_str(
            r#"{"frame_number": 100, "population": 52, "avg_energy": 61.4, "env_max_oxygen": 0.8}"#,
        )
        .unwrap();
        assert_eq!(stat.frame_number, Some(100));
        assert_eq!(stat.population, Some(52));
        assert_eq!(stat.avg_energy, Some(61.4));
    }

    #[test]
    fn stat_parses_with_missing_fields() {
        let stat: FrameStat = serde_json::from_str(r#"{"frame_number": 3}"#).unwrap();
        assert_eq!(stat.population, None);
        assert_eq!(stat.avg_energy, None);
    }

    #[test]
    fn integral_energy_widens_to_float() {
        let stat: FrameStat =
            serde_json::from_str(r#"{"frame_number": 1, "population": 10, "avg_energy": 80}"#)
                .unwrap();
        assert_eq!(stat.avg_energy, Some(80.0));
    }
}
