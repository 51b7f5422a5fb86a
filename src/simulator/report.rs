//! Simulation report generation.

use super::config::SimConfig;
use crate::core::settings::Settings;
use crate::core::time_format::format_elapsed;

/// Outcome of one simulated session.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunStats {
    pub item_names: Vec<String>,
    pub final_levels: Vec<u32>,
    /// Successful rolls per item
    pub level_ups: Vec<u32>,
    pub total_level_ups: u32,
    pub battles: u64,
    pub history_len: usize,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub wins_per_run: u32,
    pub settings: Settings,

    // Per item, in store order
    pub item_names: Vec<String>,
    pub avg_final_level: Vec<f64>,
    pub min_final_level: Vec<u32>,
    pub max_final_level: Vec<u32>,

    pub avg_total_level_ups: f64,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = f64::from(num_runs.max(1));
        let item_names = runs
            .first()
            .map(|r| r.item_names.clone())
            .unwrap_or_default();

        let per_item = |i: usize| runs.iter().filter_map(move |r| r.final_levels.get(i).copied());

        let avg_final_level = (0..item_names.len())
            .map(|i| per_item(i).map(f64::from).sum::<f64>() / divisor)
            .collect();
        let min_final_level = (0..item_names.len())
            .map(|i| per_item(i).min().unwrap_or(0))
            .collect();
        let max_final_level = (0..item_names.len())
            .map(|i| per_item(i).max().unwrap_or(0))
            .collect();

        let avg_total_level_ups = runs
            .iter()
            .map(|r| f64::from(r.total_level_ups))
            .sum::<f64>()
            / divisor;

        Self {
            num_runs,
            wins_per_run: config.wins_per_run,
            settings: config.settings,
            item_names,
            avg_final_level,
            min_final_level,
            max_final_level,
            avg_total_level_ups,
            run_stats: runs,
        }
    }

    /// In-game time one session represents.
    pub fn elapsed_per_run(&self) -> String {
        format_elapsed(u64::from(self.wins_per_run), &self.settings)
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} wins ({} each)\n\n",
            self.num_runs,
            self.wins_per_run,
            self.elapsed_per_run()
        ));

        report.push_str("── FINAL LEVELS ─────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  {:<16} {:>10} {:>8} {:>8}\n",
            "Item", "Avg", "Min", "Max"
        ));
        for (i, name) in self.item_names.iter().enumerate() {
            report.push_str(&format!(
                "  {:<16} {:>10.1} {:>8} {:>8}\n",
                name, self.avg_final_level[i], self.min_final_level[i], self.max_final_level[i]
            ));
        }
        report.push('\n');

        report.push_str("── LEVEL-UPS ────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg per run:         {:.1}\n",
            self.avg_total_level_ups
        ));
        if self.wins_per_run > 0 {
            report.push_str(&format!(
                "  Avg per win:         {:.3}\n",
                self.avg_total_level_ups / f64::from(self.wins_per_run)
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 9)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("wins_per_run", &self.wins_per_run)?;
        state.serialize_field("elapsed_per_run", &self.elapsed_per_run())?;
        state.serialize_field("settings", &self.settings)?;
        state.serialize_field("item_names", &self.item_names)?;
        state.serialize_field("avg_final_level", &self.avg_final_level)?;
        state.serialize_field("min_final_level", &self.min_final_level)?;
        state.serialize_field("max_final_level", &self.max_final_level)?;
        state.serialize_field("avg_total_level_ups", &self.avg_total_level_ups)?;
        state.end()
    }
}
