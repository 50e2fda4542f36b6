//! Plain-text and CSV rendering.
//!
//! Every floating value is rounded to two decimals here and nowhere else.

use std::fmt::Write;

use crate::models::Timeline;
use crate::scheduler::{ComparisonTable, SimulationMetrics};

/// Renders the Gantt timeline as `P1 (0-5) | P2 (5-8)`.
///
/// With more than one core each block is prefixed by its core, e.g.
/// `C1:P2 (0-2)`.
pub fn gantt_line(timeline: &Timeline, core_count: usize) -> String {
    timeline
        .entries
        .iter()
        .map(|e| {
            if core_count > 1 {
                format!("C{}:P{} ({}-{})", e.core_index, e.pid, e.start_tick, e.end_tick)
            } else {
                format!("P{} ({}-{})", e.pid, e.start_tick, e.end_tick)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Widest run, in ticks, that [`gantt_chart`] draws.
pub const GANTT_CHART_MAX_TICKS: u64 = 200;

/// Renders one Gantt row per core, one character per tick.
///
/// Busy ticks show the last digit of the pid, idle ticks show `.`. Runs
/// longer than [`GANTT_CHART_MAX_TICKS`] get a one-line notice instead.
pub fn gantt_chart(timeline: &Timeline, core_count: usize, total_ticks: u64) -> String {
    let width = match usize::try_from(total_ticks) {
        Ok(width) if total_ticks <= GANTT_CHART_MAX_TICKS => width,
        _ => {
            return format!(
                "(chart omitted: {total_ticks} ticks exceed {GANTT_CHART_MAX_TICKS})\n"
            )
        }
    };
    let mut out = String::new();
    for core in 0..core_count {
        let mut row = vec!['.'; width];
        for e in timeline.entries_for_core(core) {
            let glyph = char::from_digit((e.pid % 10) as u32, 10).unwrap_or('#');
            for cell in row.iter_mut().take(e.end_tick as usize).skip(e.start_tick as usize) {
                *cell = glyph;
            }
        }
        let _ = writeln!(out, "C{core} |{}|", row.into_iter().collect::<String>());
    }
    out
}

/// Renders the PID / WT / TAT table.
pub fn process_table(metrics: &SimulationMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6}{:>8}{:>8}{:>8}{:>8}", "PID", "AT", "BT", "WT", "TAT");
    for p in &metrics.processes {
        let _ = writeln!(
            out,
            "{:<6}{:>8}{:>8}{:>8}{:>8}",
            format!("P{}", p.pid),
            p.arrival_time,
            p.burst_time,
            p.waiting_time,
            p.turnaround_time
        );
    }
    out
}

/// Renders the aggregate metrics block.
pub fn metrics_summary(metrics: &SimulationMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total ticks:             {}", metrics.total_ticks);
    let _ = writeln!(out, "CPU utilization (%):     {:.2}", metrics.cpu_utilization_pct);
    let _ = writeln!(out, "Throughput (proc/tick):  {:.2}", metrics.throughput);
    let _ = writeln!(out, "Context switches:        {}", metrics.context_switches);
    let _ = writeln!(
        out,
        "Switch overhead (%):     {:.2}",
        metrics.context_switch_overhead_pct
    );
    let _ = writeln!(out, "Avg waiting time:        {:.2}", metrics.average_waiting_time);
    let _ = writeln!(
        out,
        "Avg turnaround time:     {:.2}",
        metrics.average_turnaround_time
    );
    out
}

/// Renders the algorithm comparison table.
pub fn comparison_table(table: &ComparisonTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<11}{:>10}{:>10}{:>15}",
        "Algorithm", "Avg WT", "Avg TAT", "CPU Util (%)"
    );
    for r in &table.rows {
        let _ = writeln!(
            out,
            "{:<11}{:>10.2}{:>10.2}{:>15.2}",
            r.algorithm.code(),
            r.average_waiting_time,
            r.average_turnaround_time,
            r.cpu_utilization_pct
        );
    }
    out
}

/// Per-process CSV with a `PID,WT,TAT` header.
pub fn process_csv(metrics: &SimulationMetrics) -> String {
    let mut csv = String::from("PID,WT,TAT\n");
    for p in &metrics.processes {
        let _ = writeln!(csv, "P{},{},{}", p.pid, p.waiting_time, p.turnaround_time);
    }
    csv
}

/// Comparison CSV with an `Algorithm,AvgWT,AvgTAT,CPUUtil` header.
pub fn comparison_csv(table: &ComparisonTable) -> String {
    let mut csv = String::from("Algorithm,AvgWT,AvgTAT,CPUUtil\n");
    for r in &table.rows {
        let _ = writeln!(
            csv,
            "{},{:.2},{:.2},{:.2}",
            r.algorithm.code(),
            r.average_waiting_time,
            r.average_turnaround_time,
            r.cpu_utilization_pct
        );
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::models::{Algorithm, GanttEntry, ProcessRow};
    use crate::scheduler::{ComparisonRunner, SchedulerEngine};
    use crate::validation::normalize;

    fn fcfs_metrics() -> (Timeline, SimulationMetrics) {
        let rows = [
            ProcessRow::new(0, 5, 0),
            ProcessRow::new(1, 3, 0),
            ProcessRow::new(2, 1, 0),
        ];
        let out = SchedulerEngine::new(SimulationConfig::new(Algorithm::Fcfs))
            .unwrap()
            .simulate(normalize(&rows).unwrap())
            .unwrap();
        let metrics = SimulationMetrics::calculate(&out, 1);
        (out.timeline, metrics)
    }

    #[test]
    fn test_gantt_line_single_core() {
        let (timeline, _) = fcfs_metrics();
        assert_eq!(gantt_line(&timeline, 1), "P1 (0-5) | P2 (5-8) | P3 (8-9)");
    }

    #[test]
    fn test_gantt_line_multi_core() {
        let timeline = Timeline {
            entries: vec![GanttEntry::new(1, 0, 3, 0), GanttEntry::new(2, 0, 2, 1)],
        };
        assert_eq!(gantt_line(&timeline, 2), "C0:P1 (0-3) | C1:P2 (0-2)");
    }

    #[test]
    fn test_gantt_chart() {
        let timeline = Timeline {
            entries: vec![GanttEntry::new(1, 1, 3, 0), GanttEntry::new(12, 0, 2, 1)],
        };
        assert_eq!(gantt_chart(&timeline, 2, 4), "C0 |.11.|\nC1 |22..|\n");
    }

    #[test]
    fn test_gantt_chart_omitted_for_long_runs() {
        let timeline = Timeline {
            entries: vec![GanttEntry::new(1, u64::MAX - 1, u64::MAX, 0)],
        };
        assert_eq!(
            gantt_chart(&timeline, 1, u64::MAX),
            format!("(chart omitted: {} ticks exceed 200)\n", u64::MAX)
        );

        let timeline = Timeline {
            entries: vec![GanttEntry::new(1, 0, GANTT_CHART_MAX_TICKS, 0)],
        };
        let chart = gantt_chart(&timeline, 1, GANTT_CHART_MAX_TICKS);
        assert_eq!(chart.len(), "C0 ||\n".len() + GANTT_CHART_MAX_TICKS as usize);
    }

    #[test]
    fn test_process_csv() {
        let (_, metrics) = fcfs_metrics();
        assert_eq!(process_csv(&metrics), "PID,WT,TAT\nP1,0,5\nP2,4,7\nP3,6,7\n");
    }

    #[test]
    fn test_metrics_summary_rounds_two_decimals() {
        let (_, metrics) = fcfs_metrics();
        let text = metrics_summary(&metrics);
        assert!(text.contains("CPU utilization (%):     75.00"));
        assert!(text.contains("Throughput (proc/tick):  0.33"));
        assert!(text.contains("Avg waiting time:        3.33"));
        assert!(text.contains("Avg turnaround time:     6.33"));
    }

    #[test]
    fn test_process_table_rows() {
        let (_, metrics) = fcfs_metrics();
        let text = process_table(&metrics);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(2).unwrap().starts_with("P2"));
    }

    #[test]
    fn test_comparison_outputs() {
        let processes = normalize(&[ProcessRow::new(0, 5, 0), ProcessRow::new(1, 3, 0)]).unwrap();
        let table = ComparisonRunner::new(1).run(&processes).unwrap();

        let csv = comparison_csv(&table);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Algorithm,AvgWT,AvgTAT,CPUUtil");
        assert!(lines[1].starts_with("FCFS,"));
        assert!(lines[6].starts_with("RR,"));

        let text = comparison_table(&table);
        assert!(text.contains("PPRIORITY"));
    }
}
