//! Discrete-time CPU scheduling simulator.
//!
//! Simulates process admission, dispatch, preemption, priority aging and
//! completion on a configurable number of logical cores, under six classic
//! policies: FCFS, SJF, SRTF, non-preemptive and preemptive priority, and
//! Round-Robin. Each run yields a Gantt timeline, per-process waiting and
//! turnaround times, and utilization / throughput / overhead metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRow`, `Process`, `Algorithm`,
//!   `GanttEntry`, `Timeline`
//! - **`validation`**: Input checks and normalization of raw rows
//! - **`config`**: Run-scoped `SimulationConfig`
//! - **`dispatching`**: Ready-queue ordering rules and preemption policies
//! - **`scheduler`**: `SchedulerEngine`, `SimulationMetrics`, `ComparisonRunner`
//! - **`workload`**: JSON workload documents and seeded random workloads
//! - **`report`**: Text and CSV rendering
//!
//! # Example
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//! use u_cpusched::models::{Algorithm, ProcessRow};
//! use u_cpusched::scheduler::{SchedulerEngine, SimulationMetrics};
//! use u_cpusched::validation::normalize;
//!
//! let processes = normalize(&[ProcessRow::new(0, 4, 0), ProcessRow::new(0, 4, 0)]).unwrap();
//! let config = SimulationConfig::new(Algorithm::RoundRobin).with_quantum(Some(2));
//! let outcome = SchedulerEngine::new(config).unwrap().simulate(processes).unwrap();
//!
//! assert_eq!(outcome.total_ticks, 8);
//! assert_eq!(outcome.context_switches, 4);
//!
//! let metrics = SimulationMetrics::calculate(&outcome, 1);
//! assert!((metrics.cpu_utilization_pct - 8.0 / 12.0 * 100.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimError;
