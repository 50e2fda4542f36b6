//! Tick-driven multi-core scheduling engine.
//!
//! # Algorithm
//!
//! Each tick runs the same fixed sequence:
//!
//! 1. **Admission**: arrived, unadmitted processes join the ready-queue tail.
//! 2. **Aging**: every queued process accumulates one waiting tick; after
//!    [`AGING_THRESHOLD`] ticks its priority improves by one (floored at 0).
//! 3. **Reordering**: the policy's rule (if any) stable-sorts the queue.
//! 4. **Preemption**: each busy core asks the policy whether its process
//!    must yield; a yielded process goes back to the queue tail.
//! 5. **Dispatch**: each free core takes the queue head.
//! 6. **Idle**: with an empty queue and all cores free, time advances to
//!    the next arrival without execution.
//! 7. **Execution**: each busy core runs its process for one tick;
//!    processes reaching zero remaining time complete and free the core.
//!
//! Preemptions and completions both count as context switches.
//!
//! Cores are logical slots visited in index order within a tick; they model
//! simultaneous execution but are evaluated sequentially and
//! deterministically.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::{SimulationConfig, AGING_THRESHOLD};
use crate::dispatching::{ReadyQueue, SchedulingPolicy};
use crate::error::SimError;
use crate::models::{Algorithm, Pid, Process, Tick, Timeline};
use crate::validation::validate_processes;

/// One logical core for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSlot {
    /// Zero-based core index.
    pub index: usize,
    /// Index of the running process in the run's process table.
    pub running: Option<usize>,
    /// Ticks left in the current quantum. `None` = unbounded.
    pub quantum_remaining: Option<Tick>,
    /// Timeline interval opened by the current dispatch.
    open_interval: Option<usize>,
}

impl CoreSlot {
    fn new(index: usize) -> Self {
        Self {
            index,
            running: None,
            quantum_remaining: None,
            open_interval: None,
        }
    }

    /// Whether no process holds this core.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    fn dispatch(&mut self, process: usize, quantum: Option<Tick>) {
        debug_assert!(self.is_idle(), "core {} already busy", self.index);
        self.running = Some(process);
        self.quantum_remaining = quantum;
        // A dispatch always starts a fresh interval, even for the process
        // that was just preempted from this core.
        self.open_interval = None;
    }

    fn release(&mut self) {
        self.running = None;
        self.open_interval = None;
    }

    fn record_tick(&mut self, timeline: &mut Timeline, pid: Pid, tick: Tick) {
        match self.open_interval {
            Some(interval) => timeline.extend(interval),
            None => self.open_interval = Some(timeline.open(pid, tick, self.index)),
        }
    }
}

/// View of the engine state after dispatch, before execution of a tick.
#[derive(Debug)]
pub struct TickSnapshot<'a> {
    /// Current tick.
    pub tick: Tick,
    processes: &'a [Process],
    cores: &'a [CoreSlot],
    ready: &'a ReadyQueue,
}

impl<'a> TickSnapshot<'a> {
    /// Running process per core (`None` for a free core), in core order.
    pub fn running(&self) -> impl Iterator<Item = Option<&'a Process>> + '_ {
        let processes = self.processes;
        self.cores
            .iter()
            .map(move |c| c.running.map(|i| &processes[i]))
    }

    /// Ready processes, head first.
    pub fn ready(&self) -> impl Iterator<Item = &'a Process> + '_ {
        let processes = self.processes;
        self.ready.iter().map(move |i| &processes[i])
    }

    /// Core slots.
    pub fn cores(&self) -> &'a [CoreSlot] {
        self.cores
    }
}

/// Receives a [`TickSnapshot`] once per executing tick.
pub trait TickObserver {
    /// Called after dispatch and before execution.
    fn observe(&mut self, snapshot: &TickSnapshot<'_>);
}

/// Observer that ignores every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TickObserver for NoopObserver {
    fn observe(&mut self, _snapshot: &TickSnapshot<'_>) {}
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Number of logical cores.
    pub core_count: usize,
    /// Execution intervals.
    pub timeline: Timeline,
    /// Processes with final waiting and turnaround times, in pid order.
    pub processes: Vec<Process>,
    /// Ticks elapsed until the last completion, idle ticks included.
    pub total_ticks: Tick,
    /// Preemptions plus completions.
    pub context_switches: u64,
}

/// Discrete-time scheduling engine for one configuration.
///
/// # Example
///
/// ```
/// use u_cpusched::config::SimulationConfig;
/// use u_cpusched::models::{Algorithm, ProcessRow};
/// use u_cpusched::scheduler::SchedulerEngine;
/// use u_cpusched::validation::normalize;
///
/// let processes = normalize(&[
///     ProcessRow::new(0, 5, 0),
///     ProcessRow::new(1, 3, 0),
///     ProcessRow::new(2, 1, 0),
/// ])
/// .unwrap();
///
/// let engine = SchedulerEngine::new(SimulationConfig::new(Algorithm::Fcfs)).unwrap();
/// let outcome = engine.simulate(processes).unwrap();
/// assert_eq!(outcome.total_ticks, 9);
/// assert_eq!(outcome.processes[2].waiting_time, 6);
/// ```
#[derive(Debug, Clone)]
pub struct SchedulerEngine {
    config: SimulationConfig,
    policy: SchedulingPolicy,
}

impl SchedulerEngine {
    /// Creates an engine, rejecting invalid configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let policy = SchedulingPolicy::for_algorithm(config.algorithm);
        Ok(Self { config, policy })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation to completion.
    ///
    /// Run-state left on `processes` by an earlier run is discarded; a
    /// process with a zero burst time is rejected with
    /// [`SimError::InvalidInput`].
    pub fn simulate(&self, processes: Vec<Process>) -> Result<SimulationOutcome, SimError> {
        self.simulate_observed(processes, &mut NoopObserver)
    }

    /// Runs the simulation, reporting each executing tick to `observer`.
    pub fn simulate_observed<O>(
        &self,
        processes: Vec<Process>,
        observer: &mut O,
    ) -> Result<SimulationOutcome, SimError>
    where
        O: TickObserver + ?Sized,
    {
        validate_processes(&processes)?;
        let mut processes: Vec<Process> = processes.iter().map(Process::fresh_copy).collect();

        let algorithm = self.config.algorithm;
        let quantum = self.config.effective_quantum();
        let mut cores: Vec<CoreSlot> = (0..self.config.core_count)
            .map(CoreSlot::new)
            .collect();
        let mut ready = ReadyQueue::new();
        let mut timeline = Timeline::new();

        let pending = processes.iter().filter(|p| !p.done).count();
        let mut completed = 0;
        let mut context_switches: u64 = 0;
        let mut tick: Tick = 0;

        debug!(
            "simulating {} process(es) with {} on {} core(s), quantum {:?}",
            pending,
            algorithm,
            cores.len(),
            quantum
        );

        while completed < pending {
            admit_arrivals(&mut processes, &mut ready, tick);
            age_ready(&mut processes, &ready);

            if let Some(rule) = self.policy.rule {
                ready.reorder(rule, &processes);
            }

            for core in cores.iter_mut() {
                if let Some(running) = core.running {
                    let head = ready.front().map(|i| &processes[i]);
                    if self
                        .policy
                        .preemption
                        .should_preempt(head, &processes[running], core.quantum_remaining)
                    {
                        trace!(
                            "t={tick} core {}: preempt P{}",
                            core.index,
                            processes[running].pid
                        );
                        ready.push_back(running);
                        core.release();
                        context_switches += 1;
                    }
                }

                if core.is_idle() {
                    if let Some(next) = ready.pop_front() {
                        trace!("t={tick} core {}: dispatch P{}", core.index, processes[next].pid);
                        core.dispatch(next, quantum);
                    }
                }
            }

            if ready.is_empty() && cores.iter().all(CoreSlot::is_idle) {
                // Nothing changes until the next arrival.
                let next = next_arrival(&processes).map_or(tick + 1, |t| t.max(tick + 1));
                trace!("t={tick}: idle until {next}");
                tick = next;
                continue;
            }

            observer.observe(&TickSnapshot {
                tick,
                processes: &processes,
                cores: &cores,
                ready: &ready,
            });

            for core in cores.iter_mut() {
                let Some(index) = core.running else {
                    continue;
                };
                let process = &mut processes[index];

                core.record_tick(&mut timeline, process.pid, tick);
                process.remaining_time -= 1;
                core.quantum_remaining = core.quantum_remaining.map(|q| q.saturating_sub(1));

                if process.remaining_time == 0 {
                    process.complete_at(tick + 1);
                    trace!("t={tick} core {}: P{} done", core.index, process.pid);
                    core.release();
                    completed += 1;
                    context_switches += 1;
                }
            }

            tick += 1;
        }

        debug!(
            "{} finished at tick {} with {} context switch(es)",
            algorithm, tick, context_switches
        );

        Ok(SimulationOutcome {
            algorithm,
            core_count: cores.len(),
            timeline,
            processes,
            total_ticks: tick,
            context_switches,
        })
    }
}

/// Runs one simulation with an explicit algorithm, core count and quantum.
///
/// Convenience wrapper over [`SchedulerEngine`] with the default switch cost.
pub fn simulate(
    processes: Vec<Process>,
    algorithm: Algorithm,
    core_count: usize,
    quantum: Option<Tick>,
) -> Result<SimulationOutcome, SimError> {
    let config = SimulationConfig::new(algorithm)
        .with_cores(core_count)
        .with_quantum(quantum);
    SchedulerEngine::new(config)?.simulate(processes)
}

fn admit_arrivals(processes: &mut [Process], ready: &mut ReadyQueue, tick: Tick) {
    for (index, process) in processes.iter_mut().enumerate() {
        if process.arrival_time <= tick && !process.admitted && !process.done {
            process.admitted = true;
            ready.push_back(index);
        }
    }
}

fn next_arrival(processes: &[Process]) -> Option<Tick> {
    processes
        .iter()
        .filter(|p| !p.admitted && !p.done)
        .map(|p| p.arrival_time)
        .min()
}

fn age_ready(processes: &mut [Process], ready: &ReadyQueue) {
    for index in ready.iter() {
        let process = &mut processes[index];
        process.waiting_accumulator += 1;
        if process.waiting_accumulator >= AGING_THRESHOLD {
            process.priority = process.priority.saturating_sub(1);
            process.waiting_accumulator = 0;
        }
    }
}
