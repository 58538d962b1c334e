use std::collections::VecDeque;

use super::{
    state::{ProcId, ProcTable, Ticks},
    timeline::Timeline,
};
use crate::scheduler::Policy;

/// Discrete-event loop shared by every policy.
///
/// The clock only moves to dispatch boundaries, slice expiries and arrivals;
/// it never steps tick by tick.
pub struct SchedCore<P: Policy> {
    pub table: ProcTable,
    pub policy: P,
    timeline: Timeline,
    // Ready processes in the order they entered the ready set
    ready: VecDeque<ProcId>,
    arrivals: Vec<ProcId>,
    // arrivals[..cursor] have been admitted
    cursor: usize,
    now: Ticks,
}

impl<P: Policy> SchedCore<P> {
    pub fn new(table: ProcTable, policy: P) -> Self {
        let arrivals = table.arrival_order();
        let now = arrivals.first().map_or(0, |&id| table.proc(id).arrival);

        Self {
            ready: VecDeque::with_capacity(table.len()),
            table,
            policy,
            timeline: Timeline::new(),
            arrivals,
            cursor: 0,
            now,
        }
    }

    pub fn run(mut self) -> (ProcTable, Timeline) {
        while self.step() {}
        debug_assert!(self.table.all_completed(), "Driver stopped with work left");
        (self.table, self.timeline)
    }

    // Make one scheduling decision; return false once nothing is left to run
    pub fn step(&mut self) -> bool {
        self.admit_arrivals();

        if self.ready.is_empty() {
            let Some(next) = self.next_arrival() else {
                return false;
            };
            log::trace!("t={} idle until t={next}", self.now);
            self.timeline.push_idle(self.now, next);
            self.now = next;
            return true;
        }

        let slot = self
            .policy
            .pick(&self.table, self.ready.make_contiguous(), self.now);
        let proc = self
            .ready
            .remove(slot)
            .expect("Policy picked a slot outside the ready set");
        self.dispatch(proc);
        true
    }

    fn dispatch(&mut self, proc: ProcId) {
        let start = self.now;
        if self.table.set_running(proc, start) {
            log::trace!("t={start} first dispatch of {}", self.table.proc(proc).label);
        }

        let remaining = self.table.proc(proc).remaining;
        let granted = self
            .policy
            .slice()
            .map_or(remaining, |slice| slice.min(remaining));
        let stop = match self.preemption_point(proc, start + granted) {
            Some((at, by)) => {
                log::debug!(
                    "t={at} {} preempts {}",
                    self.table.proc(by).label,
                    self.table.proc(proc).label
                );
                at
            }
            None => start + granted,
        };

        self.table.consume(proc, stop - start);
        self.timeline
            .push_run(&self.table.proc(proc).label, start, stop);
        self.now = stop;

        // Arrivals up to `stop` queue ahead of the process that just ran
        self.admit_arrivals();

        if self.table.proc(proc).remaining == 0 {
            log::debug!("t={stop} {} completed", self.table.proc(proc).label);
            self.table.mark_completed(proc, stop);
        } else {
            self.table.mark_ready(proc);
            self.ready.push_back(proc);
        }
    }

    // Earliest pending arrival before `until` that interrupts `running`
    fn preemption_point(&self, running: ProcId, until: Ticks) -> Option<(Ticks, ProcId)> {
        if !self.policy.preemptive() {
            return None;
        }

        self.arrivals[self.cursor..]
            .iter()
            .map(|&id| self.table.proc(id))
            .take_while(|p| p.arrival < until)
            .find(|p| {
                self.policy
                    .preempts(&self.table, running, p.arrival - self.now, p.id)
            })
            .map(|p| (p.arrival, p.id))
    }

    fn admit_arrivals(&mut self) {
        // Contiguous, since arrivals are sorted
        while let Some(&id) = self.arrivals.get(self.cursor) {
            if self.table.proc(id).arrival > self.now {
                break;
            }
            self.table.mark_ready(id);
            self.ready.push_back(id);
            self.cursor += 1;
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.arrivals
            .get(self.cursor)
            .map(|&id| self.table.proc(id).arrival)
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
