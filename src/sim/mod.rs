pub mod driver;
pub mod job;
pub mod report;
pub mod workload;

pub use driver::{Sim, simulate, simulate_all, simulate_workload};
pub use job::{Process, label_for};
pub use workload::{BernoulliParams, Workload, WorkloadError, bernoulli};
