pub mod driver;
pub mod observer;
pub mod result;
pub mod state;
pub mod timeline;

pub use driver::SchedCore;
pub use observer::{AuditError, audit};
pub use result::{Averages, ProcessReport, ScheduleResult};
pub use state::{Proc, ProcId, ProcState, ProcTable, Ticks};
pub use timeline::{Job, Segment, Timeline};
