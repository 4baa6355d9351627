pub mod host_scrape;
pub mod interface_refresh;
pub mod runner;
pub mod scheduler_state;

pub use host_scrape::HostScrapeJob;
pub use interface_refresh::InterfaceRefreshJob;
pub use runner::{JobRunner, RunningJobs};
pub use scheduler_state::SchedulerState;
