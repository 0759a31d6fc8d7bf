//! Analyze Vim `--startuptime` logs.
//!
//! A log is split into runs, every timing line is tokenized, samples are
//! averaged per action label, and `sourcing` actions under an addons
//! directory are regrouped per addon:
//!
//! ```
//! use vim_startuptime::model::{group, parse_str};
//!
//! let log = parse_str(
//!     "VIM STARTING\n\
//!      0.100 2.500: sourcing /home/u/.vim/addons/foo/a.vim\n\
//!      0.200 1.000 --- VIM STARTED ---\n",
//! )
//! .unwrap();
//! let addons = group(&log.actions, &"/home/u/.vim/addons".into());
//!
//! assert_eq!(log.total().unwrap(), 0.2);
//! assert_eq!(addons.get("foo").unwrap().total, 2.5);
//! ```

pub mod config;
pub mod log;
pub mod model;
pub mod render;
pub mod runner;

pub type Result<T> = anyhow::Result<T>;
