//! Descriptive statistics over integer sequences.
//!
//! This crate computes a fixed set of summary measures for a slice of
//! `i64` values:
//!
//! - **Count**, **minimum**, **maximum** and **total** (sum)
//! - **Mean**: arithmetic average
//! - **Median**: middle value of the sorted sequence, averaging the two middle
//!   values for even counts
//! - **Standard deviation**: population standard deviation (divides by the full count)
//!
//! # Modules
//!
//! - [`analysis`]: the [`analyze`] function and its [`StatsResult`] record
//!
//! # Examples
//!
//! ```
//! use list_analyzer_stats::analyze;
//!
//! let stats = analyze(&[1, 2, 3, 4, 5]);
//! assert_eq!(stats.count, 5);
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! An empty sequence is not an error; every field is zero:
//!
//! ```
//! use list_analyzer_stats::{StatsResult, analyze};
//!
//! let stats = analyze(&[]);
//! assert!(stats.is_empty());
//! assert_eq!(stats, StatsResult::default());
//! ```

pub use self::analysis::{StatsResult, analyze};

pub mod analysis;
