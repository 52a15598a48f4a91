//! # summit-core
//!
//! Picks the best two-day event window for each country in a partner dataset:
//! the earliest start date that maximizes the number of partners available on
//! that date and the day after.
//!
//! ## Quick start
//!
//! ```rust
//! use summit_core::{plan, sample_partners};
//! use chrono::NaiveDate;
//!
//! let partners = sample_partners().unwrap();
//! let results = plan(&partners).unwrap();
//!
//! let ireland = results.iter().find(|r| r.name == "Ireland").unwrap();
//! assert_eq!(ireland.attendee_count, 1);
//! assert_eq!(ireland.start_date, NaiveDate::from_ymd_opt(2017, 4, 29));
//! ```
//!
//! ## Modules
//!
//! - [`grouper`] — partners → per-country buckets
//! - [`window`] — one partner's dates → consecutive-day votes
//! - [`selector`] — votes → winning start date per country
//! - [`planner`] — the full pipeline and its options
//! - [`input`] — JSON → partner records
//! - [`model`] — partner and result records
//! - [`sample`] — embedded sample dataset
//! - [`error`] — error types

pub mod error;
pub mod grouper;
pub mod input;
pub mod model;
pub mod planner;
pub mod sample;
pub mod selector;
pub mod window;

pub use error::{DateFormatError, PlannerError, Result};
pub use grouper::group_by_country;
pub use input::parse_partners;
pub use model::{CandidateWindows, CountryReport, CountryResult, Partner, PartnerList};
pub use planner::{plan, plan_report, plan_with, PlannerOptions};
pub use sample::{sample_partners, SAMPLE_JSON};
pub use selector::{collect_candidates, select_best};
pub use window::{detect_windows, parse_available_dates, AdjacencyPolicy, Vote};
