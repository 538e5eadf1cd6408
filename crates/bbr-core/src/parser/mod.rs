//! HTML parsers for Basketball-Reference player pages
//!
//! This module contains the extractors for one saved profile page:
//! - `columns`: Header-to-field mapping and row strategies
//! - `fragment`: Tables hidden inside HTML comments
//! - `tables`: Per-game and advanced stat tables
//! - `awards`: All-League leaderboard
//! - `salary`: Salary history and current contract
//! - `profile`: Per-game container and high school line

pub mod awards;
pub mod columns;
pub mod fragment;
pub mod profile;
pub mod salary;
pub mod tables;

// Re-export main parsing functions
pub use awards::extract_awards;
pub use columns::{map_columns, ColumnMapping, NamedColumns, RowStrategy};
pub use fragment::{locate_commented_fragment, FragmentLocator};
pub use profile::{basic_table_html, extract_high_school};
pub use salary::{digits_only, extract_contract, extract_salaries, SalaryColumns};
pub use tables::{extract_table, TableKind};
