//! Rehearsal: résumé and job-description parsing plus interview question generation.
//!
//! The binary serves these over HTTP; `documents` is also usable directly, e.g.
//! `documents::cv_parser::parse_cv_file` for files on disk.

pub mod config;
pub mod documents;
pub mod errors;
pub mod interview;
pub mod llm_client;
pub mod routes;
pub mod state;
