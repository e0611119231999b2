//! docwords - word counting for .docx documents
//!
//! Counts the words of a WordprocessingML document while leaving out what
//! should not count: sections before or after named headings, paragraphs in
//! excluded styles and citation-like substrings. Words in floating text boxes
//! are tallied separately.
//!
//! ```rust,no_run
//! use docwords::{engine, Document, ExclusionRules};
//!
//! let document = Document::open("thesis.docx")?;
//! let rules = ExclusionRules::with_default_citations()
//!     .ignore_style("Caption")
//!     .start_after("Introduction")
//!     .stop_before("Bibliography");
//!
//! let result = engine::run(&document, &rules);
//! println!("{} words", result.counted);
//! # Ok::<(), docwords::DocumentError>(())
//! ```

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod boundary;
pub mod config;
pub mod document;
pub mod engine;
pub mod outline;
pub mod report;
pub mod rules;
pub mod textbox;
pub mod trace;
pub mod words;

pub use document::{Document, DocumentError, Paragraph, StyleTable, TextboxRun};
pub use engine::CountingResult;
pub use rules::{ExclusionRules, CITATIONS};
