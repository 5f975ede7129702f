//! gitsound Canonical Types Library
//!
//! This crate provides the pure, deterministic half of gitsound: scales,
//! instrument profiles, song configuration with validation, and the two
//! mappings that give a repository its sound.
//!
//! # Overview
//!
//! A song configuration names a repository, a branch, a scale, and an
//! instrument program. The mappings in [`pitch`] and [`volume`] turn a
//! commit's content identifiers and line-change statistics into note and
//! loudness values; everything here is side-effect free and reproducible.
//!
//! # Example
//!
//! ```
//! use gitsound_core::{pitch, volume, ScaleRegistry};
//!
//! let scales = ScaleRegistry::builtin();
//! let scale = scales.get("major").unwrap();
//!
//! // The same identifier always maps to the same note.
//! let note = pitch::scale_note(scale, "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391", -1);
//! assert_eq!(note, pitch::scale_note(scale, "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391", -1));
//!
//! // Volumes are bounded by the deviation window.
//! let dev = volume::deviation(107);
//! assert!(volume::volume(10_000, 0, 0, dev) >= dev);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Song configuration and validation
//! - [`error`]: Error and validation-code types
//! - [`pitch`]: Deterministic identifier-to-note mapping
//! - [`profile`]: Instrument profiles and the built-in program registry
//! - [`scale`]: Scales and the built-in scale registry
//! - [`volume`]: Bounded line-change-to-loudness mapping

pub mod config;
pub mod error;
pub mod pitch;
pub mod profile;
pub mod scale;
pub mod volume;

pub use config::SongConfig;
pub use error::{ConfigError, ErrorCode, ValidationError, ValidationResult};
pub use profile::{InstrumentProfile, ProgramRegistry, VoiceProfile};
pub use scale::{Scale, ScaleRegistry};

/// Crate version for identification in reports and CLI output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
