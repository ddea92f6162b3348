//! # skua-fss
//!
//! Fractions Skill Score (FSS): a spatial verification metric comparing
//! neighborhood-averaged occurrence fractions between two binary fields.
//! 1 is a perfect match; a zero-information comparison (both neighborhood
//! fields empty) is undefined and surfaced as NaN, never coerced.

mod error;
mod filter;
mod score;

pub use error::FssError;
pub use score::{FssAccumulator, ScaleScore, fss, score_scales};
