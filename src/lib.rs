//! verbum: reference lookup and sequential reading for chaptered texts.
//!
//! The corpus is a list of named sections ("books"), each split into numbered subsections
//! ("chapters") of numbered lines ("verses"). References such as `"john 3:16-18"` are parsed
//! into a [`locator::Locator`], the section name is matched against the corpus (fuzzily when
//! it is misspelled), and the result can be read, or stepped through with
//! [`navigator::next`] and [`navigator::prev`].
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod locator;
pub mod lookup;
pub mod navigator;
pub mod parser;
pub mod render;
pub mod resolver;
pub mod search;
pub mod session;
pub mod similarity;

#[cfg(test)]
mod test_support;
