//! The library code for the `broadsheet` web-edition builder. The
//! architecture can be generally broken down into three distinct steps:
//!
//! 1. Selecting articles from the raw Ghost export ([`crate::post`])
//! 2. Rendering each article into a story block ([`crate::render`])
//! 3. Assembling the blocks into the edition page on disk ([`crate::write`])
//!
//! Of the three, the second step is the more involved. Rendering a story
//! means normalizing the body markup the editor produced, deciding whether
//! the hero image would duplicate an image already embedded in the body,
//! and running the text heuristics in [`crate::analyze`]: lifting a
//! pull-quote out of the middle of the story and splicing it back in as a
//! callout, and deciding whether the opening paragraph can carry a drop
//! cap. Column content renders as a compact stub instead and skips the
//! heuristics entirely.
//!
//! The third step is pretty straight-forward: the lead story and the two
//! halves of the remaining stories are rendered into strings, combined
//! with the static page chrome (masthead, nav index, community calendar,
//! crossword, subscribe CTA) via the page template, and written to disk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod analyze;
pub mod build;
pub mod config;
pub mod events;
pub mod post;
pub mod render;
pub mod write;
