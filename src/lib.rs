// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural fly-through animation core.
//!
//! A camera glides through a field of layered procedural clouds while two
//! scripted actors, an airplane and an eagle, perform a fixed 720-frame
//! routine. This crate owns all of the per-frame math and state; drawing is
//! left to whatever renderer consumes its [`engine::FrameOutput`].
//!
//! # Key entry points
//!
//! - [`engine::SceneComposer`] - owns the scene and advances it one frame at
//!   a time
//! - [`input::InputProcessor`] - turns key events into
//!   [`engine::FlightCommand`]s
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`animation`] - the frame clock and the actor motion tables
//! - [`clouds`] - one-shot cloud field synthesis
//!
//! # Frame order
//!
//! Each [`engine::SceneComposer::step`] clears the transform stack, steps
//! the camera, recentres the skybox, applies the world scale and re-issues
//! the lights, places the four cloud layers under the camera, advances the
//! clock and actor poses, and finally composes each actor's model-view
//! matrix under the scene rotation and dolly.

pub mod animation;
pub mod camera;
pub mod clouds;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod transform;
pub mod util;
