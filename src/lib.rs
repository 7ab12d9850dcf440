//! softgl - stage and load a bundled software OpenGL renderer.
//!
//! The crate resolves one native library at process startup: it detects the
//! host OS and CPU architecture, checks them against the single platform this
//! build bundles an artifact for (Windows on 64-bit x86), stages the artifact
//! into a per-version cache under the system temp directory, and maps it into
//! the process with the platform's dynamic loader.
//!
//! The whole pipeline is [`bootstrap::run`]: call it once, inspect the
//! [`bootstrap::Outcome`] if you care, and carry on. It never panics and
//! never fails the host.

pub mod arch;
pub mod bootstrap;
pub mod extract;
pub mod loader;
pub mod platform;
pub mod resource;
pub mod runtime;

pub use bootstrap::{Outcome, bootstrap, run};
