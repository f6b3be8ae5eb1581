//! Best-Short-Side-Fit packer for loading rectangular items into a fleet of identical trucks.
//!
//! Units are taken one by one in a fixed order and placed in the free rectangle of the open truck
//! that leaves the smallest leftover on its shorter side. When nothing fits, the truck is closed
//! and a new one is opened.

use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

#[doc(inline)]
pub use opt::bsf_packer::pack;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
