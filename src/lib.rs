#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod annotate;
mod common;
mod generate;
mod grid;

pub use annotate::*;
pub use common::*;
pub use generate::*;
pub use grid::*;
