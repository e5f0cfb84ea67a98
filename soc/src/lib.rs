#![allow(unused_doc_comments)]
#![warn(clippy::all)]
#![allow(clippy::cast_lossless)]

mod util;

pub mod asm;
pub mod cpu;
pub mod error;
pub mod io_port;
pub mod log;
pub mod mmu;
pub mod program;
pub mod sim;
pub mod system;

#[macro_use]
extern crate log as logging;
#[macro_use]
extern crate more_asserts;
#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde;
