//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a subsystem against mock
//! adapters, driving the real tick path with a virtual 500 Hz clock. All
//! tests run on the host with no real hardware required.

mod mock_hw;
mod service_tests;
