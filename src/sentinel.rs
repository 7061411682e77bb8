//! Reachability checks for test bodies.
//!
//! A [`Checkpoint`] armed at the top of a block must be marked
//! [`reached`](Checkpoint::reached) before it goes out of scope. If it is
//! dropped unmarked (the block returned early or was unwound past), a
//! non-fatal "checkpoint not reached" failure is recorded at the location
//! where it was armed.
//!
//! ```rust,no_run
//! use simpletest::{expect_cmp, reachable};
//!
//! let checkpoint = reachable!();
//! expect_cmp!(1, ==, 2); // non-fatal: execution continues
//! checkpoint.reached();
//! ```

use crate::assertion::Location;
use crate::assertion::fault::fault;

/// Guard that records a failure if dropped before being marked reached.
#[must_use = "a checkpoint fires as soon as it is dropped"]
#[derive(Debug)]
pub struct Checkpoint {
    location: Location,
    armed: bool,
}

impl Checkpoint {
    pub fn arm(location: Location) -> Self {
        Self {
            location,
            armed: true,
        }
    }

    /// Marks the end of the block as reached.
    pub fn reached(mut self) {
        self.armed = false;
    }
}

impl Drop for Checkpoint {
    fn drop(&mut self) {
        if self.armed {
            // Always non-fatal: this may run while unwinding.
            fault(self.location, false, Some("checkpoint not reached".to_owned()));
        }
    }
}
