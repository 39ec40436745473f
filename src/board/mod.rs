//! Board glue for the nRF52840 - drivers behind the library's traits.
//!
//! Only compiled into the embedded binary.

pub mod tm1637;
pub mod uart;
