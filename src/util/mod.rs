#[cfg(test)]
pub mod alloc;
#[cfg(feature = "contiguous")]
pub mod error;
#[cfg(test)]
pub mod panic;
#[cfg(feature = "contiguous")]
pub mod result;
#[cfg(test)]
pub mod testing;
