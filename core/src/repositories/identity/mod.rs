//! Identity provider seam consumed by the token service.
//!
//! Credential verification and employee storage live outside this
//! crate; the trait below is what those collaborators implement.

mod trait_;

pub mod mock;

#[cfg(test)]
mod tests;

pub use trait_::IdentityProvider;
