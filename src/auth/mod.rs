mod claims;
pub mod password;
mod principal;
mod signing;

pub use claims::AccessTokenClaims;
pub use principal::resolve_principal;
pub use signing::*;
