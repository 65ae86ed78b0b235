// Re-export all model types
pub use self::cart::*;
pub use self::errors::*;
pub use self::product::*;
pub use self::response::*;
pub use self::validation::*;

mod cart;
mod errors;
mod product;
mod response;
mod validation;
