pub mod classify;
pub mod error;
pub mod images;
pub mod normalize;
pub mod present;
pub mod service;
pub mod validate;

pub use classify::{Classified, classify};
pub use error::{NormalizationError, TransportFailure, ValidationError};
pub use images::parse_images;
pub use normalize::normalize;
pub use present::present;
pub use service::{Connectivity, DefinitionService, ImageService};
pub use validate::validate;
