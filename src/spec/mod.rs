//! Spec layer: JSON config shapes + validated in-memory structures.
//!
//! Owns:
//! - ArgType (closed set of argument type names)
//! - ArgumentSpecification + EndpointCatalog (endpoints.json)
//! - AllowListConfig (allow-list.json)

pub mod allow;
pub mod arg_type;
pub mod endpoint;

pub use allow::AllowListConfig;
pub use arg_type::ArgType;
pub use endpoint::{ArgumentSpecification, EndpointCatalog, EndpointsSpec, RawEndpoint};
