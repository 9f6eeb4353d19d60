pub mod endpoint;
pub mod resource;

pub use endpoint::{Endpoint, ProviderSpecificProperty};
pub use resource::{API_VERSION, DnsEndpoint, DnsEndpointSpec, DnsEndpointStatus, KIND, ObjectMeta};
