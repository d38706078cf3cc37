use reqspec_core::EndpointSpec;

/// The `/unknown` colors listing.
pub fn unknown_endpoint() -> EndpointSpec {
    EndpointSpec::new("unknown")
}
