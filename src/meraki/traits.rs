//! Common traits for dashboard resources

/// Common trait for named dashboard resources (organizations, networks)
///
/// Anything with an id and a human-readable name can be resolved by name
/// through [`resolve_id`].
pub trait NamedResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// Resolve a resource name to its ID.
///
/// Linear scan, first exact match wins; case-sensitive. Returns `None` when
/// no resource carries that name. Used identically for organizations and
/// networks.
pub fn resolve_id<'a, T: NamedResource>(resources: &'a [T], name: &str) -> Option<&'a str> {
    resources
        .iter()
        .find(|resource| resource.name() == name)
        .map(NamedResource::id)
}
