use url::Url;

pub const WORLD_HOST: &str = "space.playentry.org";
pub const WORLD_PATH_PREFIX: &str = "world";

/// Whether the address is a world view: `https://space.playentry.org/world/
/// <segment>` with an optional trailing slash and nothing else. Extra path
/// segments, a port, a query, or a fragment all disqualify the address.
/// Pure function of the address.
pub fn is_world_page(address: &str) -> bool {
    world_segment(address).is_some()
}

/// The world identifier for a world-view address, if one can be extracted.
/// An address can pass the shape test yet carry an empty segment
/// (`…/world/`); that is the caller's missing-identifier case.
pub fn world_id(address: &str) -> Option<String> {
    world_segment(address).filter(|segment| !segment.is_empty())
}

fn world_segment(address: &str) -> Option<String> {
    let url = Url::parse(address).ok()?;
    if url.scheme() != "https"
        || url.host_str() != Some(WORLD_HOST)
        || url.port().is_some()
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return None;
    }

    let mut segments = url.path_segments()?;
    if segments.next()? != WORLD_PATH_PREFIX {
        return None;
    }
    let id = segments.next()?.to_string();
    match segments.next() {
        None => Some(id),
        Some("") if segments.next().is_none() => Some(id),
        Some(_) => None,
    }
}
