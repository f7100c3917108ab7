use std::path::{Component, Path};

/// `path` relative to `root`, joined with `/` on every host.
///
/// A path outside `root` climbs out with `..` segments. Only when the two
/// share no filesystem root (different drives, or `path` is itself relative)
/// is `path` kept as given, still `/`-separated.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let mut out = String::new();
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .for_each(|component| push_component(&mut out, component)),
        Err(_) => match climb_out_of(root, path) {
            Some((ups, rest)) => {
                for _ in 0..ups {
                    push_segment(&mut out, "..");
                }
                rest.into_iter()
                    .for_each(|component| push_component(&mut out, component));
            }
            None => path
                .components()
                .for_each(|component| push_component(&mut out, component)),
        },
    }
    out
}

// `..` steps from `root` up to the deepest ancestor it shares with `path`, and
// the components of `path` below that ancestor.
fn climb_out_of<'p>(root: &Path, path: &'p Path) -> Option<(usize, Vec<Component<'p>>)> {
    if !(root.is_absolute() && path.is_absolute()) {
        return None;
    }
    let root_parts: Vec<Component<'_>> = root.components().collect();
    let mut path_parts: Vec<Component<'p>> = path.components().collect();
    let shared = root_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if !root_parts[..shared]
        .iter()
        .any(|component| matches!(component, Component::RootDir))
    {
        return None;
    }
    Some((root_parts.len() - shared, path_parts.split_off(shared)))
}

fn push_component(out: &mut String, component: Component<'_>) {
    match component {
        Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
        Component::RootDir => out.push('/'),
        Component::CurDir => {}
        Component::ParentDir => push_segment(out, ".."),
        Component::Normal(segment) => push_segment(out, &segment.to_string_lossy()),
    }
}

fn push_segment(out: &mut String, segment: &str) {
    if !out.is_empty() && !out.ends_with('/') {
        out.push('/');
    }
    out.push_str(segment);
}

/// Segment right after the first `anchor` segment of a `/`-separated path.
///
/// Empty when the anchor is absent or is the last segment.
pub fn category_of(rel: &str, anchor: &str) -> String {
    let mut segments = rel.split('/');
    segments
        .position(|segment| segment == anchor)
        .and_then(|_| segments.next())
        .unwrap_or_default()
        .to_string()
}
