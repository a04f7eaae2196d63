//! Platform-neutral path joining

/// Join path segments with `/`, independent of the host platform.
///
/// Follows the launch system's `PathJoinSubstitution` rule:
/// - no separator is inserted when the accumulated path already ends in `/`
/// - an absolute segment discards everything joined before it
/// - a trailing empty segment leaves a trailing `/`
pub fn path_join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.starts_with('/') {
            joined = segment.to_string();
        } else if joined.is_empty() || joined.ends_with('/') {
            joined.push_str(segment);
        } else {
            joined.push('/');
            joined.push_str(segment);
        }
    }
    joined
}
