//! Hub URL helpers

/// Join URL path pieces with single slashes.
///
/// The leading slash of the first piece and the trailing slash of the last
/// piece are preserved; slashes between pieces are collapsed.
///
/// ```
/// use hubauth_domain::utils::url_path_join;
///
/// assert_eq!(url_path_join(&["/hub/", "home"]), "/hub/home");
/// assert_eq!(url_path_join(&["/hub", "/login/"]), "/hub/login/");
/// ```
pub fn url_path_join(pieces: &[&str]) -> String {
    let (Some(first), Some(last)) = (pieces.first(), pieces.last()) else {
        return String::new();
    };
    let initial = first.starts_with('/');
    let trailing = last.ends_with('/');

    let joined = pieces
        .iter()
        .map(|piece| piece.trim_matches('/'))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    let mut result = String::with_capacity(joined.len() + 2);
    if initial {
        result.push('/');
    }
    result.push_str(&joined);
    if trailing && !result.ends_with('/') {
        result.push('/');
    }
    result
}
