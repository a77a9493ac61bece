/// Keys eligible for thumbnailing end in `.jpg` or `.jpeg`, matched
/// case-insensitively.
pub fn is_supported_image(key: &str) -> bool {
    let lower = key.to_lowercase();

    lower.ends_with(".jpg") || lower.ends_with(".jpeg")
}

/// Maps a source key to the key its thumbnail is stored under. The key is
/// lower-cased first, then a `thumbnails/` segment is folded in next to
/// the file name:
///
/// - `sunset.jpg`             -> `thumbnails/sunset.jpg`
/// - `a/b/c.jpg`              -> `thumbnails/c.jpg`
/// - `a/b/c/d.jpg`            -> `a/thumbnails/d.jpg`
/// - `photos/2024/sunset.jpg` -> `photos/thumbnails/sunset.jpg`
///
/// The enclosing-directory search runs over a window that stops two bytes
/// short of the last slash. Downstream consumers address thumbnails by
/// these exact outputs, so the window must not be widened. Returns `None`
/// when the window underflows (last slash at index 1, e.g. `a/b.jpg`);
/// such records produce no thumbnail at all.
pub fn derive_thumbnail_key(key: &str) -> Option<String> {
    let key = key.to_lowercase();

    let end_slash = match key.rfind('/') {
        Some(i) if i > 0 => i,
        _ => return Some(format!("thumbnails/{}", key)),
    };

    let name = &key[end_slash + 1..];
    if end_slash < 2 {
        return None;
    }

    match key.get(..end_slash - 2).and_then(|window| window.rfind('/')) {
        Some(begin_slash) if begin_slash > 0 => Some(format!(
            "{}thumbnails/{}",
            &key[..=begin_slash],
            name
        )),
        _ => Some(format!("thumbnails/{}", name)),
    }
}
