/// Convert a URL to a sanitized filename
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let name = url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let mut name = name.replace(['/', ':', '?', '&', '=', '#', '%', '\\'], "_");
    if name.is_empty() {
        name = "site".to_string();
    }

    // Limit filename length on a character boundary
    match name.char_indices().nth(100) {
        Some((idx, _)) => name[..idx].to_string(),
        None => name,
    }
}
