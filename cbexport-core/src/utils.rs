//! String and path helpers shared by the snapshot reader and the generator.
//!
//! Paths are handled as `/`-separated strings rather than [`std::path::Path`]
//! values: they are written into the descriptor verbatim, so the exact bytes
//! must survive from the snapshot to the output.

/// Expand a list-encoded value into its elements.
///
/// Elements are separated by `;`. A `\;` is a literal semicolon, a `;`
/// nested inside `[...]` does not split, and empty elements are dropped.
pub fn expand_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&';') => {
                chars.next();
                current.push(';');
            }
            '[' => {
                depth += 1;
                current.push(c);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ';' if depth == 0 => {
                if !current.is_empty() {
                    items.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        items.push(current);
    }
    items
}

/// Split a path into its non-empty components (`.` components are dropped).
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .map(str::to_string)
        .collect()
}

/// Express `path` relative to the directory `base`.
///
/// Components of `base` not shared with `path` become `..`.
pub fn relative_path(base: &str, path: &str) -> String {
    let base = split_path(base);
    let path = split_path(path);

    let common = base
        .iter()
        .zip(path.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::with_capacity(base.len() - common + path.len() - common);
    parts.extend(std::iter::repeat_n("..", base.len() - common));
    parts.extend(path[common..].iter().map(String::as_str));
    parts.join("/")
}

/// Directory part of a path: everything before the last `/`.
pub fn parent_directory(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[..idx])
}

/// File name cut at its first `.`, so `widget.moc.cpp` gives `widget`.
pub fn file_basename(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.find('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Extension of the file name (text after the last `.`), if any.
pub fn file_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx + 1..]),
    }
}
