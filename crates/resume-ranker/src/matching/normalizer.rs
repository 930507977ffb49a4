/// Canonicalize a raw skill token so "Node.JS ", "node.js" and "NODE/JS" compare predictably.
///
/// Lower-cases, replaces anything outside `[a-z0-9+#.]` with a space, then collapses and
/// trims whitespace. Blank input yields an empty string, which callers treat as a no-op.
pub fn normalize_skill(raw: &str) -> String {
    let replaced: String = raw
        .to_lowercase()
        .chars()
        .map(|ch| if is_skill_char(ch) { ch } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_skill_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '+' | '#' | '.')
}
