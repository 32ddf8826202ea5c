/// `%`-wildcard match: `%` matches any run of characters, including the
/// empty one. Everything else matches literally and case-sensitively, so
/// `'%foo%'` is a plain substring test.
pub(crate) fn like_match(pattern: &str, text: &str) -> bool {
    if !pattern.contains('%') {
        return pattern == text;
    }

    let segments: Vec<&str> = pattern.split('%').collect();
    let first = segments[0];
    let last = segments[segments.len() - 1];

    // Anchored prefix and suffix must fit without overlapping.
    if text.len() < first.len() + last.len() {
        return false;
    }
    if !text.starts_with(first) || !text.ends_with(last) {
        return false;
    }

    // Interior segments must appear in order between the anchors.
    let mut rest = &text[first.len()..text.len() - last.len()];
    for seg in &segments[1..segments.len() - 1] {
        if seg.is_empty() {
            continue;
        }
        match rest.find(seg) {
            Some(i) => rest = &rest[i + seg.len()..],
            None => return false,
        }
    }

    true
}
