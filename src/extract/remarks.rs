/// Folds a wrapped narrative field into one value.
///
/// `lines[start]` is the line carrying the label. The seed is whatever follows
/// its first `:`; every later non-empty line is appended until one contains a
/// terminator (matched case-insensitively) or the page ends. The terminator
/// line itself is not included.
pub fn fold_remarks(lines: &[&str], start: usize, terminators: &[String]) -> String {
    let Some(first) = lines.get(start) else {
        return String::new();
    };

    let seed = match first.find(':') {
        Some(idx) => &first[idx + 1..],
        None => first,
    };
    let mut text = seed.trim().to_string();

    for line in lines.iter().skip(start + 1) {
        let next = line.trim();
        if next.is_empty() {
            continue;
        }
        if is_terminator(next, terminators) {
            break;
        }
        text.push(' ');
        text.push_str(next);
    }

    text.trim().to_string()
}

fn is_terminator(line: &str, terminators: &[String]) -> bool {
    let lower = line.to_lowercase();
    terminators
        .iter()
        .filter(|t| !t.is_empty())
        .any(|t| lower.contains(&t.to_lowercase()))
}
