//! Small helpers for the status header: greeting and avatar initials.

/// Greeting by local hour of day, same cut-offs as the dashboard top bar.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if (6..12).contains(&hour) {
        "Buenos días"
    } else if (12..19).contains(&hour) {
        "Buenas tardes"
    } else {
        "Buenas noches"
    }
}

/// Avatar initials: first letter of a single name, first + last initials
/// otherwise. Empty names get the generic "U".
pub fn user_initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    match words.as_slice() {
        [] => "U".to_string(),
        [only] => only.chars().next().map(upper_char).unwrap_or_default(),
        [first, .., last] => {
            let mut out = first.chars().next().map(upper_char).unwrap_or_default();
            out.push_str(&last.chars().next().map(upper_char).unwrap_or_default());
            out
        }
    }
}

fn upper_char(c: char) -> String {
    c.to_uppercase().collect()
}
