//! Output text normalization.
//!
//! A light, dependency-free cleanup pass over the rendered source: trailing
//! whitespace is stripped, runs of blank lines collapse to one, and the text
//! ends with exactly one newline. Formatting never fails the run; when the
//! input looks structurally broken the text is returned unchanged.

/// Normalize rendered source text. Falls back to the input on any doubt.
pub fn format_source(input: &str) -> String {
    match try_format(input) {
        Some(formatted) => formatted,
        None => input.to_string(),
    }
}

fn try_format(input: &str) -> Option<String> {
    if !delimiters_balanced(input) {
        return None;
    }

    let mut out = String::with_capacity(input.len());
    let mut blank_run = 0usize;

    for line in input.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    // No trailing blank line before EOF.
    while out.ends_with("\n\n") {
        out.pop();
    }

    Some(out)
}

/// Check parenthesis, bracket, and brace balance outside string literals.
fn delimiters_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in input.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' | '[' | '{' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            _ => {}
        }
    }

    stack.is_empty() && quote.is_none()
}
