//! `${ENV_VAR}` substitution in raw config text, applied before parsing.

/// Replace `${ENV_VAR}` placeholders with values from the process
/// environment. Placeholders that do not resolve are left untouched.
#[must_use]
pub fn substitute_env(input: &str) -> String {
    substitute_with(input, |name| std::env::var(name).ok())
}

fn substitute_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => output.push_str(&value),
                    None => {
                        output.push_str("${");
                        output.push_str(name);
                        output.push('}');
                    },
                }
                rest = &after[end + 1..];
            },
            // Unclosed or empty placeholder: emit literally and continue after
            // the opener.
            _ => {
                output.push_str("${");
                rest = after;
            },
        }
    }

    output.push_str(rest);
    output
}
