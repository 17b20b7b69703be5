fn main() {
    // Validate the embedded rule table at compile time.
    validate_rules(
        "src/translit/default_rules.toml",
        include_str!("src/translit/default_rules.toml"),
    );
}

fn validate_rules(path: &str, content: &str) {
    let Ok(value) = content.parse::<toml::Value>() else {
        panic!("{path} contains invalid TOML");
    };
    let Some(rules) = value.get("rules").and_then(|r| r.as_array()) else {
        panic!("{path} has no `rules` array");
    };

    let mut patterns: Vec<&str> = Vec::with_capacity(rules.len());
    for (index, rule) in rules.iter().enumerate() {
        let pattern = rule
            .as_array()
            .filter(|pair| pair.len() == 2)
            .and_then(|pair| pair[0].as_str())
            .unwrap_or_else(|| panic!("{path}: rule #{index} is not a [pattern, replacement] pair"));

        // A pattern placed after one of its own prefixes can never match.
        if let Some(prefix) = patterns.iter().find(|p| pattern.starts_with(**p)) {
            panic!("{path}: rule #{index} {pattern:?} is shadowed by earlier {prefix:?}");
        }
        patterns.push(pattern);
    }
}
