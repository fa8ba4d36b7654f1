//! Inline `style` attribute merging.

/// Parse `prop: value; ...` into ordered pairs. Malformed entries are dropped.
pub fn declarations(attr: Option<&str>) -> Vec<(String, String)> {
    attr.unwrap_or_default()
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            let value = value.trim();
            if prop.is_empty() || value.is_empty() {
                return None;
            }
            Some((prop.to_ascii_lowercase(), value.to_string()))
        })
        .collect()
}

/// Value of one property in a style attribute.
pub fn value(attr: Option<&str>, prop: &str) -> Option<String> {
    declarations(attr).into_iter().find(|(p, _)| p.eq_ignore_ascii_case(prop)).map(|(_, v)| v)
}

/// Merge `updates` into an existing style attribute.
///
/// Existing properties keep their position and take the new value; new
/// properties are appended in the order given.
pub fn merge(attr: Option<&str>, updates: &[(&str, &str)]) -> String {
    let mut merged = declarations(attr);

    for (prop, value) in updates {
        match merged.iter_mut().find(|(p, _)| p.eq_ignore_ascii_case(prop)) {
            Some(existing) => existing.1 = value.to_string(),
            None => merged.push((prop.to_ascii_lowercase(), value.to_string())),
        }
    }

    merged.iter().map(|(p, v)| format!("{p}: {v}")).collect::<Vec<_>>().join("; ")
}
