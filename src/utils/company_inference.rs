// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// Derive a presentable company name from a website URL.
///
/// Uses the registrable host segment ("acme" in "www.acme.dev") and
/// title-cases its tokens. Falls back to the raw host text when the URL
/// does not parse, so the caller always gets something usable.
pub fn infer_company_name(website: &str) -> String {
    let fallback = strip_scheme(website)
        .split(['/', '?', '#'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(website)
        .to_string();

    let Some(parsed) = normalize_website(website) else {
        return to_title_case(&fallback.replace(['-', '_'], " "));
    };

    let primary = primary_host_segment(&parsed);
    let tokens = extract_keyword_tokens(&primary);

    if tokens.is_empty() {
        return to_title_case(&primary.replace(['-', '_'], " "));
    }

    to_title_case(&tokens.join(" "))
}

/// Derive a one-line company description from a website URL.
///
/// Keywords come from the host segment and path segments, de-duplicated
/// and capped at five.
pub fn infer_company_description(website: &str, company_name: Option<&str>) -> String {
    let name = match company_name {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => infer_company_name(website),
    };

    let Some(parsed) = normalize_website(website) else {
        return format!(
            "{name} is a startup building modern technology products. Learn more at {website}."
        );
    };

    let primary = primary_host_segment(&parsed);
    let mut keywords: Vec<String> = Vec::new();
    for segment in std::iter::once(primary.as_str()).chain(parsed.path().split('/')) {
        for token in extract_keyword_tokens(segment) {
            let lowered = token.to_lowercase();
            if !keywords.contains(&lowered) {
                keywords.push(lowered);
            }
        }
    }
    keywords.truncate(5);

    let focus_phrase = if keywords.is_empty() {
        "innovative solutions for modern businesses".to_string()
    } else {
        to_title_case(&keywords.join(" "))
    };

    let host = parsed.host_str().unwrap_or(website);
    format!("{name} is a startup focused on {focus_phrase}. Explore more at {host}.")
}

fn normalize_website(website: &str) -> Option<Url> {
    let candidate = if website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{website}")
    };
    Url::parse(&candidate).ok()
}

fn strip_scheme(website: &str) -> &str {
    website
        .strip_prefix("https://")
        .or_else(|| website.strip_prefix("http://"))
        .unwrap_or(website)
}

/// Second-to-last host label when present ("acme" in "acme.co.uk" is not
/// ideal but matches how most startup domains read), otherwise the only
/// label.
fn primary_host_segment(parsed: &Url) -> String {
    let host = parsed.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let segments: Vec<&str> = host.split('.').collect();
    if segments.len() > 1 {
        segments[segments.len() - 2].to_string()
    } else {
        segments.first().copied().unwrap_or_default().to_string()
    }
}

fn to_title_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn extract_keyword_tokens(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}
