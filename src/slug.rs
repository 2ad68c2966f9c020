/// Route slug for product names: lowercased, ascii alphanumerics kept, every
/// other run collapsed to a single hyphen, no hyphen at either end.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());

    for c in s.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}
