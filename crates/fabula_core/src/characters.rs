//! Character list rendering.

/// Render character names the way they appear in the prompt.
///
/// Names become a bracketed list of double-quoted strings separated by a
/// comma and a space. Quotes and backslashes inside a name are escaped, so
/// the list always reads as one unambiguous literal.
///
/// # Examples
///
/// ```
/// use fabula_core::render_character_list;
///
/// let rendered = render_character_list(&["Alice", "Bob", "Charlie"]);
/// assert_eq!(rendered, r#"["Alice", "Bob", "Charlie"]"#);
/// ```
pub fn render_character_list<S: AsRef<str>>(characters: &[S]) -> String {
    let quoted: Vec<String> = characters
        .iter()
        .map(|name| {
            let escaped = name.as_ref().replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{}\"", escaped)
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}
