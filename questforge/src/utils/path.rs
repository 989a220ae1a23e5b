//! Path utilities

/// Characters that cannot appear in a file name on common filesystems.
const UNSAFE_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Make a display name safe to use as a single path component.
///
/// Filesystem-unsupported characters are each replaced with a hyphen and
/// `§`-prefixed text style codes (the two-character Minecraft formatting
/// convention) are stripped entirely.
pub fn sanitize_component(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c == '§' {
            // Style code: drop the marker and the code character after it.
            chars.next();
        } else if UNSAFE_CHARS.contains(&c) {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}
