//! Linux-safe download filenames.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Makes `name` safe to create in a directory on Linux.
///
/// - NUL, `/`, `\`, whitespace and control characters become `_`
/// - runs of `_` collapse to one
/// - leading/trailing dots, spaces and underscores are trimmed
/// - names over 255 bytes are shortened in the stem so the extension survives
pub fn sanitize_filename_for_linux(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_' || c == ' ');
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }

    let (stem, ext) = match trimmed.rfind('.') {
        Some(dot) if trimmed.len() - dot <= 16 => trimmed.split_at(dot),
        _ => (trimmed, ""),
    };
    let mut take = NAME_MAX - ext.len();
    while take > 0 && !stem.is_char_boundary(take) {
        take -= 1;
    }
    format!("{}{}", &stem[..take], ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_separators_replaced() {
        assert_eq!(sanitize_filename_for_linux("a/b\\c.jpg"), "a_b_c.jpg");
    }

    #[test]
    fn whitespace_and_controls_collapse() {
        assert_eq!(sanitize_filename_for_linux("a b\t\x00c.jpg"), "a_b_c.jpg");
        assert_eq!(sanitize_filename_for_linux("a__b.jpg"), "a_b.jpg");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(sanitize_filename_for_linux(" ..file.jpg_. "), "file.jpg");
        assert_eq!(sanitize_filename_for_linux(".."), "");
    }

    #[test]
    fn long_names_keep_extension() {
        let long = format!("{}.jpg", "x".repeat(400));
        let out = sanitize_filename_for_linux(&long);
        assert_eq!(out.len(), 255);
        assert!(out.ends_with(".jpg"));
    }

    #[test]
    fn long_multibyte_names_cut_on_char_boundary() {
        let long = format!("{}.jpg", "é".repeat(200));
        let out = sanitize_filename_for_linux(&long);
        assert!(out.len() <= 255);
        assert!(out.ends_with(".jpg"));
    }
}
