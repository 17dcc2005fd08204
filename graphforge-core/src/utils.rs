/// Returns true when the string contains any non-whitespace character.
///
/// Config options treat blank strings the same as unset ones, so templates
/// and affixes are gated on this before they take effect.
pub fn is_not_blank(s: &str) -> bool {
    !s.trim().is_empty()
}
