use std::borrow::Cow;

const INVERSE_PREFIX: &str = "arc";
const INVERSE_MARKER: &str = "a";

const ALIASES: [(&str, &str); 2] = [("log", "ln"), ("conjugate", "conj")];

/// Column name for a function's reported name
///
/// `arccos` becomes `acos`, `log` becomes `ln` and `conjugate` becomes
/// `conj`. Every other name is kept as is.
pub fn normalize(name: &str) -> Cow<'_, str> {
    if let Some(rest) = name.strip_prefix(INVERSE_PREFIX) {
        return Cow::Owned(format!("{INVERSE_MARKER}{rest}"));
    }

    ALIASES
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(Cow::Borrowed(name), |(_, to)| Cow::Borrowed(*to))
}
