/// Split a comma-separated line into trimmed labels.
///
/// Empty segments survive trimming and stay selectable:
/// `""` yields `[""]` and `"a,,b"` yields `["a", "", "b"]`.
pub fn items(line: &str) -> Vec<String> {
    line.split(',').map(str::trim).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_each_segment() {
        assert_eq!(items("치킨, 피자 ,  햄버거"), ["치킨", "피자", "햄버거"]);
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(items("a,,b,"), ["a", "", "b", ""]);
        assert_eq!(items("   "), [""]);
        assert_eq!(items(""), [""]);
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(items("A, A ,B"), ["A", "A", "B"]);
    }
}
