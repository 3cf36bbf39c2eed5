#![forbid(unsafe_code)]

//! List-to-text adapters for the travel styles.
//!
//! A sliding list is the items joined on one line; a scrolling list is the
//! items stacked into a block. Either way the result is a single text handed
//! to the matching travel machine, so lists inherit travel semantics (repeat,
//! direction, resting state) without any list-specific machinery.

/// Join items into one line with `separator` between them.
pub fn join_items(items: &[String], separator: &str) -> String {
    items.join(separator)
}

/// Stack items into a multi-line block, one item per line.
pub fn stack_items(items: &[String]) -> String {
    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        vec!["one".to_string(), "two".to_string(), "three".to_string()]
    }

    #[test]
    fn join_uses_the_separator() {
        assert_eq!(join_items(&items(), " | "), "one | two | three");
    }

    #[test]
    fn join_single_item_has_no_separator() {
        assert_eq!(join_items(&items()[..1], " | "), "one");
    }

    #[test]
    fn join_empty_list_is_empty() {
        assert_eq!(join_items(&[], " "), "");
    }

    #[test]
    fn stack_puts_one_item_per_line() {
        assert_eq!(stack_items(&items()), "one\ntwo\nthree");
    }

    #[test]
    fn stack_keeps_empty_items_as_blank_lines() {
        let items = vec!["a".to_string(), String::new(), "b".to_string()];
        assert_eq!(stack_items(&items), "a\n\nb");
    }
}
