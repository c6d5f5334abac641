// parser.rs

/// Splits a command line into words. Single quotes are literal, double
/// quotes allow `\"` and `\\`, and a backslash outside quotes escapes the
/// next character, so `open "My Library.bib"` yields two words.
pub fn split_command_line(line: &str) -> Vec<String> {
    enum State { Normal, Single, Double }
    let mut tokens = Vec::new();
    let mut cur = String::new();
    // quoted empty strings still count as a word
    let mut in_word = false;
    let mut state = State::Normal;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        cur.push(next);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        tokens.push(std::mem::take(&mut cur));
                        in_word = false;
                    }
                }
                _ => {
                    cur.push(ch);
                    in_word = true;
                }
            },
            State::Single => match ch {
                '\'' => state = State::Normal,
                _ => cur.push(ch),
            },
            State::Double => match ch {
                '"' => state = State::Normal,
                '\\' => match chars.peek() {
                    Some(&next) if next == '\\' || next == '"' => {
                        cur.push(next);
                        chars.next();
                    }
                    _ => cur.push('\\'),
                },
                _ => cur.push(ch),
            },
        }
    }
    if in_word {
        tokens.push(cur);
    }
    tokens
}

/// Inverse of [`split_command_line`] for a single word.
pub fn quote_word(word: &str) -> String {
    if !word.is_empty() && !word.chars().any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\')) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_command_line("  open   /tmp/a.bib "), vec!["open", "/tmp/a.bib"]);
        assert!(split_command_line("   ").is_empty());
    }

    #[test]
    fn quotes_keep_spaces() {
        assert_eq!(
            split_command_line(r#"open "My Library.bib""#),
            vec!["open", "My Library.bib"]
        );
        assert_eq!(
            split_command_line("open '/a b/c.bib'"),
            vec!["open", "/a b/c.bib"]
        );
        assert_eq!(split_command_line(r"open a\ b.bib"), vec!["open", "a b.bib"]);
        assert_eq!(split_command_line(r#"open """#), vec!["open", ""]);
    }

    #[test]
    fn double_quote_escapes() {
        assert_eq!(split_command_line(r#""say \"hi\" \n""#), vec![r#"say "hi" \n"#]);
    }

    #[test]
    fn quote_word_round_trips() {
        for word in ["plain.bib", "with space.bib", "it's.bib", "", r"back\slash"] {
            assert_eq!(split_command_line(&quote_word(word)), vec![word.to_string()]);
        }
        assert_eq!(quote_word("plain.bib"), "plain.bib");
    }
}
