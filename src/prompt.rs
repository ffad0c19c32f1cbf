// src/prompt.rs
// =============================================================================
// Interactive input, used when no URLs are passed on the command line.
//
// Two questions:
// 1. A comma-separated list of URLs
// 2. How many pages to crawl per site (blank or nonsense -> 5)
//
// Everything the session prints goes to the writer it is given; with
// --json that is stderr, so stdout only ever carries the report.
//
// The readers take any BufRead/Write pair so tests can feed them a Cursor
// instead of a real terminal.
// =============================================================================

use image_fetcher::config::DEFAULT_MAX_PAGES;
use std::io::{self, BufRead, Write};

/// Splits "a, b,,c " into ["a", "b", "c"]
pub fn parse_seed_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

/// Page limit from user text. Blank, non-numeric or zero input gives the default.
pub fn parse_page_limit(input: &str) -> usize {
    match input.trim().parse::<usize>() {
        Ok(0) | Err(_) => DEFAULT_MAX_PAGES,
        Ok(n) => n,
    }
}

pub fn ask_seed_urls<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Vec<String>> {
    let answer = ask(input, output, "Enter image or page URLs (comma-separated): ")?;
    Ok(parse_seed_list(&answer))
}

pub fn ask_page_limit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<usize> {
    let question = format!("Pages to crawl per site [{}]: ", DEFAULT_MAX_PAGES);
    let answer = ask(input, output, &question)?;
    Ok(parse_page_limit(&answer))
}

/// Banner plus both questions. Returns `None` when no URL was entered.
/// `max_pages` from the command line skips the second question.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_pages: Option<usize>,
) -> io::Result<Option<(Vec<String>, usize)>> {
    writeln!(output, "Welcome to the Image Fetcher")?;
    writeln!(output, "A tool for mindfully collecting images from the web\n")?;

    let seeds = ask_seed_urls(input, output)?;
    if seeds.is_empty() {
        writeln!(output, "✗ No valid URLs entered. Exiting.")?;
        return Ok(None);
    }

    let max_pages = match max_pages {
        Some(n) => n,
        None => ask_page_limit(input, output)?,
    };
    Ok(Some((seeds, max_pages)))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    // EOF reads as an empty answer
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why generic over BufRead and Write?
//    - Real runs pass stdin and stdout (or stderr)
//    - Tests pass a Cursor and a Vec<u8>, no terminal needed
//
// 2. Why flush()?
//    - stdout is line-buffered; a question without a newline would not
//      show up until after the user typed their answer
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_seed_list() {
        assert_eq!(
            parse_seed_list(" https://a.com, https://b.com/x ,,  "),
            vec!["https://a.com", "https://b.com/x"]
        );
        assert!(parse_seed_list("").is_empty());
        assert!(parse_seed_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_page_limit() {
        assert_eq!(parse_page_limit("12\n"), 12);
        assert_eq!(parse_page_limit(""), 5);
        assert_eq!(parse_page_limit("lots"), 5);
        assert_eq!(parse_page_limit("-3"), 5);
        assert_eq!(parse_page_limit("0"), 5);
    }

    #[test]
    fn test_prompts_read_answers_in_order() {
        let mut input = Cursor::new("https://a.com,https://b.com\n7\n");
        let mut output = Vec::new();

        let seeds = ask_seed_urls(&mut input, &mut output).unwrap();
        let limit = ask_page_limit(&mut input, &mut output).unwrap();

        assert_eq!(seeds, vec!["https://a.com", "https://b.com"]);
        assert_eq!(limit, 7);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("comma-separated"));
        assert!(shown.contains("[5]"));
    }

    #[test]
    fn test_session_writes_only_to_given_output() {
        let mut input = Cursor::new("https://a.com\n\n");
        let mut output = Vec::new();

        let answers = run_session(&mut input, &mut output, None).unwrap();

        assert_eq!(answers, Some((vec!["https://a.com".to_string()], 5)));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Welcome to the Image Fetcher"));
        assert!(shown.contains("comma-separated"));
        assert!(shown.contains("Pages to crawl per site"));
    }

    #[test]
    fn test_session_skips_page_question_when_flag_given() {
        let mut input = Cursor::new("https://a.com, https://b.com\n");
        let mut output = Vec::new();

        let answers = run_session(&mut input, &mut output, Some(2)).unwrap();

        assert_eq!(
            answers,
            Some((vec!["https://a.com".to_string(), "https://b.com".to_string()], 2))
        );
        assert!(!String::from_utf8(output).unwrap().contains("Pages to crawl"));
    }

    #[test]
    fn test_session_without_urls_ends_early() {
        let mut input = Cursor::new(" , \n");
        let mut output = Vec::new();

        assert_eq!(run_session(&mut input, &mut output, None).unwrap(), None);
        assert!(String::from_utf8(output).unwrap().contains("No valid URLs entered"));
    }

    #[test]
    fn test_eof_means_defaults() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert!(ask_seed_urls(&mut input, &mut output).unwrap().is_empty());
        assert_eq!(ask_page_limit(&mut input, &mut output).unwrap(), 5);
    }
}
