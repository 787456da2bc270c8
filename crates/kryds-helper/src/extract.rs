//! Scraping of solution words out of a results page.
//!
//! A page lists candidates as `div.solution-item` blocks, each holding one
//! `div.character` cell per letter. Cells may carry inline position numbers
//! which are stripped from the final word. Every item yields one entry, even
//! when nothing but numbers was in it.

use kryds_types::WordList;
use scraper::{ElementRef, Html, Selector};

const SOLUTION_ITEM: &str = "div.solution-item";
const CHARACTER: &str = "div.character";

/// Words in document order; anything unrecognizable yields an empty list
pub fn extract_words(html: &str) -> WordList {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let (Ok(item_sel), Ok(char_sel)) = (Selector::parse(SOLUTION_ITEM), Selector::parse(CHARACTER))
    else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    let words: WordList = doc
        .select(&item_sel)
        .map(|item| word_from_item(item, &char_sel))
        .collect();

    if words.is_empty() {
        tracing::debug!("No solution items found in {} bytes of HTML", html.len());
    }

    words
}

fn word_from_item(item: ElementRef<'_>, char_sel: &Selector) -> String {
    item.select(char_sel)
        .flat_map(|cell| cell.text())
        .flat_map(str::chars)
        .filter(|c| !c.is_ascii_digit() && !c.is_whitespace())
        .collect()
}
