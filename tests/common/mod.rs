//! Common test fixtures shared across the integration test suite.

use bibshelf::ShelfDocument;

/// The smallest complete book entry.
pub const SAMPLE_BOOK: &str = "@book{b1,
  item_type = {KNG},
  title = {Sample},
  author = {Doe, John},
  year = {2020}
}";

/// A realistic export mixing every layout, in deliberately unsorted order.
pub const MIXED_EXPORT: &str = "preamble text is ignored
@article{a1,
  item_type = {JOU},
  sort_word = {Петров},
  responsibility = {Петров, Петър},
  title = {Нови находки},
  source = {Археология},
  journal_city = {София},
  issue = {3},
  year = {1998},
  art_pages = {с. 12-18},
  abstract = {Съдържа и: Библиография},
  also_source = {Годишник на НАИМ},
  also_description = {т. 5; с. 40}
}
@book{b2,
  item_type = {KNG},
  main_sig = {II 200},
  dep_sig = {Ч},
  sort_word = {Вазов},
  responsibility = {Вазов, Иван},
  title = {Под игото},
  address = {София},
  publisher = {Български писател},
  year = {1983},
  page_count = {448 с.}
}
@misc{o1,
  item_type = {MAP},
  author = {Doe, John},
  title = {Карта},
  year = {1936}
}
@book{y1,
  item_type = {GOI},
  main_sig = {IV 100},
  title = {Годишник},
  edition = {210 с.},
  place = {Варна},
  year = {1975},
  about_person = {Иван Шишманов}
}
@book{b1,
  item_type = {CDD},
  main_sig = {CD 1},
  title = {Encyclopedia},
  year = {1990}
}
";

/// Paragraph texts of a document, in order.
#[allow(dead_code)]
pub fn paragraph_texts(document: &ShelfDocument) -> Vec<String> {
    document.paragraphs().iter().map(|p| p.text()).collect()
}

/// Index of the first paragraph containing `needle`.
#[allow(dead_code)]
pub fn position_of(texts: &[String], needle: &str) -> usize {
    texts
        .iter()
        .position(|t| t.contains(needle))
        .unwrap_or_else(|| panic!("no paragraph contains {needle:?}"))
}
