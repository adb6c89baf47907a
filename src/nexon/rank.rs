//! Scraping of the official ranking page (`/datacenter/rank`).

use scraper::{Html, Selector};

use crate::{Fo4Error, Result};

/// Owner nicknames on the ranking page.
const NICKNAME_SELECTOR: &str = "span.name.profile_pointer";

/// Entries listed on each ranking page.
pub const RANKERS_PER_PAGE: usize = 10;

/// Number of ranking pages needed to cover the top `n` owners.
///
/// `n` must be a positive multiple of [`RANKERS_PER_PAGE`].
pub fn pages_for_depth(n: usize) -> Result<usize> {
    if n == 0 || n % RANKERS_PER_PAGE != 0 {
        return Err(Fo4Error::InvalidRankDepth { n });
    }
    Ok(n / RANKERS_PER_PAGE)
}

/// Extract up to one page worth of nicknames, in page order.
pub fn parse_rank_page(html: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(NICKNAME_SELECTOR).map_err(|e| Fo4Error::Selector {
        message: e.to_string(),
    })?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .take(RANKERS_PER_PAGE)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_page(names: &[&str]) -> String {
        let rows: String = names
            .iter()
            .map(|n| {
                format!(
                    r#"<div class="tr"><span class="td rank_no">1</span><span class="name profile_pointer">{n}</span></div>"#
                )
            })
            .collect();
        format!("<html><body><div class=\"rank_list\">{rows}</div></body></html>")
    }

    #[test]
    fn test_pages_for_depth() {
        assert_eq!(pages_for_depth(100).unwrap(), 10);
        assert_eq!(pages_for_depth(10).unwrap(), 1);
    }

    #[test]
    fn test_pages_for_depth_rejects_non_multiples() {
        assert!(matches!(
            pages_for_depth(25),
            Err(Fo4Error::InvalidRankDepth { n: 25 })
        ));
        assert!(matches!(
            pages_for_depth(0),
            Err(Fo4Error::InvalidRankDepth { n: 0 })
        ));
    }

    #[test]
    fn test_parse_rank_page_reads_nicknames_in_order() {
        let html = rank_page(&["KDF강준호", "GalaxyXG윤창근", "Exodus박찬화"]);
        let names = parse_rank_page(&html).unwrap();
        assert_eq!(names, vec!["KDF강준호", "GalaxyXG윤창근", "Exodus박찬화"]);
    }

    #[test]
    fn test_parse_rank_page_caps_at_one_page() {
        let owned: Vec<String> = (0..12).map(|i| format!("owner{i}")).collect();
        let names: Vec<&str> = owned.iter().map(String::as_str).collect();
        let parsed = parse_rank_page(&rank_page(&names)).unwrap();
        assert_eq!(parsed.len(), RANKERS_PER_PAGE);
        assert_eq!(parsed.last().unwrap(), "owner9");
    }

    #[test]
    fn test_parse_rank_page_ignores_other_name_spans() {
        let html = r#"<span class="name">not a ranker</span><span class="name profile_pointer"> 홍길동 </span>"#;
        assert_eq!(parse_rank_page(html).unwrap(), vec!["홍길동"]);
    }
}
