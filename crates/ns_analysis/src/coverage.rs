use ns_core::{CoverageDifference, ScoredArticle};

/// Narrates every unordered pair `(i, j)` with `i < j`, in nested-loop order.
pub fn compare(articles: &[ScoredArticle]) -> Vec<CoverageDifference> {
    let mut differences = Vec::with_capacity(pair_count(articles.len()));
    for (i, first) in articles.iter().enumerate() {
        for (j, second) in articles.iter().enumerate().skip(i + 1) {
            differences.push(describe_pair(i, first, j, second));
        }
    }
    differences
}

pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn describe_pair(i: usize, first: &ScoredArticle, j: usize, second: &ScoredArticle) -> CoverageDifference {
    CoverageDifference {
        comparison: format!(
            "Article {} discusses '{}', while Article {} covers '{}'.",
            i + 1,
            first.title,
            j + 1,
            second.title
        ),
        impact: format!(
            "'{}' focuses on {}, whereas '{}' presents a {} viewpoint.",
            first.title, first.sentiment, second.title, second.sentiment
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::{Article, SentimentLabel};

    fn scored(title: &str, sentiment: SentimentLabel) -> ScoredArticle {
        ScoredArticle::new(&Article::new(title, ""), sentiment)
    }

    #[test]
    fn test_pair_counts() {
        for n in 0..8usize {
            let articles: Vec<_> = (0..n)
                .map(|i| scored(&format!("t{}", i), SentimentLabel::Neutral))
                .collect();
            assert_eq!(compare(&articles).len(), n * n.saturating_sub(1) / 2);
        }
        assert!(compare(&[]).is_empty());
        assert!(compare(&[scored("only", SentimentLabel::Positive)]).is_empty());
    }

    #[test]
    fn test_pair_text_and_order() {
        let articles = vec![
            scored("Tesla beats estimates", SentimentLabel::Positive),
            scored("Recall widens", SentimentLabel::Negative),
            scored("New CFO named", SentimentLabel::Other("3 STARS".to_string())),
        ];
        let differences = compare(&articles);

        assert_eq!(
            differences[0].comparison,
            "Article 1 discusses 'Tesla beats estimates', while Article 2 covers 'Recall widens'."
        );
        assert_eq!(
            differences[0].impact,
            "'Tesla beats estimates' focuses on POSITIVE, whereas 'Recall widens' presents a NEGATIVE viewpoint."
        );
        assert!(differences[1].comparison.starts_with("Article 1 discusses"));
        assert!(differences[1].comparison.contains("Article 3 covers"));
        assert!(differences[2].comparison.starts_with("Article 2 discusses"));
        assert!(differences[2].impact.ends_with("presents a 3 STARS viewpoint."));
    }
}
