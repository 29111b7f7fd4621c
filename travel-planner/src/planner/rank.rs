//! Ranking of search results.

use crate::domain::Destination;

/// Rank destinations by popularity, most popular first.
///
/// The sort is stable: destinations with equal popularity keep the order
/// they were given in.
pub fn rank_by_popularity(mut destinations: Vec<&Destination>) -> Vec<&Destination> {
    destinations.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
    destinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::destination;

    fn with_popularity(id: &str, score: u32) -> Destination {
        let mut d = destination(id);
        d.popularity_score = score;
        d
    }

    #[test]
    fn most_popular_first() {
        let a = with_popularity("a", 10);
        let b = with_popularity("b", 90);
        let c = with_popularity("c", 50);

        let ranked = rank_by_popularity(vec![&a, &b, &c]);
        let ids: Vec<_> = ranked.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let a = with_popularity("a", 70);
        let b = with_popularity("b", 70);
        let c = with_popularity("c", 80);
        let d = with_popularity("d", 70);

        let ranked = rank_by_popularity(vec![&a, &b, &c, &d]);
        let ids: Vec<_> = ranked.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_by_popularity(Vec::new()).is_empty());
    }
}
