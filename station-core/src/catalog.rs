//! The fixed list of cities a user can add, and searching it.

use crate::model::WeatherRecord;

/// `(city, temperature, humidity, wind speed, rain amount)`
const ENTRIES: &[(&str, &str, &str, &str, &str)] = &[
    ("Berlin", "5°C", "70%", "10 km/h", "0 mm"),
    ("Hamburg", "4°C", "75%", "12 km/h", "0.2 mm"),
    ("München", "4°C", "53%", "8 km/h", "4 mm"),
    ("Bremen", "3°C", "45%", "12 km/h", "4 mm"),
    ("Köln", "6°C", "65%", "14 km/h", "0.1 mm"),
    ("Bünde", "8°C", "62%", "13 km/h", "0.2 mm"),
    ("Frankfurt", "7°C", "58%", "9 km/h", "0 mm"),
    ("Stuttgart", "6°C", "55%", "7 km/h", "0.5 mm"),
    ("Düsseldorf", "6°C", "68%", "15 km/h", "0.3 mm"),
    ("Dortmund", "5°C", "71%", "16 km/h", "1 mm"),
    ("Leipzig", "2°C", "60%", "11 km/h", "0 mm"),
    ("Dresden", "1°C", "57%", "10 km/h", "0 mm"),
    ("Hannover", "4°C", "73%", "13 km/h", "0.4 mm"),
    ("Bielefeld", "7°C", "66%", "12 km/h", "0.2 mm"),
    ("Nürnberg", "3°C", "50%", "6 km/h", "2 mm"),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<WeatherRecord>,
}

impl Catalog {
    /// The compiled-in catalog. Every call creates records with new ids.
    pub fn builtin() -> Self {
        let records = ENTRIES
            .iter()
            .map(|(city, temperature, humidity, wind, rain)| {
                WeatherRecord::new(*city, *temperature, *humidity, *wind, *rain)
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries whose city name contains `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&WeatherRecord> {
        filter_cities(&self.records, query)
    }

    /// Exact lookup by city name.
    pub fn find(&self, city: &str) -> Option<&WeatherRecord> {
        self.records.iter().find(|record| record.city == city)
    }
}

/// Case-insensitive substring filter over `records`.
///
/// An empty query keeps everything. Order is preserved.
///
/// Case folding is per-character Unicode lowercasing, not locale-aware:
/// umlauts match either case, but expansions such as "ß" vs "SS" do not.
pub fn filter_cities<'a>(records: &'a [WeatherRecord], query: &str) -> Vec<&'a WeatherRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.city.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_whole_catalog_in_order() {
        let catalog = Catalog::builtin();
        let hits = catalog.search("");

        assert_eq!(hits.len(), catalog.len());
        for (hit, record) in hits.iter().zip(catalog.records()) {
            assert_eq!(hit.id, record.id);
        }
    }

    #[test]
    fn query_matches_bunde_regardless_of_case() {
        let catalog = Catalog::builtin();

        for query in ["bün", "BÜN", "Bün", "bÜn"] {
            let hits = catalog.search(query);
            assert_eq!(hits.len(), 1, "query {query:?}");
            assert_eq!(hits[0].city, "Bünde");
        }
    }

    #[test]
    fn query_matches_inside_the_name() {
        let catalog = Catalog::builtin();
        let cities: Vec<&str> = catalog.search("en").iter().map(|r| r.city.as_str()).collect();

        assert_eq!(cities, vec!["München", "Bremen", "Dresden"]);
    }

    #[test]
    fn query_is_not_fuzzy() {
        let catalog = Catalog::builtin();
        assert!(catalog.search("brln").is_empty());
        assert!(catalog.search("Munchen").is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let records = vec![
            WeatherRecord::new("Bremen", "3°C", "45%", "12 km/h", "4 mm"),
            WeatherRecord::new("Berlin", "5°C", "70%", "10 km/h", "0 mm"),
        ];
        let hits = filter_cities(&records, "b");

        assert_eq!(hits[0].city, "Bremen");
        assert_eq!(hits[1].city, "Berlin");
    }

    #[test]
    fn case_folding_is_per_character() {
        let records = vec![WeatherRecord::new("Straße", "5°C", "60%", "5 km/h", "0 mm")];

        assert_eq!(filter_cities(&records, "STRAßE").len(), 1);
        assert!(filter_cities(&records, "STRASSE").is_empty());
    }

    #[test]
    fn find_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.find("Köln").is_some());
        assert!(catalog.find("köln").is_none());
    }
}
