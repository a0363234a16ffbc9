/// Test data factories using builder pattern
///
/// Provides convenient methods to create plates with sensible defaults
use plate_search_lib::modules::plates::PlateRecord;
use uuid::Uuid;

pub struct PlateFactory {
    id: Option<Uuid>,
    code: String,
    city: String,
    region: Option<String>,
    state: String,
}

impl Default for PlateFactory {
    fn default() -> Self {
        Self {
            id: None,
            code: "T".to_string(),
            city: "Teststadt".to_string(),
            region: None,
            state: "Testland".to_string(),
        }
    }
}

impl PlateFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = state.to_string();
        self
    }

    pub fn build(self) -> PlateRecord {
        let plate = PlateRecord::new(self.code, self.city, self.region, self.state);
        match self.id {
            Some(id) => plate.with_id(id),
            None => plate,
        }
    }
}

/// Shorthand for a plate with just the searchable fields
pub fn plate(code: &str, city: &str, state: &str) -> PlateRecord {
    PlateFactory::new()
        .with_code(code)
        .with_city(city)
        .with_state(state)
        .build()
}

/// The two-plate corpus used by the worked search scenarios
pub fn scenario_corpus() -> Vec<PlateRecord> {
    vec![
        plate("B-MW123", "Berlin", "Berlin"),
        plate("M-AB456", "München", "Bayern"),
    ]
}

/// A realistic slice of German district codes, umlauts included
pub fn german_corpus() -> Vec<PlateRecord> {
    vec![
        plate("A", "Augsburg", "Bayern"),
        plate("AA", "Aalen", "Baden-Württemberg"),
        plate("AC", "Aachen", "Nordrhein-Westfalen"),
        plate("B", "Berlin", "Berlin"),
        plate("BA", "Bamberg", "Bayern"),
        plate("BN", "Bonn", "Nordrhein-Westfalen"),
        plate("D", "Düsseldorf", "Nordrhein-Westfalen"),
        plate("DD", "Dresden", "Sachsen"),
        plate("F", "Frankfurt am Main", "Hessen"),
        plate("GÖ", "Göttingen", "Niedersachsen"),
        plate("HG", "Bad Homburg vor der Höhe", "Hessen"),
        plate("HH", "Hamburg", "Hamburg"),
        plate("K", "Köln", "Nordrhein-Westfalen"),
        plate("KÖ", "Bad Kötzting", "Bayern"),
        plate("LÖ", "Lörrach", "Baden-Württemberg"),
        PlateFactory::new()
            .with_code("M")
            .with_city("München")
            .with_region("Oberbayern")
            .with_state("Bayern")
            .build(),
        plate("MÜ", "Mühldorf am Inn", "Bayern"),
        plate("N", "Nürnberg", "Bayern"),
        plate("Ö", "Öhringen", "Baden-Württemberg"),
        plate("S", "Stuttgart", "Baden-Württemberg"),
        plate("SB", "Saarbrücken", "Saarland"),
        plate("WÜ", "Würzburg", "Bayern"),
    ]
}
