use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for plate ids derived from the plate code
const PLATE_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2d4e_8a3b_4c5d_9e7f_0a1b_2c3d_4e5f);

/// A single license plate code from the reference corpus
///
/// Immutable once loaded; the search engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateRecord {
    pub id: Uuid,
    /// Distinguishing sign, e.g. "B" or "M" (unique within the corpus)
    pub code: String,
    pub city: String,
    pub region: Option<String>,
    pub state: String,
}

impl PlateRecord {
    /// Create a record whose id is derived from its code
    pub fn new(
        code: impl Into<String>,
        city: impl Into<String>,
        region: Option<String>,
        state: impl Into<String>,
    ) -> Self {
        let code = code.into();
        Self {
            id: Self::id_for_code(&code),
            code,
            city: city.into(),
            region: region.filter(|r| !r.trim().is_empty()),
            state: state.into(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Stable id for a code, so reloading the same seed data yields the same ids
    pub fn id_for_code(code: &str) -> Uuid {
        Uuid::new_v5(&PLATE_ID_NAMESPACE, code.as_bytes())
    }
}

/// Plate as it appears in seed data: the id is optional
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlateRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub code: String,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub state: String,
}

impl From<NewPlateRecord> for PlateRecord {
    fn from(new: NewPlateRecord) -> Self {
        let record = PlateRecord::new(new.code, new.city, new.region, new.state);
        match new.id {
            Some(id) => record.with_id(id),
            None => record,
        }
    }
}
